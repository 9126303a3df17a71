use daytally_domain::DateFormatError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}
