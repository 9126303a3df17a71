use serde::{Deserialize, Serialize};

/// User preferences applied when the shell starts.
///
/// Limits and exchange rates feed tracker construction, so edits saved
/// mid-session take effect on the next start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default display currency for the `balance` command.
    pub currency: String,
    pub cash_limit: f64,
    pub calorie_limit: f64,
    /// Rubles per US dollar.
    pub usd_rate: f64,
    /// Rubles per euro.
    pub eur_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "rub".into(),
            cash_limit: 1000.0,
            calorie_limit: 2000.0,
            usd_rate: 69.45,
            eur_rate: 77.76,
        }
    }
}
