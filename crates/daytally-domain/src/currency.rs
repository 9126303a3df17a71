//! Currency codes and display labels for cash reporting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Currencies the cash tracker can report in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    /// Resolves a request code. Codes are lowercase and matched exactly;
    /// anything but `rub`, `usd`, or `eur` is refused.
    pub fn from_code(code: &str) -> Option<Currency> {
        match code {
            "rub" => Some(Currency::Rub),
            "usd" => Some(Currency::Usd),
            "eur" => Some(Currency::Eur),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
        }
    }

    /// Display label embedded in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Rub => "руб",
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_codes() {
        assert_eq!(Currency::from_code("rub"), Some(Currency::Rub));
        assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        assert_eq!(Currency::from_code("RUB"), None);
        assert_eq!(Currency::from_code("Usd"), None);
        assert_eq!(Currency::from_code("gbp"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn labels_match_display_contract() {
        assert_eq!(Currency::Rub.label(), "руб");
        assert_eq!(Currency::Usd.label(), "USD");
        assert_eq!(Currency::Eur.label(), "Euro");
    }
}
