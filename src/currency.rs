//! Static currency table used to express budgets in US dollars.
//!
//! Rates are approximate units per 1 USD and never refreshed.

use std::str::FromStr;

/// Rate applied when a code is not in the table.
pub const FALLBACK_RATE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Inr,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
}

impl Currency {
    pub const ALL: [Currency; 7] = [
        Currency::Usd,
        Currency::Inr,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Aud,
        Currency::Cad,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
        }
    }

    /// Units of this currency per 1 USD.
    pub fn rate_to_usd(self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Inr => 83.5,
            Currency::Eur => 0.92,
            Currency::Gbp => 0.79,
            Currency::Jpy => 157.0,
            Currency::Aud => 1.5,
            Currency::Cad => 1.37,
        }
    }
}

impl FromStr for Currency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or(())
    }
}

/// Conversion rate for an arbitrary code, falling back to 1:1 when unknown.
pub fn conversion_rate(code: &str) -> f64 {
    code.parse::<Currency>()
        .map(Currency::rate_to_usd)
        .unwrap_or(FALLBACK_RATE)
}

/// Convert `amount` in `code` to whole US dollars.
pub fn to_usd(amount: f64, code: &str) -> i64 {
    (amount / conversion_rate(code)).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_parse_case_insensitively() {
        assert_eq!("eur".parse::<Currency>(), Ok(Currency::Eur));
        assert_eq!(" JPY ".parse::<Currency>(), Ok(Currency::Jpy));
    }

    #[test]
    fn unknown_code_uses_fallback_rate() {
        assert_eq!(conversion_rate("CHF"), 1.0);
        assert_eq!(conversion_rate(""), 1.0);
        assert_eq!(to_usd(250.0, "XYZ"), 250);
    }

    #[test]
    fn converts_with_table_rate() {
        assert_eq!(conversion_rate("INR"), 83.5);
        assert_eq!(to_usd(83_500.0, "INR"), 1000);
        assert_eq!(to_usd(1000.0, "EUR"), 1087);
    }

    #[test]
    fn every_code_round_trips() {
        for c in Currency::ALL {
            assert_eq!(c.code().parse::<Currency>(), Ok(c));
            assert!(c.rate_to_usd() > 0.0);
        }
    }
}
