//! Trip parameters submitted through the planner form.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::currency;

/// Largest accepted budget in any currency.
pub const MAX_BUDGET: f64 = 1e12;

/// Reasons a submitted form cannot become a [`TripRequest`].
#[derive(Debug, Error, PartialEq)]
pub enum TripError {
    #[error("Missing required field '{field}'")]
    Missing { field: &'static str },

    #[error("Field '{field}' must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("Field '{field}' must be a whole number, got '{value}'")]
    NotAWholeNumber { field: &'static str, value: String },

    #[error("Field '{field}' must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("Field '{field}' is too large, got '{value}'")]
    OutOfRange { field: &'static str, value: String },

    #[error("Field '{field}' must not be negative")]
    Negative { field: &'static str },

    #[error("Invalid travel date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// Raw form fields as posted by the browser. Everything is optional text so
/// validation can report precisely what is wrong.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TripForm {
    pub city: Option<String>,
    pub budget: Option<String>,
    pub currency: Option<String>,
    pub days: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
    pub travel_date: Option<String>,
    pub notes: Option<String>,
}

/// A validated trip request.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub city: String,
    pub budget: f64,
    /// Uppercased currency code. Codes outside the rate table are kept as-is.
    pub currency: String,
    pub days: u32,
    pub adults: u32,
    pub children: u32,
    pub travel_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl TripRequest {
    /// Budget expressed in whole US dollars.
    pub fn budget_usd(&self) -> i64 {
        currency::to_usd(self.budget, &self.currency)
    }

    pub fn travelers_description(&self) -> String {
        let adults = plural(self.adults, "adult", "adults");
        match self.children {
            0 => adults,
            n => format!("{adults} and {}", plural(n, "child", "children")),
        }
    }
}

impl TryFrom<TripForm> for TripRequest {
    type Error = TripError;

    fn try_from(form: TripForm) -> Result<Self, Self::Error> {
        let city = required("city", form.city)?;
        let budget = parse_budget(&required("budget", form.budget)?)?;
        let currency = required("currency", form.currency)?.to_ascii_uppercase();
        let days = parse_count("days", &required("days", form.days)?)?;
        if days == 0 {
            return Err(TripError::NotPositive { field: "days" });
        }

        let adults = match optional(form.adults) {
            Some(raw) => parse_count("adults", &raw)?,
            None => 1,
        };
        if adults == 0 {
            return Err(TripError::NotPositive { field: "adults" });
        }
        let children = match optional(form.children) {
            Some(raw) => parse_count("children", &raw)?,
            None => 0,
        };

        let travel_date = optional(form.travel_date)
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| TripError::InvalidDate { value: raw })
            })
            .transpose()?;

        Ok(Self {
            city,
            budget,
            currency,
            days,
            adults,
            children,
            travel_date,
            notes: optional(form.notes),
        })
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(field: &'static str, value: Option<String>) -> Result<String, TripError> {
    optional(value).ok_or(TripError::Missing { field })
}

fn parse_budget(raw: &str) -> Result<f64, TripError> {
    let budget: f64 = raw
        .parse()
        .ok()
        .filter(|b: &f64| b.is_finite())
        .ok_or_else(|| TripError::NotANumber {
            field: "budget",
            value: raw.to_string(),
        })?;
    if budget <= 0.0 {
        return Err(TripError::NotPositive { field: "budget" });
    }
    if budget > MAX_BUDGET {
        return Err(TripError::OutOfRange {
            field: "budget",
            value: raw.to_string(),
        });
    }
    Ok(budget)
}

/// Parse a non-negative whole number. Zero is allowed here; callers decide
/// whether it is acceptable.
fn parse_count(field: &'static str, raw: &str) -> Result<u32, TripError> {
    match raw.parse::<i64>() {
        Ok(n) if n < 0 => Err(TripError::Negative { field }),
        Ok(n) => u32::try_from(n).map_err(|_| TripError::OutOfRange {
            field,
            value: raw.to_string(),
        }),
        Err(_) if is_digits(raw.trim_start_matches('+')) => Err(TripError::OutOfRange {
            field,
            value: raw.to_string(),
        }),
        Err(_) if raw.parse::<f64>().is_ok() => Err(TripError::NotAWholeNumber {
            field,
            value: raw.to_string(),
        }),
        Err(_) => Err(TripError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn plural(n: u32, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}
