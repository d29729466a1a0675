//! Traveller preferences: interests, spending limit and trip dates.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::Season;

/// Budget assumed when a request omits one, in currency units.
pub const DEFAULT_BUDGET: f64 = 50_000.0;

/// What the traveller is looking for.
///
/// Every field is optional in the wire format: missing interests mean "no
/// stated interests", a missing budget falls back to [`DEFAULT_BUDGET`] and
/// missing dates disable seasonal matching.
///
/// # Examples
/// ```
/// use wayfarer_core::{Preferences, Season};
///
/// let preferences: Preferences = serde_json::from_str(
///     r#"{"interests": ["Beach"], "budget": "30000", "travelDates": {"start": "2024-12-01"}}"#,
/// )
/// .expect("valid preferences");
/// assert_eq!(preferences.budget.amount(), 30_000.0);
/// assert_eq!(preferences.travel_dates.season(), Some(Season::Winter));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Free-text interest tokens such as `"Trekking"` or `"Beach"`.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Spending limit for the trip.
    #[serde(default)]
    pub budget: Budget,
    /// Planned travel window.
    #[serde(default)]
    pub travel_dates: TravelDates,
}

/// Planned travel window. Only the start date influences scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TravelDates {
    /// Raw start date as supplied by the caller, usually ISO-8601.
    ///
    /// Non-string values decode to `None` so that a malformed date simply
    /// disables seasonal matching.
    #[serde(default, deserialize_with = "lenient_date")]
    pub start: Option<String>,
}

impl TravelDates {
    /// Classify the start date into a [`Season`], if possible.
    #[must_use]
    pub fn season(&self) -> Option<Season> {
        Season::from_trip_start(self.start.as_deref())
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// A finite spending limit in currency units.
///
/// Decodes from a JSON number or a numeric string; anything else is rejected
/// with a [`BudgetError`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget(f64);

/// Errors raised while interpreting a budget.
#[derive(Debug, Error, PartialEq)]
pub enum BudgetError {
    /// The supplied value was not a number or numeric string.
    #[error("budget must be numeric, found {found}")]
    NonNumeric {
        /// Compact rendering of the offending value.
        found: String,
    },
    /// The value parsed but is infinite or NaN.
    #[error("budget must be a finite number")]
    NonFinite,
}

impl Budget {
    /// Validate and wrap a budget amount.
    ///
    /// # Errors
    /// Returns [`BudgetError::NonFinite`] for infinite or NaN amounts.
    pub fn new(amount: f64) -> Result<Self, BudgetError> {
        if amount.is_finite() {
            Ok(Self(amount))
        } else {
            Err(BudgetError::NonFinite)
        }
    }

    /// Return the amount in currency units.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }

    /// Interpret a loosely typed JSON value as a budget.
    ///
    /// # Errors
    /// Returns [`BudgetError`] when the value is not numeric or not finite.
    pub fn from_value(value: &Value) -> Result<Self, BudgetError> {
        let amount = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
        .ok_or_else(|| BudgetError::NonNumeric {
            found: value.to_string(),
        })?;
        Self::new(amount)
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self(DEFAULT_BUDGET)
    }
}

impl Serialize for Budget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Budget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(&raw).map_err(D::Error::custom)
    }
}
