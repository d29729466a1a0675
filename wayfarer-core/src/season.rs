//! Coarse travel seasons derived from a trip's start date.
//!
//! The calendar is split into three fixed bands: March to June is
//! [`Season::Summer`], July to September is [`Season::Monsoon`] and the
//! remaining months are [`Season::Winter`].
//!
//! # Examples
//! ```
//! use wayfarer_core::Season;
//!
//! assert_eq!(Season::from_trip_start(Some("2024-05-20")), Some(Season::Summer));
//! assert_eq!(Season::from_trip_start(Some("2024-08-01T09:30:00Z")), Some(Season::Monsoon));
//! assert_eq!(Season::from_trip_start(Some("2024-13-99")), None);
//! assert_eq!(Season::from_trip_start(None), None);
//! ```

use chrono::{Datelike, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = 10;
/// Proleptic year zero is not a calendar date travellers can book.
const MIN_YEAR: i32 = 1;

/// A coarse season label used to judge whether a trip falls in a
/// destination's peak period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// March to June.
    Summer,
    /// July to September.
    Monsoon,
    /// October to February.
    Winter,
}

impl Season {
    /// Return the capitalised label used in explanations.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summer => "Summer",
            Self::Monsoon => "Monsoon",
            Self::Winter => "Winter",
        }
    }

    /// Map a calendar month (`1..=12`) onto its season.
    ///
    /// Returns `None` for values outside the calendar.
    #[must_use]
    pub const fn from_month(month: u32) -> Option<Self> {
        match month {
            3..=6 => Some(Self::Summer),
            7..=9 => Some(Self::Monsoon),
            1 | 2 | 10..=12 => Some(Self::Winter),
            _ => None,
        }
    }

    /// Classify a trip start date.
    ///
    /// Only the portion before a `T` time separator is considered and it must
    /// read `YYYY-MM-DD` with a real calendar date. Anything else yields
    /// `None`; a malformed date never raises an error.
    #[must_use]
    pub fn from_trip_start(start: Option<&str>) -> Option<Self> {
        let raw = start?;
        let Some(date) = parse_trip_date(raw) else {
            log::warn!("ignoring unparseable trip start date {raw:?}");
            return None;
        };
        Self::from_month(date.month())
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summer" => Ok(Self::Summer),
            "monsoon" => Ok(Self::Monsoon),
            "winter" => Ok(Self::Winter),
            _ => Err(format!("unknown season '{s}'")),
        }
    }
}

fn parse_trip_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split_once('T').map_or(raw, |(date, _)| date);
    if !has_iso_date_shape(date_part) {
        return None;
    }
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= MIN_YEAR)
}

/// `chrono` accepts unpadded and signed fields, so the fixed
/// `dddd-dd-dd` layout is checked up front.
fn has_iso_date_shape(candidate: &str) -> bool {
    candidate.len() == DATE_LEN
        && candidate
            .bytes()
            .enumerate()
            .all(|(position, byte)| match position {
                4 | 7 => byte == b'-',
                _ => byte.is_ascii_digit(),
            })
}
