//! Candidate destinations and their cost ranges.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A place that can be recommended.
///
/// `imageUrl` is the only optional field; the remaining fields are required
/// because scoring or the rendered recommendation depends on them. Unknown
/// fields (database identifiers, cached scores) are ignored.
///
/// # Examples
/// ```
/// use wayfarer_core::Destination;
///
/// let goa: Destination = serde_json::from_str(
///     r#"{
///         "name": "Goa", "country": "India", "description": "Beaches",
///         "activities": ["Beach", "Nightlife"], "climate": "Tropical",
///         "season": "Winter", "costRange": {"min": 10000, "max": 40000}
///     }"#,
/// )
/// .expect("valid destination");
/// assert_eq!(goa.feature_document(), "Beach Nightlife Tropical Winter");
/// assert_eq!(goa.cost_range.estimated_cost(), 25_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Display name.
    pub name: String,
    /// Country the destination belongs to.
    pub country: String,
    /// Short prose description.
    pub description: String,
    /// Activity tags in catalogue order. A single string decodes as one tag.
    #[serde(deserialize_with = "activity_tags")]
    pub activities: Vec<String>,
    /// Climate label, e.g. `"Tropical"`.
    pub climate: String,
    /// Free-text peak period, e.g. `"Summer/Winter"`.
    pub season: String,
    /// Typical trip cost.
    pub cost_range: CostRange,
    /// Optional illustration.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Destination {
    /// Text describing the destination for interest matching: the activity
    /// tags, the climate and the season joined by single spaces.
    #[must_use]
    pub fn feature_document(&self) -> String {
        let mut document = self.activities.join(" ");
        for part in [self.climate.as_str(), self.season.as_str()] {
            document.push(' ');
            document.push_str(part);
        }
        document
    }
}

fn activity_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(tag) => Ok(vec![tag]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(tag) => Ok(tag),
                other => Err(D::Error::custom(format!(
                    "activity tags must be strings, found {other}"
                ))),
            })
            .collect(),
        other => Err(D::Error::custom(format!(
            "activities must be a list of strings, found {other}"
        ))),
    }
}

/// Lowest and highest expected trip cost in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    /// Cheapest realistic trip.
    pub min: f64,
    /// Most expensive realistic trip.
    pub max: f64,
}

impl CostRange {
    /// Midpoint of the range.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the average cost is the midpoint of two amounts"
    )]
    pub fn average(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Midpoint of the range truncated towards zero, as quoted to travellers.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "quoted costs are whole currency units; the cast saturates"
    )]
    pub fn estimated_cost(self) -> i64 {
        self.average().trunc() as i64
    }
}
