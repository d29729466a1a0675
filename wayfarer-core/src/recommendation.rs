//! Request and response documents exchanged with the recommender.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Destination, Preferences};

/// A full scoring request: preferences plus the candidates to rank.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// What the traveller wants.
    #[serde(default)]
    pub preferences: Preferences,
    /// Candidates in catalogue order. Order only matters for ties.
    /// `null` reads as an empty list.
    #[serde(default, deserialize_with = "nullable_list")]
    pub destinations: Vec<Destination>,
}

fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A ranked destination with its combined score and explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecommendation {
    /// Destination name.
    pub name: String,
    /// Destination country.
    pub country: String,
    /// Destination description.
    pub description: String,
    /// Weighted combination of the sub-scores, in `0.0..=1.0`.
    pub score: f64,
    /// Midpoint of the cost range in whole currency units.
    pub estimated_cost: i64,
    /// Activity tags in catalogue order. A single-string tag is written
    /// back as a one-element list.
    pub activities: Vec<String>,
    /// Climate label.
    pub climate: String,
    /// Illustration URL, empty when the destination has none.
    pub image_url: String,
    /// Human-readable breakdown of the score.
    pub explanation: Explanation,
}

/// Why a destination scored the way it did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    /// Interest match as a percentage with one decimal.
    pub interest_match: f64,
    /// Budget fit as a percentage with one decimal.
    pub budget_fit: f64,
    /// Sentence describing how the travel season suits the destination.
    pub season_suitability: String,
}

impl Explanation {
    /// Build an explanation from unit-range sub-scores.
    #[must_use]
    pub fn new(interest_score: f64, budget_fit: f64, season_suitability: String) -> Self {
        Self {
            interest_match: as_percentage(interest_score),
            budget_fit: as_percentage(budget_fit),
            season_suitability,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "percentages are rounded to one decimal place"
)]
fn as_percentage(score: f64) -> f64 {
    (score * 1_000.0).round() / 10.0
}

/// The single payload written back to callers.
///
/// Serialises either as a JSON array of recommendations or as
/// `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationOutcome {
    /// Up to five recommendations, best first.
    Ranked(Vec<ScoredRecommendation>),
    /// The request could not be scored.
    Failed {
        /// Diagnostic message.
        error: String,
    },
}

impl RecommendationOutcome {
    /// An empty ranking.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Ranked(Vec::new())
    }

    /// Wrap any displayable failure into the error envelope.
    #[must_use]
    pub fn failed(error: &impl Display) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }

    /// Report whether this is the error envelope.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl<E: Display> From<Result<Vec<ScoredRecommendation>, E>> for RecommendationOutcome {
    fn from(result: Result<Vec<ScoredRecommendation>, E>) -> Self {
        match result {
            Ok(ranked) => Self::Ranked(ranked),
            Err(error) => Self::failed(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(0.123_456, 12.3)]
    #[case(0.7, 70.0)]
    #[case(1.0, 100.0)]
    #[case(0.0, 0.0)]
    fn explanation_rounds_percentages_to_one_decimal(#[case] score: f64, #[case] expected: f64) {
        let explanation = Explanation::new(score, score, String::new());
        assert_eq!(explanation.interest_match, expected);
        assert_eq!(explanation.budget_fit, expected);
    }

    #[rstest]
    fn failure_serialises_as_error_envelope() {
        let outcome = RecommendationOutcome::failed(&"missing field `costRange`");
        let encoded = serde_json::to_value(&outcome).expect("serialise");
        assert_eq!(encoded, json!({ "error": "missing field `costRange`" }));
        assert!(outcome.is_failed());
    }

    #[rstest]
    fn empty_ranking_serialises_as_empty_array() {
        let encoded = serde_json::to_string(&RecommendationOutcome::empty()).expect("serialise");
        assert_eq!(encoded, "[]");
    }

    #[rstest]
    fn recommendations_use_camel_case_keys() {
        let recommendation = ScoredRecommendation {
            name: "Goa".into(),
            country: "India".into(),
            description: "Beaches".into(),
            score: 0.75,
            estimated_cost: 25_000,
            activities: vec!["Beach".into()],
            climate: "Tropical".into(),
            image_url: String::new(),
            explanation: Explanation::new(0.5, 1.0, "Perfect timing!".into()),
        };
        let encoded = serde_json::to_value(&recommendation).expect("serialise");
        assert_eq!(encoded["estimatedCost"], json!(25_000));
        assert_eq!(encoded["imageUrl"], json!(""));
        assert_eq!(encoded["explanation"]["interestMatch"], json!(50.0));
        assert_eq!(encoded["explanation"]["seasonSuitability"], json!("Perfect timing!"));
    }

    #[rstest]
    fn request_defaults_missing_sections() {
        let request: RecommendationRequest = serde_json::from_value(json!({})).expect("decode");
        assert!(request.destinations.is_empty());
        assert!(request.preferences.interests.is_empty());
    }

    #[rstest]
    fn null_destinations_read_as_empty() {
        let request: RecommendationRequest =
            serde_json::from_value(json!({ "destinations": null })).expect("decode");
        assert!(request.destinations.is_empty());
    }
}
