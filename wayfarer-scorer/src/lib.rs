//! Destination scoring and ranking.
//!
//! Given a traveller's [`Preferences`] and a list of candidate
//! [`Destination`]s, the pipeline computes three sub-scores per destination:
//!
//! - **Interest match** ([`InterestScorer`]): cosine similarity between the
//!   stated interests and the destination's activities, climate and season,
//!   using term weights fitted on the candidates of this call only.
//! - **Budget fit** ([`BudgetFitScorer`]).
//! - **Season suitability** ([`SeasonScorer`]), from the trip start date.
//!
//! The sub-scores are blended with [`ScoreWeights::STANDARD`], ranked with a
//! stable sort (ties keep catalogue order) and the best
//! [`TOP_RECOMMENDATIONS`] are returned with an explanation.
//!
//! The JSON helpers ([`recommend_json`], [`recommend_preferences_json`])
//! never fail: every problem is folded into the `{"error": ...}` envelope of
//! [`RecommendationOutcome`].
//!
//! # Examples
//!
//! ```
//! use wayfarer_scorer::recommend_json;
//!
//! let outcome = recommend_json(
//!     r#"{
//!         "preferences": {"interests": ["Beach"], "budget": 30000},
//!         "destinations": [{
//!             "name": "Goa", "country": "India", "description": "Beaches",
//!             "activities": ["Beach", "Nightlife"], "climate": "Tropical",
//!             "season": "Winter", "costRange": {"min": 10000, "max": 40000}
//!         }]
//!     }"#,
//! );
//! assert!(!outcome.is_failed());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use serde::Deserialize;
use serde::de::IgnoredAny;
use wayfarer_core::{
    Destination, Explanation, Preferences, RecommendationOutcome, RecommendationRequest,
    ScoredRecommendation, Scorer,
};

mod budget;
mod error;
mod interest;
mod stop_words;
mod suitability;
pub mod tfidf;
mod types;

pub use budget::{BudgetFitScorer, FULL_FIT, PARTIAL_FIT};
pub use error::RecommendError;
pub use interest::InterestScorer;
pub use suitability::{IN_SEASON, OFF_SEASON, SeasonAssessment, SeasonScorer};
pub use types::{ScoreWeights, SubScores};

/// Maximum number of recommendations returned.
pub const TOP_RECOMMENDATIONS: usize = 5;

/// Rank `destinations` for `preferences` and return the best few.
///
/// An empty candidate list yields an empty ranking.
///
/// # Errors
/// Returns [`RecommendError::EmptyVocabulary`] when the destinations carry no
/// text that interests could be matched against.
pub fn rank(
    preferences: &Preferences,
    destinations: &[Destination],
) -> Result<Vec<ScoredRecommendation>, RecommendError> {
    if destinations.is_empty() {
        log::debug!("no destinations supplied; returning an empty ranking");
        return Ok(Vec::new());
    }

    let interest = InterestScorer::fit(destinations, &preferences.interests)?;
    let budget = BudgetFitScorer::new(preferences.budget);
    let suitability = SeasonScorer::new(preferences.travel_dates.season());

    let mut candidates: Vec<Candidate<'_>> = destinations
        .iter()
        .map(|destination| {
            let assessment = suitability.assess(destination);
            let scores = SubScores {
                interest: interest.score(destination),
                budget: budget.score(destination),
                season: assessment.score,
            };
            Candidate {
                destination,
                scores,
                combined: ScoreWeights::STANDARD.blend(scores),
                season_reason: assessment.reason,
            }
        })
        .collect();

    // `sort_by` is stable, so equal scores keep catalogue order.
    candidates.sort_by(|left, right| right.combined.total_cmp(&left.combined));
    candidates.truncate(TOP_RECOMMENDATIONS);

    log::debug!(
        "ranked {} destinations; returning {}",
        destinations.len(),
        candidates.len()
    );
    Ok(candidates.into_iter().map(Candidate::into_recommendation).collect())
}

/// Rank the destinations of a decoded request.
///
/// # Errors
/// Propagates errors from [`rank`].
pub fn recommend(
    request: &RecommendationRequest,
) -> Result<Vec<ScoredRecommendation>, RecommendError> {
    rank(&request.preferences, &request.destinations)
}

/// Decode a `{"preferences": ..., "destinations": [...]}` document.
///
/// # Errors
/// Returns [`RecommendError::Decode`] naming the offending JSON path.
pub fn decode_request(payload: &str) -> Result<RecommendationRequest, RecommendError> {
    decode_document("request", payload)
}

/// Decode a bare preferences object.
///
/// # Errors
/// Returns [`RecommendError::Decode`] naming the offending JSON path.
pub fn decode_preferences(payload: &str) -> Result<Preferences, RecommendError> {
    decode_document("preferences", payload)
}

/// Decode a JSON array of destinations.
///
/// # Errors
/// Returns [`RecommendError::Decode`] naming the offending JSON path.
pub fn decode_catalogue(payload: &str) -> Result<Vec<Destination>, RecommendError> {
    decode_document("catalogue", payload)
}

/// Score a full request document and wrap the result for output.
///
/// Blank input and a request with no candidates yield an empty ranking,
/// whatever its preferences hold. Other decoding and scoring failures
/// become the error envelope.
#[must_use]
pub fn recommend_json(payload: &str) -> RecommendationOutcome {
    if payload.trim().is_empty() || lists_no_candidates(payload) {
        return RecommendationOutcome::empty();
    }
    let outcome = decode_request(payload).and_then(|request| recommend(&request));
    into_outcome(outcome)
}

/// Score a bare preferences document against an already loaded catalogue.
///
/// Blank input or an empty catalogue yields an empty ranking; decoding and
/// scoring failures become the error envelope.
#[must_use]
pub fn recommend_preferences_json(
    payload: &str,
    catalogue: &[Destination],
) -> RecommendationOutcome {
    if payload.trim().is_empty() || catalogue.is_empty() {
        return RecommendationOutcome::empty();
    }
    log::debug!("scoring against a catalogue of {} destinations", catalogue.len());
    let outcome =
        decode_preferences(payload).and_then(|preferences| rank(&preferences, catalogue));
    into_outcome(outcome)
}

/// The `destinations` of a request, read without decoding each entry.
#[derive(Deserialize)]
struct CandidateListing {
    #[serde(default)]
    destinations: Option<Vec<IgnoredAny>>,
}

/// True when a well-formed request names no candidates at all, so nothing
/// else in it needs validating.
fn lists_no_candidates(payload: &str) -> bool {
    serde_json::from_str::<CandidateListing>(payload)
        .is_ok_and(|listing| listing.destinations.is_none_or(|list| list.is_empty()))
}

fn into_outcome(
    result: Result<Vec<ScoredRecommendation>, RecommendError>,
) -> RecommendationOutcome {
    if let Err(err) = &result {
        log::warn!("recommendation failed: {err}");
    }
    RecommendationOutcome::from(result)
}

fn decode_document<T: serde::de::DeserializeOwned>(
    document: &'static str,
    payload: &str,
) -> Result<T, RecommendError> {
    let mut deserializer = serde_json::Deserializer::from_str(payload);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|err| RecommendError::decode(document, err))?;
    deserializer
        .end()
        .map_err(|source| RecommendError::Decode {
            document,
            path: ".".to_owned(),
            source,
        })?;
    Ok(value)
}

struct Candidate<'a> {
    destination: &'a Destination,
    scores: SubScores,
    combined: f64,
    season_reason: String,
}

impl Candidate<'_> {
    fn into_recommendation(self) -> ScoredRecommendation {
        let destination = self.destination;
        ScoredRecommendation {
            name: destination.name.clone(),
            country: destination.country.clone(),
            description: destination.description.clone(),
            score: self.combined,
            estimated_cost: destination.cost_range.estimated_cost(),
            activities: destination.activities.clone(),
            climate: destination.climate.clone(),
            image_url: destination.image_url.clone().unwrap_or_default(),
            explanation: Explanation::new(
                self.scores.interest,
                self.scores.budget,
                self.season_reason,
            ),
        }
    }
}
