//! Facade crate for the Wayfarer destination recommender.
//!
//! This crate re-exports the domain types from `wayfarer-core` and the
//! ranking pipeline from `wayfarer-scorer`.

#![forbid(unsafe_code)]

pub use wayfarer_core::{
    Budget, BudgetError, CostRange, DEFAULT_BUDGET, Destination, Explanation, Preferences,
    RecommendationOutcome, RecommendationRequest, ScoredRecommendation, Scorer, Season,
    TravelDates,
};

pub use wayfarer_scorer::{
    RecommendError, ScoreWeights, TOP_RECOMMENDATIONS, rank, recommend, recommend_json,
    recommend_preferences_json,
};
