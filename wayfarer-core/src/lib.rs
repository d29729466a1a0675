//! Core domain types for the Wayfarer destination recommender.
//!
//! The model mirrors the JSON documents exchanged at the scorer boundary:
//! a [`RecommendationRequest`] carries the traveller's [`Preferences`] and a
//! list of candidate [`Destination`]s, and the scorer answers with a
//! [`RecommendationOutcome`]. Decoding is deliberately lenient where callers
//! commonly send loose data (numeric strings for budgets, non-string dates)
//! and strict where a destination lacks the fields scoring depends on.

#![forbid(unsafe_code)]

pub mod destination;
pub mod preferences;
pub mod recommendation;
pub mod scorer;
pub mod season;

pub use destination::{CostRange, Destination};
pub use preferences::{Budget, BudgetError, DEFAULT_BUDGET, Preferences, TravelDates};
pub use recommendation::{
    Explanation, RecommendationOutcome, RecommendationRequest, ScoredRecommendation,
};
pub use scorer::Scorer;
pub use season::Season;
