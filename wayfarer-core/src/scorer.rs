//! Score destinations against a traveller's preferences.
//!
//! Each sub-score of the recommendation pipeline (interest match, budget fit,
//! season suitability) is a `Scorer` that has already captured the relevant
//! preference when constructed.

use crate::Destination;

/// Calculate a fit score for a destination.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return values in `0.0..=1.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use wayfarer_core::{Destination, Scorer};
///
/// struct Flat;
///
/// impl Scorer for Flat {
///     fn score(&self, _destination: &Destination) -> f64 {
///         Self::sanitise(1.5)
///     }
/// }
///
/// let destination: Destination = serde_json::from_str(
///     r#"{"name":"Goa","country":"India","description":"","activities":[],
///         "climate":"Tropical","season":"Winter","costRange":{"min":1,"max":2}}"#,
/// )
/// .expect("valid destination");
/// assert_eq!(Flat.score(&destination), 1.0);
/// ```
pub trait Scorer {
    /// Return a score for `destination`.
    fn score(&self, destination: &Destination) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}
