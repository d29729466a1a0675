//! Fixed weighting of the three sub-scores.
#![forbid(unsafe_code)]

/// Relative weight of each sub-score in the combined score.
///
/// The weights sum to one, so a combination of unit-range sub-scores stays
/// in `0.0..=1.0`. The pipeline always uses [`ScoreWeights::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier applied to the interest match.
    pub interest: f64,
    /// Multiplier applied to the budget fit.
    pub budget: f64,
    /// Multiplier applied to the season suitability.
    pub season: f64,
}

impl ScoreWeights {
    /// Half interest, 30% budget, 20% season.
    pub const STANDARD: Self = Self {
        interest: 0.5,
        budget: 0.3,
        season: 0.2,
    };

    /// Weighted sum of the sub-scores.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the combined score is a weighted sum"
    )]
    pub fn blend(self, scores: SubScores) -> f64 {
        scores.interest * self.interest + scores.budget * self.budget + scores.season * self.season
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The three unit-range sub-scores computed for one destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    /// Interest match.
    pub interest: f64,
    /// Budget fit.
    pub budget: f64,
    /// Season suitability.
    pub season: f64,
}
