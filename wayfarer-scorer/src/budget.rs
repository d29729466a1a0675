//! Budget fit: how comfortably a destination's cost range sits within the
//! traveller's budget.

use wayfarer_core::{Budget, Destination, Scorer};

/// Fit awarded when the average cost is within budget.
pub const FULL_FIT: f64 = 1.0;
/// Flat partial credit when only the cheapest option is affordable.
pub const PARTIAL_FIT: f64 = 0.7;

/// Scores destinations against a fixed budget.
///
/// - Average cost within budget: [`FULL_FIT`].
/// - Average above budget but minimum within it: [`PARTIAL_FIT`]. This is a
///   step, not a gradient.
/// - Minimum above budget: `1 - (min - budget) / budget`, floored at zero.
///   A zero or negative budget cannot be scaled against and scores zero.
///
/// # Examples
/// ```
/// use wayfarer_core::{Budget, Destination, Scorer};
/// use wayfarer_scorer::BudgetFitScorer;
///
/// let destination: Destination = serde_json::from_str(
///     r#"{"name":"Udaipur","country":"India","description":"","activities":[],
///         "climate":"Arid","season":"Winter","costRange":{"min":15000,"max":60000}}"#,
/// )
/// .expect("valid destination");
/// let budget = Budget::new(20_000.0).expect("finite budget");
/// assert_eq!(BudgetFitScorer::new(budget).score(&destination), 0.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetFitScorer {
    budget: Budget,
}

impl BudgetFitScorer {
    /// Build a scorer for `budget`.
    #[must_use]
    pub const fn new(budget: Budget) -> Self {
        Self { budget }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the shortfall decays linearly relative to the budget"
    )]
    fn shortfall_fit(budget: f64, min_cost: f64) -> f64 {
        if budget <= 0.0 {
            return 0.0;
        }
        (1.0 - (min_cost - budget) / budget).max(0.0)
    }
}

impl Scorer for BudgetFitScorer {
    fn score(&self, destination: &Destination) -> f64 {
        let budget = self.budget.amount();
        let range = destination.cost_range;
        let fit = if range.average() <= budget {
            FULL_FIT
        } else if range.min <= budget {
            PARTIAL_FIT
        } else {
            Self::shortfall_fit(budget, range.min)
        };
        Self::sanitise(fit)
    }
}
