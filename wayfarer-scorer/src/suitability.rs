//! Season suitability: whether the trip's season is one of the destination's
//! peak periods.

use wayfarer_core::{Destination, Scorer, Season};

/// Score when no travel season is known or the season is a peak period.
pub const IN_SEASON: f64 = 1.0;
/// Score when the trip falls outside the destination's peak period.
pub const OFF_SEASON: f64 = 0.5;

const NO_DATES_REASON: &str = "Dates not provided - showing general relevance.";

/// Score and explanation for one destination.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonAssessment {
    /// Fit in `0.0..=1.0`.
    pub score: f64,
    /// Sentence shown to the traveller.
    pub reason: String,
}

/// Compares the trip season against each destination's peak-season text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonScorer {
    season: Option<Season>,
}

impl SeasonScorer {
    /// Build a scorer for a trip in `season`, or with unknown dates.
    #[must_use]
    pub const fn new(season: Option<Season>) -> Self {
        Self { season }
    }

    /// Score `destination` and explain the result.
    ///
    /// The match is a case-insensitive substring test of the season label in
    /// the destination's season text, so `"Summer/Winter"` suits both.
    #[must_use]
    pub fn assess(&self, destination: &Destination) -> SeasonAssessment {
        let Some(season) = self.season else {
            return SeasonAssessment {
                score: IN_SEASON,
                reason: NO_DATES_REASON.to_owned(),
            };
        };
        let peak = destination.season.to_lowercase();
        if peak.contains(&season.as_str().to_lowercase()) {
            SeasonAssessment {
                score: IN_SEASON,
                reason: format!("Perfect timing! {season} is the best time to visit."),
            }
        } else {
            SeasonAssessment {
                score: OFF_SEASON,
                reason: format!(
                    "Note: {season} is not the peak season here, but it's still accessible."
                ),
            }
        }
    }
}

impl Scorer for SeasonScorer {
    fn score(&self, destination: &Destination) -> f64 {
        Self::sanitise(self.assess(destination).score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use wayfarer_core::CostRange;

    #[fixture]
    fn manali() -> Destination {
        Destination {
            name: "Manali".into(),
            country: "India".into(),
            description: String::new(),
            activities: vec!["Trekking".into()],
            climate: "Cold".into(),
            season: "SUMMER/Winter".into(),
            cost_range: CostRange {
                min: 15_000.0,
                max: 50_000.0,
            },
            image_url: None,
        }
    }

    #[rstest]
    fn unknown_dates_score_fully_with_general_reason(manali: Destination) {
        let assessment = SeasonScorer::new(None).assess(&manali);
        assert_eq!(assessment.score, 1.0);
        assert!(assessment.reason.contains("Dates not provided"));
    }

    #[rstest]
    #[case(Season::Summer)]
    #[case(Season::Winter)]
    fn peak_seasons_match_case_insensitively(manali: Destination, #[case] season: Season) {
        let assessment = SeasonScorer::new(Some(season)).assess(&manali);
        assert_eq!(assessment.score, 1.0);
        assert_eq!(
            assessment.reason,
            format!("Perfect timing! {season} is the best time to visit.")
        );
    }

    #[rstest]
    fn off_peak_trips_score_half(manali: Destination) {
        let scorer = SeasonScorer::new(Some(Season::Monsoon));
        let assessment = scorer.assess(&manali);
        assert_eq!(assessment.score, 0.5);
        assert_eq!(
            assessment.reason,
            "Note: Monsoon is not the peak season here, but it's still accessible."
        );
        assert_eq!(scorer.score(&manali), 0.5);
    }
}
