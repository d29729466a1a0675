//! Interest matching between a traveller's stated interests and the
//! destinations' activity, climate and season text.

use wayfarer_core::{Destination, Scorer};

use crate::RecommendError;
use crate::tfidf::{TermVector, TermWeights};

/// Scores destinations by cosine similarity between the traveller's
/// interests and each destination's feature document.
///
/// The term model is fitted on the destinations passed to [`Self::fit`] and
/// lives only as long as this value.
#[derive(Debug, Clone)]
pub struct InterestScorer {
    model: TermWeights,
    query: TermVector,
}

impl InterestScorer {
    /// Fit the term model on `destinations` and project `interests` into it.
    ///
    /// # Errors
    /// Returns [`RecommendError::EmptyVocabulary`] when the destinations carry
    /// no usable terms.
    pub fn fit(destinations: &[Destination], interests: &[String]) -> Result<Self, RecommendError> {
        let documents: Vec<String> = destinations
            .iter()
            .map(Destination::feature_document)
            .collect();
        let model = TermWeights::fit(&documents)?;
        let query = model.transform(&interests.join(" "));
        log::debug!(
            "fitted {} terms over {} destinations; interests matched: {}",
            model.len(),
            documents.len(),
            !query.is_zero()
        );
        Ok(Self { model, query })
    }
}

impl Scorer for InterestScorer {
    fn score(&self, destination: &Destination) -> f64 {
        let features = self.model.transform(&destination.feature_document());
        Self::sanitise(self.query.cosine(&features))
    }
}
