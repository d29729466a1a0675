//! Term weighting over destination feature documents.
//!
//! [`TermWeights`] is fitted on the feature documents of the destinations in
//! a single request and then projects any text into the same space. Tokens
//! are lowercase runs of at least two word characters; English stop words
//! are dropped. Weights are raw term counts scaled by a smoothed inverse
//! document frequency, `ln((1 + n) / (1 + df)) + 1`, and every vector is
//! L2-normalised so cosine similarity reduces to a dot product.

use std::collections::BTreeMap;

use crate::RecommendError;
use crate::stop_words::is_stop_word;

/// A fitted vocabulary with per-term inverse document frequencies.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeights {
    vocabulary: BTreeMap<String, TermEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TermEntry {
    index: usize,
    idf: f64,
}

impl TermWeights {
    /// Fit the vocabulary and inverse document frequencies on `documents`.
    ///
    /// Terms are indexed in lexical order so vectors are deterministic.
    ///
    /// # Errors
    /// Returns [`RecommendError::EmptyVocabulary`] when no document contains a
    /// usable term.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self, RecommendError> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            let mut seen: Vec<String> = tokenise(document.as_ref()).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *document_frequency.entry(term).or_default() += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(RecommendError::EmptyVocabulary);
        }

        let vocabulary = document_frequency
            .into_iter()
            .enumerate()
            .map(|(index, (term, frequency))| {
                let idf = smoothed_idf(documents.len(), frequency);
                (term, TermEntry { index, idf })
            })
            .collect();
        Ok(Self { vocabulary })
    }

    /// Number of distinct terms in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Report whether the vocabulary is empty. Fitted models never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Inverse document frequency of `term`, if it is in the vocabulary.
    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|entry| entry.idf)
    }

    /// Project `document` into the fitted space.
    ///
    /// Out-of-vocabulary terms contribute nothing; a document without known
    /// terms yields the zero vector.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "term weights accumulate one idf per occurrence"
    )]
    pub fn transform(&self, document: &str) -> TermVector {
        let mut weights: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenise(document) {
            if let Some(entry) = self.vocabulary.get(&token) {
                *weights.entry(entry.index).or_default() += entry.idf;
            }
        }
        TermVector::normalised(weights)
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "idf is a logarithm of small document counts"
)]
fn smoothed_idf(documents: usize, frequency: usize) -> f64 {
    let total = documents as f64 + 1.0;
    let containing = frequency as f64 + 1.0;
    (total / containing).ln() + 1.0
}

/// Split text into lowercase word tokens of two or more characters,
/// skipping stop words.
///
/// A word character is `_` or anything [`char::is_alphanumeric`] accepts.
/// That includes spacing and non-spacing marks with the Unicode
/// `Other_Alphabetic` property, so a Devanagari tag such as `मंदिर` stays
/// one token instead of splitting at its vowel signs. ASCII and Latin-1 text
/// tokenises exactly as a `\w{2,}` regex would.
pub(crate) fn tokenise(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().nth(1).is_some())
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
}

/// A sparse, L2-normalised term vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TermVector {
    weights: BTreeMap<usize, f64>,
}

impl TermVector {
    #[expect(
        clippy::float_arithmetic,
        reason = "normalisation divides by the Euclidean norm"
    )]
    fn normalised(mut weights: BTreeMap<usize, f64>) -> Self {
        let norm = weights.values().map(|weight| weight * weight).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in weights.values_mut() {
                *weight /= norm;
            }
        }
        Self { weights }
    }

    /// Report whether every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.weights.values().all(|weight| *weight == 0.0)
    }

    /// Cosine similarity with `other`; `0.0` when either vector is zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "cosine similarity is a normalised dot product"
    )]
    pub fn cosine(&self, other: &Self) -> f64 {
        let dot: f64 = self
            .weights
            .iter()
            .filter_map(|(index, weight)| other.weights.get(index).map(|theirs| weight * theirs))
            .sum();
        let norms = self.norm() * other.norm();
        if norms == 0.0 { 0.0 } else { dot / norms }
    }

    #[expect(clippy::float_arithmetic, reason = "Euclidean norm")]
    fn norm(&self) -> f64 {
        self.weights.values().map(|weight| weight * weight).sum::<f64>().sqrt()
    }
}
