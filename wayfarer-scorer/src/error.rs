//! Error types raised while decoding and scoring recommendation requests.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised by the recommendation pipeline.
///
/// The `Display` text of each variant is the diagnostic placed in the
/// `{"error": ...}` envelope returned to callers.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// A JSON document could not be decoded into the expected shape.
    #[error("invalid {document} at {path}: {source}")]
    Decode {
        /// Which document failed (`request`, `preferences` or `catalogue`).
        document: &'static str,
        /// Location of the offending value, e.g. `destinations[2]`.
        path: String,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Every destination feature document consisted only of stop words or
    /// single-character tokens, leaving nothing to compare interests with.
    #[error("empty vocabulary; destination features contain only stop words")]
    EmptyVocabulary,
}

impl RecommendError {
    pub(crate) fn decode(
        document: &'static str,
        error: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        let path = error.path().to_string();
        Self::Decode {
            document,
            path,
            source: error.into_inner(),
        }
    }
}
