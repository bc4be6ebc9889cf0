//! Error types for the transcription engine

use thiserror::Error;

/// Errors surfaced by the transcription engine
///
/// Both variants propagate unchanged from the dictionary store through the
/// transcriber to the caller. Unmatched tokens are not errors; they pass
/// through verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscribeError {
    /// Requested language code is absent from the registry
    #[error("language '{code}' is not supported")]
    UnsupportedLanguage {
        /// The language code that is not in the registry
        code: String,
    },

    /// Backing dictionary data is missing or malformed
    #[error("dictionary for '{code}' unavailable: {reason}")]
    DictionaryUnavailable {
        /// The language code whose dictionary failed to load
        code: String,
        /// What went wrong reading or parsing the backing data
        reason: String,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, TranscribeError>;
