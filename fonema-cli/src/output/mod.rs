//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One finished transcription, ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionRecord {
    /// The formatted IPA transcription
    pub ipa: String,
    /// Language code the text was transcribed as
    pub language: String,
    /// Tone format that was applied
    pub format: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single transcription
    fn write_record(&mut self, record: &TranscriptionRecord) -> Result<()>;

    /// Finalize output (e.g. flush buffered writes)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
