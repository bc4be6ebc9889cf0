//! Transcription orchestrator
//!
//! Wires registry validation, dictionary loading, segmentation, and tone
//! formatting into the one public operation: text in, IPA string out.

use crate::dictionary::DictionaryStore;
use crate::error::{Result, TranscribeError};
use crate::format::ToneFormat;
use crate::language::{LanguageFamily, LanguageRegistry};
use crate::segment::{transcribe_chars, transcribe_words};
use std::path::PathBuf;
use std::sync::Arc;

/// One transcription call's input
///
/// Value object: built per call, discarded afterwards.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Text to transcribe
    pub text: String,
    /// Language code, validated against the registry
    pub language: String,
    /// Prefix each hit with the matched token form (`token/ipa/`)
    pub show_tokens: bool,
    /// Tone notation for character-based output
    pub format: ToneFormat,
}

impl TranscriptionRequest {
    /// Build a request with default flags (no token forms, original tones)
    pub fn new<T: Into<String>, L: Into<String>>(text: T, language: L) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            show_tokens: false,
            format: ToneFormat::default(),
        }
    }

    /// Set the tone format
    pub fn format(mut self, format: ToneFormat) -> Self {
        self.format = format;
        self
    }

    /// Include matched token forms in the output
    pub fn show_tokens(mut self, show: bool) -> Self {
        self.show_tokens = show;
        self
    }
}

/// Main entry point for IPA transcription
///
/// Stateless per call apart from the dictionary store's read-through
/// cache; one instance may be shared across threads.
pub struct Transcriber {
    store: DictionaryStore,
    registry: Arc<LanguageRegistry>,
}

impl Transcriber {
    /// Create a transcriber over the built-in language registry
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self::with_registry(data_dir, LanguageRegistry::builtin())
    }

    /// Create a transcriber with an injected registry
    pub fn with_registry<P: Into<PathBuf>>(data_dir: P, registry: Arc<LanguageRegistry>) -> Self {
        Self {
            store: DictionaryStore::new(data_dir, Arc::clone(&registry)),
            registry,
        }
    }

    /// Transcribe a request into its formatted IPA rendering
    ///
    /// Fails only on an unknown language code or unavailable dictionary;
    /// segmentation and formatting are total. For word-based languages the
    /// requested format is accepted but not applied; their output carries
    /// no tone glyphs to rewrite.
    pub fn transcribe(&self, request: &TranscriptionRequest) -> Result<String> {
        let entry = self.registry.get(&request.language).ok_or_else(|| {
            TranscribeError::UnsupportedLanguage {
                code: request.language.clone(),
            }
        })?;

        let dict = self.store.load(entry.code())?;

        let rendered = match entry.family() {
            LanguageFamily::WordBased => {
                transcribe_words(&request.text, &dict, request.show_tokens)
            }
            LanguageFamily::CharacterBased => {
                let joined = transcribe_chars(&request.text, &dict, request.show_tokens);
                request.format.apply(&joined)
            }
        };

        Ok(rendered)
    }

    /// All supported language codes, in registry order
    pub fn supported_languages(&self) -> Vec<&'static str> {
        self.registry.codes()
    }

    /// All supported tone formats, in presentation order
    pub fn supported_formats(&self) -> &'static [ToneFormat] {
        &ToneFormat::ALL
    }

    /// The registry this transcriber validates against
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }
}

/// Transcribe text with the built-in registry (convenience)
pub fn transcribe_text<P: Into<PathBuf>>(text: &str, language: &str, data_dir: P) -> Result<String> {
    let transcriber = Transcriber::new(data_dir);
    transcriber.transcribe(&TranscriptionRequest::new(text, language))
}
