//! Language registry and family dispatch
//!
//! The registry is an explicit immutable configuration structure built once
//! at startup and injected into the dictionary store and the transcriber.
//! Adding a language is one table edit plus, for a new family, a new
//! segmentation strategy.

use std::sync::Arc;

/// Segmentation strategy family for a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageFamily {
    /// Space-delimited scripts: split on whitespace, look up whole words
    WordBased,
    /// Scripts without word boundaries: greedy longest-match over characters
    CharacterBased,
}

impl LanguageFamily {
    /// Human-readable family name
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageFamily::WordBased => "word-based",
            LanguageFamily::CharacterBased => "character-based",
        }
    }
}

/// One supported language and where its dictionary data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    code: &'static str,
    name: &'static str,
    source_file: &'static str,
    family: LanguageFamily,
}

impl LanguageEntry {
    /// Language code, e.g. `"en_US"`
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Display name, e.g. `"English (US)"`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// File name of the backing dictionary, relative to the data directory
    pub fn source_file(&self) -> &'static str {
        self.source_file
    }

    /// Segmentation family this language dispatches to
    pub fn family(&self) -> LanguageFamily {
        self.family
    }
}

/// Ordered, immutable set of supported languages
///
/// Read-only after construction; lookups never mutate. The built-in table
/// lists every language the stock dictionary data covers.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    entries: Vec<LanguageEntry>,
}

macro_rules! lang {
    ($code:literal, $name:literal, $file:literal, $family:expr) => {
        LanguageEntry {
            code: $code,
            name: $name,
            source_file: $file,
            family: $family,
        }
    };
}

impl LanguageRegistry {
    /// Build the built-in registry
    pub fn builtin() -> Arc<Self> {
        use LanguageFamily::{CharacterBased, WordBased};

        Arc::new(Self {
            entries: vec![
                lang!("yue", "Cantonese", "yue.json", CharacterBased),
                lang!("en_UK", "English (UK)", "en_UK.json", WordBased),
                lang!("en_US", "English (US)", "en_US.json", WordBased),
                lang!("eo", "Esperanto", "eo.json", WordBased),
                lang!("fr_FR", "French (FR)", "fr_FR.json", WordBased),
                lang!("fr_QC", "French (QC)", "fr_QC.json", WordBased),
                lang!("ja", "Japanese", "ja.json", WordBased),
                lang!("zh_hans", "Mandarin (Hans)", "zh_hans.json", CharacterBased),
                lang!("zh_hant", "Mandarin (Hant)", "zh_hant.json", CharacterBased),
                lang!("fa", "Persian", "fa.json", WordBased),
                lang!("es_ES", "Spanish (ES)", "es_ES.json", WordBased),
                lang!("es_MX", "Spanish (MX)", "es_MX.json", WordBased),
            ],
        })
    }

    /// Build a registry from explicit entries (testing and embedding)
    pub fn from_entries(entries: Vec<LanguageEntry>) -> Arc<Self> {
        Arc::new(Self { entries })
    }

    /// Look up a language by code
    pub fn get(&self, code: &str) -> Option<&LanguageEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Whether the code is registered
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// All language codes, in registry order
    pub fn codes(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.code).collect()
    }

    /// All entries, in registry order
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }
}

/// Build a [`LanguageEntry`] for registries assembled outside this crate
pub fn language_entry(
    code: &'static str,
    name: &'static str,
    source_file: &'static str,
    family: LanguageFamily,
) -> LanguageEntry {
    LanguageEntry {
        code,
        name,
        source_file,
        family,
    }
}
