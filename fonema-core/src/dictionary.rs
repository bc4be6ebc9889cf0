//! Dictionary loading and caching
//!
//! Backing data is one flat JSON object per language (`token -> IPA`),
//! living in a data directory and named by the registry entry. Dictionaries
//! are static reference data: loaded once, cached for the life of the
//! process, never mutated.

use crate::error::{Result, TranscribeError};
use crate::language::LanguageRegistry;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Immutable token-to-IPA mapping for one language
///
/// Keys are case-sensitive as stored; each key maps to exactly one IPA
/// string (JSON object semantics).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct IpaDictionary {
    entries: HashMap<String, String>,
}

impl IpaDictionary {
    /// Wrap a prepared token map
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a dictionary from its backing JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Look up the IPA transcription for a token
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Whether the token has an entry
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry-validated, read-through dictionary cache
///
/// Repeated loads for the same language code return the cached dictionary.
/// Concurrent first access for one code may read the backing file more than
/// once; the last load wins, which is safe because dictionary contents are
/// invariant per code. Cache entries never expire.
pub struct DictionaryStore {
    registry: Arc<LanguageRegistry>,
    data_dir: PathBuf,
    cache: RwLock<HashMap<String, Arc<IpaDictionary>>>,
}

impl DictionaryStore {
    /// Create a store reading dictionaries from `data_dir`
    pub fn new<P: Into<PathBuf>>(data_dir: P, registry: Arc<LanguageRegistry>) -> Self {
        Self {
            registry,
            data_dir: data_dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The directory dictionaries are read from
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the dictionary for a language code
    ///
    /// Validates the code against the registry before touching the
    /// filesystem. Read and parse failures both surface as
    /// [`TranscribeError::DictionaryUnavailable`].
    pub fn load(&self, code: &str) -> Result<Arc<IpaDictionary>> {
        let entry = self
            .registry
            .get(code)
            .ok_or_else(|| TranscribeError::UnsupportedLanguage {
                code: code.to_string(),
            })?;

        if let Some(dict) = self
            .cache
            .read()
            .expect("dictionary cache lock poisoned")
            .get(code)
        {
            return Ok(Arc::clone(dict));
        }

        let path = self.data_dir.join(entry.source_file());
        log::debug!("loading dictionary for '{code}' from {}", path.display());

        let raw = fs::read_to_string(&path).map_err(|e| TranscribeError::DictionaryUnavailable {
            code: code.to_string(),
            reason: format!("failed to read {}: {e}", path.display()),
        })?;

        let dict = IpaDictionary::from_json(&raw).map_err(|e| {
            TranscribeError::DictionaryUnavailable {
                code: code.to_string(),
                reason: format!("failed to parse {}: {e}", path.display()),
            }
        })?;
        log::debug!("cached dictionary for '{code}' ({} entries)", dict.len());

        let dict = Arc::new(dict);
        self.cache
            .write()
            .expect("dictionary cache lock poisoned")
            .insert(code.to_string(), Arc::clone(&dict));

        Ok(dict)
    }
}

impl std::fmt::Debug for DictionaryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self
            .cache
            .read()
            .map(|c| c.len())
            .unwrap_or(0);
        f.debug_struct("DictionaryStore")
            .field("data_dir", &self.data_dir)
            .field("cached_languages", &cached)
            .finish()
    }
}
