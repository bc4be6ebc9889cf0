//! Dictionary-based IPA transcription engine
//!
//! Fonema turns text into its International Phonetic Alphabet rendering by
//! looking up tokens in per-language static dictionaries. Space-delimited
//! languages are transcribed word by word; Cantonese and Mandarin are
//! segmented with a greedy longest-match walk over the character sequence.
//! Tone marks in character-based output can be rewritten into numeric or
//! Jyutping notation.
//!
//! # Example
//!
//! ```no_run
//! use fonema_core::{ToneFormat, Transcriber, TranscriptionRequest};
//!
//! // Dictionaries are flat token -> IPA JSON files under the data directory
//! let transcriber = Transcriber::new("data");
//!
//! let request = TranscriptionRequest::new("你好", "yue").format(ToneFormat::Jyutping);
//! let ipa = transcriber.transcribe(&request)?;
//! # Ok::<(), fonema_core::TranscribeError>(())
//! ```
//!
//! Tokens and characters the dictionary does not know pass through
//! verbatim; only an unknown language code or unreadable dictionary data is
//! an error.

#![warn(missing_docs)]

pub mod dictionary;
pub mod error;
pub mod format;
pub mod language;
pub mod preprocess;
pub mod segment;
pub mod transcriber;

// Re-export key types
pub use dictionary::{DictionaryStore, IpaDictionary};
pub use error::{Result, TranscribeError};
pub use format::ToneFormat;
pub use language::{LanguageEntry, LanguageFamily, LanguageRegistry};
pub use transcriber::{transcribe_text, Transcriber, TranscriptionRequest};
