//! Segmentation engine
//!
//! Two lookup strategies, selected by language family. Word-based scripts
//! split on whitespace and look up whole tokens; character-based scripts
//! walk the char sequence with a greedy longest-match window. In both
//! paths, anything the dictionary does not know passes through verbatim.

use crate::dictionary::IpaDictionary;
use crate::preprocess::normalize;

/// Upper bound on the longest-match window, in characters
///
/// Candidate spans longer than this never match, regardless of dictionary
/// contents.
pub const MAX_MATCH_LEN: usize = 6;

/// Render one dictionary hit, with or without the matched token form
fn emit(token: &str, ipa: &str, show_tokens: bool) -> String {
    if show_tokens {
        format!("{token}/{ipa}/")
    } else {
        format!("/{ipa}/")
    }
}

/// Transcribe a space-delimited text word by word
///
/// Tokens are normalized before lookup; on a miss the original,
/// non-normalized token is kept. Output pieces are joined with single
/// spaces.
pub fn transcribe_words(text: &str, dict: &IpaDictionary, show_tokens: bool) -> String {
    let pieces: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            let folded = normalize(word);
            match dict.lookup(&folded) {
                Some(ipa) => emit(&folded, ipa, show_tokens),
                None => word.to_string(),
            }
        })
        .collect();

    pieces.join(" ")
}

/// Transcribe a boundary-free text by greedy longest match
///
/// At each position, candidate spans of up to [`MAX_MATCH_LEN`] characters
/// are tested from longest to shortest; the first span the dictionary
/// knows wins, so a single-character entry is only the last resort at its
/// position. Length is the only criterion, with no frequency weighting and
/// no backtracking. Characters no span covers are copied through verbatim,
/// spaces and punctuation included. Pieces are concatenated with no
/// separator.
pub fn transcribe_chars(text: &str, dict: &IpaDictionary, show_tokens: bool) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        match longest_match_at(&chars, i, dict) {
            Some((span, ipa)) => {
                result.push_str(&emit(&span, ipa, show_tokens));
                i += span.chars().count();
            }
            None => {
                result.push(chars[i]);
                i += 1;
            }
        }
    }

    result
}

/// Find the longest dictionary entry starting at `start`, if any
fn longest_match_at<'d>(
    chars: &[char],
    start: usize,
    dict: &'d IpaDictionary,
) -> Option<(String, &'d str)> {
    let window = MAX_MATCH_LEN.min(chars.len() - start);

    for len in (1..=window).rev() {
        let candidate: String = chars[start..start + len].iter().collect();
        if let Some(ipa) = dict.lookup(&candidate) {
            return Some((candidate, ipa));
        }
    }

    None
}
