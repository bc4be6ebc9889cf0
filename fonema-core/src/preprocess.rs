//! Token normalization for word-based lookup
//!
//! Dictionary keys for word-based languages are stored lowercase and bare of
//! sentence punctuation, so tokens are folded before lookup. The original
//! token is kept around by the caller for miss passthrough.

/// Normalize a token before word-based dictionary lookup
///
/// Folds ASCII `A-Z` to lowercase and removes the literal characters `.`,
/// `,`, and `\n`. Everything else, including other punctuation and
/// non-ASCII letters, is left untouched. Total over any input, empty
/// included.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '\n'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
