use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::Token;

/// Canonicalizes a token sequence into a comparable word list.
///
/// Tokens are joined with single spaces before cleaning so punctuation that
/// spans token boundaries collapses correctly, then re-split on whitespace.
pub fn normalize_tokens(tokens: &[Token]) -> Vec<String> {
    let joined = tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    normalize_text(&joined)
}

/// Lower-cases, strips accents via NFD decomposition, replaces everything
/// outside `[a-zA-Z0-9\s]` with a space and splits on whitespace.
///
/// Pure and total: empty input yields an empty list.
pub fn normalize_text(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let cleaned: String = stripped
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
