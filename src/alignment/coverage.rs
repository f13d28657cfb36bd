use std::collections::HashSet;

use crate::alignment::normalization::normalize_tokens;
use crate::types::{CoverageReport, Token};

/// Vocabulary coverage of the transcription over the reference lyric.
///
/// Works on the raw (pre-alignment) sequences: it measures which reference
/// words were sung at all, not whether they were sung in the right place.
pub fn analyze_coverage(original: &[Token], transcribed: &[Token]) -> CoverageReport {
    let original_words = normalize_tokens(original);
    let transcribed_words = normalize_tokens(transcribed);

    let original_set: HashSet<&str> = original_words.iter().map(String::as_str).collect();
    let transcribed_set: HashSet<&str> = transcribed_words.iter().map(String::as_str).collect();

    let missing: Vec<String> = original_words
        .iter()
        .filter(|word| !transcribed_set.contains(word.as_str()))
        .cloned()
        .collect();

    let coverage_percent = if original_set.is_empty() {
        0.0
    } else {
        let covered = original_set.intersection(&transcribed_set).count();
        round2(covered as f64 / original_set.len() as f64 * 100.0)
    };

    CoverageReport {
        coverage_percent,
        missing,
        total_original: original_words.len(),
        total_transcribed: transcribed_words.len(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
