use crate::types::{AlignedPair, ScoreReport, WordAssessment, WordScore};

/// Converts per-position similarity into the final bounded grade plus a
/// per-word classification.
///
/// Gaps count as similarity 0.0 in the mean: unsung stretches pull the
/// average (and therefore the grade) down.
pub fn score_pairs(
    pairs: &[AlignedPair],
    optimal_threshold: f32,
    good_threshold: f32,
) -> ScoreReport {
    let per_word: Vec<WordScore> = pairs
        .iter()
        .map(|pair| WordScore {
            original: pair.original.clone(),
            hypothesis: pair.hypothesis.clone(),
            similarity: pair.similarity,
            assessment: classify(pair.similarity, optimal_threshold, good_threshold),
        })
        .collect();

    let mean_similarity = if pairs.is_empty() {
        0.0
    } else {
        pairs.iter().map(|p| f64::from(p.similarity)).sum::<f64>() / pairs.len() as f64
    };

    ScoreReport {
        final_grade: grade(mean_similarity),
        mean_similarity,
        per_word,
    }
}

pub fn classify(similarity: f32, optimal_threshold: f32, good_threshold: f32) -> WordAssessment {
    if similarity > optimal_threshold {
        WordAssessment::Optimal
    } else if similarity > good_threshold {
        WordAssessment::Good
    } else {
        WordAssessment::Poor
    }
}

/// Truncation toward zero, then clamped to [0, 99]. Negative mean similarity
/// (possible with cosine scores) grades as 0.
fn grade(mean_similarity: f64) -> u8 {
    ((mean_similarity * 99.0) as i64).clamp(0, 99) as u8
}
