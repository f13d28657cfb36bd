use crate::error::ScoringError;
use crate::pipeline::traits::Embedder;
use crate::types::SimilarityMatrix;

/// Placeholder encoded in place of an empty or whitespace-only word, so the
/// embedder never sees a truly empty string.
pub const EMPTY_TOKEN_SENTINEL: &str = "[EMPTY]";

/// Thin adapter around the [`Embedder`]: sanitizes inputs, validates the
/// returned dimensions and forces the similarity of never-sung slots to 0.0
/// regardless of what the embedder thought of the sentinel.
pub struct SimilarityOracle<'a> {
    embedder: &'a dyn Embedder,
}

impl<'a> SimilarityOracle<'a> {
    pub fn new(embedder: &'a dyn Embedder) -> Self {
        Self { embedder }
    }

    pub fn matrix(
        &self,
        original: &[String],
        hypothesis: &[String],
    ) -> Result<SimilarityMatrix, ScoringError> {
        if original.is_empty() || hypothesis.is_empty() {
            return Ok(SimilarityMatrix::zeroed(original.len(), hypothesis.len()));
        }

        let sanitized_original = sanitize(original);
        let sanitized_hypothesis = sanitize(hypothesis);

        let mut matrix = self
            .embedder
            .similarity_matrix(&sanitized_original, &sanitized_hypothesis)?;

        if matrix.rows() != original.len() || matrix.cols() != hypothesis.len() {
            return Err(ScoringError::DimensionMismatch {
                expected_rows: original.len(),
                expected_cols: hypothesis.len(),
                actual_rows: matrix.rows(),
                actual_cols: matrix.cols(),
            });
        }
        if matrix.iter().any(|value| !value.is_finite()) {
            return Err(ScoringError::embedding(
                "validating similarity matrix",
                "matrix contains non-finite similarity values",
            ));
        }

        // A blank slot was never sung; nothing is similar to silence.
        for (col, word) in hypothesis.iter().enumerate() {
            if word.trim().is_empty() {
                for row in 0..original.len() {
                    matrix.set(row, col, 0.0);
                }
            }
        }

        Ok(matrix)
    }
}

fn sanitize(words: &[String]) -> Vec<String> {
    words
        .iter()
        .map(|word| {
            if word.trim().is_empty() {
                EMPTY_TOKEN_SENTINEL.to_string()
            } else {
                word.clone()
            }
        })
        .collect()
}
