use serde::Serialize;

use crate::error::ScoringError;

/// A single word unit from either the reference lyric or a transcription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Splits free text on whitespace into tokens, the way a transcript is
    /// turned into a word sequence.
    pub fn split_text(text: &str) -> Vec<Token> {
        text.split_whitespace().map(Token::new).collect()
    }
}

/// Pairwise cosine similarities between two token lists.
///
/// `rows` tracks the reference sequence, `cols` the hypothesis sequence.
/// Values are expected to lie in the cosine range [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, ScoringError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(row_count * col_count);
        for row in &rows {
            if row.len() != col_count {
                return Err(ScoringError::invalid_input(format!(
                    "similarity matrix is ragged: expected {} columns, found {}",
                    col_count,
                    row.len()
                )));
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < self.rows && col < self.cols);
        self.values[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f32) {
        debug_assert!(row < self.rows && col < self.cols);
        self.values[row * self.cols + col] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }
}

/// One slot of the gap-padded alignment.
///
/// `None` on the original side means an extra sung word with no reference
/// counterpart; `None` on the hypothesis side means an unsung reference word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedPair {
    pub original: Option<String>,
    pub hypothesis: Option<String>,
    pub similarity: f32,
}

impl AlignedPair {
    pub fn matched(original: String, hypothesis: String, similarity: f32) -> Self {
        Self {
            original: Some(original),
            hypothesis: Some(hypothesis),
            similarity,
        }
    }

    /// Reference word with no sung counterpart. Gap similarity is fixed at 0.
    pub fn unsung(original: String) -> Self {
        Self {
            original: Some(original),
            hypothesis: None,
            similarity: 0.0,
        }
    }

    /// Sung word with no reference counterpart. Gap similarity is fixed at 0.
    pub fn extra(hypothesis: String) -> Self {
        Self {
            original: None,
            hypothesis: Some(hypothesis),
            similarity: 0.0,
        }
    }

    pub fn is_unsung(&self) -> bool {
        self.hypothesis.is_none()
    }
}

/// Vocabulary coverage of the transcription over the reference lyric,
/// independent of word order or alignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub coverage_percent: f64,
    /// Normalized reference words absent from the transcribed vocabulary,
    /// in reference order, duplicates preserved.
    pub missing: Vec<String>,
    pub total_original: usize,
    pub total_transcribed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordAssessment {
    Optimal,
    Good,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordScore {
    pub original: Option<String>,
    pub hypothesis: Option<String>,
    pub similarity: f32,
    pub assessment: WordAssessment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Bounded grade in [0, 99]: mean similarity scaled by 99 and truncated.
    pub final_grade: u8,
    pub mean_similarity: f64,
    pub per_word: Vec<WordScore>,
}

/// A ranked pair together with its position in the full alignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub position: usize,
    pub original: Option<String>,
    pub hypothesis: Option<String>,
    pub similarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedReport {
    pub top: Vec<RankedEntry>,
    pub bottom: Vec<RankedEntry>,
    /// Every aligned pair in original positional order, gaps included.
    pub full: Vec<AlignedPair>,
}

/// Result of one analysis run: the §6 entry-point payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutput {
    pub alignment: Vec<AlignedPair>,
    pub coverage: CoverageReport,
    pub score: ScoreReport,
    pub ranking: RankedReport,
}
