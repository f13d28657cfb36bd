use std::path::Path;

use crate::error::ScoringError;
use crate::types::{SimilarityMatrix, Token};

/// Converts an audio recording into the spoken word sequence.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio_path: &Path) -> Result<Vec<Token>, ScoringError>;
}

/// Maps two word lists to their pairwise cosine-similarity matrix,
/// `rows = a.len()`, `cols = b.len()`.
///
/// Implementations are never handed a literal empty-string word; the
/// [`SimilarityOracle`](crate::pipeline::oracle::SimilarityOracle) substitutes
/// a sentinel first.
pub trait Embedder: Send + Sync {
    fn similarity_matrix(&self, a: &[String], b: &[String])
        -> Result<SimilarityMatrix, ScoringError>;
}

/// Persists and retrieves reference lyrics keyed by song title.
pub trait LyricsStore: Send + Sync {
    fn lookup(&self, title: &str) -> Result<Option<Vec<Token>>, ScoringError>;

    /// Queries an external source and persists on success. Returns `None`
    /// when the lyric cannot be found anywhere.
    fn fetch_and_store(&self, title: &str, artist: &str)
        -> Result<Option<Vec<Token>>, ScoringError>;
}
