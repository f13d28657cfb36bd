use std::path::Path;

use crate::alignment::coverage::analyze_coverage;
use crate::alignment::global::align_global;
use crate::alignment::normalization::normalize_tokens;
use crate::alignment::ranking::rank_pairs;
use crate::alignment::scoring::score_pairs;
use crate::config::AnalyzerConfig;
use crate::error::ScoringError;
use crate::pipeline::oracle::SimilarityOracle;
use crate::pipeline::traits::{Embedder, LyricsStore, Transcriber};
use crate::types::{AnalysisOutput, Token};

pub struct PerformanceAnalyzer {
    config: AnalyzerConfig,
    embedder: Box<dyn Embedder>,
    transcriber: Option<Box<dyn Transcriber>>,
    lyrics_store: Option<Box<dyn LyricsStore>>,
}

pub(crate) struct PerformanceAnalyzerParts {
    pub config: AnalyzerConfig,
    pub embedder: Box<dyn Embedder>,
    pub transcriber: Option<Box<dyn Transcriber>>,
    pub lyrics_store: Option<Box<dyn LyricsStore>>,
}

impl PerformanceAnalyzer {
    pub(crate) fn from_parts(parts: PerformanceAnalyzerParts) -> Self {
        Self {
            config: parts.config,
            embedder: parts.embedder,
            transcriber: parts.transcriber,
            lyrics_store: parts.lyrics_store,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Scores a hypothesis word sequence against the reference lyric.
    ///
    /// Deterministic given a deterministic embedder. An empty side degrades
    /// to an empty alignment and a zero grade rather than an error; coverage
    /// is always computed from the raw sequences.
    pub fn analyze(
        &self,
        original: &[Token],
        hypothesis: &[Token],
    ) -> Result<AnalysisOutput, ScoringError> {
        let coverage = analyze_coverage(original, hypothesis);

        let original_words = normalize_tokens(original);
        let hypothesis_words = normalize_tokens(hypothesis);

        if original_words.is_empty() || hypothesis_words.is_empty() {
            tracing::warn!(
                original_words = original_words.len(),
                hypothesis_words = hypothesis_words.len(),
                "one side is empty after normalization, skipping alignment"
            );
            let score = score_pairs(
                &[],
                self.config.optimal_threshold,
                self.config.good_threshold,
            );
            let ranking = rank_pairs(&[], self.config.ranking_window);
            return Ok(AnalysisOutput {
                alignment: Vec::new(),
                coverage,
                score,
                ranking,
            });
        }

        let similarities =
            SimilarityOracle::new(self.embedder.as_ref()).matrix(&original_words, &hypothesis_words)?;
        let alignment = align_global(
            &original_words,
            &hypothesis_words,
            &similarities,
            self.config.gap_penalty,
        )?;

        let score = score_pairs(
            &alignment,
            self.config.optimal_threshold,
            self.config.good_threshold,
        );
        let ranking = rank_pairs(&alignment, self.config.ranking_window);

        tracing::debug!(
            pairs = alignment.len(),
            final_grade = score.final_grade,
            coverage_percent = coverage.coverage_percent,
            "analysis complete"
        );

        Ok(AnalysisOutput {
            alignment,
            coverage,
            score,
            ranking,
        })
    }

    /// End-to-end convenience: look up the lyric (fetching it if absent),
    /// transcribe the recording and run [`Self::analyze`].
    pub fn score_recording(
        &self,
        title: &str,
        artist: &str,
        audio_path: &Path,
    ) -> Result<AnalysisOutput, ScoringError> {
        let store = self.lyrics_store.as_deref().ok_or_else(|| {
            ScoringError::invalid_input("no lyrics store configured for end-to-end scoring")
        })?;
        let transcriber = self.transcriber.as_deref().ok_or_else(|| {
            ScoringError::invalid_input("no transcriber configured for end-to-end scoring")
        })?;

        let original = match store.lookup(title)? {
            Some(words) => words,
            None => {
                tracing::debug!(title, artist, "lyric not stored locally, fetching");
                store
                    .fetch_and_store(title, artist)?
                    .ok_or_else(|| ScoringError::lyrics_not_found(title))?
            }
        };

        let hypothesis = transcriber.transcribe(audio_path)?;
        self.analyze(&original, &hypothesis)
    }
}
