use crate::config::AnalyzerConfig;
use crate::error::ScoringError;
use crate::pipeline::runtime::{PerformanceAnalyzer, PerformanceAnalyzerParts};
use crate::pipeline::traits::{Embedder, LyricsStore, Transcriber};

/// Assembles a [`PerformanceAnalyzer`] from an embedder plus optional
/// transcriber and lyrics-store collaborators.
pub struct PerformanceAnalyzerBuilder {
    config: AnalyzerConfig,
    embedder: Option<Box<dyn Embedder>>,
    transcriber: Option<Box<dyn Transcriber>>,
    lyrics_store: Option<Box<dyn LyricsStore>>,
}

impl PerformanceAnalyzerBuilder {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            embedder: None,
            transcriber: None,
            lyrics_store: None,
        }
    }

    pub fn with_embedder(mut self, embedder: Box<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn with_transcriber(mut self, transcriber: Box<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    pub fn with_lyrics_store(mut self, lyrics_store: Box<dyn LyricsStore>) -> Self {
        self.lyrics_store = Some(lyrics_store);
        self
    }

    pub fn build(self) -> Result<PerformanceAnalyzer, ScoringError> {
        self.config.validate()?;
        let embedder = self
            .embedder
            .ok_or_else(|| ScoringError::invalid_input("an embedder is required"))?;

        Ok(PerformanceAnalyzer::from_parts(PerformanceAnalyzerParts {
            config: self.config,
            embedder,
            transcriber: self.transcriber,
            lyrics_store: self.lyrics_store,
        }))
    }
}
