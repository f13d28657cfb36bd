pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod store;
pub mod types;

pub use config::AnalyzerConfig;
pub use error::ScoringError;
pub use pipeline::builder::PerformanceAnalyzerBuilder;
pub use pipeline::oracle::{SimilarityOracle, EMPTY_TOKEN_SENTINEL};
pub use pipeline::runtime::PerformanceAnalyzer;
pub use pipeline::traits::{Embedder, LyricsStore, Transcriber};
pub use store::{JsonLyricsStore, LyricsSource};
pub use types::{
    AlignedPair, AnalysisOutput, CoverageReport, RankedReport, ScoreReport, SimilarityMatrix,
    Token, WordAssessment,
};
