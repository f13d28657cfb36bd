use std::path::Path;

use crate::error::ScoringError;

/// Tunable analysis constants. The defaults reproduce the reference scoring
/// behavior; deviating changes which alignments and grades are reported.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AnalyzerConfig {
    /// Score contributed by every gap in the global alignment.
    #[serde(default = "default_gap_penalty")]
    pub gap_penalty: f32,
    /// How many pairs the top/bottom rankings each hold.
    #[serde(default = "default_ranking_window")]
    pub ranking_window: usize,
    /// Similarity strictly above this is classified `optimal`.
    #[serde(default = "default_optimal_threshold")]
    pub optimal_threshold: f32,
    /// Similarity strictly above this (and not optimal) is classified `good`.
    #[serde(default = "default_good_threshold")]
    pub good_threshold: f32,
}

fn default_gap_penalty() -> f32 {
    AnalyzerConfig::DEFAULT_GAP_PENALTY
}
fn default_ranking_window() -> usize {
    AnalyzerConfig::DEFAULT_RANKING_WINDOW
}
fn default_optimal_threshold() -> f32 {
    AnalyzerConfig::DEFAULT_OPTIMAL_THRESHOLD
}
fn default_good_threshold() -> f32 {
    AnalyzerConfig::DEFAULT_GOOD_THRESHOLD
}

impl AnalyzerConfig {
    pub const DEFAULT_GAP_PENALTY: f32 = -0.4;
    pub const DEFAULT_RANKING_WINDOW: usize = 10;
    pub const DEFAULT_OPTIMAL_THRESHOLD: f32 = 0.85;
    pub const DEFAULT_GOOD_THRESHOLD: f32 = 0.60;

    pub fn load(path: &Path) -> Result<Self, ScoringError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| ScoringError::io("read config", e))?;
        let config: Self =
            serde_json::from_str(&data).map_err(|e| ScoringError::json("parse config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.gap_penalty >= 0.0 {
            return Err(ScoringError::invalid_input(format!(
                "gap_penalty must be negative, got {}",
                self.gap_penalty
            )));
        }
        if self.ranking_window == 0 {
            return Err(ScoringError::invalid_input(
                "ranking_window must be at least 1",
            ));
        }
        if self.good_threshold >= self.optimal_threshold {
            return Err(ScoringError::invalid_input(format!(
                "good_threshold {} must be below optimal_threshold {}",
                self.good_threshold, self.optimal_threshold
            )));
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            gap_penalty: Self::DEFAULT_GAP_PENALTY,
            ranking_window: Self::DEFAULT_RANKING_WINDOW,
            optimal_threshold: Self::DEFAULT_OPTIMAL_THRESHOLD,
            good_threshold: Self::DEFAULT_GOOD_THRESHOLD,
        }
    }
}
