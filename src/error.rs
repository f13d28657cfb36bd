use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("transcription failed while {context}: {message}")]
    Transcription {
        context: &'static str,
        message: String,
    },
    #[error("embedding failed while {context}: {message}")]
    Embedding {
        context: &'static str,
        message: String,
    },
    #[error(
        "similarity matrix is {actual_rows}x{actual_cols} but sequences have lengths {expected_rows} and {expected_cols}"
    )]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },
    #[error("no lyrics found for '{title}'")]
    LyricsNotFound { title: String },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl ScoringError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn embedding(context: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Embedding {
            context,
            message: err.to_string(),
        }
    }

    pub(crate) fn lyrics_not_found(title: impl Into<String>) -> Self {
        Self::LyricsNotFound {
            title: title.into(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
