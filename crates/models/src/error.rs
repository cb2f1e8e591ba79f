use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Match not found: {match_id}")]
    NotFound { match_id: String },

    #[error("Invalid match payload: {0}")]
    Validation(String),

    #[error("Ingestion failed at record {index}: {reason}")]
    Ingestion { index: usize, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatsError {
    pub fn not_found(match_id: impl Into<String>) -> Self {
        Self::NotFound { match_id: match_id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
