use thiserror::Error;

use crate::quiz_engine::models::GameMode;

/// Failure of a bounded random draw.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomError {
    #[error("invalid range: max {max} is below min {min}")]
    InvalidRange { min: i64, max: i64 },
}

/// Failure retrieving or decoding a collection from the corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("corpus returned status {code}: {message}")]
    Status { code: u16, message: String },
    #[error("malformed corpus payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("collection {0} not found")]
    NotFound(u32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("score store encoding failed: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("score store lock poisoned")]
    Poisoned,
}

/// Round generation failure as seen by callers of `start_round`.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Random(#[from] RandomError),
    #[error("sampled material produced no {mode} questions")]
    EmptyRound { mode: GameMode },
}
