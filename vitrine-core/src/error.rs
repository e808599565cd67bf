use thiserror::Error;
use vitrine_model::ModelError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("autoplay needs a running tokio runtime")]
    NoRuntime,

    #[error("invalid color literal: {0}")]
    InvalidColor(String),

    #[error("catalog provider failed: {0}")]
    Provider(String),

    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("failed to serialize page: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
