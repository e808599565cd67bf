use thiserror::Error;

/// Errors produced by model constructors and parsers.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown {kind} variant: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("invalid price: {0}")]
    InvalidPrice(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
