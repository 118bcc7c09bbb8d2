use thiserror::Error;

/// Error type that captures the shop's failure modes.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("{label}: expected a number but input ended")]
    MissingInput { label: String },
    #[error("{label}: `{input}` is not a number")]
    InvalidAmount { label: String, input: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
}
