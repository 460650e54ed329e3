use identra_types::ErrorCode;
use thiserror::Error;

/// SDK-specific errors.
#[derive(Debug, Error)]
pub enum IdentraError {
    /// Supplied configuration or URL is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned an error
    #[error("API error: {code} - {message}")]
    Api { code: ErrorCode, message: String },

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response body was not the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
