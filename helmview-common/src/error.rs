use thiserror::Error;

/// Common error type for HelmView components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid length expression '{expr}': {reason}")]
    Length { expr: String, reason: String },

    #[error("Invalid detent catalog: {0}")]
    Catalog(String),

    #[error("Zenoh error: {0}")]
    Zenoh(#[from] zenoh::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CBOR serialization error: {0}")]
    Cbor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn length(expr: &str, reason: impl Into<String>) -> Self {
        Error::Length {
            expr: expr.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(e: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Cbor(e.to_string())
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(e: ciborium::de::Error<std::io::Error>) -> Self {
        Error::Cbor(e.to_string())
    }
}

/// Result type alias using HelmView's Error.
pub type Result<T> = std::result::Result<T, Error>;
