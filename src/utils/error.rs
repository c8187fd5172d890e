use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("Could not determine course or session id from path: {path}")]
    SessionNotLocated { path: String },

    #[error("Refresh request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Refresh endpoint returned HTTP {status}")]
    HttpStatus { status: reqwest::StatusCode },

    #[error("Refresh rejected by server: {message}")]
    Rejected { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, QrError>;
