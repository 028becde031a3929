use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArchiveError>;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Archive answered {status} for {url}")]
    StatusError { status: u16, url: String },

    #[error("Archive returned no draws")]
    EmptyResponse,

    #[error("Invalid draw record: {0}")]
    NormalizationError(String),

    #[error("Invalid draw: {0}")]
    DrawError(#[from] engine::EngineError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
