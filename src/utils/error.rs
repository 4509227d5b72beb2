use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeltError {
    #[error("Feed request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Feed returned HTTP status {0}")]
    StatusError(reqwest::StatusCode),

    #[error("Feed body is not valid JSON: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Feed contained no felt events")]
    EmptyFeed,

    #[error("Event record is missing the '{0}' property")]
    MissingProperty(&'static str),

    #[error("Invalid value for config field '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FeltError>;
