/// Errors raised while talking to the report server
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from the local preference store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access preference storage: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while reading configuration from the environment
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid server URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("invalid value for {key}: '{value}'")]
    InvalidNumber { key: &'static str, value: String },

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
}
