use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failures while fetching the page under analysis
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Any failure that aborts an analysis run
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    Validation(String),
}

impl AnalysisError {
    /// Whether the failure was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::Validation(_))
    }
}

/// Failures loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {name}: '{value}'")]
    InvalidEnv { name: String, value: String },

    #[error("invalid config value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}
