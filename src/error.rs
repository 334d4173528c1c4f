use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoStatsError {
    #[error("Username can't be empty")]
    EmptyUsername,

    #[error("API failed with code {code}")]
    HttpFailure { code: u16 },

    #[error("Failed to fetch data: {0}")]
    TransportFailure(String),

    #[error("Failed to parse JSON: {0}")]
    JsonDecodeFailure(String),

    #[error("Failed to write file: {0}")]
    FileWriteFailure(String),

    #[error("Console I/O error: {0}")]
    ConsoleIo(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Chart rendering failed: {0}")]
    ChartFailure(String),
}

impl RepoStatsError {
    /// Underlying message without the variant's prefix
    pub fn detail(&self) -> String {
        match self {
            RepoStatsError::TransportFailure(message)
            | RepoStatsError::JsonDecodeFailure(message)
            | RepoStatsError::FileWriteFailure(message)
            | RepoStatsError::ConsoleIo(message)
            | RepoStatsError::InvalidBaseUrl(message)
            | RepoStatsError::ChartFailure(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for RepoStatsError {
    fn from(err: reqwest::Error) -> Self {
        RepoStatsError::TransportFailure(err.to_string())
    }
}

impl From<serde_json::Error> for RepoStatsError {
    fn from(err: serde_json::Error) -> Self {
        RepoStatsError::JsonDecodeFailure(err.to_string())
    }
}

impl From<csv::Error> for RepoStatsError {
    fn from(err: csv::Error) -> Self {
        RepoStatsError::FileWriteFailure(err.to_string())
    }
}

impl From<std::io::Error> for RepoStatsError {
    fn from(err: std::io::Error) -> Self {
        RepoStatsError::FileWriteFailure(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RepoStatsError>;
