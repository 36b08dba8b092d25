use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Stats provider rejected the API key: {0}")]
    Authentication(String),

    #[error("Stats provider unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Rate limit exceeded, retry after {0} seconds")]
    RateLimited(u64),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Narrative generation unavailable: {0}")]
    GenerationUnavailable(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    UpstreamUnavailable,
    NotFound,
    GenerationUnavailable,
    InvalidInput,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Authentication(_) => ErrorKind::Authentication,
            Error::UpstreamUnavailable(_) | Error::RateLimited(_) | Error::Network(_) => {
                ErrorKind::UpstreamUnavailable
            }
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::GenerationUnavailable(_) => ErrorKind::GenerationUnavailable,
            Error::InvalidSelection(_) => ErrorKind::InvalidInput,
            Error::ParseError(_)
            | Error::Config(_)
            | Error::Io(_)
            | Error::InvalidHeader(_) => ErrorKind::Internal,
        }
    }

    /// Failures the user can reasonably retry by clicking Analyze again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::RateLimited(_) | Error::UpstreamUnavailable(_) | Error::Network(_)
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            Error::Authentication(_) => {
                "The football data service rejected the configured API key.".to_string()
            }
            Error::RateLimited(secs) => format!(
                "Rate limit exceeded. Please wait {} seconds and try again.",
                secs
            ),
            Error::UpstreamUnavailable(_) | Error::Network(_) => {
                "The football data service is unavailable right now. Please try again.".to_string()
            }
            Error::NotFound(what) => format!("Not found: {}.", what),
            Error::GenerationUnavailable(_) => "AI analysis unavailable.".to_string(),
            Error::InvalidSelection(what) => what.clone(),
            _ => format!("Unexpected error: {}", self),
        }
    }
}
