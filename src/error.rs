//! Error types and handling for the search session

use thiserror::Error;

/// Message shown for every fetch failure; the detail only goes to the log
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch images. Please try again.";

/// Search term rejected by the length check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please! Enter at least 3 characters")]
    TooShort,
    #[error("Your prompt should not exceed 250 characters")]
    TooLong,
}

/// Failure while talking to the photo search API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),
    /// Transport failure where the client timeout elapsed
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
            }
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Startup configuration problems; fatal before any request is made
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing Unsplash access key (set UNSPLASH_ACCESS_KEY or pass --access-key)")]
    MissingApiKey,
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidApiBase { url: String, reason: String },
}

/// Errors surfaced at the process boundary
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config_error",
            AppError::Validation(ValidationError::TooShort) => "too_short",
            AppError::Validation(ValidationError::TooLong) => "too_long",
            AppError::Fetch(FetchError::Transport(_)) => "transport_error",
            AppError::Fetch(FetchError::Timeout(_)) => "timeout",
            AppError::Fetch(FetchError::Http { .. }) => "http_error",
            AppError::Fetch(FetchError::Decode(_)) => "decode_error",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Process exit code for CLI mode
    pub fn exit_code(&self) -> i32 {
        exit_code_for(self.error_code())
    }
}

/// Map an error code to the CLI exit code
pub fn exit_code_for(error_code: &str) -> i32 {
    match error_code {
        "config_error" | "too_short" | "too_long" => 1,
        "transport_error" | "http_error" => 2,
        "decode_error" => 3,
        "timeout" => 4,
        _ => 5,
    }
}
