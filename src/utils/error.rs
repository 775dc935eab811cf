use crate::core::section::SectionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Base64 decoding failed: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("README is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Section substitution failed: {0}")]
    SectionError(#[from] SectionError),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Authentication error: {message}")]
    AuthError { message: String },

    #[error("The README cannot be obtained: {message}")]
    ReadmeUnavailable { message: String },

    #[error("Unexpected response from {endpoint}: HTTP {status}")]
    HttpStatusError { endpoint: String, status: u16 },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Authentication,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BadgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BadgeError::MissingConfigError { .. }
            | BadgeError::UrlError(_)
            | BadgeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BadgeError::AuthError { .. } | BadgeError::ReadmeUnavailable { .. } => {
                ErrorCategory::Authentication
            }
            BadgeError::ApiError(_) | BadgeError::HttpStatusError { .. } => ErrorCategory::Network,
            BadgeError::SerializationError(_)
            | BadgeError::DecodeError(_)
            | BadgeError::Utf8Error(_)
            | BadgeError::SectionError(_) => ErrorCategory::Data,
            BadgeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration
            | ErrorCategory::Authentication
            | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Exit status for the process when this error ends a run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BadgeError::MissingConfigError { field } => {
                format!("Failed to get {}!", field)
            }
            BadgeError::AuthError { .. } => "Authentication Error. Try saving a GitHub Token in your Repo Secrets or use the GitHub Actions Token.".to_string(),
            BadgeError::ReadmeUnavailable { .. } => "The readme cannot be obtained!".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the INPUT_* environment variables (or matching flags) passed to the tool"
            }
            ErrorCategory::Authentication => {
                "Make sure the token has contents read/write access to the repository"
            }
            ErrorCategory::Network => "Check network connectivity and the configured API URLs",
            ErrorCategory::Data => {
                "Check that the README contains a single well-formed badge section"
            }
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, BadgeError>;
