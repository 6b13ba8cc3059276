use thiserror::Error;

use crate::contact::ValidationError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ContactError: {0}")]
    Contact(#[from] ContactError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Relay rejected the submission with status {status}")]
    Rejected { status: u16, endpoint: String },
}

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("A message is already being sent")]
    InFlight,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
    #[error("Unknown section '{0}'")]
    UnknownSection(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Api(api_error) => match api_error {
                ApiError::Timeout { .. } => ErrorSeverity::Medium,
                ApiError::Http { status, .. } | ApiError::Rejected { status, .. }
                    if *status >= 500 =>
                {
                    ErrorSeverity::High
                }
                _ => ErrorSeverity::Medium,
            },
            AppError::Contact(_) => ErrorSeverity::Low,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Display(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Contact(ContactError::Validation(e)) => e.to_string(),
            AppError::Contact(ContactError::InFlight) => "Sending...".to_string(),
            AppError::Api(_) => "Failed to send message".to_string(),
            AppError::Display(DisplayError::UnknownSection(name)) => {
                format!("No section named '{}'", name)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(ApiError::Timeout { .. }) => {
                Some("Check your internet connection and try again".to_string())
            }
            AppError::Api(ApiError::Rejected { .. } | ApiError::Http { .. }) => Some(
                "Check the relay endpoint with 'folio-cli config show' or set FOLIO_RELAY_URL"
                    .to_string(),
            ),
            AppError::Config(ConfigError::UnknownKey { .. }) => Some(
                "Valid keys: relay.endpoint, relay.timeout_secs, layout.breakpoint, \
                 layout.lookahead_rows, layout.drawer_width"
                    .to_string(),
            ),
            AppError::Display(DisplayError::UnknownSection(_)) => {
                Some("Sections are: home, about, projects, contact".to_string())
            }
            _ => None,
        }
    }
}
