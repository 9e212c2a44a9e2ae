//! Error types for the decision console
//!
//! Provides structured error handling with:
//! - Numeric error codes for machine parsing
//! - User-friendly messages with suggestions
//! - Exit codes for CLI

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric error codes for machine parsing and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    // Configuration errors (1xx)
    ConfigNotFound = 100,
    ConfigParseError = 101,
    ConfigValidation = 102,

    // IO errors (2xx)
    IoRead = 200,
    IoWrite = 201,
    IoPermission = 202,
    IoNotFound = 203,

    // Backend API errors (3xx)
    ApiRequestFailed = 300,
    ApiStatus = 301,
    ApiDecode = 302,

    // Form validation errors (4xx)
    RequiredField = 400,
    InvalidFieldValue = 401,

    // Editor session errors (5xx)
    SessionClosed = 500,

    // Internal errors (9xx)
    InternalError = 900,
    NotSupported = 902,
}

impl ErrorCode {
    /// Get the string code (e.g., "E100")
    pub fn as_str(&self) -> String {
        format!("E{}", *self as u16)
    }

    /// Get the exit code for CLI (maps to 1-125 range)
    pub fn exit_code(&self) -> i32 {
        match *self as u16 {
            100..=199 => 10, // Config errors
            200..=299 => 20, // IO errors
            300..=399 => 30, // Backend API errors
            400..=499 => 40, // Validation errors
            500..=599 => 50, // Session errors
            900..=999 => 90, // Internal errors
            _ => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for the console
#[derive(Error, Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    // ─────────────────────────────────────────────────────────────
    // IO Errors
    // ─────────────────────────────────────────────────────────────

    /// File write error
    #[error("Failed to write file: {path}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Backend API Errors
    // ─────────────────────────────────────────────────────────────

    /// Request never reached the backend (connection, DNS, timeout)
    #[error("Failed to reach decision backend at {url}: {message}")]
    ApiRequest { url: String, message: String },

    /// Backend answered with a non-2xx status
    #[error("{operation} failed: {status} {status_text}")]
    ApiStatus {
        operation: &'static str,
        status: u16,
        status_text: String,
    },

    /// Backend answered 2xx but the body was not what we expected
    #[error("Invalid response for {operation}: {message}")]
    ApiDecode {
        operation: &'static str,
        message: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Form Validation Errors
    // ─────────────────────────────────────────────────────────────

    /// A required editor field was left empty
    #[error("Required field '{field}' is empty")]
    RequiredField { field: String },

    /// A field value failed validation
    #[error("Invalid value for '{field}': {message}")]
    InvalidFieldValue { field: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Editor Session Errors
    // ─────────────────────────────────────────────────────────────

    /// Submit was called without an open editor session
    #[error("No editor session is open")]
    SessionClosed,

    // ─────────────────────────────────────────────────────────────
    // Internal Errors
    // ─────────────────────────────────────────────────────────────

    /// Feature not supported
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    // ─────────────────────────────────────────────────────────────
    // Error Classification
    // ─────────────────────────────────────────────────────────────

    /// Get the numeric error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ConfigNotFound { .. } => ErrorCode::ConfigNotFound,
            Error::Config(_) => ErrorCode::ConfigValidation,

            Error::IoWrite { .. } => ErrorCode::IoWrite,
            Error::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::IoNotFound,
                std::io::ErrorKind::PermissionDenied => ErrorCode::IoPermission,
                _ => ErrorCode::IoRead,
            },
            Error::Toml(_) => ErrorCode::ConfigParseError,

            Error::ApiRequest { .. } => ErrorCode::ApiRequestFailed,
            Error::ApiStatus { .. } => ErrorCode::ApiStatus,
            Error::ApiDecode { .. } => ErrorCode::ApiDecode,

            Error::RequiredField { .. } => ErrorCode::RequiredField,
            Error::InvalidFieldValue { .. } => ErrorCode::InvalidFieldValue,

            Error::SessionClosed => ErrorCode::SessionClosed,

            Error::NotSupported(_) => ErrorCode::NotSupported,
            Error::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Check whether the error should render as a dismissible banner
    /// rather than aborting the view. Backend failures and validation
    /// failures degrade to inline messages; prior state stays intact.
    pub fn is_banner(&self) -> bool {
        matches!(
            self,
            Error::ApiRequest { .. }
                | Error::ApiStatus { .. }
                | Error::ApiDecode { .. }
                | Error::RequiredField { .. }
                | Error::InvalidFieldValue { .. }
        )
    }

    /// Check if the error is fatal (console should exit)
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound { .. } | Error::Config(_) | Error::Internal(_)
        )
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    // ─────────────────────────────────────────────────────────────
    // User-Friendly Messages
    // ─────────────────────────────────────────────────────────────

    /// Get a user-friendly suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::ConfigNotFound { .. } => Some(
                "Run 'decision-console config init' to create a default configuration file.",
            ),
            Error::Config(_) => Some(
                "Run 'decision-console config validate' to see which values are invalid.",
            ),
            Error::ApiRequest { .. } => Some(
                "Check your network connection and the [backend] base_url in the configuration.",
            ),
            Error::ApiStatus { .. } => Some(
                "The decision backend rejected the request. Verify the project id exists.",
            ),
            Error::RequiredField { .. } => {
                Some("Fill in every required field before submitting the editor.")
            }
            _ => None,
        }
    }

    /// Format the error for terminal display with colors
    pub fn format_for_terminal(&self) -> String {
        let code = self.code();
        let mut output = format!("\x1b[31mError [{}]\x1b[0m: {}\n", code.as_str(), self);

        if let Some(hint) = self.suggestion() {
            output.push_str(&format!("\n\x1b[33mHint\x1b[0m: {}\n", hint));
        }

        output
    }

    /// Format the error for logging (no colors)
    pub fn format_for_log(&self) -> String {
        format!("[{}] {}", self.code().as_str(), self)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Constructors (for ergonomic error creation)
// ─────────────────────────────────────────────────────────────────

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Error::ConfigNotFound { path: path.into() }
    }

    /// Create an API status error from a reqwest status
    pub fn api_status(operation: &'static str, status: reqwest::StatusCode) -> Self {
        Error::ApiStatus {
            operation,
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }

    /// Create an API request error
    pub fn api_request(url: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ApiRequest {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a required-field validation error
    pub fn required_field(field: impl Into<String>) -> Self {
        Error::RequiredField {
            field: field.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
