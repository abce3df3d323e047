// src/error.rs - Error handling for fetch, storage, and session flows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Failure categories the application distinguishes.
///
/// `Cancelled` is special: it marks a superseded in-flight request and is
/// always swallowed before reaching the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The server could not be reached at all (no response).
    Transport {
        endpoint: Option<String>,
    },
    /// The server answered with a non-2xx status.
    Http {
        status_code: u16,
        endpoint: Option<String>,
    },
    /// A request was superseded by a newer scope and its result discarded.
    Cancelled,
    /// Durable key-value storage failed.
    Storage {
        key: Option<String>,
    },
    /// A payload could not be encoded or decoded.
    Serialization,
    /// Login or token problems.
    Authentication {
        reason: String,
    },
    /// Invalid configuration or user input.
    Validation {
        field: Option<String>,
    },
    Application,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub id: Uuid,
    pub kind: ErrorKind,
    pub message: String,
    pub severity: ErrorSeverity,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub causes: Vec<String>,
}

impl Error {
    /// Creates a new error with the specified kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            severity: ErrorSeverity::Medium,
            source: "unknown".to_string(),
            timestamp: Utc::now(),
            causes: Vec::new(),
        }
    }

    /// Sets the error severity
    pub fn severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the error source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Adds a cause to the error chain
    pub fn caused_by(mut self, cause: impl fmt::Display) -> Self {
        self.causes.push(cause.to_string());
        self
    }

    /// Creates a transport error (server unreachable)
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Transport {
                endpoint: Some(endpoint.into()),
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates an HTTP error from a non-2xx response
    pub fn http(status_code: u16, endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Http {
                status_code,
                endpoint: Some(endpoint.into()),
            },
            message,
        )
    }

    /// Creates a cancellation marker for a superseded request
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled, "request superseded").severity(ErrorSeverity::Low)
    }

    /// Creates a storage error
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Storage {
                key: Some(key.into()),
            },
            message,
        )
    }

    /// Creates a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    /// Creates an authentication error
    pub fn authentication(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Authentication {
                reason: reason.into(),
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Validation {
                field: Some(field.into()),
            },
            message,
        )
        .severity(ErrorSeverity::Low)
    }

    /// True when this error marks a superseded request rather than a failure
    /// the user should see.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    /// The inline banner text for this error. Cancellations have none.
    pub fn user_message(&self) -> Option<String> {
        match &self.kind {
            ErrorKind::Cancelled => None,
            ErrorKind::Transport { .. } => Some("Cannot reach server".to_string()),
            _ => Some(self.message.clone()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)?;
        if !self.causes.is_empty() {
            write!(f, " (caused by: {})", self.causes.join(" <- "))?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err)).caused_by(err)
    }
}

/// Extension trait for adding context to results
pub trait ResultExt<T> {
    fn with_source(self, source: impl Into<String>) -> Result<T>;
    fn with_message(self, message: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_source(self, source: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.source(source))
    }

    fn with_message(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|mut e| {
            e.causes.push(e.message.clone());
            e.message = message.into();
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::http(404, "/products", "not found");
        assert_eq!(error.severity, ErrorSeverity::Medium);
        assert!(matches!(
            error.kind,
            ErrorKind::Http {
                status_code: 404,
                ..
            }
        ));
        assert!(!error.is_cancelled());
    }

    #[test]
    fn test_cancellation_is_silent() {
        let error = Error::cancelled();
        assert!(error.is_cancelled());
        assert_eq!(error.user_message(), None);
    }

    #[test]
    fn test_transport_user_message_is_generic() {
        let error = Error::transport("/brands", "connection refused");
        assert_eq!(error.user_message().as_deref(), Some("Cannot reach server"));
    }

    #[test]
    fn test_http_user_message_uses_body_message() {
        let error = Error::http(401, "/auth/login", "Password salah");
        assert_eq!(error.user_message().as_deref(), Some("Password salah"));
    }

    #[test]
    fn test_error_chaining() {
        let error = Error::storage("token", "write failed")
            .source("session")
            .caused_by("disk full");
        assert_eq!(error.source, "session");
        assert_eq!(error.causes.len(), 1);
        assert!(error.to_string().contains("disk full"));
    }
}
