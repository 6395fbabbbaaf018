//! Error taxonomy shared by the HTTP pipeline, the services and the hooks.
//!
//! Every failed call produces exactly one [`ClassifiedError`]. Callers read
//! its [`ErrorKind`] and `message`; they never classify it again.

use std::fmt;
use thiserror::Error;

/// Result type alias using `ClassifiedError`
pub type Result<T> = std::result::Result<T, ClassifiedError>;

/// Boxed underlying failure kept as the error source.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The fixed set of failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 401 from the API; the session has been torn down
    Unauthorized,
    /// 403 from the API
    Forbidden,
    /// 404 from the API
    NotFound,
    /// Any 5xx from the API
    ServerError,
    /// The request was sent but no response arrived (timeout, refused, reset)
    NetworkError,
    /// Rejected locally before transmission
    ValidationError,
    /// Anything else, including failures before the request left the client
    Unknown,
}

impl ErrorKind {
    /// Message shown when the server did not supply a usable one.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "Your session has expired. Please log in again.",
            ErrorKind::Forbidden => "You do not have permission to perform this action.",
            ErrorKind::NotFound => "The requested resource was not found.",
            ErrorKind::ServerError => "The server encountered an error. Please try again later.",
            ErrorKind::NetworkError => {
                "Unable to reach the server. Check your connection and try again."
            }
            ErrorKind::ValidationError => "The submitted data is invalid.",
            ErrorKind::Unknown => "An unexpected error occurred.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::ServerError => "server_error",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::ValidationError => "validation_error",
            ErrorKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Structured detail attached by the classifier when it can tell more than
/// the status code alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The route itself does not exist on the deployed API, as opposed to a
    /// missing record behind an existing route.
    EndpointNotFound,
}

impl ErrorCode {
    /// Wire value used by the API in the `code` field of an error body.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::EndpointNotFound => "endpoint_not_found",
        }
    }
}

/// A normalized failure descriptor.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    /// Human-readable text suitable for a notification
    pub message: String,
    pub http_status: Option<u16>,
    pub code: Option<ErrorCode>,
    #[source]
    pub cause: Option<Cause>,
}

impl ClassifiedError {
    /// Create an error with an explicit message and no status.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            http_status: None,
            code: None,
            cause: None,
        }
    }

    /// Create an error carrying only the default message for `kind`.
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.default_message())
    }

    /// Create a pre-flight validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::ValidationError, msg)
    }

    /// Create a network error
    pub fn network(cause: impl Into<Cause>) -> Self {
        Self::from_kind(ErrorKind::NetworkError).with_cause(cause)
    }

    /// Create an unknown error wrapping a local failure
    pub fn unknown(msg: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::new(ErrorKind::Unknown, msg).with_cause(cause)
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Replace the user-facing message, keeping kind, status, code and cause.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// True when the deployed API has no route for the requested endpoint.
    pub fn is_missing_endpoint(&self) -> bool {
        self.kind == ErrorKind::NotFound && self.code == Some(ErrorCode::EndpointNotFound)
    }
}

impl From<serde_json::Error> for ClassifiedError {
    fn from(err: serde_json::Error) -> Self {
        Self::unknown(format!("Failed to process JSON: {}", err), err)
    }
}

impl From<std::io::Error> for ClassifiedError {
    fn from(err: std::io::Error) -> Self {
        Self::unknown(format!("IO error: {}", err), err)
    }
}
