//! Error classifier: maps HTTP statuses and transport failures into the
//! fixed [`ErrorKind`] taxonomy with a user-facing message.

use atrium_core::{ClassifiedError, ErrorCode, ErrorKind};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Non-success response kept as the cause of a classified error.
#[derive(Error, Debug)]
#[error("HTTP {status}: {body}")]
pub struct HttpFailure {
    pub status: u16,
    pub body: String,
}

/// Error body shapes returned by the API (plain `message` or problem details).
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
    title: Option<String>,
    detail: Option<String>,
    code: Option<String>,
}

impl ApiErrorBody {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    fn message(&self) -> Option<String> {
        [&self.message, &self.detail, &self.title, &self.error]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Map a status code to its kind.
pub fn kind_for_status(status: StatusCode) -> ErrorKind {
    match status {
        StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
        StatusCode::FORBIDDEN => ErrorKind::Forbidden,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        s if s.is_server_error() => ErrorKind::ServerError,
        _ => ErrorKind::Unknown,
    }
}

/// Classify a non-success HTTP response.
///
/// A 404 with an empty body, or with `code: "endpoint_not_found"`, is a
/// route-level miss and carries [`ErrorCode::EndpointNotFound`]. A 404 that
/// explains which record is missing does not.
pub fn classify_status(status: StatusCode, body: &str) -> ClassifiedError {
    let kind = kind_for_status(status);
    let parsed = ApiErrorBody::parse(body);
    let plain_text = body.trim();

    let message = match kind {
        ErrorKind::ServerError => kind.default_message().to_string(),
        ErrorKind::Unauthorized => parsed
            .message()
            .unwrap_or_else(|| kind.default_message().to_string()),
        ErrorKind::Unknown => parsed
            .message()
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
        _ => parsed
            .message()
            .or_else(|| {
                (!plain_text.is_empty() && !plain_text.starts_with('{') && plain_text.len() <= 200)
                    .then(|| plain_text.to_string())
            })
            .unwrap_or_else(|| kind.default_message().to_string()),
    };

    let mut err = ClassifiedError::new(kind, message)
        .with_status(status.as_u16())
        .with_cause(HttpFailure {
            status: status.as_u16(),
            body: body.to_string(),
        });

    let endpoint_missing = plain_text.is_empty()
        || parsed.code.as_deref() == Some(ErrorCode::EndpointNotFound.as_str());
    if kind == ErrorKind::NotFound && endpoint_missing {
        err = err.with_code(ErrorCode::EndpointNotFound);
    }

    err
}

/// Classify a failure raised by the transport before any response arrived.
pub fn classify_transport(err: reqwest::Error) -> ClassifiedError {
    if err.is_builder() {
        return ClassifiedError::unknown(format!("The request could not be built: {}", err), err);
    }

    if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
        return ClassifiedError::network(err);
    }

    if let Some(status) = err.status() {
        return classify_status(status, "").with_cause(err);
    }

    ClassifiedError::unknown(ErrorKind::Unknown.default_message(), err)
}

/// Classify a success response whose body could not be decoded.
pub fn classify_decode(status: StatusCode, err: serde_json::Error) -> ClassifiedError {
    ClassifiedError::unknown(format!("Failed to parse response: {}", err), err)
        .with_status(status.as_u16())
}
