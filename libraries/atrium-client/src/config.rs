//! Connection settings for the admin API.

use atrium_core::{ClassifiedError, Result};
use std::time::Duration;

/// Header carrying the acting administrator's identifier.
pub const DEFAULT_ADMIN_HEADER: &str = "X-Admin-Id";

/// Route the client navigates to after the session is torn down.
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Configuration for connecting to the admin API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://api.example.com/api")
    pub base_url: String,
    /// Flat transport timeout applied to every request
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Name of the admin-identity header
    pub admin_header: String,
    /// Entry point the navigator is sent to on a 401
    pub login_route: String,
}

impl ClientConfig {
    /// Create a config with default timeouts and header names.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            admin_header: DEFAULT_ADMIN_HEADER.to_string(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the base URL and return a copy with trailing slashes removed.
    pub fn normalized(&self) -> Result<Self> {
        if self.base_url.is_empty() {
            return Err(ClassifiedError::validation("API URL cannot be empty"));
        }

        let base_url = self.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClassifiedError::validation(
                "API URL must start with http:// or https://",
            ));
        }
        url::Url::parse(&base_url).map_err(|e| {
            ClassifiedError::validation(format!("API URL is invalid: {}", e)).with_cause(e)
        })?;

        if self.timeout.is_zero() {
            return Err(ClassifiedError::validation("Request timeout must be positive"));
        }

        Ok(Self {
            base_url,
            ..self.clone()
        })
    }
}
