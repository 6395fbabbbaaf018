//! Login and logout against the admin API.

use crate::client::{ApiClient, RequestEnvelope};
use crate::session::Session;
use atrium_core::validation::require_text;
use atrium_core::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from a successful login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub admin_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Authentication client for the admin API.
pub struct AuthClient<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Login with email and password.
    ///
    /// On success the session is replaced and persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let email = email.trim();
        require_text(email, "Email")?;
        require_text(password, "Password")?;
        debug!(email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .client
            .send_json(RequestEnvelope::post("/Auth/login").json(serde_json::to_value(&request)?))
            .await?;

        self.client
            .session()
            .establish(Session::new(response.token.clone(), Some(response.admin_id)))
            .await?;

        info!(admin_id = response.admin_id, "Login successful");
        Ok(response)
    }

    /// Clear the stored session (logout).
    pub async fn logout(&self) -> Result<()> {
        self.client.session().logout().await
    }
}

impl ApiClient {
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self)
    }
}
