//! HTTP client pipeline shared by every resource service.

use crate::classify::{classify_decode, classify_status, classify_transport};
use crate::config::ClientConfig;
use crate::navigator::Navigator;
use crate::session::SessionContext;
use atrium_core::{ClassifiedError, ErrorKind, Result};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// One outgoing request, built by a service and consumed by the pipeline.
#[derive(Debug, Clone)]
pub struct RequestEnvelope {
    pub method: Method,
    /// Path relative to the API root, starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl RequestEnvelope {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

/// The request/response interceptor chain around the HTTP transport.
///
/// Request stage: attaches the bearer token and admin header from the
/// current session snapshot. Response stage: classifies every failure once,
/// and on a 401 clears the session and sends the navigator to the login
/// route. No retries happen here.
///
/// # Example
///
/// ```ignore
/// use atrium_client::{ApiClient, ClientConfig, MemoryStore, RouteRecorder, SessionContext};
/// use std::sync::Arc;
///
/// let session = Arc::new(SessionContext::new(Arc::new(MemoryStore::new())));
/// let client = ApiClient::new(
///     ClientConfig::new("https://api.example.com/api"),
///     session,
///     Arc::new(RouteRecorder::default()),
/// )?;
///
/// let albums = client.albums().list_all().await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: Client,
    config: ClientConfig,
    session: Arc<SessionContext>,
    navigator: Arc<dyn Navigator>,
    redirect_lock: Mutex<()>,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(
        config: ClientConfig,
        session: Arc<SessionContext>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let config = config.normalized()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("AtriumAdmin/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClassifiedError::unknown("Failed to build HTTP client", e))?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                config,
                session,
                navigator,
                redirect_lock: Mutex::new(()),
            }),
        })
    }

    /// Get the normalized API base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.inner.session
    }

    /// Send a request and decode the JSON response body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestEnvelope) -> Result<T> {
        let (status, body) = self.dispatch(request).await?;
        serde_json::from_str(&body).map_err(|e| classify_decode(status, e))
    }

    /// Send a request whose response body may legitimately be empty
    /// (`204 No Content` on updates).
    pub async fn send_optional_json<T: DeserializeOwned>(
        &self,
        request: RequestEnvelope,
    ) -> Result<Option<T>> {
        let (status, body) = self.dispatch(request).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| classify_decode(status, e))
    }

    /// Send a request and discard the response body.
    pub async fn send_unit(&self, request: RequestEnvelope) -> Result<()> {
        self.dispatch(request).await.map(|_| ())
    }

    async fn dispatch(&self, request: RequestEnvelope) -> Result<(reqwest::StatusCode, String)> {
        let RequestEnvelope {
            method,
            path,
            query,
            headers,
            body,
        } = request;
        let url = format!("{}{}", self.inner.config.base_url, path);

        // Request stage
        let session = self.inner.session.snapshot().await;
        let mut builder = self
            .inner
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .headers(headers);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(token) = &session.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(admin_id) = session.admin_id {
            builder = builder.header(self.inner.config.admin_header.as_str(), admin_id.to_string());
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        // Response stage
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = classify_transport(e);
                warn!(
                    method = %method,
                    path = %path,
                    outcome = %err.kind,
                    status = ?err.http_status,
                    "Request failed"
                );
                return Err(err);
            }
        };

        let status = response.status();
        if status.is_success() {
            let text = response.text().await.map_err(classify_transport)?;
            debug!(
                method = %method,
                path = %path,
                outcome = "ok",
                status = status.as_u16(),
                "Request completed"
            );
            return Ok((status, text));
        }

        let error_text = response.text().await.unwrap_or_default();
        let err = classify_status(status, &error_text);
        warn!(
            method = %method,
            path = %path,
            outcome = %err.kind,
            status = status.as_u16(),
            "Request failed"
        );

        if err.kind == ErrorKind::Unauthorized {
            self.handle_unauthorized().await;
        }

        Err(err)
    }

    async fn handle_unauthorized(&self) {
        if self.inner.session.invalidate().await {
            info!("Session cleared after 401");
        }

        let _guard = self.inner.redirect_lock.lock().await;
        let login = self.inner.config.login_route.as_str();
        if self.inner.navigator.current_route() != login {
            self.inner.navigator.navigate(login);
        }
    }
}
