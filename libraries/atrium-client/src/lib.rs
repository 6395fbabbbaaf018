//! Atrium API Client
//!
//! HTTP client library for the Atrium admin API.
//!
//! # Features
//!
//! - **Pipeline**: one request/response chain that injects the session and
//!   classifies every failure
//! - **Session**: persisted bearer token and admin identifier, torn down on 401
//! - **Services**: albums, photos, videos and event attendance
//! - **Degraded mode**: placeholder album choices when the album route is missing
//!
//! # Example
//!
//! ```ignore
//! use atrium_client::{ApiClient, ClientConfig, FileStore, RouteRecorder, SessionContext};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(FileStore::new("./data/session.json"));
//!     let session = Arc::new(SessionContext::restore(store)?);
//!     let client = ApiClient::new(
//!         ClientConfig::new("https://api.example.com/api"),
//!         session,
//!         Arc::new(RouteRecorder::default()),
//!     )?;
//!
//!     client.auth().login("admin@example.com", "secret").await?;
//!
//!     let photos = client.photos().list_by_album(3).await?;
//!     println!("Album 3 has {} photos", photos.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod classify;
mod client;
mod config;
mod fallback;
mod navigator;
mod services;
mod session;
mod store;

pub use auth::{AuthClient, LoginRequest, LoginResponse};
pub use classify::{classify_status, classify_transport, kind_for_status, HttpFailure};
pub use client::{ApiClient, RequestEnvelope};
pub use config::{ClientConfig, DEFAULT_ADMIN_HEADER, DEFAULT_LOGIN_ROUTE};
pub use fallback::{
    placeholder_albums, preferred_default, resolve_album_choices, AlbumChoices, FormIntent,
    DEFAULT_ALBUM_ID, DEGRADED_WARNING,
};
pub use navigator::{Navigator, RouteRecorder};
pub use services::{
    AlbumService, AttendanceService, PhotoFilter, PhotoService, VideoFilter, VideoService,
    MISSING_ALBUM_ENDPOINT, REMOVE_UNSUPPORTED, UPDATE_UNSUPPORTED,
};
pub use session::{Session, SessionContext, SESSION_KEY, TOKEN_KEY};
pub use store::{FileStore, KeyValueStore, MemoryStore};

// Re-export the shared types so callers need a single dependency
pub use atrium_core::{ClassifiedError, ErrorCode, ErrorKind, Result};
