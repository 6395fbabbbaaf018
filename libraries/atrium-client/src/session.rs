//! Auth context: the process-wide admin session.

use crate::store::KeyValueStore;
use atrium_core::{ClassifiedError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "authToken";

/// Storage key holding the JSON-encoded session object.
pub const SESSION_KEY: &str = "adminSession";

/// Authentication state of the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Option<String>,
    pub admin_id: Option<i64>,
}

impl Session {
    pub fn new(token: impl Into<String>, admin_id: Option<i64>) -> Self {
        Self {
            token: Some(token.into()),
            admin_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.admin_id.is_none()
    }
}

/// Owns the current [`Session`] and its persisted copy.
///
/// Requests only read snapshots. The session is replaced by `establish`,
/// and torn down by `logout` or by `invalidate` when the API answers 401.
/// Writers take `persisting` first, so the store and the in-memory session
/// change in the same order; readers never wait on store I/O.
pub struct SessionContext {
    state: RwLock<Session>,
    persisting: Mutex<()>,
    store: Arc<dyn KeyValueStore>,
}

impl SessionContext {
    /// Create an empty context backed by `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: RwLock::new(Session::default()),
            persisting: Mutex::new(()),
            store,
        }
    }

    /// Reload the session persisted in `store`.
    ///
    /// A malformed session object is ignored and only the token is kept.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let token = store.get(TOKEN_KEY)?;
        let admin_id = match store.get(SESSION_KEY)? {
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(saved) => saved.admin_id,
                Err(e) => {
                    warn!(error = %e, "Ignoring malformed persisted session");
                    None
                }
            },
            None => None,
        };

        let session = Session { token, admin_id };
        debug!(
            authenticated = session.token.is_some(),
            admin_id = ?session.admin_id,
            "Session restored"
        );

        Ok(Self {
            state: RwLock::new(session),
            persisting: Mutex::new(()),
            store,
        })
    }

    /// Copy of the current session.
    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.token.is_some()
    }

    pub async fn admin_id(&self) -> Option<i64> {
        self.state.read().await.admin_id
    }

    /// Replace the session (login) and persist it.
    ///
    /// The in-memory session changes only once the store accepted it.
    pub async fn establish(&self, session: Session) -> Result<()> {
        let _persisting = self.persisting.lock().await;
        let saved = session.clone();
        let encoded = serde_json::to_string(&session)?;
        self.persist(move |store| {
            match &saved.token {
                Some(token) => store.set(TOKEN_KEY, token)?,
                None => store.remove(TOKEN_KEY)?,
            }
            store.set(SESSION_KEY, &encoded)
        })
        .await?;

        info!(admin_id = ?session.admin_id, "Session established");
        *self.state.write().await = session;
        Ok(())
    }

    /// Explicit logout.
    pub async fn logout(&self) -> Result<()> {
        let _persisting = self.persisting.lock().await;
        *self.state.write().await = Session::default();
        self.persist(|store| {
            store.remove(TOKEN_KEY)?;
            store.remove(SESSION_KEY)
        })
        .await?;
        info!("Logged out");
        Ok(())
    }

    /// Tear the session down after an authentication failure.
    ///
    /// Returns `true` only for the call that actually cleared a session;
    /// concurrent callers racing on the same 401 get `false`.
    pub async fn invalidate(&self) -> bool {
        let _persisting = self.persisting.lock().await;
        {
            let mut state = self.state.write().await;
            if state.is_empty() {
                return false;
            }
            *state = Session::default();
        }

        let cleared = self
            .persist(|store| {
                for key in [TOKEN_KEY, SESSION_KEY] {
                    if let Err(e) = store.remove(key) {
                        warn!(key = key, error = %e, "Failed to clear persisted session key");
                    }
                }
                Ok(())
            })
            .await;
        if let Err(e) = cleared {
            warn!(error = %e, "Failed to clear persisted session");
        }
        warn!("Session invalidated after authentication failure");
        true
    }

    /// Run store I/O on the blocking pool; the state lock is never held here.
    async fn persist<F>(&self, write: F) -> Result<()>
    where
        F: FnOnce(&dyn KeyValueStore) -> Result<()> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || write(&*store))
            .await
            .map_err(|e| ClassifiedError::unknown("Session storage task failed", e))?
    }
}
