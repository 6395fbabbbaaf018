use crate::source::CollectionSource;
use atrium_core::{Resource, Result};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Lifecycle of a mirrored collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncState {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Point-in-time view of a collection for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot<R> {
    pub items: Vec<R>,
    pub state: SyncState,
    pub loading: bool,
    pub error: Option<String>,
}

struct Cache<R> {
    items: Vec<R>,
    state: SyncState,
    error: Option<String>,
    in_flight: usize,
}

/// In-memory mirror of one server-side collection.
///
/// `refresh` replaces the whole cache. Mutations call the source once and
/// then patch the cache by identifier without refetching. A failed call
/// leaves the cache untouched, records the error message and hands the
/// error back to the caller.
///
/// Operations are not serialized: concurrent mutations each patch the cache
/// when their response arrives, so the last response applied wins. The cache
/// lock is never held across a network call.
pub struct CollectionSync<S: CollectionSource> {
    source: S,
    cache: Mutex<Cache<S::Record>>,
}

impl<S: CollectionSource> CollectionSync<S> {
    /// Create an empty, idle collection.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(Cache {
                items: Vec::new(),
                state: SyncState::Idle,
                error: None,
                in_flight: 0,
            }),
        }
    }

    /// Create the collection and run the initial fetch.
    ///
    /// A failed fetch is recorded in [`error`](Self::error) rather than
    /// returned; the caller can [`refresh`](Self::refresh) to retry.
    pub async fn activate(source: S) -> Self {
        let sync = Self::new(source);
        // Failure is already recorded on the cache
        let _ = sync.refresh().await;
        sync
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn items(&self) -> Vec<S::Record> {
        self.lock().items.clone()
    }

    pub fn get(&self, id: i64) -> Option<S::Record> {
        self.lock().items.iter().find(|r| r.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    pub fn state(&self) -> SyncState {
        self.lock().state
    }

    /// True while any fetch or mutation is outstanding.
    pub fn loading(&self) -> bool {
        self.lock().in_flight > 0
    }

    /// Message of the most recent failure, cleared by the next operation.
    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn snapshot(&self) -> CollectionSnapshot<S::Record> {
        let cache = self.lock();
        CollectionSnapshot {
            items: cache.items.clone(),
            state: cache.state,
            loading: cache.in_flight > 0,
            error: cache.error.clone(),
        }
    }

    /// Fetch the full collection and replace the cache with it.
    ///
    /// On failure the previous items are kept.
    pub async fn refresh(&self) -> Result<()> {
        let _busy = self.begin();
        self.lock().state = SyncState::Loading;

        match self.source.fetch_all().await {
            Ok(items) => {
                debug!(resource = S::Record::NAME, count = items.len(), "Collection synced");
                let mut cache = self.lock();
                cache.items = items;
                cache.state = SyncState::Ready;
                Ok(())
            }
            Err(err) => {
                warn!(resource = S::Record::NAME, error = %err, "Collection sync failed");
                let mut cache = self.lock();
                cache.state = SyncState::Error;
                cache.error = Some(err.message.clone());
                Err(err)
            }
        }
    }

    /// Create a record and append the server's copy.
    ///
    /// A refresh that completed meanwhile may already hold the record; its
    /// entry is replaced in place instead.
    pub async fn create<D: Serialize + ?Sized>(&self, data: &D) -> Result<S::Record> {
        let _busy = self.begin();
        let outcome = match serde_json::to_value(data) {
            Ok(data) => self.source.create(&data).await,
            Err(err) => Err(err.into()),
        };

        let created = self.settle(outcome)?;
        let mut cache = self.lock();
        match cache.items.iter().position(|r| r.id() == created.id()) {
            Some(index) => cache.items[index] = created.clone(),
            None => cache.items.push(created.clone()),
        }
        debug!(resource = S::Record::NAME, id = created.id(), "Appended to collection");
        Ok(created)
    }

    /// Update a record and replace the cached entry with the same identifier.
    ///
    /// An identifier missing from the cache is not inserted.
    pub async fn update<D: Serialize + ?Sized>(&self, id: i64, data: &D) -> Result<S::Record> {
        let _busy = self.begin();
        let outcome = match serde_json::to_value(data) {
            Ok(data) => self.source.update(id, &data).await,
            Err(err) => Err(err.into()),
        };

        let updated = self.settle(outcome)?;
        let mut cache = self.lock();
        if let Some(slot) = cache.items.iter_mut().find(|r| r.id() == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Delete a record and drop it from the cache.
    pub async fn remove(&self, id: i64) -> Result<()> {
        let _busy = self.begin();
        let outcome = self.source.remove(id).await;

        self.settle(outcome)?;
        self.lock().items.retain(|r| r.id() != id);
        debug!(resource = S::Record::NAME, id = id, "Removed from collection");
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Cache<S::Record>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> Busy<'_, S::Record> {
        let mut cache = self.lock();
        cache.in_flight += 1;
        cache.error = None;
        Busy { cache: &self.cache }
    }

    /// Record a mutation failure and pass the outcome through.
    fn settle<T>(&self, outcome: Result<T>) -> Result<T> {
        if let Err(err) = &outcome {
            warn!(resource = S::Record::NAME, error = %err, "Collection mutation failed");
            self.lock().error = Some(err.message.clone());
        }
        outcome
    }
}

/// Marks one fetch or mutation as outstanding until dropped.
struct Busy<'a, R> {
    cache: &'a Mutex<Cache<R>>,
}

impl<R> Drop for Busy<'_, R> {
    fn drop(&mut self) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.in_flight = cache.in_flight.saturating_sub(1);
    }
}
