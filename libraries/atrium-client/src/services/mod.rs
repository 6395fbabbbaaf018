//! Per-resource service modules.
//!
//! Every service shapes its input through [`Shape`], validates it, stamps
//! the audit fields, and then makes exactly one call through the pipeline.
//! Validation failures return before any network traffic.

mod album;
mod attendance;
mod photo;
mod video;

pub use album::{AlbumService, MISSING_ALBUM_ENDPOINT};
pub use attendance::{AttendanceService, REMOVE_UNSUPPORTED, UPDATE_UNSUPPORTED};
pub use photo::{PhotoFilter, PhotoService};
pub use video::{VideoFilter, VideoService};

use crate::client::{ApiClient, RequestEnvelope};
use atrium_core::validation::require_id;
use atrium_core::{Resource, Result};
use chrono::Utc;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::debug;

impl ApiClient {
    pub fn albums(&self) -> AlbumService {
        AlbumService::new(self.clone())
    }

    pub fn photos(&self) -> PhotoService {
        PhotoService::new(self.clone())
    }

    pub fn videos(&self) -> VideoService {
        VideoService::new(self.clone())
    }

    pub fn attendance(&self) -> AttendanceService {
        AttendanceService::new(self.clone())
    }
}

/// Shared CRUD plumbing over one resource collection.
#[derive(Clone)]
pub(crate) struct Crud<R> {
    client: ApiClient,
    _record: PhantomData<fn() -> R>,
}

impl<R: Resource> Crud<R> {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    pub(crate) fn client(&self) -> &ApiClient {
        &self.client
    }

    pub(crate) fn item_path(id: i64) -> String {
        format!("{}/{}", R::ENDPOINT, id)
    }

    pub(crate) async fn list(&self, query: Vec<(String, String)>) -> Result<Vec<R>> {
        let mut request = RequestEnvelope::get(R::ENDPOINT);
        request.query = query;
        let items: Vec<R> = self.client.send_json(request).await?;
        debug!(resource = R::NAME, count = items.len(), "Fetched collection");
        Ok(items)
    }

    pub(crate) async fn list_at(&self, path: String) -> Result<Vec<R>> {
        self.client.send_json(RequestEnvelope::get(path)).await
    }

    pub(crate) async fn get(&self, id: i64) -> Result<R> {
        require_id(id, R::NAME)?;
        self.client
            .send_json(RequestEnvelope::get(Self::item_path(id)))
            .await
    }

    pub(crate) async fn create<D: Serialize + ?Sized>(&self, data: &D) -> Result<R> {
        let mut record = self.prepare(data).await?;
        record.set_id(0);
        record.validate()?;

        let body = serde_json::to_value(&record)?;
        let created: R = self
            .client
            .send_json(RequestEnvelope::post(R::ENDPOINT).json(body))
            .await?;
        debug!(resource = R::NAME, id = created.id(), "Created");
        Ok(created)
    }

    pub(crate) async fn update<D: Serialize + ?Sized>(&self, id: i64, data: &D) -> Result<R> {
        require_id(id, R::NAME)?;
        let mut record = self.prepare(data).await?;
        record.set_id(id);
        record.validate()?;

        let body = serde_json::to_value(&record)?;
        let updated: Option<R> = self
            .client
            .send_optional_json(RequestEnvelope::put(Self::item_path(id)).json(body))
            .await?;
        debug!(resource = R::NAME, id = id, echoed = updated.is_some(), "Updated");
        Ok(updated.unwrap_or(record))
    }

    pub(crate) async fn remove(&self, id: i64) -> Result<()> {
        require_id(id, R::NAME)?;
        self.client
            .send_unit(RequestEnvelope::delete(Self::item_path(id)))
            .await?;
        debug!(resource = R::NAME, id = id, "Deleted");
        Ok(())
    }

    /// Shape the caller's data and stamp the audit fields.
    async fn prepare<D: Serialize + ?Sized>(&self, data: &D) -> Result<R> {
        let raw = serde_json::to_value(data)?;
        let mut record = R::shape(&raw);
        let admin_id = self.client.session().admin_id().await.unwrap_or(0);
        record.stamp(Utc::now(), admin_id);
        Ok(record)
    }
}
