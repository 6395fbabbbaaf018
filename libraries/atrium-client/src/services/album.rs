//! Album endpoints.

use super::Crud;
use crate::client::RequestEnvelope;
use atrium_core::validation::{require_id, require_text, require_url};
use atrium_core::{Album, AlbumId, ClassifiedError, Photo, Result};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// Message carried by the listing error when the deployed API has no album route.
pub const MISSING_ALBUM_ENDPOINT: &str = "No album endpoint found";

/// Album service for the admin API.
#[derive(Clone)]
pub struct AlbumService {
    crud: Crud<Album>,
}

impl AlbumService {
    pub(crate) fn new(client: crate::ApiClient) -> Self {
        Self {
            crud: Crud::new(client),
        }
    }

    /// List every album (`GET /Albums`).
    pub async fn list_all(&self) -> Result<Vec<Album>> {
        self.crud.list(Vec::new()).await.map_err(name_missing_endpoint)
    }

    pub async fn get_by_id(&self, id: AlbumId) -> Result<Album> {
        self.crud.get(id).await
    }

    pub async fn create<D: Serialize + ?Sized>(&self, data: &D) -> Result<Album> {
        self.crud.create(data).await
    }

    pub async fn update<D: Serialize + ?Sized>(&self, id: AlbumId, data: &D) -> Result<Album> {
        self.crud.update(id, data).await
    }

    pub async fn remove(&self, id: AlbumId) -> Result<()> {
        self.crud.remove(id).await
    }

    /// Photos that belong to an album (`GET /Albums/{id}/photos`).
    pub async fn photos(&self, id: AlbumId) -> Result<Vec<Photo>> {
        require_id(id, "album")?;
        self.crud
            .client()
            .send_json(RequestEnvelope::get(format!("/Albums/{}/photos", id)))
            .await
    }

    /// Flip the album's public flag; returns the album as stored.
    pub async fn toggle_visibility(&self, id: AlbumId) -> Result<Album> {
        require_id(id, "album")?;
        let album: Album = self
            .crud
            .client()
            .send_json(RequestEnvelope::patch(format!(
                "/Albums/{}/toggle-visibility",
                id
            )))
            .await?;
        debug!(id = id, is_public = album.is_public, "Album visibility toggled");
        Ok(album)
    }

    pub async fn set_cover_image(&self, id: AlbumId, image_url: &str) -> Result<Album> {
        require_id(id, "album")?;
        let image_url = image_url.trim();
        require_url(image_url, "Cover image URL")?;
        self.crud
            .client()
            .send_json(
                RequestEnvelope::patch(format!("/Albums/{}/cover-image", id))
                    .json(json!({ "coverImageUrl": image_url })),
            )
            .await
    }

    /// Count one view of a public album.
    pub async fn record_view(&self, id: AlbumId) -> Result<()> {
        require_id(id, "album")?;
        self.crud
            .client()
            .send_unit(RequestEnvelope::post(format!("/Albums/{}/view", id)))
            .await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Album>> {
        let query = query.trim();
        require_text(query, "Search text")?;
        self.crud
            .client()
            .send_json(RequestEnvelope::get("/Albums/search").query("q", query))
            .await
    }

    /// Albums visible to the public site.
    pub async fn list_public(&self) -> Result<Vec<Album>> {
        self.crud
            .client()
            .send_json(RequestEnvelope::get("/Albums/public"))
            .await
    }
}

fn name_missing_endpoint(err: ClassifiedError) -> ClassifiedError {
    if err.is_missing_endpoint() {
        err.with_message(MISSING_ALBUM_ENDPOINT)
    } else {
        err
    }
}
