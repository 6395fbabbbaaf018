//! Photo endpoints.

use super::Crud;
use atrium_core::validation::require_id;
use atrium_core::{AlbumId, Photo, PhotoId, Resource, Result};
use serde::Serialize;

/// Optional filters for [`PhotoService::list_all`].
#[derive(Debug, Clone, Default)]
pub struct PhotoFilter {
    pub album_id: Option<AlbumId>,
    pub featured_only: bool,
}

impl PhotoFilter {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(album_id) = self.album_id {
            query.push(("albumId".to_string(), album_id.to_string()));
        }
        if self.featured_only {
            query.push(("isFeatured".to_string(), "true".to_string()));
        }
        query
    }
}

#[derive(Clone)]
pub struct PhotoService {
    crud: Crud<Photo>,
}

impl PhotoService {
    pub(crate) fn new(client: crate::ApiClient) -> Self {
        Self {
            crud: Crud::new(client),
        }
    }

    pub async fn list_all(&self, filter: &PhotoFilter) -> Result<Vec<Photo>> {
        self.crud.list(filter.to_query()).await
    }

    /// Photos of one album (`GET /Photos/album/{albumId}`).
    pub async fn list_by_album(&self, album_id: AlbumId) -> Result<Vec<Photo>> {
        require_id(album_id, "album")?;
        self.crud
            .list_at(format!("{}/album/{}", Photo::ENDPOINT, album_id))
            .await
    }

    pub async fn get_by_id(&self, id: PhotoId) -> Result<Photo> {
        self.crud.get(id).await
    }

    pub async fn create<D: Serialize + ?Sized>(&self, data: &D) -> Result<Photo> {
        self.crud.create(data).await
    }

    pub async fn update<D: Serialize + ?Sized>(&self, id: PhotoId, data: &D) -> Result<Photo> {
        self.crud.update(id, data).await
    }

    pub async fn remove(&self, id: PhotoId) -> Result<()> {
        self.crud.remove(id).await
    }
}
