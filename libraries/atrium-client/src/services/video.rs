//! Video endpoints.

use super::Crud;
use atrium_core::{Result, Video, VideoId};
use serde::Serialize;

/// Optional filters for [`VideoService::list_all`].
#[derive(Debug, Clone, Default)]
pub struct VideoFilter {
    pub category: Option<String>,
    pub published_only: bool,
}

impl VideoFilter {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(category) = self.category.as_deref().map(str::trim) {
            if !category.is_empty() {
                query.push(("category".to_string(), category.to_string()));
            }
        }
        if self.published_only {
            query.push(("isPublished".to_string(), "true".to_string()));
        }
        query
    }
}

#[derive(Clone)]
pub struct VideoService {
    crud: Crud<Video>,
}

impl VideoService {
    pub(crate) fn new(client: crate::ApiClient) -> Self {
        Self {
            crud: Crud::new(client),
        }
    }

    pub async fn list_all(&self, filter: &VideoFilter) -> Result<Vec<Video>> {
        self.crud.list(filter.to_query()).await
    }

    pub async fn get_by_id(&self, id: VideoId) -> Result<Video> {
        self.crud.get(id).await
    }

    pub async fn create<D: Serialize + ?Sized>(&self, data: &D) -> Result<Video> {
        self.crud.create(data).await
    }

    pub async fn update<D: Serialize + ?Sized>(&self, id: VideoId, data: &D) -> Result<Video> {
        self.crud.update(id, data).await
    }

    pub async fn remove(&self, id: VideoId) -> Result<()> {
        self.crud.remove(id).await
    }
}
