//! Photo types

use super::AlbumId;
use crate::error::Result;
use crate::resource::Resource;
use crate::shape::{Fields, Shape};
use crate::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type PhotoId = i64;

/// A photo belonging to an album
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Photo {
    pub id: PhotoId,
    pub album_id: AlbumId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub thumbnail_url: String,
    pub photographer: String,
    pub taken_at: Option<NaiveDate>,
    pub sort_order: i64,
    pub is_featured: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: i64,
}

impl Shape for Photo {
    fn shape(raw: &serde_json::Value) -> Self {
        let f = Fields::new(raw);
        Self {
            id: f.id("id"),
            album_id: f.id("albumId"),
            title: f.text("title"),
            description: f.text("description"),
            image_url: f.text("imageUrl"),
            thumbnail_url: f.text("thumbnailUrl"),
            photographer: f.text("photographer"),
            taken_at: f.date("takenAt"),
            sort_order: f.int("sortOrder"),
            is_featured: f.flag("isFeatured"),
            created_at: f.timestamp("createdAt"),
            updated_at: f.timestamp("updatedAt"),
            updated_by: f.id("updatedBy"),
        }
    }
}

impl Resource for Photo {
    const NAME: &'static str = "photo";
    const ENDPOINT: &'static str = "/Photos";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn stamp(&mut self, at: DateTime<Utc>, admin_id: i64) {
        self.updated_at = Some(at);
        self.updated_by = admin_id;
    }

    fn validate(&self) -> Result<()> {
        validation::require_id(self.album_id, "album")?;
        validation::require_url(&self.image_url, "Image URL")?;
        validation::optional_url(&self.thumbnail_url, "Thumbnail URL")
    }
}
