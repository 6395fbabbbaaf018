//! Album types

use crate::error::Result;
use crate::resource::Resource;
use crate::shape::{Fields, Shape};
use crate::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// An event album
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub description: String,
    pub cover_image_url: String,
    pub event_date: Option<NaiveDate>,
    pub location: String,
    pub is_public: bool,
    pub view_count: i64,
    pub photo_count: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: i64,
}

impl Album {
    /// Create an unsaved album with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Shape for Album {
    fn shape(raw: &serde_json::Value) -> Self {
        let f = Fields::new(raw);
        Self {
            id: f.id("id"),
            title: f.text("title"),
            description: f.text("description"),
            cover_image_url: f.text("coverImageUrl"),
            event_date: f.date("eventDate"),
            location: f.text("location"),
            is_public: f.flag("isPublic"),
            view_count: f.int("viewCount").max(0),
            photo_count: f.int("photoCount").max(0),
            created_at: f.timestamp("createdAt"),
            updated_at: f.timestamp("updatedAt"),
            updated_by: f.id("updatedBy"),
        }
    }
}

impl Resource for Album {
    const NAME: &'static str = "album";
    const ENDPOINT: &'static str = "/Albums";

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
        validation::require_text(&self.title, "Album title")?;
        validation::optional_url(&self.cover_image_url, "Cover image URL")
    }
}
