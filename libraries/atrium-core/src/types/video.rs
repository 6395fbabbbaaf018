//! Video types

use crate::error::Result;
use crate::resource::Resource;
use crate::shape::{Fields, Shape};
use crate::validation;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type VideoId = i64;

/// A hosted video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub category: String,
    pub duration_seconds: i64,
    pub published_on: Option<NaiveDate>,
    pub is_published: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: i64,
}

impl Shape for Video {
    fn shape(raw: &serde_json::Value) -> Self {
        let f = Fields::new(raw);
        Self {
            id: f.id("id"),
            title: f.text("title"),
            description: f.text("description"),
            video_url: f.text("videoUrl"),
            thumbnail_url: f.text("thumbnailUrl"),
            category: f.text("category"),
            duration_seconds: f.int("durationSeconds").max(0),
            published_on: f.date("publishedOn"),
            is_published: f.flag("isPublished"),
            created_at: f.timestamp("createdAt"),
            updated_at: f.timestamp("updatedAt"),
            updated_by: f.id("updatedBy"),
        }
    }
}

impl Resource for Video {
    const NAME: &'static str = "video";
    const ENDPOINT: &'static str = "/Videos";

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
        validation::require_text(&self.title, "Video title")?;
        validation::require_url(&self.video_url, "Video URL")?;
        validation::optional_url(&self.thumbnail_url, "Thumbnail URL")
    }
}
