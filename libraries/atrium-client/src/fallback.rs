//! Degraded-mode album choices for forms that need an album picker.
//!
//! Some deployments ship without the album routes. When the listing comes
//! back as a route-level 404 the forms get three placeholder albums instead
//! of an error. Every other failure, including a 404 for a specific record,
//! is returned unchanged.

use crate::services::AlbumService;
use atrium_core::{Album, AlbumId, Result};
use tracing::warn;

/// Album preselected in forms when it exists.
pub const DEFAULT_ALBUM_ID: AlbumId = 1;

/// Warning surfaced alongside placeholder albums.
pub const DEGRADED_WARNING: &str =
    "Album service is unavailable on this server; showing placeholder albums.";

/// What the form is about to do with the chosen album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIntent {
    Create,
    Edit,
}

/// Albums offered to a form, plus the preselected one.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbumChoices {
    pub albums: Vec<Album>,
    pub default_album: Option<AlbumId>,
    /// Non-blocking warning; set only in degraded mode
    pub warning: Option<String>,
}

impl AlbumChoices {
    pub fn is_degraded(&self) -> bool {
        self.warning.is_some()
    }
}

/// The fixed placeholder set used in degraded mode.
pub fn placeholder_albums() -> Vec<Album> {
    [
        (1, "General Events", "Photos from general community events"),
        (2, "Workshops", "Photos from workshops and training sessions"),
        (3, "Celebrations", "Photos from celebrations and ceremonies"),
    ]
    .into_iter()
    .map(|(id, title, description)| Album {
        id,
        title: title.to_string(),
        description: description.to_string(),
        ..Album::default()
    })
    .collect()
}

/// Pick the album a form should preselect.
///
/// [`DEFAULT_ALBUM_ID`] wins when present. When creating, a missing default
/// falls back to the first available album so the request never references
/// an album that does not exist.
pub fn preferred_default(albums: &[Album], intent: FormIntent) -> Option<AlbumId> {
    if albums.iter().any(|a| a.id == DEFAULT_ALBUM_ID) {
        return Some(DEFAULT_ALBUM_ID);
    }
    match intent {
        FormIntent::Create => albums.first().map(|a| a.id),
        FormIntent::Edit => None,
    }
}

/// List albums, substituting placeholders when the album route is missing.
pub async fn resolve_album_choices(
    service: &AlbumService,
    intent: FormIntent,
) -> Result<AlbumChoices> {
    match service.list_all().await {
        Ok(albums) => {
            let default_album = preferred_default(&albums, intent);
            Ok(AlbumChoices {
                albums,
                default_album,
                warning: None,
            })
        }
        Err(err) if err.is_missing_endpoint() => {
            warn!(error = %err, "Album endpoint missing, using placeholder albums");
            let albums = placeholder_albums();
            let default_album = preferred_default(&albums, intent);
            Ok(AlbumChoices {
                albums,
                default_album,
                warning: Some(DEGRADED_WARNING.to_string()),
            })
        }
        Err(err) => Err(err),
    }
}
