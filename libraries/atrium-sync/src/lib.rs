//! Collection sync for the Atrium admin console
//!
//! Keeps an in-memory, ordered mirror of a server-side collection and patches
//! it after each successful create, update or delete so forms never wait on a
//! full refetch.
//!
//! ```ignore
//! use atrium_sync::{AlbumPhotos, CollectionSync};
//!
//! let photos = CollectionSync::activate(AlbumPhotos::new(client.photos(), 3)).await;
//! photos.create(&serde_json::json!({ "imageUrl": "https://cdn.example.com/a.jpg" })).await?;
//! assert!(photos.items().iter().all(|p| p.album_id == 3));
//! ```

#![forbid(unsafe_code)]

mod hook;
mod source;

pub use hook::{CollectionSnapshot, CollectionSync, SyncState};
pub use source::{AlbumPhotos, CollectionSource};

use atrium_client::{AlbumService, AttendanceService, PhotoService, VideoService};

pub type AlbumCollection = CollectionSync<AlbumService>;
pub type PhotoCollection = CollectionSync<PhotoService>;
pub type AlbumPhotoCollection = CollectionSync<AlbumPhotos>;
pub type VideoCollection = CollectionSync<VideoService>;
pub type AttendanceCollection = CollectionSync<AttendanceService>;
