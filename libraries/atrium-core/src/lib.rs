//! Atrium Core
//!
//! Platform-agnostic record types, request shaping and the error taxonomy
//! shared by every Atrium admin crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Records**: `Album`, `Photo`, `Video`, `Attendance`
//! - **Shaping**: the `Shape` trait turning untyped form data into records
//! - **Error Handling**: `ClassifiedError`, `ErrorKind` and the `Result` alias
//!
//! # Example
//!
//! ```rust
//! use atrium_core::{Photo, Resource, Shape};
//! use serde_json::json;
//!
//! let photo = Photo::shape(&json!({
//!     "albumId": "4",
//!     "title": "  Opening night  ",
//!     "imageUrl": "https://cdn.example.com/p/1.jpg",
//!     "isFeatured": "on"
//! }));
//!
//! assert_eq!(photo.album_id, 4);
//! assert_eq!(photo.title, "Opening night");
//! assert!(photo.is_featured);
//! assert!(photo.validate().is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod resource;
pub mod shape;
pub mod types;
pub mod validation;

pub use error::{ClassifiedError, ErrorCode, ErrorKind, Result};
pub use resource::Resource;
pub use shape::{Fields, Shape};
pub use types::{
    Album, AlbumId, Attendance, AttendanceId, EventId, MemberId, Photo, PhotoId, Video, VideoId,
};
