//! The `Resource` trait tying a record type to its REST collection.

use crate::error::Result;
use crate::shape::Shape;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A server-owned record type with CRUD endpoints.
pub trait Resource: Shape + Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular display name, e.g. `"album"`
    const NAME: &'static str;

    /// Collection path relative to the API root, e.g. `"/Albums"`
    const ENDPOINT: &'static str;

    /// Server-assigned identifier (0 before creation)
    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Overwrite the audit fields with the modification time and the acting admin.
    fn stamp(&mut self, at: DateTime<Utc>, admin_id: i64);

    /// Structural checks that must pass before the record is transmitted.
    fn validate(&self) -> Result<()>;
}
