//! Event attendance endpoints.
//!
//! The API only supports listing and creating attendance records.

use super::Crud;
use atrium_core::validation::require_id;
use atrium_core::{Attendance, AttendanceId, ClassifiedError, EventId, Resource, Result};
use serde::Serialize;

pub const UPDATE_UNSUPPORTED: &str =
    "Attendance records cannot be edited; record a new entry instead.";

pub const REMOVE_UNSUPPORTED: &str = "Attendance records cannot be deleted.";

#[derive(Clone)]
pub struct AttendanceService {
    crud: Crud<Attendance>,
}

impl AttendanceService {
    pub(crate) fn new(client: crate::ApiClient) -> Self {
        Self {
            crud: Crud::new(client),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Attendance>> {
        self.crud.list(Vec::new()).await
    }

    /// Attendance for one event (`GET /EventAttendance/event/{eventId}`).
    pub async fn list_by_event(&self, event_id: EventId) -> Result<Vec<Attendance>> {
        require_id(event_id, "event")?;
        self.crud
            .list_at(format!("{}/event/{}", Attendance::ENDPOINT, event_id))
            .await
    }

    pub async fn create<D: Serialize + ?Sized>(&self, data: &D) -> Result<Attendance> {
        self.crud.create(data).await
    }

    /// Always fails without a network call; the API has no update endpoint.
    pub async fn update<D: Serialize + ?Sized>(
        &self,
        _id: AttendanceId,
        _data: &D,
    ) -> Result<Attendance> {
        Err(ClassifiedError::validation(UPDATE_UNSUPPORTED))
    }

    /// Always fails without a network call; the API has no delete endpoint.
    pub async fn remove(&self, _id: AttendanceId) -> Result<()> {
        Err(ClassifiedError::validation(REMOVE_UNSUPPORTED))
    }
}
