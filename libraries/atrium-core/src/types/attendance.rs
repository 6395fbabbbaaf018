//! Event attendance types

use crate::error::Result;
use crate::resource::Resource;
use crate::shape::{Fields, Shape};
use crate::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type AttendanceId = i64;
pub type EventId = i64;
pub type MemberId = i64;

/// One attendance entry for an event, either a member or a named guest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attendance {
    pub id: AttendanceId,
    pub event_id: EventId,
    pub member_id: MemberId,
    pub is_guest: bool,
    pub guest_name: String,
    pub attended: bool,
    pub check_in_time: Option<DateTime<Utc>>,
    pub notes: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: i64,
}

impl Shape for Attendance {
    fn shape(raw: &serde_json::Value) -> Self {
        let f = Fields::new(raw);
        Self {
            id: f.id("id"),
            event_id: f.id("eventId"),
            member_id: f.id("memberId"),
            is_guest: f.flag("isGuest"),
            guest_name: f.text("guestName"),
            attended: f.flag("attended"),
            check_in_time: f.timestamp("checkInTime"),
            notes: f.text("notes"),
            updated_at: f.timestamp("updatedAt"),
            updated_by: f.id("updatedBy"),
        }
    }
}

impl Resource for Attendance {
    const NAME: &'static str = "attendance record";
    const ENDPOINT: &'static str = "/EventAttendance";

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
        validation::require_id(self.event_id, "event")?;
        if self.is_guest {
            validation::require_text(&self.guest_name, "Guest name")
        } else {
            validation::require_id(self.member_id, "member")
        }
    }
}
