mod album;
mod attendance;
mod photo;
mod video;

pub use album::{Album, AlbumId};
pub use attendance::{Attendance, AttendanceId, EventId, MemberId};
pub use photo::{Photo, PhotoId};
pub use video::{Video, VideoId};
