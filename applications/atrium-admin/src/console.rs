//! Command execution against the admin API.

use crate::cli::{AlbumCommands, AttendanceCommands, Commands, PhotoCommands, VideoCommands};
use crate::config::AdminConfig;
use crate::error::{AdminError, Result};
use atrium_client::{
    resolve_album_choices, ApiClient, FileStore, FormIntent, PhotoFilter, RouteRecorder,
    SessionContext, VideoFilter,
};
use atrium_core::{Album, Attendance, Photo, Video};
use serde_json::{json, Map, Value};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs one command and renders its result as text.
pub struct Console {
    client: ApiClient,
}

impl Console {
    /// Build a console from configuration, restoring the persisted session.
    pub fn connect(config: &AdminConfig) -> Result<Self> {
        let store = Arc::new(FileStore::new(config.session.path.clone()));
        let session = Arc::new(SessionContext::restore(store)?);
        let client = ApiClient::new(
            config.client_config(),
            session,
            Arc::new(RouteRecorder::default()),
        )?;
        debug!(base_url = %client.base_url(), "Console connected");
        Ok(Self { client })
    }

    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn run(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Login { email, password } => {
                let login = self.client.auth().login(&email, &password).await?;
                info!(admin_id = login.admin_id, "Logged in");
                Ok(format!("Logged in as admin {}", login.admin_id))
            }
            Commands::Logout => {
                self.client.auth().logout().await?;
                Ok("Logged out".to_string())
            }
            Commands::Albums { command } => self.albums(command).await,
            Commands::Photos { command } => self.photos(command).await,
            Commands::Videos { command } => self.videos(command).await,
            Commands::Attendance { command } => self.attendance(command).await,
        }
    }

    async fn albums(&self, command: AlbumCommands) -> Result<String> {
        let albums = self.client.albums();
        match command {
            AlbumCommands::List => Ok(render_albums(&albums.list_all().await?)),
            AlbumCommands::Get { id } => Ok(render_album_detail(&albums.get_by_id(id).await?)),
            AlbumCommands::Create {
                title,
                description,
                location,
                event_date,
                cover,
                public,
            } => {
                let mut data = Map::new();
                data.insert("title".into(), json!(title));
                insert_opt(&mut data, "description", description);
                insert_opt(&mut data, "location", location);
                insert_opt(&mut data, "eventDate", event_date);
                insert_opt(&mut data, "coverImageUrl", cover);
                data.insert("isPublic".into(), json!(public));

                let album = albums.create(&Value::Object(data)).await?;
                Ok(format!("Created album {}: {}", album.id, album.title))
            }
            AlbumCommands::Delete { id } => {
                albums.remove(id).await?;
                Ok(format!("Deleted album {}", id))
            }
            AlbumCommands::Search { query } => Ok(render_albums(&albums.search(&query).await?)),
            AlbumCommands::Public => Ok(render_albums(&albums.list_public().await?)),
            AlbumCommands::Toggle { id } => {
                let album = albums.toggle_visibility(id).await?;
                let visibility = if album.is_public { "public" } else { "private" };
                Ok(format!("Album {} is now {}", album.id, visibility))
            }
            AlbumCommands::Choices { edit } => {
                let intent = if edit {
                    FormIntent::Edit
                } else {
                    FormIntent::Create
                };
                let choices = resolve_album_choices(&albums, intent).await?;

                let mut out = String::new();
                if let Some(warning) = &choices.warning {
                    let _ = writeln!(out, "warning: {}", warning);
                }
                for album in &choices.albums {
                    let marker = if Some(album.id) == choices.default_album {
                        "*"
                    } else {
                        " "
                    };
                    let _ = writeln!(out, "{} {:>5}  {}", marker, album.id, album.title);
                }
                Ok(out.trim_end().to_string())
            }
        }
    }

    async fn photos(&self, command: PhotoCommands) -> Result<String> {
        let photos = self.client.photos();
        match command {
            PhotoCommands::List { album, featured } => {
                let items = match (album, featured) {
                    (Some(album_id), false) => photos.list_by_album(album_id).await?,
                    (album_id, featured_only) => {
                        let filter = PhotoFilter {
                            album_id,
                            featured_only,
                        };
                        photos.list_all(&filter).await?
                    }
                };
                Ok(render_photos(&items))
            }
            PhotoCommands::Create {
                album,
                image_url,
                title,
                thumbnail_url,
                photographer,
                featured,
            } => {
                let mut data = Map::new();
                data.insert("albumId".into(), json!(album));
                data.insert("imageUrl".into(), json!(image_url));
                insert_opt(&mut data, "title", title);
                insert_opt(&mut data, "thumbnailUrl", thumbnail_url);
                insert_opt(&mut data, "photographer", photographer);
                data.insert("isFeatured".into(), json!(featured));

                let photo = photos.create(&Value::Object(data)).await?;
                Ok(format!("Created photo {} in album {}", photo.id, photo.album_id))
            }
            PhotoCommands::Delete { id } => {
                photos.remove(id).await?;
                Ok(format!("Deleted photo {}", id))
            }
        }
    }

    async fn videos(&self, command: VideoCommands) -> Result<String> {
        let videos = self.client.videos();
        match command {
            VideoCommands::List {
                category,
                published,
            } => {
                let filter = VideoFilter {
                    category,
                    published_only: published,
                };
                Ok(render_videos(&videos.list_all(&filter).await?))
            }
            VideoCommands::Create {
                title,
                video_url,
                description,
                category,
                published,
            } => {
                let mut data = Map::new();
                data.insert("title".into(), json!(title));
                data.insert("videoUrl".into(), json!(video_url));
                insert_opt(&mut data, "description", description);
                insert_opt(&mut data, "category", category);
                data.insert("isPublished".into(), json!(published));

                let video = videos.create(&Value::Object(data)).await?;
                Ok(format!("Created video {}: {}", video.id, video.title))
            }
            VideoCommands::Delete { id } => {
                videos.remove(id).await?;
                Ok(format!("Deleted video {}", id))
            }
        }
    }

    async fn attendance(&self, command: AttendanceCommands) -> Result<String> {
        let attendance = self.client.attendance();
        match command {
            AttendanceCommands::List { event } => {
                let records = match event {
                    Some(event_id) => attendance.list_by_event(event_id).await?,
                    None => attendance.list_all().await?,
                };
                Ok(render_attendance(&records))
            }
            AttendanceCommands::Create {
                event,
                member,
                guest,
                attended,
                notes,
            } => {
                if member.is_none() && guest.is_none() {
                    return Err(AdminError::Input(
                        "either --member or --guest is required".to_string(),
                    ));
                }

                let mut data = Map::new();
                data.insert("eventId".into(), json!(event));
                data.insert("isGuest".into(), json!(guest.is_some()));
                insert_opt(&mut data, "memberId", member);
                insert_opt(&mut data, "guestName", guest);
                insert_opt(&mut data, "notes", notes);
                data.insert("attended".into(), json!(attended));

                let record = attendance.create(&Value::Object(data)).await?;
                Ok(format!(
                    "Recorded attendance {} for event {}",
                    record.id, record.event_id
                ))
            }
        }
    }
}

fn insert_opt<T: Into<Value>>(data: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        data.insert(key.to_string(), value.into());
    }
}

fn render_albums(albums: &[Album]) -> String {
    if albums.is_empty() {
        return "No albums".to_string();
    }
    albums
        .iter()
        .map(|a| {
            let visibility = if a.is_public { "" } else { " (private)" };
            format!("{:>5}  {}{}  [{} photos]", a.id, a.title, visibility, a.photo_count)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_album_detail(album: &Album) -> String {
    let mut out = format!("Album {}: {}", album.id, album.title);
    if !album.description.is_empty() {
        let _ = write!(out, "\n  {}", album.description);
    }
    if !album.location.is_empty() {
        let _ = write!(out, "\n  Location: {}", album.location);
    }
    if let Some(date) = album.event_date {
        let _ = write!(out, "\n  Date: {}", date);
    }
    let _ = write!(
        out,
        "\n  Public: {}  Views: {}  Photos: {}",
        album.is_public, album.view_count, album.photo_count
    );
    out
}

fn render_photos(photos: &[Photo]) -> String {
    if photos.is_empty() {
        return "No photos".to_string();
    }
    photos
        .iter()
        .map(|p| {
            let featured = if p.is_featured { " *" } else { "" };
            let title = if p.title.is_empty() {
                p.image_url.as_str()
            } else {
                p.title.as_str()
            };
            format!("{:>5}  album {:<4} {}{}", p.id, p.album_id, title, featured)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_videos(videos: &[Video]) -> String {
    if videos.is_empty() {
        return "No videos".to_string();
    }
    videos
        .iter()
        .map(|v| {
            let state = if v.is_published { "" } else { " (draft)" };
            format!("{:>5}  {}{}", v.id, v.title, state)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_attendance(records: &[Attendance]) -> String {
    if records.is_empty() {
        return "No attendance records".to_string();
    }
    records
        .iter()
        .map(|r| {
            let who = if r.is_guest {
                format!("guest {}", r.guest_name)
            } else {
                format!("member {}", r.member_id)
            };
            let status = if r.attended { "attended" } else { "absent" };
            format!("{:>5}  event {:<4} {}  {}", r.id, r.event_id, who, status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
