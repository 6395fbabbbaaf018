//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "atrium-admin")]
#[command(about = "Manage albums, photos, videos and event attendance", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file path (defaults to ./atrium.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "ATRIUM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Discard the persisted session
    Logout,
    /// Album management
    Albums {
        #[command(subcommand)]
        command: AlbumCommands,
    },
    /// Photo management
    Photos {
        #[command(subcommand)]
        command: PhotoCommands,
    },
    /// Video management
    Videos {
        #[command(subcommand)]
        command: VideoCommands,
    },
    /// Event attendance records
    Attendance {
        #[command(subcommand)]
        command: AttendanceCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum AlbumCommands {
    /// List all albums
    List,
    /// Show one album
    Get { id: i64 },
    /// Create an album
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        event_date: Option<String>,
        #[arg(long)]
        cover: Option<String>,
        #[arg(long)]
        public: bool,
    },
    /// Delete an album
    Delete { id: i64 },
    /// Search albums by text
    Search { query: String },
    /// List albums visible on the public site
    Public,
    /// Flip an album between public and private
    Toggle { id: i64 },
    /// Albums a photo form would offer, with the preselected one
    Choices {
        /// Resolve for editing an existing photo instead of creating one
        #[arg(long)]
        edit: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum PhotoCommands {
    /// List photos, optionally of one album
    List {
        #[arg(long)]
        album: Option<i64>,
        #[arg(long)]
        featured: bool,
    },
    /// Add a photo to an album
    Create {
        #[arg(long)]
        album: i64,
        #[arg(long)]
        image_url: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        thumbnail_url: Option<String>,
        #[arg(long)]
        photographer: Option<String>,
        #[arg(long)]
        featured: bool,
    },
    /// Delete a photo
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum VideoCommands {
    /// List videos
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        published: bool,
    },
    /// Add a video
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        video_url: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        published: bool,
    },
    /// Delete a video
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum AttendanceCommands {
    /// List attendance records, optionally of one event
    List {
        #[arg(long)]
        event: Option<i64>,
    },
    /// Record attendance for a member or a named guest
    Create {
        #[arg(long)]
        event: i64,
        #[arg(long, conflicts_with = "guest")]
        member: Option<i64>,
        /// Guest name; marks the record as a guest entry
        #[arg(long)]
        guest: Option<String>,
        #[arg(long)]
        attended: bool,
        #[arg(long)]
        notes: Option<String>,
    },
}
