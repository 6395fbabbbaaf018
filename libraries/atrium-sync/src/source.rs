//! Remote collections a [`CollectionSync`](crate::CollectionSync) can mirror.

use async_trait::async_trait;
use atrium_client::{
    AlbumService, AttendanceService, PhotoFilter, PhotoService, VideoFilter, VideoService,
};
use atrium_core::{Album, AlbumId, Attendance, Fields, Photo, Resource, Result, Video};
use serde_json::Value;

/// One server-side collection with CRUD operations.
///
/// Implementations make exactly one service call per method and pass any
/// classified failure through untouched.
#[async_trait]
pub trait CollectionSource: Send + Sync {
    type Record: Resource;

    /// Fetch the whole collection.
    async fn fetch_all(&self) -> Result<Vec<Self::Record>>;

    async fn create(&self, data: &Value) -> Result<Self::Record>;

    async fn update(&self, id: i64, data: &Value) -> Result<Self::Record>;

    async fn remove(&self, id: i64) -> Result<()>;
}

#[async_trait]
impl CollectionSource for AlbumService {
    type Record = Album;

    async fn fetch_all(&self) -> Result<Vec<Album>> {
        self.list_all().await
    }

    async fn create(&self, data: &Value) -> Result<Album> {
        AlbumService::create(self, data).await
    }

    async fn update(&self, id: i64, data: &Value) -> Result<Album> {
        AlbumService::update(self, id, data).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        AlbumService::remove(self, id).await
    }
}

#[async_trait]
impl CollectionSource for PhotoService {
    type Record = Photo;

    async fn fetch_all(&self) -> Result<Vec<Photo>> {
        self.list_all(&PhotoFilter::default()).await
    }

    async fn create(&self, data: &Value) -> Result<Photo> {
        PhotoService::create(self, data).await
    }

    async fn update(&self, id: i64, data: &Value) -> Result<Photo> {
        PhotoService::update(self, id, data).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        PhotoService::remove(self, id).await
    }
}

/// The photos of a single album.
///
/// Records created through this source land in the scoped album unless the
/// payload names an album itself.
#[derive(Clone)]
pub struct AlbumPhotos {
    service: PhotoService,
    album_id: AlbumId,
}

impl AlbumPhotos {
    pub fn new(service: PhotoService, album_id: AlbumId) -> Self {
        Self { service, album_id }
    }

    pub fn album_id(&self) -> AlbumId {
        self.album_id
    }

    fn scoped(&self, data: &Value) -> Value {
        let named = Fields::new(data).id("albumId") > 0;
        let mut data = data.clone();
        if let Value::Object(map) = &mut data {
            if !named {
                map.insert("albumId".to_string(), Value::from(self.album_id));
            }
        }
        data
    }
}

#[async_trait]
impl CollectionSource for AlbumPhotos {
    type Record = Photo;

    async fn fetch_all(&self) -> Result<Vec<Photo>> {
        self.service.list_by_album(self.album_id).await
    }

    async fn create(&self, data: &Value) -> Result<Photo> {
        self.service.create(&self.scoped(data)).await
    }

    async fn update(&self, id: i64, data: &Value) -> Result<Photo> {
        self.service.update(id, &self.scoped(data)).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        self.service.remove(id).await
    }
}

#[async_trait]
impl CollectionSource for VideoService {
    type Record = Video;

    async fn fetch_all(&self) -> Result<Vec<Video>> {
        self.list_all(&VideoFilter::default()).await
    }

    async fn create(&self, data: &Value) -> Result<Video> {
        VideoService::create(self, data).await
    }

    async fn update(&self, id: i64, data: &Value) -> Result<Video> {
        VideoService::update(self, id, data).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        VideoService::remove(self, id).await
    }
}

#[async_trait]
impl CollectionSource for AttendanceService {
    type Record = Attendance;

    async fn fetch_all(&self) -> Result<Vec<Attendance>> {
        self.list_all().await
    }

    async fn create(&self, data: &Value) -> Result<Attendance> {
        AttendanceService::create(self, data).await
    }

    async fn update(&self, id: i64, data: &Value) -> Result<Attendance> {
        AttendanceService::update(self, id, data).await
    }

    async fn remove(&self, id: i64) -> Result<()> {
        AttendanceService::remove(self, id).await
    }
}
