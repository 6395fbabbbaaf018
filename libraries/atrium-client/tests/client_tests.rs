//! Tests for the Atrium API client.
//!
//! These tests use mock servers to verify the pipeline, the services and
//! the degraded-mode resolver without a real API.

use atrium_client::{
    resolve_album_choices, ApiClient, ClientConfig, ErrorKind, FormIntent, KeyValueStore,
    MemoryStore, Navigator, PhotoFilter, RouteRecorder, Session, SessionContext,
    DEGRADED_WARNING, MISSING_ALBUM_ENDPOINT, TOKEN_KEY, UPDATE_UNSUPPORTED,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Matches requests that do not carry the given header.
struct MissingHeader(&'static str);

impl Match for MissingHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key(self.0)
    }
}

/// Store that counts how often the token key is cleared.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    token_removals: AtomicUsize,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> atrium_client::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> atrium_client::Result<()> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> atrium_client::Result<()> {
        if key == TOKEN_KEY {
            self.token_removals.fetch_add(1, Ordering::SeqCst);
        }
        self.inner.remove(key)
    }
}

struct Harness {
    server: MockServer,
    client: ApiClient,
    navigator: Arc<RouteRecorder>,
}

async fn harness(session: Option<Session>) -> Harness {
    harness_with_store(session, Arc::new(MemoryStore::new())).await
}

async fn harness_with_store(session: Option<Session>, store: Arc<dyn KeyValueStore>) -> Harness {
    let server = MockServer::start().await;
    let context = Arc::new(SessionContext::new(store));
    if let Some(session) = session {
        context.establish(session).await.unwrap();
    }
    let navigator = Arc::new(RouteRecorder::new("/albums"));
    let client = ApiClient::new(
        ClientConfig::new(server.uri()),
        context,
        navigator.clone(),
    )
    .unwrap();

    Harness {
        server,
        client,
        navigator,
    }
}

fn photo_json(id: i64, album_id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "albumId": album_id,
        "title": format!("Photo {}", id),
        "description": "",
        "imageUrl": format!("https://cdn.example.com/{}.jpg", id),
        "thumbnailUrl": "",
        "photographer": "",
        "takenAt": "2024-03-01",
        "sortOrder": 0,
        "isFeatured": false,
        "createdAt": "2024-03-01T10:00:00Z",
        "updatedAt": "2024-03-01T10:00:00Z",
        "updatedBy": 2
    })
}

fn album_json(id: i64, title: &str) -> serde_json::Value {
    json!({ "id": id, "title": title, "isPublic": true })
}

// =============================================================================
// Request Stage Tests
// =============================================================================

mod request_stage {
    use super::*;

    #[tokio::test]
    async fn test_session_headers_attached() {
        let h = harness(Some(Session::new("valid_token", Some(7)))).await;

        Mock::given(method("GET"))
            .and(path("/Albums"))
            .and(header("Authorization", "Bearer valid_token"))
            .and(header("X-Admin-Id", "7"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&h.server)
            .await;

        let albums = h.client.albums().list_all().await.unwrap();
        assert!(albums.is_empty());
    }

    #[tokio::test]
    async fn test_missing_session_sends_unauthenticated_request() {
        let h = harness(None).await;

        Mock::given(method("GET"))
            .and(path("/Albums/public"))
            .and(MissingHeader("authorization"))
            .and(MissingHeader("x-admin-id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([album_json(1, "Gala")])))
            .expect(1)
            .mount(&h.server)
            .await;

        let albums = h.client.albums().list_public().await.unwrap();
        assert_eq!(albums.len(), 1);
    }

    #[tokio::test]
    async fn test_login_stores_session_for_later_requests() {
        let h = harness(None).await;

        Mock::given(method("POST"))
            .and(path("/Auth/login"))
            .and(body_partial_json(json!({ "email": "admin@example.com" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "fresh_token",
                "adminId": 12,
                "name": "Ada"
            })))
            .mount(&h.server)
            .await;

        Mock::given(method("GET"))
            .and(path("/Videos"))
            .and(header("Authorization", "Bearer fresh_token"))
            .and(header("X-Admin-Id", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&h.server)
            .await;

        let login = h
            .client
            .auth()
            .login(" admin@example.com ", "secret")
            .await
            .unwrap();
        assert_eq!(login.admin_id, 12);
        assert!(h.client.session().is_authenticated().await);

        h.client.videos().list_all(&Default::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let h = harness(Some(Session::new("t", Some(1)))).await;
        h.client.auth().logout().await.unwrap();
        assert!(h.client.session().snapshot().await.is_empty());
    }
}

// =============================================================================
// Response Stage Tests
// =============================================================================

mod response_stage {
    use super::*;

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_redirects() {
        let h = harness(Some(Session::new("expired", Some(3)))).await;

        Mock::given(method("GET"))
            .and(path("/Videos/4"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&h.server)
            .await;

        let err = h.client.videos().get_by_id(4).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.http_status, Some(401));
        assert!(h.client.session().snapshot().await.is_empty());
        assert_eq!(h.navigator.current_route(), "/login");
        assert_eq!(h.navigator.history(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_login_reports_server_message() {
        let h = harness(None).await;

        Mock::given(method("POST"))
            .and(path("/Auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
            )
            .expect(1)
            .mount(&h.server)
            .await;

        let err = h
            .client
            .auth()
            .login("admin@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid credentials");
        assert!(!h.client.session().is_authenticated().await);
    }

    #[tokio::test]
    async fn test_repeated_unauthorized_redirects_once() {
        let h = harness(Some(Session::new("expired", None))).await;

        Mock::given(method("GET"))
            .and(path("/Albums"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&h.server)
            .await;

        for _ in 0..3 {
            let err = h.client.albums().list_all().await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Unauthorized);
        }
        assert_eq!(h.navigator.history().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_unauthorized_clears_session_exactly_once() {
        let store = Arc::new(CountingStore::default());
        let h = harness_with_store(Some(Session::new("expired", Some(5))), store.clone()).await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(50)))
            .mount(&h.server)
            .await;

        let albums = h.client.albums();
        let photos = h.client.photos();
        let videos = h.client.videos();
        let filter = PhotoFilter::default();
        let video_filter = atrium_client::VideoFilter::default();
        let (a, b, c, d) = tokio::join!(
            albums.list_all(),
            photos.list_all(&filter),
            videos.list_all(&video_filter),
            albums.get_by_id(2),
        );

        assert_eq!(a.unwrap_err().kind, ErrorKind::Unauthorized);
        assert_eq!(b.unwrap_err().kind, ErrorKind::Unauthorized);
        assert_eq!(c.unwrap_err().kind, ErrorKind::Unauthorized);
        assert_eq!(d.unwrap_err().kind, ErrorKind::Unauthorized);
        assert_eq!(store.token_removals.load(Ordering::SeqCst), 1);
        assert_eq!(h.navigator.history(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_status_classification() {
        let h = harness(Some(Session::new("t", Some(1)))).await;

        Mock::given(method("GET"))
            .and(path("/Videos/1"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "message": "Only editors can view drafts"
            })))
            .mount(&h.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Videos/2"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Video 2 not found"
            })))
            .mount(&h.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Videos/3"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&h.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Videos/4"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&h.server)
            .await;

        let videos = h.client.videos();

        let err = videos.get_by_id(1).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, "Only editors can view drafts");

        let err = videos.get_by_id(2).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Video 2 not found");
        assert!(!err.is_missing_endpoint());

        let err = videos.get_by_id(3).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ServerError);
        assert_eq!(err.http_status, Some(503));

        let err = videos.get_by_id(4).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(err.http_status, Some(409));

        // Non-401 failures leave the session alone
        assert!(h.client.session().is_authenticated().await);
        assert!(h.navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ApiClient::new(
            ClientConfig::new(format!("http://127.0.0.1:{}", port)),
            Arc::new(SessionContext::new(Arc::new(MemoryStore::new()))),
            Arc::new(RouteRecorder::default()),
        )
        .unwrap();

        let err = client.albums().list_all().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NetworkError);
        assert!(err.http_status.is_none());
        assert!(err.cause.is_some());
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/Photos"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(
            ClientConfig::new(server.uri()).with_timeout(Duration::from_millis(200)),
            Arc::new(SessionContext::new(Arc::new(MemoryStore::new()))),
            Arc::new(RouteRecorder::default()),
        )
        .unwrap();

        let err = client
            .photos()
            .list_all(&PhotoFilter::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NetworkError);
    }

    #[tokio::test]
    async fn test_invalid_json_is_unknown() {
        let h = harness(None).await;

        Mock::given(method("GET"))
            .and(path("/Photos/8"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&h.server)
            .await;

        let err = h.client.photos().get_by_id(8).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(err.http_status, Some(200));
    }
}

// =============================================================================
// Service Tests
// =============================================================================

mod services {
    use super::*;

    #[tokio::test]
    async fn test_photo_with_bad_url_never_reaches_network() {
        let h = harness(Some(Session::new("t", Some(1)))).await;

        Mock::given(method("POST"))
            .and(path("/Photos"))
            .respond_with(ResponseTemplate::new(201).set_body_json(photo_json(1, 1)))
            .expect(0)
            .mount(&h.server)
            .await;

        let err = h
            .client
            .photos()
            .create(&json!({ "albumId": 1, "imageUrl": "not-a-url" }))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::ValidationError);
        assert!(err.http_status.is_none());
        assert!(h.server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_guest_without_name_never_reaches_network() {
        let h = harness(Some(Session::new("t", Some(1)))).await;

        Mock::given(method("POST"))
            .and(path("/EventAttendance"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&h.server)
            .await;

        let err = h
            .client
            .attendance()
            .create(&json!({ "eventId": 4, "isGuest": true, "guestName": "" }))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::ValidationError);
        assert!(h.server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_shapes_and_stamps_payload() {
        let h = harness(Some(Session::new("t", Some(42)))).await;

        Mock::given(method("POST"))
            .and(path("/Photos"))
            .and(body_partial_json(json!({
                "id": 0,
                "albumId": 3,
                "title": "Stage left",
                "description": "",
                "isFeatured": true,
                "sortOrder": 2,
                "updatedBy": 42
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(photo_json(77, 3)))
            .expect(1)
            .mount(&h.server)
            .await;

        let created = h
            .client
            .photos()
            .create(&json!({
                "id": 999,
                "albumId": "3",
                "title": "  Stage left ",
                "imageUrl": "https://cdn.example.com/77.jpg",
                "isFeatured": "on",
                "sortOrder": "2",
                "updatedBy": 1
            }))
            .await
            .unwrap();

        assert_eq!(created.id, 77);

        let requests = h.server.received_requests().await.unwrap();
        let body: serde_json::Value = requests[0].body_json().unwrap();
        assert!(body["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_update_round_trip_advances_audit_fields() {
        let h = harness(Some(Session::new("t", Some(9)))).await;

        Mock::given(method("GET"))
            .and(path("/Photos/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(photo_json(5, 3)))
            .up_to_n_times(1)
            .mount(&h.server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/Photos/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&h.server)
            .await;

        let photos = h.client.photos();
        let fetched = photos.get_by_id(5).await.unwrap();
        let updated = photos.update(5, &fetched).await.unwrap();

        assert!(updated.updated_at > fetched.updated_at);
        assert_eq!(updated.updated_by, 9);

        // Serve back exactly what the server stored
        let requests = h.server.received_requests().await.unwrap();
        let stored = requests
            .iter()
            .find(|r| r.method.as_str() == "PUT")
            .map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).unwrap())
            .unwrap();
        Mock::given(method("GET"))
            .and(path("/Photos/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored))
            .mount(&h.server)
            .await;

        let refetched = photos.get_by_id(5).await.unwrap();
        let mut expected = fetched.clone();
        expected.updated_at = updated.updated_at;
        expected.updated_by = updated.updated_by;
        assert_eq!(refetched, expected);
        assert_eq!(refetched, updated);
    }

    #[tokio::test]
    async fn test_update_prefers_server_echo() {
        let h = harness(Some(Session::new("t", Some(9)))).await;

        let mut echoed = photo_json(5, 3);
        echoed["title"] = json!("Renamed by server");
        Mock::given(method("PUT"))
            .and(path("/Photos/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(echoed))
            .mount(&h.server)
            .await;

        let updated = h
            .client
            .photos()
            .update(5, &photo_json(5, 3))
            .await
            .unwrap();
        assert_eq!(updated.title, "Renamed by server");
    }

    #[tokio::test]
    async fn test_update_requires_identifier() {
        let h = harness(None).await;
        let err = h
            .client
            .videos()
            .update(0, &json!({ "title": "x", "videoUrl": "https://v.example.com/1" }))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValidationError);
        assert!(h.server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove() {
        let h = harness(Some(Session::new("t", Some(1)))).await;

        Mock::given(method("DELETE"))
            .and(path("/Videos/6"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&h.server)
            .await;

        h.client.videos().remove(6).await.unwrap();
    }

    #[tokio::test]
    async fn test_photos_by_album_and_filter() {
        let h = harness(None).await;

        Mock::given(method("GET"))
            .and(path("/Photos/album/3"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([photo_json(1, 3), photo_json(2, 3)])),
            )
            .mount(&h.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Photos"))
            .and(query_param("albumId", "3"))
            .and(query_param("isFeatured", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([photo_json(2, 3)])))
            .mount(&h.server)
            .await;

        let photos = h.client.photos();
        assert_eq!(photos.list_by_album(3).await.unwrap().len(), 2);

        let filter = PhotoFilter {
            album_id: Some(3),
            featured_only: true,
        };
        let featured = photos.list_all(&filter).await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, 2);
    }

    #[tokio::test]
    async fn test_album_extras() {
        let h = harness(Some(Session::new("t", Some(1)))).await;

        Mock::given(method("PATCH"))
            .and(path("/Albums/2/toggle-visibility"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2, "title": "Gala", "isPublic": false
            })))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/Albums/2/cover-image"))
            .and(body_partial_json(json!({ "coverImageUrl": "https://cdn.example.com/c.jpg" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2, "title": "Gala", "coverImageUrl": "https://cdn.example.com/c.jpg"
            })))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/Albums/2/view"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Albums/search"))
            .and(query_param("q", "gala night"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([album_json(2, "Gala")])))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/Albums/2/photos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([photo_json(1, 2)])))
            .expect(1)
            .mount(&h.server)
            .await;

        let albums = h.client.albums();
        assert!(!albums.toggle_visibility(2).await.unwrap().is_public);
        assert_eq!(
            albums
                .set_cover_image(2, " https://cdn.example.com/c.jpg ")
                .await
                .unwrap()
                .cover_image_url,
            "https://cdn.example.com/c.jpg"
        );
        albums.record_view(2).await.unwrap();
        assert_eq!(albums.search("  gala night ").await.unwrap().len(), 1);
        assert_eq!(albums.photos(2).await.unwrap().len(), 1);

        assert_eq!(
            albums.set_cover_image(2, "cover.jpg").await.unwrap_err().kind,
            ErrorKind::ValidationError
        );
        assert_eq!(
            albums.search("   ").await.unwrap_err().kind,
            ErrorKind::ValidationError
        );
    }

    #[tokio::test]
    async fn test_attendance_by_event_and_unsupported_edits() {
        let h = harness(Some(Session::new("t", Some(1)))).await;

        Mock::given(method("GET"))
            .and(path("/EventAttendance/event/8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "eventId": 8, "memberId": 30, "attended": true },
                { "id": 2, "eventId": 8, "isGuest": true, "guestName": "Dana" }
            ])))
            .mount(&h.server)
            .await;

        let attendance = h.client.attendance();
        let records = attendance.list_by_event(8).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[1].is_guest);

        let err = attendance
            .update(1, &json!({ "eventId": 8, "memberId": 30 }))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ValidationError);
        assert_eq!(err.message, UPDATE_UNSUPPORTED);
        assert!(attendance.remove(1).await.is_err());

        // Only the listing call went out
        assert_eq!(h.server.received_requests().await.unwrap().len(), 1);
    }
}

// =============================================================================
// Degraded Mode Tests
// =============================================================================

mod degraded_mode {
    use super::*;

    #[tokio::test]
    async fn test_missing_album_endpoint_yields_placeholders() {
        let h = harness(Some(Session::new("t", Some(1)))).await;

        Mock::given(method("GET"))
            .and(path("/Albums"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&h.server)
            .await;

        let err = h.client.albums().list_all().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, MISSING_ALBUM_ENDPOINT);

        let choices = resolve_album_choices(&h.client.albums(), FormIntent::Create)
            .await
            .unwrap();
        let ids: Vec<_> = choices.albums.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(choices.is_degraded());
        assert_eq!(choices.warning.as_deref(), Some(DEGRADED_WARNING));
        assert_eq!(choices.default_album, Some(1));
    }

    #[tokio::test]
    async fn test_coded_endpoint_miss_yields_placeholders() {
        let h = harness(None).await;

        Mock::given(method("GET"))
            .and(path("/Albums"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "endpoint_not_found"
            })))
            .mount(&h.server)
            .await;

        let choices = resolve_album_choices(&h.client.albums(), FormIntent::Edit)
            .await
            .unwrap();
        assert_eq!(choices.albums.len(), 3);
    }

    #[tokio::test]
    async fn test_record_not_found_is_propagated() {
        let h = harness(None).await;

        Mock::given(method("GET"))
            .and(path("/Albums"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Album 99 not found"
            })))
            .mount(&h.server)
            .await;

        let err = resolve_album_choices(&h.client.albums(), FormIntent::Create)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Album 99 not found");
    }

    #[tokio::test]
    async fn test_server_error_is_propagated() {
        let h = harness(None).await;

        Mock::given(method("GET"))
            .and(path("/Albums"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&h.server)
            .await;

        let err = resolve_album_choices(&h.client.albums(), FormIntent::Create)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ServerError);
    }

    #[tokio::test]
    async fn test_default_falls_back_to_first_album_when_creating() {
        let h = harness(None).await;

        Mock::given(method("GET"))
            .and(path("/Albums"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                album_json(4, "Workshops"),
                album_json(6, "Retreat")
            ])))
            .mount(&h.server)
            .await;

        let albums = h.client.albums();
        let create = resolve_album_choices(&albums, FormIntent::Create).await.unwrap();
        assert!(!create.is_degraded());
        assert_eq!(create.default_album, Some(4));

        let edit = resolve_album_choices(&albums, FormIntent::Edit).await.unwrap();
        assert_eq!(edit.default_album, None);
    }
}
