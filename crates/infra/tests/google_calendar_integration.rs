//! Google Calendar adapter against a mocked Calendar v3 API.

mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{TimeZone, Utc};
use formguest_core::CalendarPlatform;
use formguest_domain::FormGuestError;
use formguest_infra::GoogleCalendarPlatform;
use serde_json::{json, Value};
use support::{google_client, TEST_TOKEN};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

async fn platform(server: &MockServer) -> GoogleCalendarPlatform {
    GoogleCalendarPlatform::new(google_client(), server.uri())
}

#[tokio::test]
async fn list_calendars_follows_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me/calendarList"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "work", "summary": "Work"}],
            "nextPageToken": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me/calendarList"))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "me@example.com", "summary": "me@example.com", "summaryOverride": "Me"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let calendars = platform(&server).await.list_calendars().await.unwrap();

    let names: Vec<_> = calendars.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Work", "Me"]);
}

#[tokio::test]
async fn default_calendar_is_primary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendars/primary"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "me@example.com", "summary": "me@example.com"})),
        )
        .mount(&server)
        .await;

    let id = platform(&server).await.default_calendar_id().await.unwrap();
    assert_eq!(id, "me@example.com");
}

#[tokio::test]
async fn unknown_calendar_resolves_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendars/team%40group.calendar.google.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "team@group.calendar.google.com",
            "summary": "Team"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/calendars/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": 404, "message": "Not Found"}
        })))
        .mount(&server)
        .await;

    let platform = platform(&server).await;

    let team = platform.calendar_by_id("team@group.calendar.google.com").await.unwrap();
    assert_eq!(team.map(|c| c.name), Some("Team".to_string()));
    assert_eq!(platform.calendar_by_id("gone").await.unwrap(), None);
}

#[tokio::test]
async fn search_sends_window_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendars/work/events"))
        .and(query_param("q", "workshop"))
        .and(query_param("timeMin", "2026-03-01T09:00:00Z"))
        .and(query_param("timeMax", "2027-03-01T09:00:00Z"))
        .and(query_param("singleEvents", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": "evt1",
                    "summary": "Workshop",
                    "start": {"dateTime": "2026-03-06T14:00:00Z"},
                    "end": {"dateTime": "2026-03-06T15:30:00Z"}
                },
                {
                    "id": "evt2",
                    "status": "cancelled",
                    "summary": "Cancelled workshop",
                    "start": {"dateTime": "2026-03-07T14:00:00Z"},
                    "end": {"dateTime": "2026-03-07T15:00:00Z"}
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2027, 3, 1, 9, 0, 0).unwrap();
    let events = platform(&server).await.search_events("work", "workshop", start, end).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "evt1");
    assert_eq!(events[0].start_time, Utc.with_ymd_and_hms(2026, 3, 6, 14, 0, 0).unwrap());
}

#[tokio::test]
async fn empty_query_is_not_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendars/work/events"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
    let events = platform(&server)
        .await
        .search_events("work", "", start, start + chrono::Duration::days(365))
        .await
        .unwrap();

    assert!(events.is_empty());
}

#[tokio::test]
async fn missing_or_cancelled_event_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendars/work/events/deleted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "deleted",
            "status": "cancelled",
            "start": {"dateTime": "2026-03-06T14:00:00Z"},
            "end": {"dateTime": "2026-03-06T15:00:00Z"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/calendars/work/events/unknown"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let platform = platform(&server).await;

    assert_eq!(platform.event_by_id("work", "deleted").await.unwrap(), None);
    assert_eq!(platform.event_by_id("work", "unknown").await.unwrap(), None);
}

#[tokio::test]
async fn add_guest_appends_to_existing_attendees() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendars/work/events/evt1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "evt1",
            "summary": "Workshop",
            "start": {"dateTime": "2026-03-06T14:00:00Z"},
            "end": {"dateTime": "2026-03-06T15:30:00Z"},
            "attendees": [{"email": "host@example.com", "responseStatus": "accepted"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/calendars/work/events/evt1"))
        .and(body_json(json!({
            "attendees": [
                {"email": "host@example.com", "responseStatus": "accepted"},
                {"email": "a@example.com"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "evt1",
            "start": {"dateTime": "2026-03-06T14:00:00Z"},
            "end": {"dateTime": "2026-03-06T15:30:00Z"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    platform(&server).await.add_guest("work", "evt1", "a@example.com").await.unwrap();
}

#[tokio::test]
async fn add_guest_skips_existing_guest() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendars/work/events/evt1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "evt1",
            "start": {"dateTime": "2026-03-06T14:00:00Z"},
            "end": {"dateTime": "2026-03-06T15:30:00Z"},
            "attendees": [{"email": "A@example.com"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH")).respond_with(ResponseTemplate::new(500)).expect(0).mount(&server).await;

    platform(&server).await.add_guest("work", "evt1", "a@example.com").await.unwrap();
}

#[tokio::test]
async fn permission_errors_surface_as_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me/calendarList"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "Insufficient Permission"}
        })))
        .mount(&server)
        .await;

    let err = platform(&server).await.list_calendars().await.unwrap_err();
    assert_eq!(err, FormGuestError::Auth("HTTP 403 Forbidden: Insufficient Permission".into()));
}

/// Event held by the mock server. Every write bumps the etag.
struct EventStore {
    state: Mutex<(u32, Vec<String>)>,
    patches: AtomicUsize,
}

impl EventStore {
    fn new(attendees: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new((1, attendees.iter().map(|a| (*a).to_string()).collect())),
            patches: AtomicUsize::new(0),
        })
    }

    fn attendees(&self) -> Vec<String> {
        self.state.lock().unwrap().1.clone()
    }

    fn body(version: u32, attendees: &[String]) -> Value {
        json!({
            "id": "evt1",
            "etag": format!("\"v{version}\""),
            "start": {"dateTime": "2026-03-06T14:00:00Z"},
            "end": {"dateTime": "2026-03-06T15:30:00Z"},
            "attendees": attendees.iter().map(|email| json!({"email": email})).collect::<Vec<_>>()
        })
    }
}

/// Serves the current event, optionally after a delay. `outside_write` is
/// applied right after the first read to simulate another writer.
struct ReadEvent {
    store: Arc<EventStore>,
    delay: Duration,
    outside_write: Mutex<Option<String>>,
}

impl Respond for ReadEvent {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let mut state = self.store.state.lock().unwrap();
        let body = EventStore::body(state.0, &state.1);
        if let Some(email) = self.outside_write.lock().unwrap().take() {
            state.1.push(email);
            state.0 += 1;
        }
        ResponseTemplate::new(200).set_body_json(body).set_delay(self.delay)
    }
}

/// Replaces the attendee list when `If-Match` names the current etag.
struct WriteEvent {
    store: Arc<EventStore>,
}

impl Respond for WriteEvent {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.store.patches.fetch_add(1, Ordering::SeqCst);
        let mut state = self.store.state.lock().unwrap();

        let current = format!("\"v{}\"", state.0);
        let if_match = request.headers.get("if-match").and_then(|v| v.to_str().ok());
        if if_match.is_some_and(|etag| etag != current) {
            return ResponseTemplate::new(412).set_body_json(json!({
                "error": {"code": 412, "message": "Precondition Failed"}
            }));
        }

        let patch: Value = serde_json::from_slice(&request.body).unwrap();
        state.1 = patch["attendees"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["email"].as_str().unwrap().to_string())
            .collect();
        state.0 += 1;
        ResponseTemplate::new(200).set_body_json(EventStore::body(state.0, &state.1))
    }
}

async fn mount_event_store(server: &MockServer, store: &Arc<EventStore>, read: ReadEvent) {
    Mock::given(method("GET"))
        .and(path("/calendars/team/events/evt1"))
        .respond_with(read)
        .mount(server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/calendars/team/events/evt1"))
        .respond_with(WriteEvent { store: Arc::clone(store) })
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_guest_additions_keep_every_guest() {
    let server = MockServer::start().await;
    let store = EventStore::new(&["host@example.com"]);
    let read = ReadEvent {
        store: Arc::clone(&store),
        delay: Duration::from_millis(200),
        outside_write: Mutex::new(None),
    };
    mount_event_store(&server, &store, read).await;

    let platform = platform(&server).await;
    let (first, second) = tokio::join!(
        platform.add_guest("team", "evt1", "a@example.com"),
        platform.add_guest("team", "evt1", "b@example.com"),
    );

    first.unwrap();
    second.unwrap();
    let mut guests = store.attendees();
    guests.sort();
    assert_eq!(guests, vec!["a@example.com", "b@example.com", "host@example.com"]);
}

#[tokio::test]
async fn add_guest_rereads_event_changed_by_another_writer() {
    let server = MockServer::start().await;
    let store = EventStore::new(&["host@example.com"]);
    let read = ReadEvent {
        store: Arc::clone(&store),
        delay: Duration::ZERO,
        outside_write: Mutex::new(Some("c@example.com".into())),
    };
    mount_event_store(&server, &store, read).await;

    platform(&server).await.add_guest("team", "evt1", "a@example.com").await.unwrap();

    assert_eq!(store.attendees(), vec!["host@example.com", "c@example.com", "a@example.com"]);
    assert_eq!(store.patches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn add_guest_gives_up_on_an_event_that_keeps_changing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calendars/team/events/evt1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "evt1",
            "etag": "\"v1\"",
            "start": {"dateTime": "2026-03-06T14:00:00Z"},
            "end": {"dateTime": "2026-03-06T15:30:00Z"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/calendars/team/events/evt1"))
        .and(header("if-match", "\"v1\""))
        .respond_with(ResponseTemplate::new(412))
        .expect(5)
        .mount(&server)
        .await;

    let err = platform(&server).await.add_guest("team", "evt1", "a@example.com").await.unwrap_err();

    assert!(matches!(err, FormGuestError::Platform(_)), "got {err:?}");
}
