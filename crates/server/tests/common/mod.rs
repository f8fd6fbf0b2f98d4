#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use textdesk_server::{
    config::{Config, UpstreamConfig},
    models::MessageRow,
    routes, AppState,
};

pub const TEST_PASSWORD: &str = "correct horse battery staple";
pub const TEST_UPSTREAM_TOKEN: &str = "upstream-test-token";
pub const PHONE: &str = "+15551234567";
pub const PHONE_PATH: &str = "%2B15551234567";

/// Config with every upstream URL rooted at `base_url`.
pub fn upstream_config(base_url: &str) -> UpstreamConfig {
    UpstreamConfig {
        get_all_url: Some(format!("{}/get-all", base_url)),
        update_ai_url: Some(format!("{}/update-ai", base_url)),
        send_reply_url: Some(format!("{}/send-reply", base_url)),
        token: Some(TEST_UPSTREAM_TOKEN.into()),
        timeout_secs: 5,
    }
}

pub fn test_config(upstream: UpstreamConfig) -> Config {
    Config {
        host: "127.0.0.1".into(),
        port: 0,
        admin_password: Some(TEST_PASSWORD.into()),
        session_secret: b"test-session-secret".to_vec(),
        session_ttl_secs: 86_400,
        upstream,
        display_timezone: chrono_tz::America::Denver,
        auto_reply_cooldown: Duration::from_millis(4_000),
    }
}

/// Build a test server around the full router.
pub fn create_test_app(config: Config) -> (TestServer, Arc<AppState>) {
    let state = Arc::new(AppState::new(config));
    let server = TestServer::new(routes::build_router(state.clone())).unwrap();
    (server, state)
}

/// Cookie header carrying a freshly issued session.
pub fn session_cookie(state: &AppState) -> (HeaderName, HeaderValue) {
    let token = state.sessions.issue(chrono::Utc::now());
    (
        HeaderName::from_static("cookie"),
        format!("adminSession={}", token).parse().unwrap(),
    )
}

pub fn rows_from(value: Value) -> Vec<MessageRow> {
    serde_json::from_value(value).unwrap()
}

/// Two threads: an SMS thread and an email thread, the email one newer.
pub fn sample_rows() -> Value {
    json!([
        {"id": PHONE, "row_num": 1, "theType": "SMS", "body": "", "created_at": "2024-01-15T17:00:00Z", "processed": true},
        {"id": PHONE, "row_num": 2, "theType": "SMS", "body": "Client: Hi", "created_at": "2024-01-15T18:30:00Z", "processed": null},
        {"id": PHONE, "row_num": 3, "theType": "SMS", "body": "Jordan: Hello! How can I help?", "created_at": "2024-01-15T18:31:00Z", "processed": null},
        {"id": "thread-abc", "row_num": 10, "theType": "email", "body": "Email subject: Roof quote\nFrom address: a@b.com\nHello", "created_at": "2024-02-01T12:00:00Z", "processed": null},
        {"id": "thread-abc", "row_num": 11, "theType": "email", "body": "Baba: Thanks, we'll be in touch", "created_at": "2024-02-01T12:05:00Z", "processed": null}
    ])
}

/// What the fake upstream saw.
#[derive(Clone, Default)]
pub struct Recorded {
    pub get_all_calls: Arc<AtomicUsize>,
    pub update_ai: Arc<Mutex<Vec<Value>>>,
    pub send_reply: Arc<Mutex<Vec<Value>>>,
}

impl Recorded {
    pub fn get_all_count(&self) -> usize {
        self.get_all_calls.load(Ordering::SeqCst)
    }

    pub fn update_ai_bodies(&self) -> Vec<Value> {
        self.update_ai.lock().unwrap().clone()
    }

    pub fn send_reply_bodies(&self) -> Vec<Value> {
        self.send_reply.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct FakeState {
    rows: Value,
    write_result: Value,
    recorded: Recorded,
}

pub struct FakeUpstream {
    pub base_url: String,
    pub recorded: Recorded,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TEST_UPSTREAM_TOKEN))
        .unwrap_or(false)
}

async fn fake_get_all(State(s): State<FakeState>, headers: HeaderMap) -> Response {
    s.recorded.get_all_calls.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "bad token").into_response();
    }
    Json(s.rows.clone()).into_response()
}

async fn fake_update_ai(
    State(s): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "bad token").into_response();
    }
    s.recorded.update_ai.lock().unwrap().push(body);
    Json(s.write_result.clone()).into_response()
}

async fn fake_send_reply(
    State(s): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, "bad token").into_response();
    }
    s.recorded.send_reply.lock().unwrap().push(body);
    Json(s.write_result.clone()).into_response()
}

/// Serve `router` on an ephemeral local port. Returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Fake automation service answering every write with `write_result`.
pub async fn spawn_fake_upstream(rows: Value, write_result: Value) -> FakeUpstream {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/get-all", get(fake_get_all))
        .route("/update-ai", post(fake_update_ai))
        .route("/send-reply", post(fake_send_reply))
        .with_state(FakeState {
            rows,
            write_result,
            recorded: recorded.clone(),
        });

    FakeUpstream {
        base_url: spawn_upstream(app).await,
        recorded,
    }
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Test server wired to a fresh fake upstream.
pub async fn setup(rows: Value, write_result: Value) -> (TestServer, Arc<AppState>, FakeUpstream) {
    let upstream = spawn_fake_upstream(rows, write_result).await;
    let (server, state) = create_test_app(test_config(upstream_config(&upstream.base_url)));
    (server, state, upstream)
}
