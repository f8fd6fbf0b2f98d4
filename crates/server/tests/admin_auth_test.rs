mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use base64::Engine;
use serde_json::json;

fn cookie_from_set_cookie(set_cookie: &str) -> (HeaderName, HeaderValue) {
    let pair = set_cookie.split(';').next().unwrap().trim().to_string();
    (HeaderName::from_static("cookie"), pair.parse().unwrap())
}

#[tokio::test]
async fn get_without_session_shows_login_form() {
    let (server, _state, _upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let res = server.get("/admin").await;

    res.assert_status_ok();
    assert_eq!(res.header("cache-control"), "no-store");
    assert!(res
        .header("content-type")
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let body = res.text();
    assert!(body.contains("Admin Access"));
    assert!(!body.contains("Incorrect password"));
}

#[tokio::test]
async fn wrong_password_rerenders_login_with_error() {
    let (server, _state, _upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let res = server
        .post("/admin")
        .form(&[("password", "nope")])
        .await;

    res.assert_status_ok();
    assert!(res.text().contains("Incorrect password"));
    assert!(res.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn correct_password_sets_scoped_cookie_and_redirects() {
    let (server, _state, _upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let res = server
        .post("/admin")
        .form(&[("password", common::TEST_PASSWORD)])
        .await;

    res.assert_status(StatusCode::FOUND);
    assert_eq!(res.header("location"), "/admin");
    let cookie = res.header("set-cookie").to_str().unwrap().to_string();
    assert!(cookie.starts_with("adminSession="));
    assert!(cookie.contains("Path=/admin"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Max-Age=86400"));
}

#[tokio::test]
async fn json_login_is_accepted() {
    let (server, _state, _upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let res = server
        .post("/admin")
        .json(&json!({"password": common::TEST_PASSWORD}))
        .await;

    res.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn unknown_content_type_is_treated_as_empty_password() {
    let (server, _state, _upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let res = server
        .post("/admin")
        .text(format!("password={}", common::TEST_PASSWORD))
        .await;

    res.assert_status_ok();
    assert!(res.text().contains("Incorrect password"));
}

#[tokio::test]
async fn login_cookie_opens_the_conversation_list() {
    let (server, _state, upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let login = server
        .post("/admin")
        .form(&[("password", common::TEST_PASSWORD)])
        .await;
    let (h, v) = cookie_from_set_cookie(login.header("set-cookie").to_str().unwrap());

    let res = server.get("/admin").add_header(h, v).await;

    res.assert_status_ok();
    let body = res.text();
    assert!(body.contains("Conversations"));
    assert!(body.contains(common::PHONE));
    assert!(body.contains("a@b.com"));
    assert!(body.contains("Subject: Roof quote"));
    assert_eq!(upstream.recorded.get_all_count(), 1);
}

#[tokio::test]
async fn conversation_list_is_newest_first() {
    let (server, state, _upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let (h, v) = common::session_cookie(&state);
    let body = server.get("/admin").add_header(h, v).await.text();

    let email_at = body.find("a@b.com").unwrap();
    let phone_at = body.find(common::PHONE).unwrap();
    assert!(email_at < phone_at);
}

#[tokio::test]
async fn deterministic_legacy_token_is_rejected() {
    let (server, _state, upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let legacy = base64::engine::general_purpose::STANDARD
        .encode(format!("ok:{}", common::TEST_PASSWORD));
    let res = server
        .get("/admin")
        .add_header(
            HeaderName::from_static("cookie"),
            format!("adminSession={}", legacy).parse::<HeaderValue>().unwrap(),
        )
        .await;

    res.assert_status_ok();
    assert!(res.text().contains("Admin Access"));
    assert_eq!(upstream.recorded.get_all_count(), 0);
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    let (server, state, _upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let token = state.sessions.issue(chrono::Utc::now());
    let (expires, rest) = token.split_once('.').unwrap();
    let forged = format!("{}.{}", expires.parse::<i64>().unwrap() + 1_000_000, rest);

    let res = server
        .get("/admin")
        .add_header(
            HeaderName::from_static("cookie"),
            format!("adminSession={}", forged).parse::<HeaderValue>().unwrap(),
        )
        .await;

    assert!(res.text().contains("Admin Access"));
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let (server, _state, _upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let res = server.put("/admin").await;

    res.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.header("allow"), "GET, POST");
}

#[tokio::test]
async fn missing_admin_password_is_a_server_error() {
    let upstream = common::spawn_fake_upstream(common::sample_rows(), json!({"result": true})).await;
    let mut config = common::test_config(common::upstream_config(&upstream.base_url));
    config.admin_password = None;
    let (server, _state) = common::create_test_app(config);

    let res = server.get("/admin").await;
    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text(), "Admin not configured");

    let res = server
        .post("/admin")
        .form(&[("password", "anything")])
        .await;
    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    // Checked before the method.
    let res = server.put("/admin").await;
    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.text(), "Admin not configured");
}

#[tokio::test]
async fn logout_expires_the_cookie() {
    let (server, state, _upstream) = common::setup(common::sample_rows(), json!({"result": true})).await;

    let (h, v) = common::session_cookie(&state);
    let res = server.post("/admin/logout").add_header(h, v).await;

    res.assert_status(StatusCode::FOUND);
    let cookie = res.header("set-cookie").to_str().unwrap().to_string();
    assert!(cookie.starts_with("adminSession=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn upstream_failure_shows_alert_on_the_list() {
    let (server, state) = common::create_test_app(common::test_config(common::upstream_config(
        &common::unreachable_url().await,
    )));

    let (h, v) = common::session_cookie(&state);
    let res = server.get("/admin").add_header(h, v).await;

    res.assert_status_ok();
    assert!(res.text().contains("Failed to load data"));
}
