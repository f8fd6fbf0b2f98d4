use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use textdesk_shared::constants::{SESSION_COOKIE, SESSION_COOKIE_PATH};
use textdesk_shared::validation::validate_password_input;

use crate::inbox::{self, group_conversations};
use crate::middleware::auth::AdminSession;
use crate::models::LoginForm;
use crate::views::{self, html, Notice};
use crate::AppState;

fn not_configured() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Admin not configured").into_response()
}

/// GET /admin
pub async fn admin_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if state.config.admin_password.is_none() {
        return not_configured();
    }
    if AdminSession::from_headers(&headers, &state).is_none() {
        return html(StatusCode::OK, views::render_login(false));
    }

    let (rows, notice) = match inbox::refresh(&state.upstream, &state.inbox).await {
        Ok(snapshot) => (snapshot.rows, None),
        Err(e) => {
            tracing::error!("Error loading conversations: {}", e);
            (state.inbox.snapshot().await.rows, Some(Notice::LoadFailed))
        }
    };

    let conversations = group_conversations(&rows);
    html(
        StatusCode::OK,
        views::render_home(&conversations, chrono::Utc::now(), notice),
    )
}

/// POST /admin
pub async fn login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let expected = match state.config.admin_password.as_deref() {
        Some(p) => p,
        None => return not_configured(),
    };

    let form = parse_login(&headers, &body);
    let accepted = validate_password_input(&form.password).is_ok()
        && state.sessions.password_matches(&form.password, expected);

    if !accepted {
        tracing::warn!("Admin login rejected");
        return html(StatusCode::OK, views::render_login(true));
    }

    tracing::info!("Admin login accepted");
    let token = state.sessions.issue(chrono::Utc::now());
    let cookie = format!(
        "{}={}; Path={}; HttpOnly; Secure; SameSite=Strict; Max-Age={}",
        SESSION_COOKIE,
        token,
        SESSION_COOKIE_PATH,
        state.sessions.ttl_secs()
    );

    (
        StatusCode::FOUND,
        [
            (header::LOCATION, "/admin".to_string()),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response()
}

/// POST /admin/logout
pub async fn logout() -> Response {
    let cookie = format!(
        "{}=; Path={}; HttpOnly; Secure; SameSite=Strict; Max-Age=0",
        SESSION_COOKIE, SESSION_COOKIE_PATH
    );
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, "/admin".to_string()),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response()
}

pub async fn method_not_allowed(State(state): State<Arc<AppState>>) -> Response {
    if state.config.admin_password.is_none() {
        return not_configured();
    }
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, POST")],
        "Method Not Allowed",
    )
        .into_response()
}

/// Reads `password` from a form-encoded or JSON body. Other content types yield an empty form.
fn parse_login(headers: &HeaderMap, body: &[u8]) -> LoginForm {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_lowercase();

    if content_type.contains("application/x-www-form-urlencoded") {
        let password = url::form_urlencoded::parse(body)
            .find(|(key, _)| key == "password")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();
        LoginForm { password }
    } else if content_type.contains("application/json") {
        serde_json::from_slice(body).unwrap_or_default()
    } else {
        LoginForm::default()
    }
}
