use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use textdesk_shared::constants::SESSION_COOKIE;

use crate::AppState;

/// Proof that the request carries a valid admin session cookie.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
}

impl AdminSession {
    /// Reads and verifies the session cookie without rejecting.
    pub fn from_headers(headers: &HeaderMap, state: &AppState) -> Option<AdminSession> {
        let jar = CookieJar::from_headers(headers);
        let token = jar.get(SESSION_COOKIE)?.value().to_string();
        if token.is_empty() || !state.sessions.verify(&token, chrono::Utc::now()) {
            return None;
        }
        Some(AdminSession { token })
    }
}

impl FromRequestParts<Arc<AppState>> for AdminSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        if state.config.admin_password.is_none() {
            return Err((StatusCode::INTERNAL_SERVER_ERROR, "Admin not configured").into_response());
        }

        match AdminSession::from_headers(&parts.headers, state) {
            Some(session) => Ok(session),
            None if parts.uri.path().starts_with("/admin/api/") => Err((
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"error": "Not authenticated"})),
            )
                .into_response()),
            None => Err(Redirect::to("/admin").into_response()),
        }
    }
}
