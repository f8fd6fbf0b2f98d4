use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::error::UpstreamError;
use crate::middleware::auth::AdminSession;
use crate::upstream::UpstreamResponse;
use crate::AppState;

const DEFAULT_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// GET /admin/api/messages
pub async fn get_all_data(State(state): State<Arc<AppState>>, _session: AdminSession) -> Response {
    pass_through(state.upstream.fetch_all().await)
}

/// POST /admin/api/auto-reply
pub async fn update_ai(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    body: Bytes,
) -> Response {
    pass_through(state.upstream.update_ai(body).await)
}

/// POST /admin/api/reply
pub async fn send_reply(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    body: Bytes,
) -> Response {
    pass_through(state.upstream.send_reply(body).await)
}

fn pass_through(result: Result<UpstreamResponse, UpstreamError>) -> Response {
    match result {
        Ok(res) => (
            res.status,
            [
                (
                    header::CONTENT_TYPE,
                    res.content_type
                        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
                ),
                (header::CACHE_CONTROL, "no-store".to_string()),
            ],
            res.body,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
