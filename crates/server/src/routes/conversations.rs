use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use crate::error::{AutoReplyError, ReplyError};
use crate::inbox::{self, render_thread};
use crate::middleware::auth::AdminSession;
use crate::models::{AutoReplyForm, ConversationQuery, ReplyForm};
use crate::views::{self, html, Notice};
use crate::AppState;

fn back_to(id: &str, notice: Notice) -> Response {
    let target = format!(
        "/admin/conversations/{}?notice={}",
        urlencoding::encode(id),
        notice.as_query()
    );
    Redirect::to(&target).into_response()
}

/// GET /admin/conversations/{id}
pub async fn show_conversation(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Path(id): Path<String>,
    Query(query): Query<ConversationQuery>,
) -> Response {
    let mut notice = query.notice.as_deref().and_then(Notice::from_query);

    let cached = state.inbox.snapshot().await;
    let snapshot = if query.refresh.is_some() || !cached.is_loaded() {
        match inbox::refresh(&state.upstream, &state.inbox).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Error loading conversation: {}", e);
                notice = Some(Notice::LoadFailed);
                cached
            }
        }
    } else {
        cached
    };

    // Nothing to show: stay on the list.
    let thread = match snapshot.thread(&id) {
        Some(t) => t,
        None => return Redirect::to("/admin").into_response(),
    };

    let view = render_thread(&thread, state.config.display_timezone);
    html(StatusCode::OK, views::render_conversation(&view, notice))
}

/// POST /admin/conversations/{id}/auto-reply
pub async fn toggle_auto_reply(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Path(id): Path<String>,
    Form(form): Form<AutoReplyForm>,
) -> Response {
    let enabled = form.is_enabled();
    let result = state
        .auto_reply
        .set_auto_reply(&state.upstream, &state.inbox, &id, enabled)
        .await;

    let notice = match result {
        Ok(()) if enabled => Notice::AutoReplyOn,
        Ok(()) => Notice::AutoReplyOff,
        Err(AutoReplyError::CoolingDown { remaining }) => {
            tracing::debug!("Auto-reply toggle ignored, {:?} left", remaining);
            Notice::AutoReplyCooldown
        }
        Err(e) => {
            tracing::error!("Error updating AI status: {}", e);
            Notice::AutoReplyFailed
        }
    };
    back_to(&id, notice)
}

/// POST /admin/conversations/{id}/reply
pub async fn reply(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Path(id): Path<String>,
    Form(form): Form<ReplyForm>,
) -> Response {
    let notice = match inbox::send_reply(&state.upstream, &state.inbox, &id, &form.text).await {
        Ok(()) => Notice::Sent,
        Err(ReplyError::Invalid(reason)) => {
            tracing::debug!("Reply not sent: {}", reason);
            Notice::SendFailed
        }
        Err(e) => {
            tracing::error!("Error sending message: {}", e);
            Notice::SendFailed
        }
    };
    back_to(&id, notice)
}
