mod inbox;
mod login;

pub use inbox::{render_conversation, render_home, Notice};
pub use login::render_login;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use textdesk_shared::constants::APP_NAME;

use crate::inbox::escape_html;

const ADMIN_CSS: &str = include_str!("admin.css");

/// HTML response that must never be cached.
pub fn html(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        body,
    )
        .into_response()
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en"><head><meta charset="UTF-8"><meta name="viewport" content="width=device-width, initial-scale=1.0"><title>{title}</title><style>{css}</style></head><body>
{body}
</body></html>"#,
        title = escape_html(title),
        css = ADMIN_CSS,
        body = body,
    )
}

fn app_page(body: &str) -> String {
    page(APP_NAME, body)
}
