pub mod admin;
pub mod conversations;
pub mod proxy;

use crate::AppState;
use axum::{routing::{get, post}, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/admin/api/messages", get(proxy::get_all_data))
        .route("/admin/api/auto-reply", post(proxy::update_ai))
        .route("/admin/api/reply", post(proxy::send_reply));

    Router::new()
        .route(
            "/admin",
            get(admin::admin_page)
                .post(admin::login)
                .fallback(admin::method_not_allowed),
        )
        .route("/admin/logout", post(admin::logout))
        .route("/admin/conversations/{id}", get(conversations::show_conversation))
        .route("/admin/conversations/{id}/auto-reply", post(conversations::toggle_auto_reply))
        .route("/admin/conversations/{id}/reply", post(conversations::reply))
        .merge(api_routes)
        .with_state(state)
}
