use std::sync::Arc;
use textdesk_server::{config::Config, routes, AppState};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "textdesk_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    if config.admin_password.is_none() {
        tracing::warn!("ADMIN_PASSWORD not set; /admin will answer 500");
    }

    let state = Arc::new(AppState::new(config.clone()));

    let app = routes::build_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");

    tracing::info!("Admin server running on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
