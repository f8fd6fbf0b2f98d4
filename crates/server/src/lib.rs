pub mod config;
pub mod error;
pub mod inbox;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod session;
pub mod upstream;
pub mod views;

use config::Config;
use inbox::{AutoReplyController, InboxCache};
use session::SessionKeys;
use upstream::UpstreamClient;

pub struct AppState {
    pub config: Config,
    pub sessions: SessionKeys,
    pub upstream: UpstreamClient,
    pub inbox: InboxCache,
    pub auto_reply: AutoReplyController,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            sessions: SessionKeys::new(&config.session_secret, config.session_ttl_secs),
            upstream: UpstreamClient::new(config.upstream.clone()),
            inbox: InboxCache::new(),
            auto_reply: AutoReplyController::new(config.auto_reply_cooldown),
            config,
        }
    }
}
