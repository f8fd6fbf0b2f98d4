use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("missing upstream configuration: {0}")]
    NotConfigured(&'static str),
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream returned an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UpstreamError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            UpstreamError::Transport(_) | UpstreamError::Status(_) | UpstreamError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Body text shown to callers. Never includes upstream details.
    pub fn public_message(&self) -> &'static str {
        match self {
            UpstreamError::NotConfigured(_) => "Missing upstream configuration",
            _ => "Upstream error",
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AutoReplyError {
    #[error("conversation is not loaded")]
    NotLoaded,
    #[error("auto-reply toggle is cooling down for another {remaining:?}")]
    CoolingDown { remaining: Duration },
    #[error("upstream rejected the auto-reply update")]
    Rejected,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("{0}")]
    Invalid(String),
    #[error("conversation is not loaded")]
    NotLoaded,
    #[error("upstream rejected the reply")]
    Rejected,
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
