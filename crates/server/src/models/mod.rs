mod conversation;
mod message;

pub use conversation::*;
pub use message::*;

use serde::{Deserialize, Serialize};

/// Login submission, form-encoded or JSON.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Body of the upstream update-flag call.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAutoReplyRequest {
    pub row_num: i64,
    pub processed: Option<bool>,
}

/// Body of the upstream send-reply call.
#[derive(Debug, Serialize, Deserialize)]
pub struct SendReplyRequest {
    pub id: String,
    pub text: String,
    #[serde(rename = "theType")]
    pub the_type: String,
}

/// Acknowledgement returned by upstream write endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamResult {
    #[serde(default)]
    pub result: serde_json::Value,
}

impl UpstreamResult {
    pub fn accepted(&self) -> bool {
        self.result == serde_json::Value::Bool(true)
    }
}

#[derive(Debug, Deserialize)]
pub struct AutoReplyForm {
    /// Checkbox value; absent when unchecked.
    pub enabled: Option<String>,
}

impl AutoReplyForm {
    pub fn is_enabled(&self) -> bool {
        matches!(self.enabled.as_deref(), Some("on" | "true" | "1"))
    }
}

#[derive(Debug, Deserialize)]
pub struct ReplyForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ConversationQuery {
    pub refresh: Option<String>,
    pub notice: Option<String>,
}
