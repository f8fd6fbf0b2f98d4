use serde::{Deserialize, Deserializer, Serialize};
use textdesk_shared::constants::{BABA_PREFIX, CLIENT_PREFIX, JORDAN_PREFIX};

/// One row of the upstream message table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRow {
    /// Thread identifier: phone number, or a synthetic id for email threads.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub row_num: i64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub body: String,
    #[serde(rename = "theType", default, deserialize_with = "nullable_kind")]
    pub the_type: MessageKind,
    /// Non-null means auto-reply is enabled; a missing key reads as null.
    /// Only meaningful on a thread's first row.
    #[serde(default)]
    pub processed: Option<serde_json::Value>,
}

impl MessageRow {
    pub fn auto_reply_enabled(&self) -> bool {
        self.processed.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MessageKind {
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "iMessage")]
    IMessage,
    #[serde(rename = "email")]
    Email,
    #[default]
    #[serde(other)]
    Other,
}

/// Who wrote a message, as encoded by the `"Speaker: "` body prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Client,
    Jordan,
    Baba,
    Unlabeled,
}

impl Speaker {
    /// Splits a body into its speaker and the text after the prefix.
    pub fn split(body: &str) -> (Speaker, &str) {
        if let Some(rest) = body.strip_prefix(CLIENT_PREFIX) {
            (Speaker::Client, rest)
        } else if let Some(rest) = body.strip_prefix(JORDAN_PREFIX) {
            (Speaker::Jordan, rest)
        } else if let Some(rest) = body.strip_prefix(BABA_PREFIX) {
            (Speaker::Baba, rest)
        } else {
            (Speaker::Unlabeled, body)
        }
    }

    pub fn is_agent(self) -> bool {
        matches!(self, Speaker::Jordan | Speaker::Baba)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
    })
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_kind<'de, D>(deserializer: D) -> Result<MessageKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<MessageKind>::deserialize(deserializer)?.unwrap_or_default())
}
