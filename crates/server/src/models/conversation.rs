use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Speaker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThreadKind {
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "iMessage")]
    IMessage,
    #[serde(rename = "email")]
    Email,
}

impl ThreadKind {
    /// Value the upstream service expects in `theType`.
    pub fn as_str(self) -> &'static str {
        match self {
            ThreadKind::Sms => "SMS",
            ThreadKind::IMessage => "iMessage",
            ThreadKind::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThreadKind::Sms => "SMS",
            ThreadKind::IMessage => "iMessage",
            ThreadKind::Email => "Email",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ThreadKind::Sms => "sms",
            ThreadKind::IMessage => "imessage",
            ThreadKind::Email => "email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailHeader {
    pub subject: String,
    pub from: String,
}

/// One entry of the conversation list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSummary {
    pub id: String,
    pub kind: ThreadKind,
    pub title: String,
    /// Email subject line, if this is an email thread.
    pub subject: Option<String>,
    /// Newest parseable `created_at` across the thread; drives list order.
    pub latest_at: Option<DateTime<Utc>>,
    /// `created_at` of the highest `row_num`, shown as relative time.
    pub last_row_at: Option<DateTime<Utc>>,
    pub message_count: usize,
    pub auto_reply: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BubbleRole {
    Buffer,
    User,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

impl BubbleRole {
    pub fn alignment(self) -> Alignment {
        match self {
            BubbleRole::Buffer | BubbleRole::User => Alignment::Left,
            BubbleRole::Ai => Alignment::Right,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BubbleRole::Buffer | BubbleRole::User => "user",
            BubbleRole::Ai => "ai",
        }
    }
}

/// A display-ready message. `text` is raw; escaping happens when writing HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub row_num: i64,
    pub role: BubbleRole,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: String,
}

impl Bubble {
    pub fn is_baba(&self) -> bool {
        self.speaker == Speaker::Baba
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThreadView {
    pub id: String,
    pub kind: ThreadKind,
    pub title: String,
    pub auto_reply: bool,
    pub bubbles: Vec<Bubble>,
}
