use chrono::{DateTime, Utc};

use super::app_page;
use crate::inbox::{escape_html, format_relative};
use crate::models::{ConversationSummary, ThreadKind, ThreadView};

/// Outcome banner shown after a redirect back to a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AutoReplyOn,
    AutoReplyOff,
    AutoReplyFailed,
    AutoReplyCooldown,
    Sent,
    SendFailed,
    LoadFailed,
}

impl Notice {
    pub fn from_query(value: &str) -> Option<Notice> {
        Some(match value {
            "auto-reply-on" => Notice::AutoReplyOn,
            "auto-reply-off" => Notice::AutoReplyOff,
            "auto-reply-failed" => Notice::AutoReplyFailed,
            "auto-reply-cooldown" => Notice::AutoReplyCooldown,
            "sent" => Notice::Sent,
            "send-failed" => Notice::SendFailed,
            "load-failed" => Notice::LoadFailed,
            _ => return None,
        })
    }

    pub fn as_query(self) -> &'static str {
        match self {
            Notice::AutoReplyOn => "auto-reply-on",
            Notice::AutoReplyOff => "auto-reply-off",
            Notice::AutoReplyFailed => "auto-reply-failed",
            Notice::AutoReplyCooldown => "auto-reply-cooldown",
            Notice::Sent => "sent",
            Notice::SendFailed => "send-failed",
            Notice::LoadFailed => "load-failed",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Notice::AutoReplyOn => "AI replying enabled",
            Notice::AutoReplyOff => "AI replying disabled",
            Notice::AutoReplyFailed => "Failed to update AI replying status",
            Notice::AutoReplyCooldown => "Please wait a few seconds before changing AI replying again",
            Notice::Sent => "Success",
            Notice::SendFailed => "Failure",
            Notice::LoadFailed => "Failed to load data. Please check the upstream configuration.",
        }
    }

    fn is_error(self) -> bool {
        matches!(
            self,
            Notice::AutoReplyFailed
                | Notice::AutoReplyCooldown
                | Notice::SendFailed
                | Notice::LoadFailed
        )
    }
}

fn render_notice(notice: Option<Notice>) -> String {
    match notice {
        Some(n) => format!(
            r#"<div class="alert {}" role="alert">{}</div>"#,
            if n.is_error() { "alert-error" } else { "alert-info" },
            escape_html(n.message())
        ),
        None => String::new(),
    }
}

pub fn conversation_href(id: &str) -> String {
    format!("/admin/conversations/{}", urlencoding::encode(id))
}

pub fn render_home(
    conversations: &[ConversationSummary],
    now: DateTime<Utc>,
    notice: Option<Notice>,
) -> String {
    let mut items = String::new();
    for c in conversations {
        let date = c
            .last_row_at
            .map(|t| format_relative(t, now))
            .unwrap_or_default();
        let meta = match (&c.kind, &c.subject) {
            (ThreadKind::Email, Some(subject)) => format!(
                r#"<div class="conversation-meta">Subject: {}</div>"#,
                escape_html(subject)
            ),
            _ => String::new(),
        };
        items.push_str(&format!(
            r#"<a class="conversation-item" href="{href}"><div class="conversation-info"><div class="conversation-name">{name}</div>{meta}<div class="conversation-date">{date}</div><span class="type-badge {class}">{label}</span></div></a>"#,
            href = escape_html(&conversation_href(&c.id)),
            name = escape_html(&c.title),
            meta = meta,
            date = escape_html(&date),
            class = c.kind.css_class(),
            label = c.kind.label(),
        ));
    }
    if conversations.is_empty() && notice.is_none() {
        items.push_str(r#"<div class="empty">No conversations yet</div>"#);
    }

    app_page(&format!(
        r#"<div id="homepage" class="view active"><div class="header"><h1>Conversations</h1><a id="refreshHome" class="btn btn-primary" href="/admin">Refresh</a><form class="inline" method="POST" action="/admin/logout"><button class="btn btn-secondary" type="submit">Log out</button></form></div>{notice}<div id="conversationList" class="conversation-list">{items}</div></div>"#,
        notice = render_notice(notice),
        items = items,
    ))
}

pub fn render_conversation(view: &ThreadView, notice: Option<Notice>) -> String {
    let href = escape_html(&conversation_href(&view.id));

    let mut bubbles = String::new();
    for bubble in &view.bubbles {
        let mut class = format!("message {}", bubble.role.css_class());
        if bubble.is_baba() {
            class.push_str(" baba");
        }
        bubbles.push_str(&format!(
            r#"<div class="{class}" data-row="{row}"><div class="message-bubble"><div class="message-text">{text}</div><div class="message-time">{time}</div></div></div>"#,
            class = class,
            row = bubble.row_num,
            text = escape_html(&bubble.text),
            time = escape_html(&bubble.timestamp),
        ));
    }

    app_page(&format!(
        r#"<div id="conversationView" class="view active"><div class="header"><a id="backButton" class="btn btn-secondary" href="/admin">&larr; Back</a><h2 id="conversationTitle">{title}</h2><a id="refreshConversation" class="btn btn-primary" href="{href}?refresh=1">Refresh</a><form class="inline" method="POST" action="{href}/auto-reply"><label class="ai-checkbox"><input type="checkbox" id="aiReplying" name="enabled" value="on" onchange="this.form.submit()"{checked}><span>AI replying</span></label><noscript><button class="btn btn-secondary" type="submit">Save</button></noscript></form></div>{notice}<div id="messagesContainer" class="messages-container {kind}">{bubbles}</div><form class="message-input-container" method="POST" action="{href}/reply"><input type="text" id="messageInput" name="text" placeholder="Type your message..." autocomplete="off" /><button id="sendButton" class="btn btn-send" type="submit">Send</button></form></div>"#,
        title = escape_html(&view.title),
        href = href,
        checked = if view.auto_reply { " checked" } else { "" },
        notice = render_notice(notice),
        kind = view.kind.css_class(),
        bubbles = bubbles,
    ))
}
