use chrono_tz::Tz;

use super::group::Thread;
use super::time::format_display_time;
use crate::models::{Bubble, BubbleRole, EmailHeader, Speaker, ThreadKind, ThreadView};

/// Builds the display model for one thread. Pure: the thread is not modified.
pub fn render_thread(thread: &Thread, tz: Tz) -> ThreadView {
    let kind = thread.kind();
    let first_row_num = thread.first().row_num;

    let bubbles = thread
        .rows()
        .iter()
        .map(|row| {
            let (speaker, rest) = Speaker::split(&row.body);

            if row.row_num == first_row_num {
                let text = match kind {
                    ThreadKind::Email => EmailHeader::strip(&row.body),
                    _ => String::new(),
                };
                return Bubble {
                    row_num: row.row_num,
                    role: BubbleRole::Buffer,
                    speaker,
                    text,
                    timestamp: format_display_time(&row.created_at, tz),
                };
            }

            Bubble {
                row_num: row.row_num,
                role: if speaker.is_agent() {
                    BubbleRole::Ai
                } else {
                    BubbleRole::User
                },
                speaker,
                text: rest.to_string(),
                timestamp: format_display_time(&row.created_at, tz),
            }
        })
        .collect();

    ThreadView {
        id: thread.id().to_string(),
        kind,
        title: thread.title(),
        auto_reply: thread.auto_reply(),
        bubbles,
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
