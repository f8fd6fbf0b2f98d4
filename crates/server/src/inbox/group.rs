use std::collections::HashMap;

use textdesk_shared::constants::{
    EMAIL_FROM_PREFIX, EMAIL_SUBJECT_PREFIX, NO_SUBJECT, UNKNOWN_SENDER,
};

use super::time::parse_timestamp;
use crate::models::{ConversationSummary, EmailHeader, MessageKind, MessageRow, ThreadKind};

/// Rows of one conversation, ordered by `row_num`. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    id: String,
    rows: Vec<MessageRow>,
}

impl Thread {
    /// Collects the rows for `id`. Returns `None` when the thread has no rows.
    pub fn load(rows: &[MessageRow], id: &str) -> Option<Thread> {
        let mut thread_rows: Vec<MessageRow> =
            rows.iter().filter(|r| r.id == id).cloned().collect();
        if thread_rows.is_empty() {
            return None;
        }
        thread_rows.sort_by_key(|r| r.row_num);
        Some(Thread {
            id: id.to_string(),
            rows: thread_rows,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn rows(&self) -> &[MessageRow] {
        &self.rows
    }

    /// The buffer row; the auto-reply flag lives here.
    pub fn first(&self) -> &MessageRow {
        &self.rows[0]
    }

    pub fn last(&self) -> &MessageRow {
        &self.rows[self.rows.len() - 1]
    }

    pub fn kind(&self) -> ThreadKind {
        classify(&self.rows)
    }

    pub fn auto_reply(&self) -> bool {
        self.first().auto_reply_enabled()
    }

    pub fn email_header(&self) -> Option<EmailHeader> {
        match self.kind() {
            ThreadKind::Email => Some(EmailHeader::parse(&self.first().body)),
            _ => None,
        }
    }

    pub fn title(&self) -> String {
        match self.email_header() {
            Some(header) => format!("{} \u{2014} Subject: {}", header.from, header.subject),
            None => self.id.clone(),
        }
    }
}

/// Email wins over iMessage, which wins over SMS.
pub fn classify(rows: &[MessageRow]) -> ThreadKind {
    if rows.iter().any(|r| r.the_type == MessageKind::Email) {
        ThreadKind::Email
    } else if rows.iter().any(|r| r.the_type == MessageKind::IMessage) {
        ThreadKind::IMessage
    } else {
        ThreadKind::Sms
    }
}

impl EmailHeader {
    pub fn parse(body: &str) -> EmailHeader {
        let mut subject = None;
        let mut from = None;
        for line in body.lines() {
            if subject.is_none() {
                if let Some(rest) = line.strip_prefix(EMAIL_SUBJECT_PREFIX) {
                    subject = Some(rest.trim().to_string());
                    continue;
                }
            }
            if from.is_none() {
                if let Some(rest) = line.strip_prefix(EMAIL_FROM_PREFIX) {
                    from = Some(rest.trim().to_string());
                }
            }
        }
        EmailHeader {
            subject: subject.unwrap_or_else(|| NO_SUBJECT.to_string()),
            from: from.unwrap_or_else(|| UNKNOWN_SENDER.to_string()),
        }
    }

    pub fn is_header_line(line: &str) -> bool {
        line.starts_with(EMAIL_SUBJECT_PREFIX) || line.starts_with(EMAIL_FROM_PREFIX)
    }

    /// The first row's body with header lines removed.
    pub fn strip(body: &str) -> String {
        body.split('\n')
            .filter(|line| !Self::is_header_line(line))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

/// Partitions rows into threads, newest activity first.
///
/// Threads keep the order in which their ids first appear, so ties on the
/// latest timestamp (including threads with no parseable timestamps) sort
/// deterministically.
pub fn group_threads(rows: &[MessageRow]) -> Vec<Thread> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut threads: Vec<Thread> = Vec::new();

    for row in rows {
        match index.get(row.id.as_str()) {
            Some(&i) => threads[i].rows.push(row.clone()),
            None => {
                index.insert(row.id.as_str(), threads.len());
                threads.push(Thread {
                    id: row.id.clone(),
                    rows: vec![row.clone()],
                });
            }
        }
    }

    for thread in &mut threads {
        thread.rows.sort_by_key(|r| r.row_num);
    }

    threads.sort_by_key(|t| std::cmp::Reverse(latest_millis(&t.rows)));
    threads
}

pub fn group_conversations(rows: &[MessageRow]) -> Vec<ConversationSummary> {
    group_threads(rows).iter().map(summarize).collect()
}

fn summarize(thread: &Thread) -> ConversationSummary {
    let kind = thread.kind();
    let header = thread.email_header();
    let latest = latest_millis(&thread.rows);

    ConversationSummary {
        id: thread.id.clone(),
        kind,
        title: match &header {
            Some(h) => h.from.clone(),
            None => thread.id.clone(),
        },
        subject: header.map(|h| h.subject),
        latest_at: chrono::DateTime::from_timestamp_millis(latest).filter(|_| latest != 0),
        last_row_at: parse_timestamp(&thread.last().created_at),
        message_count: thread.rows.len(),
        auto_reply: thread.auto_reply(),
    }
}

/// Unparseable timestamps count as zero so those threads sort last.
fn latest_millis(rows: &[MessageRow]) -> i64 {
    rows.iter()
        .map(|r| {
            parse_timestamp(&r.created_at)
                .map(|dt| dt.timestamp_millis())
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}
