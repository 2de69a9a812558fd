use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single chat message. Immutable once pushed into the shared state.
///
/// Timestamps are milliseconds since the Unix epoch. The SDK never assigns
/// `id` on its own; callers that need one set it themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: Option<String>,
    pub content: String,
    pub sender: String,
    pub timestamp: i64,
}

impl Message {
    /// Build a message stamped with the current time and no id.
    pub fn new(content: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            sender: sender.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// A file attachment. Immutable once pushed into the shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    /// MIME-ish type label ("image/png", "pdf", ...). Not validated.
    pub kind: String,
    /// Size in bytes, as reported by the caller.
    pub size: u64,
    /// Optional handle to a local file backing the attachment.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Attachment {
    pub fn new(url: impl Into<String>, kind: impl Into<String>, size: u64) -> Self {
        Self {
            id: None,
            url: url.into(),
            kind: kind.into(),
            size,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_new_stamps_current_time() {
        let before = Utc::now().timestamp_millis();
        let msg = Message::new("hi", "alice");
        let after = Utc::now().timestamp_millis();

        assert!(msg.id.is_none());
        assert!(msg.timestamp >= before && msg.timestamp <= after);
    }

    #[test]
    fn message_round_trips_through_json() {
        let msg = Message {
            id: Some("m-1".into()),
            content: "hello".into(),
            sender: "bob".into(),
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn attachment_id_and_file_default_to_none() {
        let att: Attachment =
            serde_json::from_str(r#"{"url":"https://x/y.png","kind":"image/png","size":1024}"#)
                .unwrap();
        assert_eq!(att.id, None);
        assert_eq!(att.file, None);
        assert_eq!(att.size, 1024);
    }
}
