use crate::chat::{Attachment, Message};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Connection status of the (hypothetical) chat transport.
///
/// Any status may move to any other; the setter never rejects a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    #[default]
    Disconnected,
}

/// Handle to the one process-wide state container.
///
/// The application builds a single [`StateHolder`] at startup and hands a
/// clone of this handle to every session that needs it. Every clone observes
/// the same underlying status and sequences.
pub type SharedState = Arc<StateHolder>;

/// The shared mutable state of the SDK: connection status plus the ordered
/// message and attachment sequences.
///
/// Both sequences are append-only from the outside and unbounded; insertion
/// order is preserved and nothing is deduplicated. Fields sit behind plain
/// mutexes so the container stays sound if the embedding application is
/// multithreaded.
#[derive(Debug, Default)]
pub struct StateHolder {
    status: Mutex<ConnectionStatus>,
    messages: Mutex<Vec<Message>>,
    attachments: Mutex<Vec<Attachment>>,
}

impl StateHolder {
    /// Create the state container. Construct this once, at startup, and
    /// hand out clones of the [`SharedState`] handle.
    pub fn shared() -> SharedState {
        Arc::new(Self::default())
    }

    /// Unconditionally overwrite the connection status.
    pub fn set_connection_status(&self, status: ConnectionStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn connection_status(&self) -> ConnectionStatus {
        *self.status.lock().unwrap()
    }

    /// Append a message to the shared sequence.
    pub fn push_message(&self, message: Message) {
        info!(sender = %message.sender, content = %message.content, "message pushed");
        self.messages.lock().unwrap().push(message);
    }

    /// Snapshot of every message pushed so far, in push order.
    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }

    /// Append an attachment to the shared sequence.
    pub fn push_attachment(&self, attachment: Attachment) {
        self.attachments.lock().unwrap().push(attachment);
    }

    /// Snapshot of every attachment pushed so far, in push order.
    pub fn attachments(&self) -> Vec<Attachment> {
        self.attachments.lock().unwrap().clone()
    }
}
