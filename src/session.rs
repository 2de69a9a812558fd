use crate::chat::{Attachment, Message};
use crate::state::{ConnectionStatus, SharedState};
use tracing::debug;

/// Session layer over the shared state.
///
/// A real session would own a transport (e.g. a WebSocket) and a handshake;
/// here every operation is a single pass-through call into the shared
/// [`StateHolder`](crate::state::StateHolder). Sessions hold no state of
/// their own, so any number may be built over the same handle and they all
/// observe the same messages, attachments, and status.
pub struct Session {
    state: SharedState,
}

impl Session {
    pub fn new(state: SharedState) -> Self {
        debug!("session created");
        Self { state }
    }

    /// Begin connecting. Note: the status is left at `Connecting`; nothing
    /// in the SDK ever advances it to `Connected` (known gap, kept as-is).
    pub fn connect(&self) {
        self.state.set_connection_status(ConnectionStatus::Connecting);
    }

    pub fn disconnect(&self) {
        self.state.set_connection_status(ConnectionStatus::Disconnected);
    }

    pub fn send_message(&self, message: Message) {
        self.state.push_message(message);
    }

    pub fn send_attachment(&self, attachment: Attachment) {
        self.state.push_attachment(attachment);
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.messages()
    }

    pub fn attachments(&self) -> Vec<Attachment> {
        self.state.attachments()
    }
}
