use crate::chat::{Attachment, Message};
use crate::session::Session;
use crate::state::SharedState;

/// Outward-facing SDK client, the surface an embedding application talks to.
///
/// Owns exactly one [`Session`] for its whole lifetime and mirrors its
/// operation set one-to-one. The session is a plain field rather than an
/// option: it is built unconditionally, so there is nothing to null-check.
pub struct ChatClient {
    session: Session,
}

impl ChatClient {
    pub fn new(state: SharedState) -> Self {
        Self {
            session: Session::new(state),
        }
    }

    pub fn connect(&self) {
        self.session.connect();
    }

    pub fn disconnect(&self) {
        self.session.disconnect();
    }

    pub fn send_message(&self, message: Message) {
        self.session.send_message(message);
    }

    pub fn send_attachment(&self, attachment: Attachment) {
        self.session.send_attachment(attachment);
    }

    pub fn messages(&self) -> Vec<Message> {
        self.session.messages()
    }

    pub fn attachments(&self) -> Vec<Attachment> {
        self.session.attachments()
    }
}
