//! In-memory state container for a small chat SDK.
//!
//! One [`StateHolder`] per process holds the connection status and the
//! message/attachment history. The application builds it once at startup
//! and passes [`SharedState`] handles into every [`Session`] (and thus
//! every [`ChatClient`]) so the sharing is explicit at the call site.
//!
//! There is no transport and no handshake here; sessions and clients are
//! thin pass-through layers over the shared state.

pub mod chat;
pub mod client;
pub mod session;
pub mod state;

pub use chat::{Attachment, Message};
pub use client::ChatClient;
pub use session::Session;
pub use state::{ConnectionStatus, SharedState, StateHolder};
