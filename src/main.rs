use cove::{ChatClient, Message, StateHolder};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Load .env file
    if let Err(e) = dotenvy::dotenv() {
        // It's not fatal if .env doesn't exist, but good to know
        info!("No .env file found or failed to load: {}", e);
    }

    // Initialize logging with default filter if RUST_LOG is not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    // The one shared state container for the whole process, built eagerly.
    let state = StateHolder::shared();

    let client = ChatClient::new(state.clone());
    client.connect();
    info!("status after connect: {:?}", state.connection_status());

    client.send_message(Message::new("Hello, how are you?", "John Doe"));
    client.send_message(Message::new(
        "I need your help to fix my computer",
        "John Doe",
    ));

    for msg in client.messages() {
        info!("[{}] {}: {}", msg.timestamp, msg.sender, msg.content);
    }

    client.disconnect();
    info!("status after disconnect: {:?}", state.connection_status());

    Ok(())
}
