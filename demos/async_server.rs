//! Example: Event-driven server on a single-threaded async runtime
use std::time::Duration;

use rs_evento::{AsyncBroadcastEvent, AsyncSignatureEvent, AsyncSubscriber, EventHandler, EventPayload};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client_connected = AsyncBroadcastEvent::<str>::new();
    client_connected.subscribe(AsyncSubscriber::new(|name: EventPayload<str>| async move {
        // Simulate a slow session lookup
        tokio::time::sleep(Duration::from_millis(50)).await;
        println!("Session loaded for {name}");
    }));
    client_connected.subscribe(AsyncSubscriber::new(|name: EventPayload<str>| async move {
        println!("Client connected: {name}");
    }));

    let handle_message = AsyncSignatureEvent::new(|msg: EventPayload<(String, String)>| async move {
        format!("echo to {}: {}", msg.0, msg.1)
    });
    handle_message.subscribe(AsyncSubscriber::new(|msg: EventPayload<(String, String)>| async move {
        println!("Message from {}: {}", msg.0, msg.1);
    }));

    // Simulate server events
    client_connected.fire("Alice").await.unwrap();
    let reply = handle_message
        .fire(("Alice".to_string(), "Hello".to_string()))
        .await
        .unwrap();
    println!("{reply}");
}
