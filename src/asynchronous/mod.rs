//! Asynchronous events: every observer is awaited in turn before the next one starts.
//!
//! Futures are local (`!Send`); events are meant for a single-threaded executor such as
//! a current-thread Tokio runtime or a `LocalSet`.

mod event_emitter;
mod listener;
mod signature;

pub use event_emitter::AsyncBroadcastEvent;
pub use listener::AsyncSubscriber;
pub use signature::AsyncSignatureEvent;
