//! Synchronous events: observers run on the caller's stack, in registration order.

mod event_emitter;
mod listener;
mod signature;

pub use event_emitter::BroadcastEvent;
pub use listener::Subscriber;
pub use signature::SignatureEvent;
