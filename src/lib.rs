//! # Rust Evento
//!
//! A small, single-threaded implementation of the observer pattern with reentrancy-safe
//! subscription management.
//!
//! - **Subscriber**: A callback handle that can be registered on an event.
//! - **BroadcastEvent**: Delivers one value to every subscriber, in registration order.
//! - **SignatureEvent**: Wraps a function; firing notifies observers and then calls it.
//! - **EventHandler**: Trait defining the subscriber management API.
//! - **BeforeHook / AfterHook / AroundHook**: Notifications around a wrapped function.
//!
//! Observers may subscribe, unsubscribe or fire again while an event is firing. Such
//! changes are deferred until the outermost fire completes, except that a requested
//! removal skips the subscriber immediately in every active fire.
//!
//! With the `async` feature (enabled by default), [`AsyncBroadcastEvent`] and
//! [`AsyncSignatureEvent`] await their subscribers one after the other.
//!
//! Events are `!Send`: handles share state through `Rc`, so they stay on the thread that
//! created them.

mod constants;
mod dispatcher;
mod error;
mod event_handler;
mod registry;

mod base;
mod hooks;

#[cfg(feature = "async")]
mod asynchronous;

pub use base::{BroadcastEvent, SignatureEvent, Subscriber};
pub use constants::{BoxError, EventPayload, ObserverOutput, ObserverResult};
pub use error::EventError;
pub use event_handler::EventHandler;
pub use hooks::{AfterHook, AroundHook, BeforeHook, HookEvent};

#[cfg(feature = "async")]
pub use asynchronous::{AsyncBroadcastEvent, AsyncSignatureEvent, AsyncSubscriber};
