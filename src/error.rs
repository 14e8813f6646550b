use thiserror::Error;

use crate::BoxError;

/// Errors that can occur in the event system.
///
/// - `UnknownSubscriber`: Tried to remove a subscriber that is not registered.
/// - `Invocation`: An observer failed while an event was being fired.
#[derive(Debug, Error)]
pub enum EventError {
    /// Removing Subscriber:
    /// - Trying to remove a subscriber that cannot be found in the registry.
    ///
    /// Events absorb this one and only log it; it surfaces from the registry itself.
    #[error("Subscriber not found")]
    UnknownSubscriber,

    /// Firing Event:
    /// - An observer returned an error. The boxed value is the observer's own error,
    ///   untouched, and can be recovered with `downcast`.
    #[error(transparent)]
    Invocation(#[from] BoxError),
}

impl EventError {
    /// Returns the observer's error if this is an [`EventError::Invocation`].
    ///
    /// # Example
    /// ```
    /// use rs_evento::{BroadcastEvent, EventError, EventHandler, Subscriber};
    ///
    /// let event = BroadcastEvent::<()>::new();
    /// event.subscribe(Subscriber::new(|_: &()| -> Result<(), std::fmt::Error> { Err(std::fmt::Error) }));
    ///
    /// let source = event.fire(&()).unwrap_err().into_source().unwrap();
    /// assert!(source.downcast::<std::fmt::Error>().is_ok());
    /// ```
    pub fn into_source(self) -> Option<BoxError> {
        match self {
            EventError::Invocation(source) => Some(source),
            EventError::UnknownSubscriber => None,
        }
    }
}

impl PartialEq for EventError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EventError::UnknownSubscriber, EventError::UnknownSubscriber) => true,
            (EventError::Invocation(a), EventError::Invocation(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
impl Eq for EventError {}
