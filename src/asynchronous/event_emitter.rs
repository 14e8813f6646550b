use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::dispatcher::Dispatcher;
use crate::event_handler::impl_event_handler;
use crate::{AsyncSubscriber, EventError, EventPayload};

/// An event that broadcasts a single value to asynchronous subscribers, awaiting them one
/// at a time.
///
/// Subscriber N+1 is not started before subscriber N's future has completed, so delivery
/// order is registration order regardless of how long each observer takes. There is no
/// concurrent fan-out, no timeout and no cancellation. A subscriber that never completes
/// stalls the fire.
///
/// # Example
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use rs_evento::{AsyncBroadcastEvent, AsyncSubscriber, EventHandler, EventPayload};
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let event = AsyncBroadcastEvent::<u32>::new();
/// for id in 1..=2 {
///     let log = Rc::clone(&log);
///     event.subscribe(AsyncSubscriber::new(move |value: EventPayload<u32>| {
///         let log = Rc::clone(&log);
///         async move { log.borrow_mut().push((id, *value)) }
///     }));
/// }
///
/// # tokio_test::block_on(async {
/// event.fire(7u32).await.unwrap();
/// # });
/// assert_eq!(*log.borrow(), vec![(1, 7), (2, 7)]);
/// ```
pub struct AsyncBroadcastEvent<T: ?Sized> {
    dispatcher: Rc<Dispatcher<AsyncSubscriber<T>>>,
}

impl<T: ?Sized> AsyncBroadcastEvent<T> {
    /// Creates a new `AsyncBroadcastEvent<T>` without subscribers.
    pub fn new() -> Self {
        Self { dispatcher: Rc::new(Dispatcher::new()) }
    }

    /// Awaits every subscriber with `value`, sequentially, in registration order.
    ///
    /// Dropping the returned future before completion ends the fire cycle as well, so the
    /// event never stays in its firing state.
    ///
    /// # Returns
    /// * `Ok(())` once every subscriber has completed.
    /// * `Err(EventError::Invocation)` with the first observer error. Later subscribers are
    ///   not started.
    pub async fn fire(&self, value: impl Into<EventPayload<T>>) -> Result<(), EventError> {
        let payload = value.into();
        for subscriber in self.dispatcher.cycle() {
            subscriber.call(Rc::clone(&payload)).await?;
        }
        Ok(())
    }
}

impl_event_handler!(impl[T: ?Sized + 'static] AsyncBroadcastEvent<T> => AsyncSubscriber<T>);

impl<T: ?Sized> Clone for AsyncBroadcastEvent<T> {
    fn clone(&self) -> Self {
        Self { dispatcher: Rc::clone(&self.dispatcher) }
    }
}

impl<T: ?Sized> Default for AsyncBroadcastEvent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Debug for AsyncBroadcastEvent<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncBroadcastEvent")
            .field("id", &Rc::as_ptr(&self.dispatcher))
            .field("len", &self.dispatcher.count())
            .finish()
    }
}

impl<T: ?Sized> PartialEq for AsyncBroadcastEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dispatcher, &other.dispatcher)
    }
}
impl<T: ?Sized> Eq for AsyncBroadcastEvent<T> {}
