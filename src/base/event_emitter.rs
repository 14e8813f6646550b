use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::dispatcher::Dispatcher;
use crate::event_handler::impl_event_handler;
use crate::{EventError, Subscriber};

/// An event that broadcasts a single value to every subscriber.
///
/// `BroadcastEvent<T>` is a cheap-clone handle: clones share one registry, so an
/// observer can capture a clone to subscribe, unsubscribe or fire again while the event
/// is firing.
///
/// # Type Parameters
/// * `T` - The payload type observers receive by reference. May be unsized (`str`, `[u8]`).
///
/// # Implementation Notes
/// - Subscribers are stored in registration order and invoked in that order.
/// - Changes requested during a fire are deferred until the outermost fire returns.
/// - Equality is identity: two handles are equal if they share the same registry.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use rs_evento::{BroadcastEvent, EventHandler, Subscriber};
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let event = BroadcastEvent::<i32>::new();
///
/// let first = Subscriber::new({
///     let log = Rc::clone(&log);
///     move |value: &i32| log.borrow_mut().push((1, *value))
/// });
/// let second = Subscriber::new({
///     let log = Rc::clone(&log);
///     let event = event.clone();
///     let first = first.clone();
///     move |value: &i32| {
///         log.borrow_mut().push((2, *value));
///         event.unsubscribe(&first);
///     }
/// });
/// event.subscribe(first).subscribe(second);
///
/// event.fire(&1).unwrap();
/// assert_eq!(*log.borrow(), vec![(1, 1), (2, 1)]);
/// assert_eq!(event.count(), 1);
///
/// event.fire(&2).unwrap();
/// assert_eq!(*log.borrow(), vec![(1, 1), (2, 1), (2, 2)]);
/// ```
pub struct BroadcastEvent<T: ?Sized> {
    dispatcher: Rc<Dispatcher<Subscriber<T>>>,
}

impl<T: ?Sized> BroadcastEvent<T> {
    /// Creates a new `BroadcastEvent<T>` without subscribers.
    pub fn new() -> Self {
        Self { dispatcher: Rc::new(Dispatcher::new()) }
    }

    /// Invokes every subscriber with `value`, in registration order.
    ///
    /// # Returns
    /// * `Ok(())` once every subscriber has run.
    /// * `Err(EventError::Invocation)` with the first observer error. Subscribers after
    ///   the failing one are not invoked for this fire.
    pub fn fire(&self, value: &T) -> Result<(), EventError> {
        for subscriber in self.dispatcher.cycle() {
            subscriber.call(value)?;
        }
        Ok(())
    }
}

impl_event_handler!(impl[T: ?Sized + 'static] BroadcastEvent<T> => Subscriber<T>);

impl<T: ?Sized> Clone for BroadcastEvent<T> {
    fn clone(&self) -> Self {
        Self { dispatcher: Rc::clone(&self.dispatcher) }
    }
}

impl<T: ?Sized> Default for BroadcastEvent<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Debug for BroadcastEvent<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastEvent")
            .field("id", &Rc::as_ptr(&self.dispatcher))
            .field("len", &self.dispatcher.count())
            .finish()
    }
}

impl<T: ?Sized> PartialEq for BroadcastEvent<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dispatcher, &other.dispatcher)
    }
}
impl<T: ?Sized> Eq for BroadcastEvent<T> {}
