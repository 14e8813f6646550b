use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::dispatcher::Dispatcher;
use crate::event_handler::impl_event_handler;
use crate::{EventError, Subscriber};

/// An event wrapping a function: firing notifies every subscriber with the arguments,
/// then calls the function and returns its result.
///
/// Multi-argument functions take their arguments as one tuple `A`; every observer
/// receives the whole packet.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use rs_evento::{EventHandler, SignatureEvent, Subscriber};
///
/// let double = SignatureEvent::new(|x: i32| x * 2);
/// let seen = Rc::new(Cell::new(0));
/// double.subscribe(Subscriber::new({
///     let seen = Rc::clone(&seen);
///     move |x: &i32| seen.set(*x)
/// }));
///
/// assert_eq!(double.fire(5), Ok(10));
/// assert_eq!(seen.get(), 5);
/// ```
pub struct SignatureEvent<A, R> {
    dispatcher: Rc<Dispatcher<Subscriber<A>>>,
    method: Rc<dyn Fn(A) -> R>,
}

impl<A, R> SignatureEvent<A, R> {
    /// Creates a new `SignatureEvent` around `method`.
    pub fn new<F>(method: F) -> Self
    where
        F: Fn(A) -> R + 'static,
    {
        Self {
            dispatcher: Rc::new(Dispatcher::new()),
            method: Rc::new(method),
        }
    }

    /// Notifies every subscriber with `args`, then calls the wrapped function with them.
    ///
    /// The wrapped function runs after the fire cycle has ended, so subscriptions changed
    /// by observers are already applied when it runs.
    ///
    /// # Returns
    /// * `Ok(R)` with the wrapped function's result, whatever the observers did.
    /// * `Err(EventError::Invocation)` if an observer failed. The wrapped function is not
    ///   called in that case.
    pub fn fire(&self, args: A) -> Result<R, EventError> {
        for subscriber in self.dispatcher.cycle() {
            subscriber.call(&args)?;
        }
        Ok((self.method)(args))
    }
}

impl_event_handler!(impl[A: 'static, R: 'static] SignatureEvent<A, R> => Subscriber<A>);

impl<A, R> Clone for SignatureEvent<A, R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Rc::clone(&self.dispatcher),
            method: Rc::clone(&self.method),
        }
    }
}

impl<A, R> Debug for SignatureEvent<A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureEvent")
            .field("id", &Rc::as_ptr(&self.dispatcher))
            .field("len", &self.dispatcher.count())
            .finish()
    }
}

impl<A, R> PartialEq for SignatureEvent<A, R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dispatcher, &other.dispatcher)
    }
}
impl<A, R> Eq for SignatureEvent<A, R> {}
