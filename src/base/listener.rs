use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::constants::{Callback, ObserverOutput, ObserverResult};

/// A handle for a synchronous observer callback.
///
/// `Subscriber<T>` is compared by identity: clones of a handle are the same subscriber,
/// while wrapping the same closure twice yields two different subscribers. Keep a clone
/// of the handle around to unsubscribe later.
///
/// # Examples
///
/// ```
/// use rs_evento::{BroadcastEvent, EventHandler, Subscriber};
///
/// let event = BroadcastEvent::<String>::new();
/// let printer = Subscriber::new(|payload: &String| println!("Got: {payload}"));
///
/// event.subscribe(printer.clone()).subscribe(printer.clone());
/// assert_eq!(event.count(), 1);
///
/// event.unsubscribe(&printer);
/// assert!(event.is_empty());
/// ```
pub struct Subscriber<T: ?Sized> {
    callback: Callback<T>,
}

impl<T: ?Sized> Subscriber<T> {
    /// Wraps `callback` into a new subscriber handle.
    ///
    /// The callback may return `()` or a `Result<(), E>`; an `Err` aborts the fire cycle
    /// it happened in and is handed back to the caller of `fire`.
    pub fn new<F, O>(callback: F) -> Self
    where
        F: Fn(&T) -> O + 'static,
        O: ObserverOutput,
    {
        Self {
            callback: Rc::new(move |payload: &T| callback(payload).into_observer_result()),
        }
    }

    /// Synchronously invoke the callback with the given payload.
    #[inline]
    pub fn call(&self, payload: &T) -> ObserverResult {
        (self.callback)(payload)
    }

    fn id(&self) -> *const () {
        Rc::as_ptr(&self.callback) as *const ()
    }
}

impl<T: ?Sized> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self { callback: Rc::clone(&self.callback) }
    }

    fn clone_from(&mut self, source: &Self) {
        self.callback = Rc::clone(&source.callback);
    }
}

impl<T: ?Sized> Debug for Subscriber<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber").field("id", &self.id()).finish()
    }
}

impl<T: ?Sized> PartialEq for Subscriber<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
impl<T: ?Sized> Eq for Subscriber<T> {}

impl<T: ?Sized> Hash for Subscriber<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
