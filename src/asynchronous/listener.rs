use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::constants::{AsyncCallback, ObserverOutput, ObserverResult};
use crate::EventPayload;

/// A handle for an asynchronous observer callback.
///
/// The callback receives its own clone of the shared payload and returns a future, which
/// the firing event awaits before starting the next subscriber. Like [`Subscriber`],
/// handles are compared by identity.
///
/// [`Subscriber`]: crate::Subscriber
///
/// # Example
/// ```
/// use rs_evento::{AsyncSubscriber, EventPayload};
///
/// let printer = AsyncSubscriber::new(|payload: EventPayload<String>| async move {
///     println!("Got: {payload}");
/// });
/// # tokio_test::block_on(async {
/// printer.call(EventPayload::new("hello".to_string())).await.unwrap();
/// # })
/// ```
pub struct AsyncSubscriber<T: ?Sized> {
    callback: AsyncCallback<T>,
}

impl<T: ?Sized> AsyncSubscriber<T> {
    /// Wraps `callback` into a new subscriber handle.
    ///
    /// The future may resolve to `()` or a `Result<(), E>`; an `Err` aborts the fire
    /// cycle it happened in.
    pub fn new<F, Fut, O>(callback: F) -> Self
    where
        F: Fn(EventPayload<T>) -> Fut + 'static,
        Fut: Future<Output = O> + 'static,
        O: ObserverOutput + 'static,
    {
        Self {
            callback: Rc::new(move |payload: EventPayload<T>| {
                callback(payload)
                    .map(ObserverOutput::into_observer_result)
                    .boxed_local()
            }),
        }
    }

    /// Invoke the callback with the given payload. Nothing runs until the returned
    /// future is awaited.
    #[inline]
    pub fn call(&self, payload: EventPayload<T>) -> LocalBoxFuture<'static, ObserverResult> {
        (self.callback)(payload)
    }

    fn id(&self) -> *const () {
        Rc::as_ptr(&self.callback) as *const ()
    }
}

impl<T: ?Sized> Clone for AsyncSubscriber<T> {
    fn clone(&self) -> Self {
        Self { callback: Rc::clone(&self.callback) }
    }
}

impl<T: ?Sized> Debug for AsyncSubscriber<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncSubscriber").field("id", &self.id()).finish()
    }
}

impl<T: ?Sized> PartialEq for AsyncSubscriber<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
impl<T: ?Sized> Eq for AsyncSubscriber<T> {}

impl<T: ?Sized> Hash for AsyncSubscriber<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
