use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::dispatcher::Dispatcher;
use crate::event_handler::impl_event_handler;
use crate::{AsyncSubscriber, EventError, EventPayload};

type AsyncMethod<A, R> = Rc<dyn Fn(EventPayload<A>) -> LocalBoxFuture<'static, R>>;

/// An event wrapping an asynchronous function: firing awaits every subscriber with the
/// arguments, one at a time, then awaits the function and resolves to its result.
///
/// # Example
/// ```
/// use rs_evento::{AsyncSignatureEvent, AsyncSubscriber, EventHandler, EventPayload};
///
/// let greet = AsyncSignatureEvent::new(|args: EventPayload<(u32, String)>| async move {
///     format!("{} #{}", args.1, args.0)
/// });
/// greet.subscribe(AsyncSubscriber::new(|args: EventPayload<(u32, String)>| async move {
///     assert_eq!(args.0, 1);
/// }));
///
/// # tokio_test::block_on(async {
/// let result = greet.fire((1u32, "Test".to_string())).await;
/// assert_eq!(result.unwrap(), "Test #1");
/// # })
/// ```
pub struct AsyncSignatureEvent<A, R> {
    dispatcher: Rc<Dispatcher<AsyncSubscriber<A>>>,
    method: AsyncMethod<A, R>,
}

impl<A, R> AsyncSignatureEvent<A, R> {
    /// Creates a new `AsyncSignatureEvent` around `method`.
    pub fn new<F, Fut>(method: F) -> Self
    where
        F: Fn(EventPayload<A>) -> Fut + 'static,
        Fut: Future<Output = R> + 'static,
    {
        Self {
            dispatcher: Rc::new(Dispatcher::new()),
            method: Rc::new(move |args: EventPayload<A>| method(args).boxed_local()),
        }
    }

    /// Awaits every subscriber with `args`, then awaits the wrapped function.
    ///
    /// # Returns
    /// * `Ok(R)` with the wrapped function's result.
    /// * `Err(EventError::Invocation)` if an observer failed. The wrapped function is not
    ///   called in that case.
    pub async fn fire(&self, args: impl Into<EventPayload<A>>) -> Result<R, EventError> {
        let args = args.into();
        for subscriber in self.dispatcher.cycle() {
            subscriber.call(Rc::clone(&args)).await?;
        }
        Ok((self.method)(args).await)
    }
}

impl_event_handler!(impl[A: 'static, R: 'static] AsyncSignatureEvent<A, R> => AsyncSubscriber<A>);

impl<A, R> Clone for AsyncSignatureEvent<A, R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Rc::clone(&self.dispatcher),
            method: Rc::clone(&self.method),
        }
    }
}

impl<A, R> Debug for AsyncSignatureEvent<A, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncSignatureEvent")
            .field("id", &Rc::as_ptr(&self.dispatcher))
            .field("len", &self.dispatcher.count())
            .finish()
    }
}

impl<A, R> PartialEq for AsyncSignatureEvent<A, R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dispatcher, &other.dispatcher)
    }
}
impl<A, R> Eq for AsyncSignatureEvent<A, R> {}
