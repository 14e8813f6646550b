use std::rc::Rc;

/// Type alias for a shared event payload pointer.
///
/// Asynchronous observers each receive their own clone of the pointer, so a payload
/// is allocated once per fire no matter how many observers are awaited.
///
/// # Example
/// ```
/// use std::rc::Rc;
/// use rs_evento::EventPayload;
///
/// let payload: EventPayload<String> = Rc::new(String::from("Emitting value"));
/// let text: EventPayload<str> = Rc::from("Emitting slice");
/// ```
pub type EventPayload<T> = Rc<T>;

/// Type alias for the error an observer can hand back to the firing caller.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result every observer is normalized into before the dispatcher sees it.
pub type ObserverResult = Result<(), BoxError>;

/// Type alias for a synchronous observer callback pointer.
pub(crate) type Callback<T> = Rc<dyn Fn(&T) -> ObserverResult>;

/// Type alias for an asynchronous observer callback pointer.
#[cfg(feature = "async")]
pub(crate) type AsyncCallback<T> =
    Rc<dyn Fn(EventPayload<T>) -> futures::future::LocalBoxFuture<'static, ObserverResult>>;

/// Anything an observer may return.
///
/// Observers either return nothing, or a `Result<(), E>` whose error is forwarded to the
/// caller of `fire` and aborts the rest of that fire cycle.
///
/// # Example
/// ```
/// use rs_evento::{BroadcastEvent, EventHandler, Subscriber};
///
/// let event = BroadcastEvent::<u32>::new();
/// event.subscribe(Subscriber::new(|_: &u32| {}));
/// event.subscribe(Subscriber::new(|value: &u32| -> Result<(), String> {
///     if *value > 10 { Err(format!("{value} is too large")) } else { Ok(()) }
/// }));
///
/// assert!(event.fire(&3).is_ok());
/// assert!(event.fire(&11).is_err());
/// ```
pub trait ObserverOutput {
    /// Normalize the observer's return value.
    fn into_observer_result(self) -> ObserverResult;
}

impl ObserverOutput for () {
    #[inline]
    fn into_observer_result(self) -> ObserverResult {
        Ok(())
    }
}

impl<E: Into<BoxError>> ObserverOutput for Result<(), E> {
    #[inline]
    fn into_observer_result(self) -> ObserverResult {
        self.map_err(Into::into)
    }
}
