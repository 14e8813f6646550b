//! Before / after / around notifications for a wrapped function.
//!
//! Each hook owns one or two [`HookEvent`]s. A hook event passes *itself* as the payload
//! when fired, so an observer registered on both phases of an [`AroundHook`] can tell
//! them apart by comparing the payload with [`AroundHook::before`] or
//! [`AroundHook::after`].
//!
//! # Example
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use rs_evento::{AroundHook, HookEvent, Subscriber};
//!
//! let trail = Rc::new(RefCell::new(String::new()));
//! let action = AroundHook::new({
//!     let trail = Rc::clone(&trail);
//!     move |()| trail.borrow_mut().push('a')
//! });
//!
//! let observer = Subscriber::new({
//!     let trail = Rc::clone(&trail);
//!     let before = action.before().clone();
//!     move |phase: &HookEvent| {
//!         let mark = if *phase == before { "before-" } else { "-after" };
//!         trail.borrow_mut().push_str(mark);
//!     }
//! });
//! action.subscribe(observer.clone(), observer);
//!
//! action.call(()).unwrap();
//! assert_eq!(*trail.borrow(), "before-a-after");
//! ```

use std::ops::Deref;

use crate::{BroadcastEvent, EventError, EventHandler, Subscriber};

/// The event owned by a method hook.
///
/// Dereferences to the underlying [`BroadcastEvent`] for subscriber management. Two
/// `HookEvent`s are equal only if they are handles to the same event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HookEvent(BroadcastEvent<HookEvent>);

impl HookEvent {
    /// Creates a new hook event without subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the event with itself as the payload.
    pub fn fire(&self) -> Result<(), EventError> {
        self.0.fire(self)
    }
}

impl Deref for HookEvent {
    type Target = BroadcastEvent<HookEvent>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Fires [`before`](BeforeHook::before), then calls the wrapped function.
pub struct BeforeHook<A, R> {
    method: Box<dyn Fn(A) -> R>,
    before: HookEvent,
}

impl<A, R> BeforeHook<A, R> {
    pub fn new<F>(method: F) -> Self
    where
        F: Fn(A) -> R + 'static,
    {
        Self { method: Box::new(method), before: HookEvent::new() }
    }

    pub fn before(&self) -> &HookEvent {
        &self.before
    }

    pub fn subscribe(&self, observer: Subscriber<HookEvent>) -> &Self {
        self.before.subscribe(observer);
        self
    }

    pub fn unsubscribe(&self, observer: &Subscriber<HookEvent>) -> &Self {
        self.before.unsubscribe(observer);
        self
    }

    /// Notifies the `before` observers, then calls the wrapped function.
    ///
    /// An observer error is returned without calling the function.
    pub fn call(&self, args: A) -> Result<R, EventError> {
        self.before.fire()?;
        Ok((self.method)(args))
    }
}

/// Calls the wrapped function, then fires [`after`](AfterHook::after).
pub struct AfterHook<A, R> {
    method: Box<dyn Fn(A) -> R>,
    after: HookEvent,
}

impl<A, R> AfterHook<A, R> {
    pub fn new<F>(method: F) -> Self
    where
        F: Fn(A) -> R + 'static,
    {
        Self { method: Box::new(method), after: HookEvent::new() }
    }

    pub fn after(&self) -> &HookEvent {
        &self.after
    }

    pub fn subscribe(&self, observer: Subscriber<HookEvent>) -> &Self {
        self.after.subscribe(observer);
        self
    }

    pub fn unsubscribe(&self, observer: &Subscriber<HookEvent>) -> &Self {
        self.after.unsubscribe(observer);
        self
    }

    /// Calls the wrapped function, then notifies the `after` observers.
    ///
    /// An observer error is returned after the function has run; its result is dropped.
    pub fn call(&self, args: A) -> Result<R, EventError> {
        let result = (self.method)(args);
        self.after.fire()?;
        Ok(result)
    }
}

/// Fires [`before`](AroundHook::before), calls the wrapped function, then fires
/// [`after`](AroundHook::after).
pub struct AroundHook<A, R> {
    method: Box<dyn Fn(A) -> R>,
    before: HookEvent,
    after: HookEvent,
}

impl<A, R> AroundHook<A, R> {
    pub fn new<F>(method: F) -> Self
    where
        F: Fn(A) -> R + 'static,
    {
        Self {
            method: Box::new(method),
            before: HookEvent::new(),
            after: HookEvent::new(),
        }
    }

    pub fn before(&self) -> &HookEvent {
        &self.before
    }

    pub fn after(&self) -> &HookEvent {
        &self.after
    }

    /// Registers `before` on the before event and `after` on the after event in one call.
    pub fn subscribe(&self, before: Subscriber<HookEvent>, after: Subscriber<HookEvent>) -> &Self {
        self.before.subscribe(before);
        self.after.subscribe(after);
        self
    }

    pub fn unsubscribe(&self, before: &Subscriber<HookEvent>, after: &Subscriber<HookEvent>) -> &Self {
        self.before.unsubscribe(before);
        self.after.unsubscribe(after);
        self
    }

    pub fn call(&self, args: A) -> Result<R, EventError> {
        self.before.fire()?;
        let result = (self.method)(args);
        self.after.fire()?;
        Ok(result)
    }
}
