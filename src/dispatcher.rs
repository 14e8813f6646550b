use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::registry::{PendingQueue, SubscriberRegistry};

/// The reentrant-safe core shared by every event variant.
///
/// Owns the registry, the pending mutation queues and the fire depth counter.
/// No `RefCell` borrow outlives a single method call, so observers may call back
/// into the dispatcher (subscribe, unsubscribe, fire again) while a cycle is active.
pub(crate) struct Dispatcher<S> {
    registry: RefCell<SubscriberRegistry<S>>,
    pending: RefCell<PendingQueue<S>>,
    depth: Cell<usize>,
    fire_count: Cell<u64>,
}

impl<S: Clone + PartialEq> Dispatcher<S> {
    pub(crate) fn new() -> Self {
        Self {
            registry: RefCell::new(SubscriberRegistry::new()),
            pending: RefCell::new(PendingQueue::default()),
            depth: Cell::new(0),
            fire_count: Cell::new(0),
        }
    }

    /// Registers `subscriber`, or queues it when a fire cycle is active.
    pub(crate) fn subscribe(&self, subscriber: S) {
        if self.registry.borrow().contains(&subscriber) {
            return;
        }
        if self.is_firing() {
            trace!(depth = self.depth.get(), "deferring subscribe until firing completes");
            self.pending.borrow_mut().to_add.push(subscriber);
        } else {
            self.registry.borrow_mut().add(subscriber);
        }
    }

    /// Removes `subscriber`, or queues the removal when a fire cycle is active.
    ///
    /// Removing an unknown subscriber is logged and otherwise ignored.
    pub(crate) fn unsubscribe(&self, subscriber: &S) {
        if self.is_firing() {
            trace!(depth = self.depth.get(), "deferring unsubscribe until firing completes");
            self.pending.borrow_mut().to_remove.push(subscriber.clone());
            return;
        }
        if let Err(err) = self.registry.borrow_mut().remove(subscriber) {
            warn!(%err, "got unknown subscriber to remove from event");
        }
    }

    #[inline]
    pub(crate) fn contains(&self, subscriber: &S) -> bool {
        self.registry.borrow().contains(subscriber)
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.registry.borrow().count()
    }

    #[inline]
    pub(crate) fn is_firing(&self) -> bool {
        self.depth.get() > 0
    }

    #[inline]
    pub(crate) fn fire_count(&self) -> u64 {
        self.fire_count.get()
    }

    /// Starts a fire cycle.
    ///
    /// The returned guard iterates the subscribers registered when the cycle started and
    /// ends the cycle when dropped, whether iteration finished, an observer failed or the
    /// stack is unwinding.
    pub(crate) fn cycle(&self) -> FireCycle<'_, S> {
        let depth = self.depth.get() + 1;
        self.depth.set(depth);
        let snapshot = self.registry.borrow().snapshot();
        trace!(depth, subscribers = snapshot.len(), "fire cycle started");
        FireCycle { dispatcher: self, snapshot, cursor: 0 }
    }

    /// Applies queued mutations: adds first, then removals, so that an add followed by a
    /// remove of the same subscriber within one firing leaves it absent.
    fn flush(&self) {
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        if pending.is_empty() {
            return;
        }
        debug!(
            queued_adds = pending.to_add.len(),
            queued_removals = pending.to_remove.len(),
            "applying deferred subscriber changes"
        );
        for subscriber in pending.to_add {
            self.subscribe(subscriber);
        }
        for subscriber in &pending.to_remove {
            self.unsubscribe(subscriber);
        }
    }
}

impl<S: Clone + PartialEq> Debug for Dispatcher<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let pending = self.pending.borrow();
        f.debug_struct("Dispatcher")
            .field("subscribers", &self.registry.borrow().count())
            .field("depth", &self.depth.get())
            .field("queued_adds", &pending.to_add.len())
            .field("queued_removals", &pending.to_remove.len())
            .finish()
    }
}

/// One active fire cycle of a [`Dispatcher`].
///
/// Yields the snapshot taken at cycle start, in registration order, skipping any
/// subscriber whose removal has been requested by this or any other active cycle.
pub(crate) struct FireCycle<'a, S: Clone + PartialEq> {
    dispatcher: &'a Dispatcher<S>,
    snapshot: Rc<Vec<S>>,
    cursor: usize,
}

impl<S: Clone + PartialEq> Iterator for FireCycle<'_, S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        while let Some(subscriber) = self.snapshot.get(self.cursor) {
            self.cursor += 1;
            // the removal may have been queued by a nested cycle
            if !self.dispatcher.pending.borrow().is_removing(subscriber) {
                return Some(subscriber.clone());
            }
        }
        None
    }
}

impl<S: Clone + PartialEq> Drop for FireCycle<'_, S> {
    fn drop(&mut self) {
        let dispatcher = self.dispatcher;
        let depth = dispatcher.depth.get() - 1;
        dispatcher.depth.set(depth);
        dispatcher.fire_count.set(dispatcher.fire_count.get() + 1);

        // only the outermost cycle applies queued mutations
        if depth == 0 {
            dispatcher.flush();
        }
    }
}
