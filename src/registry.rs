use std::rc::Rc;

use crate::EventError;

/// Insertion-ordered, duplicate-free collection of subscribers owned by one event.
///
/// Entries live behind a shared `Rc<Vec<S>>`. A fire cycle keeps a [`snapshot`] of it
/// while structural changes copy on write, so a held snapshot never changes.
///
/// [`snapshot`]: SubscriberRegistry::snapshot
pub(crate) struct SubscriberRegistry<S> {
    entries: Rc<Vec<S>>,
}

impl<S: Clone + PartialEq> SubscriberRegistry<S> {
    pub(crate) fn new() -> Self {
        Self { entries: Rc::new(Vec::new()) }
    }

    /// Appends `subscriber` unless it is already registered. Returns whether it was added.
    pub(crate) fn add(&mut self, subscriber: S) -> bool {
        if self.contains(&subscriber) {
            return false;
        }
        Rc::make_mut(&mut self.entries).push(subscriber);
        true
    }

    pub(crate) fn remove(&mut self, subscriber: &S) -> Result<(), EventError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry == subscriber)
            .ok_or(EventError::UnknownSubscriber)?;
        Rc::make_mut(&mut self.entries).remove(index);
        Ok(())
    }

    #[inline]
    pub(crate) fn contains(&self, subscriber: &S) -> bool {
        self.entries.contains(subscriber)
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.entries.len()
    }

    /// Shares the current ordering without copying the entries.
    #[inline]
    pub(crate) fn snapshot(&self) -> Rc<Vec<S>> {
        Rc::clone(&self.entries)
    }
}

/// Mutations requested while the owning event is firing.
pub(crate) struct PendingQueue<S> {
    pub(crate) to_add: Vec<S>,
    pub(crate) to_remove: Vec<S>,
}

impl<S: PartialEq> PendingQueue<S> {
    #[inline]
    pub(crate) fn is_removing(&self, subscriber: &S) -> bool {
        self.to_remove.contains(subscriber)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

impl<S> Default for PendingQueue<S> {
    fn default() -> Self {
        Self { to_add: Vec::new(), to_remove: Vec::new() }
    }
}
