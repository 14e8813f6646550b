/// Defines the contract shared by every event type: managing subscribers and
/// querying the firing state.
///
/// Firing itself is an inherent method on each event, since its argument and return
/// types differ between broadcast, signature-preserving and asynchronous events.
///
/// # Reentrancy
/// Every method may be called from inside an observer while the same event is firing.
/// Subscriptions and removals requested during a fire are queued and applied once the
/// outermost fire completes. A queued removal takes effect as a skip right away, in every
/// active fire of that event.
pub trait EventHandler {
    /// The subscriber handle this event accepts.
    type Subscriber: Clone + 'static;

    /// Registers `subscriber`. Subscribing an already registered handle is a no-op.
    ///
    /// Returns `self` for chaining.
    fn subscribe(&self, subscriber: Self::Subscriber) -> &Self;

    /// Registers every subscriber yielded by `subscribers`, in order.
    fn subscribe_all<I>(&self, subscribers: I) -> &Self
    where
        I: IntoIterator<Item = Self::Subscriber>,
    {
        for subscriber in subscribers {
            self.subscribe(subscriber);
        }
        self
    }

    /// Removes `subscriber`. An unknown subscriber is logged as a warning and ignored.
    ///
    /// Returns `self` for chaining.
    fn unsubscribe(&self, subscriber: &Self::Subscriber) -> &Self;

    /// Registers `subscriber` and returns a thunk that unsubscribes it.
    ///
    /// # Example
    /// ```
    /// use rs_evento::{BroadcastEvent, EventHandler, Subscriber};
    ///
    /// let event = BroadcastEvent::<u8>::new();
    /// let unsubscribe = event.add(Subscriber::new(|_: &u8| {}));
    /// assert_eq!(event.count(), 1);
    ///
    /// unsubscribe();
    /// assert_eq!(event.count(), 0);
    /// ```
    fn add(&self, subscriber: Self::Subscriber) -> Box<dyn FnOnce()>
    where
        Self: Clone + 'static,
    {
        self.subscribe(subscriber.clone());
        let event = self.clone();
        Box::new(move || {
            event.unsubscribe(&subscriber);
        })
    }

    /// Returns whether `subscriber` is currently registered. Pending changes are not
    /// taken into account.
    fn contains(&self, subscriber: &Self::Subscriber) -> bool;

    /// Number of currently registered subscribers.
    fn count(&self) -> usize;

    /// Returns `true` if no subscriber is registered.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns whether a fire of this event is in progress, nested fires included.
    fn is_firing(&self) -> bool;

    /// Number of fire cycles that have finished, nested cycles included.
    fn fire_count(&self) -> u64;
}

/// Implements [`EventHandler`] and the `+=` / `-=` spellings for an event type that
/// stores its dispatcher in a field named `dispatcher`.
macro_rules! impl_event_handler {
    (impl[$($generics:tt)*] $event:ty => $subscriber:ty) => {
        impl<$($generics)*> $crate::EventHandler for $event {
            type Subscriber = $subscriber;

            fn subscribe(&self, subscriber: $subscriber) -> &Self {
                self.dispatcher.subscribe(subscriber);
                self
            }

            fn unsubscribe(&self, subscriber: &$subscriber) -> &Self {
                self.dispatcher.unsubscribe(subscriber);
                self
            }

            fn contains(&self, subscriber: &$subscriber) -> bool {
                self.dispatcher.contains(subscriber)
            }

            fn count(&self) -> usize {
                self.dispatcher.count()
            }

            fn is_firing(&self) -> bool {
                self.dispatcher.is_firing()
            }

            fn fire_count(&self) -> u64 {
                self.dispatcher.fire_count()
            }
        }

        impl<$($generics)*> ::std::ops::AddAssign<$subscriber> for $event {
            fn add_assign(&mut self, subscriber: $subscriber) {
                self.dispatcher.subscribe(subscriber);
            }
        }

        impl<$($generics)*> ::std::ops::SubAssign<$subscriber> for $event {
            fn sub_assign(&mut self, subscriber: $subscriber) {
                self.dispatcher.unsubscribe(&subscriber);
            }
        }
    };
}

pub(crate) use impl_event_handler;
