use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use crate::{BroadcastEvent, EventError, EventHandler, Subscriber};

type Log<T> = Rc<RefCell<Vec<T>>>;

/// Subscriber appending `(id, value)` to `log`
fn recorder(id: u8, log: &Log<(u8, i32)>) -> Subscriber<i32> {
    let log = Rc::clone(log);
    Subscriber::new(move |value: &i32| log.borrow_mut().push((id, *value)))
}

#[test]
fn fire_in_registration_order() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    for id in [3, 1, 2] {
        event.subscribe(recorder(id, &log));
    }

    event.fire(&7).unwrap();
    assert_eq!(*log.borrow(), vec![(3, 7), (1, 7), (2, 7)]);
}

#[test]
fn fire_without_subscribers() {
    let event = BroadcastEvent::<i32>::new();
    assert_eq!(event.fire(&1), Ok(()));
    assert_eq!(event.fire_count(), 1);
}

#[test]
fn subscribe_same_handle_twice() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    let observer = recorder(1, &log);

    event.subscribe(observer.clone()).subscribe(observer.clone());
    assert_eq!(event.count(), 1);

    event.fire(&1).unwrap();
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn same_closure_wrapped_twice_is_two_subscribers() {
    let event = BroadcastEvent::<i32>::new();
    let callback = |_: &i32| {};
    event.subscribe(Subscriber::new(callback));
    event.subscribe(Subscriber::new(callback));

    assert_eq!(event.count(), 2);
}

#[test]
fn subscribe_all_and_is_empty() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    assert!(event.is_empty());

    event.subscribe_all((1..=3).map(|id| recorder(id, &log)));
    assert_eq!(event.count(), 3);
    assert!(!event.is_empty());
}

#[test]
fn unsubscribe_unknown_is_not_fatal() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    event.subscribe(recorder(1, &log));

    event.unsubscribe(&recorder(2, &log));
    assert_eq!(event.count(), 1);

    event.fire(&4).unwrap();
    assert_eq!(*log.borrow(), vec![(1, 4)]);
}

#[test]
fn add_returns_unsubscribe_thunk() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    let observer = recorder(1, &log);

    let unsubscribe = event.add(observer.clone());
    assert!(event.contains(&observer));

    unsubscribe();
    assert!(!event.contains(&observer));
    event.fire(&1).unwrap();
    assert!(log.borrow().is_empty());
}

#[test]
fn operator_spellings() {
    let log = Log::default();
    let mut event = BroadcastEvent::<i32>::new();
    let observer = recorder(1, &log);

    event += observer.clone();
    assert!(event.contains(&observer));

    event -= observer.clone();
    assert!(!event.contains(&observer));
}

#[test]
fn clones_share_subscribers() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    let handle = event.clone();

    handle.subscribe(recorder(1, &log));
    assert_eq!(event.count(), 1);
    assert_eq!(event, handle);
    assert_ne!(event, BroadcastEvent::new());
}

/// obs2 removes obs1 while firing
#[test]
fn removal_during_fire_scenario() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();

    let first = recorder(1, &log);
    let second = Subscriber::new({
        let log = Rc::clone(&log);
        let event = event.clone();
        let first = first.clone();
        move |value: &i32| {
            log.borrow_mut().push((2, *value));
            event.unsubscribe(&first);
        }
    });
    event.subscribe(first).subscribe(second);

    event.fire(&1).unwrap();
    assert_eq!(*log.borrow(), vec![(1, 1), (2, 1)]);
    assert_eq!(event.count(), 1);

    event.fire(&2).unwrap();
    assert_eq!(*log.borrow(), vec![(1, 1), (2, 1), (2, 2)]);
}

#[test]
fn self_removal_applies_after_fire() {
    let calls = Rc::new(Cell::new(0));
    let counts = Rc::new(RefCell::new(Vec::new()));
    let event = BroadcastEvent::<()>::new();

    let slot: Rc<RefCell<Option<Subscriber<()>>>> = Rc::default();
    let observer = Subscriber::new({
        let calls = Rc::clone(&calls);
        let counts = Rc::clone(&counts);
        let event = event.clone();
        let slot = Rc::clone(&slot);
        move |_: &()| {
            calls.set(calls.get() + 1);
            if let Some(me) = slot.borrow().as_ref() {
                event.unsubscribe(me);
            }
            counts.borrow_mut().push(event.count());
        }
    });
    *slot.borrow_mut() = Some(observer.clone());
    event.subscribe(observer);

    event.fire(&()).unwrap();
    // still registered while its own fire is running
    assert_eq!(*counts.borrow(), vec![1]);
    assert_eq!(event.count(), 0);

    event.fire(&()).unwrap();
    assert_eq!(calls.get(), 1);
}

#[test]
fn addition_during_fire_runs_from_next_fire() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    let late = recorder(2, &log);

    event.subscribe(Subscriber::new({
        let log = Rc::clone(&log);
        let event = event.clone();
        move |value: &i32| {
            log.borrow_mut().push((1, *value));
            event.subscribe(late.clone());
        }
    }));

    event.fire(&1).unwrap();
    assert_eq!(*log.borrow(), vec![(1, 1)]);
    assert_eq!(event.count(), 2);

    event.fire(&2).unwrap();
    assert_eq!(*log.borrow(), vec![(1, 1), (1, 2), (2, 2)]);
}

/// An observer re-firing the event until the payload reaches four characters
#[test]
fn recursive_fire() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let event = BroadcastEvent::<str>::new();

    event.subscribe(Subscriber::new({
        let seen = Rc::clone(&seen);
        let event = event.clone();
        move |value: &str| -> Result<(), EventError> {
            seen.borrow_mut().push(value.to_string());
            if value.len() < 4 {
                assert!(event.is_firing());
                event.fire(&format!("{value}a"))?;
            }
            Ok(())
        }
    }));

    event.fire("a").unwrap();
    assert_eq!(*seen.borrow(), vec!["a", "aa", "aaa", "aaaa"]);
    assert!(!event.is_firing());
    assert_eq!(event.fire_count(), 4);
}

/// Subscribers added by a nested fire only run once the whole call tree has unwound
#[test]
fn nested_addition_is_deferred_to_outermost_fire() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    let late = recorder(9, &log);

    event.subscribe(Subscriber::new({
        let log = Rc::clone(&log);
        let event = event.clone();
        move |value: &i32| -> Result<(), EventError> {
            log.borrow_mut().push((1, *value));
            if *value == 0 {
                event.subscribe(late.clone());
                event.fire(&1)?;
            }
            Ok(())
        }
    }));

    event.fire(&0).unwrap();
    assert_eq!(*log.borrow(), vec![(1, 0), (1, 1)]);

    event.fire(&2).unwrap();
    assert_eq!(*log.borrow(), vec![(1, 0), (1, 1), (1, 2), (9, 2)]);
}

/// A removal requested from a nested fire is skipped by the resumed outer fire
#[test]
fn nested_removal_skips_in_outer_fire() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    let last = recorder(2, &log);

    event.subscribe(Subscriber::new({
        let log = Rc::clone(&log);
        let event = event.clone();
        let last = last.clone();
        move |value: &i32| -> Result<(), EventError> {
            log.borrow_mut().push((1, *value));
            if *value == 0 {
                event.fire(&1)?;
            } else {
                event.unsubscribe(&last);
            }
            Ok(())
        }
    }));
    event.subscribe(last.clone());

    event.fire(&0).unwrap();
    assert_eq!(*log.borrow(), vec![(1, 0), (1, 1)]);
    assert!(!event.contains(&last));
}

#[test]
fn observer_error_aborts_cycle() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    event.subscribe(recorder(1, &log));
    event.subscribe(Subscriber::new(|value: &i32| -> Result<(), String> {
        Err(format!("rejected {value}"))
    }));
    event.subscribe(recorder(3, &log));

    let err = event.fire(&5).unwrap_err();
    assert_eq!(err.to_string(), "rejected 5");
    assert_eq!(*log.borrow(), vec![(1, 5)]);
    assert!(!event.is_firing());
    assert_eq!(event.fire_count(), 1);
}

#[test]
fn observer_error_still_applies_queued_changes() {
    let log = Log::default();
    let event = BroadcastEvent::<i32>::new();
    let late = recorder(2, &log);

    event.subscribe(Subscriber::new({
        let event = event.clone();
        move |_: &i32| -> Result<(), &'static str> {
            event.subscribe(late.clone());
            Err("boom")
        }
    }));

    assert!(event.fire(&1).is_err());
    assert_eq!(event.count(), 2);
}

#[test]
fn panicking_observer_does_not_wedge_event() {
    let event = BroadcastEvent::<i32>::new();
    let panicking = Subscriber::new(|value: &i32| assert_eq!(*value, 0, "observer panicked"));
    event.subscribe(panicking.clone());

    let result = catch_unwind(AssertUnwindSafe(|| event.fire(&1)));
    assert!(result.is_err());
    assert!(!event.is_firing());

    event.unsubscribe(&panicking);
    assert!(event.is_empty());
}
