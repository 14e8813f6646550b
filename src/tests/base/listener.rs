use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::Subscriber;

#[test]
fn subscriber_call_forwards_payload() {
    let total = Rc::new(Cell::new(0));
    let subscriber = Subscriber::new({
        let total = Rc::clone(&total);
        move |value: &u32| total.set(total.get() + value)
    });

    subscriber.call(&2).unwrap();
    subscriber.call(&40).unwrap();
    assert_eq!(total.get(), 42);
}

#[test]
fn subscriber_call_returns_observer_error() {
    let subscriber = Subscriber::new(|value: &u32| -> Result<(), String> {
        Err(format!("bad value {value}"))
    });

    let err = subscriber.call(&3).unwrap_err();
    assert_eq!(err.to_string(), "bad value 3");
}

#[test]
fn subscriber_clone_and_eq() {
    let first = Subscriber::new(|_: &u8| {});
    let second = Subscriber::new(|_: &u8| {});

    assert_eq!(first, first.clone());
    assert_ne!(first, second);
}

#[test]
fn subscriber_hash_follows_identity() {
    let first = Subscriber::new(|_: &u8| {});
    let second = Subscriber::new(|_: &u8| {});

    let mut set = HashSet::new();
    set.insert(first.clone());
    set.insert(first.clone());
    set.insert(second);

    assert_eq!(set.len(), 2);
    assert!(set.contains(&first));
}

#[test]
fn subscriber_debug_shows_identity() {
    let subscriber = Subscriber::new(|_: &u8| {});
    let output = format!("{subscriber:?}");

    assert!(output.starts_with("Subscriber"));
    assert_eq!(output, format!("{:?}", subscriber.clone()));
}
