//! Example: Sensor sampling wrapped in before/after hooks
use std::cell::Cell;
use std::rc::Rc;

use rs_evento::{AroundHook, HookEvent, Subscriber};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let raw = Rc::new(Cell::new(40u32));
    let sample = AroundHook::new({
        let raw = Rc::clone(&raw);
        move |()| {
            raw.set(raw.get() + 2);
            raw.get()
        }
    });

    // One observer on both phases, told apart by identity
    let power = Subscriber::new({
        let before = sample.before().clone();
        move |phase: &HookEvent| {
            if *phase == before {
                println!("sensor powered on");
            } else {
                println!("sensor powered off");
            }
        }
    });
    sample.subscribe(power.clone(), power);

    for _ in 0..3 {
        let value = sample.call(()).unwrap();
        println!("sensor value: {value}");
    }
}
