//! Example: GUI button click event
//!
//! Run with `RUST_LOG=trace` to see deferred subscriber changes being applied.
use rs_evento::{BroadcastEvent, EventHandler, Subscriber};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Click {
    label: &'static str,
    x: u16,
    y: u16,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let on_click = BroadcastEvent::<Click>::new();

    let printer = Subscriber::new(|click: &Click| {
        println!("{} clicked at ({}, {})", click.label, click.x, click.y);
    });

    // Position reports stop after the first click
    let tooltip = Subscriber::new({
        let on_click = on_click.clone();
        let printer = printer.clone();
        move |click: &Click| {
            println!("Tip: '{}' submits the form", click.label);
            on_click.unsubscribe(&printer);
        }
    });

    on_click.subscribe(printer).subscribe(tooltip);

    // Simulate button clicks
    on_click.fire(&Click { label: "OK", x: 12, y: 40 }).unwrap();
    on_click.fire(&Click { label: "OK", x: 14, y: 41 }).unwrap();
    println!("{} subscriber(s) left", on_click.count());
}
