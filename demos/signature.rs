//! Example: Observing calls to a wrapped function
use rs_evento::{EventHandler, SignatureEvent, Subscriber};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let transfer = SignatureEvent::new(|(from, to, amount): (&'static str, &'static str, u64)| {
        format!("moved {amount} from {from} to {to}")
    });

    transfer.subscribe(Subscriber::new(|(from, to, amount): &(&'static str, &'static str, u64)| {
        println!("audit: {from} -> {to} ({amount})");
    }));
    transfer.subscribe(Subscriber::new(|(_, _, amount): &(&'static str, &'static str, u64)| {
        if *amount > 1_000 {
            Err(format!("transfer of {amount} needs approval"))
        } else {
            Ok(())
        }
    }));

    match transfer.fire(("alice", "bob", 250)) {
        Ok(receipt) => println!("{receipt}"),
        Err(err) => eprintln!("rejected: {err}"),
    }
    match transfer.fire(("alice", "bob", 5_000)) {
        Ok(receipt) => println!("{receipt}"),
        Err(err) => eprintln!("rejected: {err}"),
    }
}
