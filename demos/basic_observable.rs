//! This simple `Observable` emits values and completes. Its teardown only logs,
//! and it runs when the subscription is explicitly unsubscribed.
//!
//! To run this example, execute `cargo run --example basic_observable`.

use rxr_lite::subscribe::{Subscriber, Teardown};
use rxr_lite::{Observable, Subscribeable, Unsubscribeable};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a custom observable that emits values from 1 to 10.
    let mut emit_10_observable = Observable::new(|mut observer| {
        for i in 1..=10 {
            // Emit the value to the subscriber.
            observer.next(i);
        }

        // Signal completion to the subscriber.
        observer.complete();

        Teardown::logic(|| info!("torn down"))
    });

    // Create the `Subscriber` with a mandatory `next` function, and optional
    // `complete` function. No need for `error` function in this simple example.
    let mut observer = Subscriber::on_next(|v: i32| println!("Emitted {}", v));
    observer.on_complete(|| println!("Completed"));

    // This observable emits synchronously so it will block until it is done.
    // Observables are cold so if you comment out the line bellow nothing will be emitted.
    let subscription = emit_10_observable.subscribe(observer);

    // Runs the teardown. A second call would do nothing.
    subscription.unsubscribe();

    println!("Custom Observable finished emmiting")
}
