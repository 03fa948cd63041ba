#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use rxr_lite::subscribe::Subscriber;

/// Signals recorded by [`register_emissions_subscriber`], in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission<T> {
    Next(T),
    Error(String),
    Complete,
}

pub type Emissions<T> = Arc<Mutex<Vec<Emission<T>>>>;

/// Builds a `Subscriber` with all three callbacks that records every signal it
/// receives into the returned log.
pub fn register_emissions_subscriber<T: Send + 'static>() -> (Subscriber<T>, Emissions<T>) {
    let emissions: Emissions<T> = Arc::new(Mutex::new(Vec::with_capacity(5)));
    let nexts_c = Arc::clone(&emissions);
    let errors_c = Arc::clone(&emissions);
    let completes_c = Arc::clone(&emissions);

    let subscriber = Subscriber::new(
        move |n| {
            // Track next() calls.
            nexts_c.lock().unwrap().push(Emission::Next(n));
        },
        move |e| {
            // Track error() calls.
            errors_c.lock().unwrap().push(Emission::Error(e.to_string()));
        },
        move || {
            // Track complete() calls.
            completes_c.lock().unwrap().push(Emission::Complete);
        },
    );
    (subscriber, emissions)
}
