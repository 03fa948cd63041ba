//! `rxr-lite` is a minimal push-based reactive-stream library.
//!
//! An [`Observable`] describes how to produce values. Subscribing to it with a
//! [`Subscriber`](subscribe::Subscriber) runs the producer with a fresh
//! [`Observer`], which forwards `next`, `error` and `complete` signals to the
//! subscriber's callbacks. The returned [`Subscription`](subscribe::Subscription)
//! lets the consumer cancel the subscription; the first `unsubscribe` runs the
//! producer's teardown, later calls do nothing.
//!
//! ```no_run
//! use rxr_lite::subscribe::Subscriber;
//! use rxr_lite::{Observable, Subscribeable, Unsubscribeable};
//!
//! let mut numbers = Observable::from(vec![1, 2, 3]);
//!
//! let mut subscriber = Subscriber::on_next(|v: i32| println!("Emitted {}", v));
//! subscriber.on_complete(|| println!("Completed"));
//!
//! let subscription = numbers.subscribe(subscriber);
//! subscription.unsubscribe();
//! ```
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod errors;
pub mod observable;
pub mod observer;
pub mod request;
mod subscription;

pub use errors::*;
pub use observable::Observable;
pub use observer::Observer;
pub use subscription::subscribe;
pub use subscription::subscribe::{Subscribeable, Unsubscribeable};

use std::sync::{Mutex, MutexGuard, PoisonError};

// A panicking subscriber callback must not wedge the subscription state.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
