//! The `observable` module provides the building blocks for creating observables
//! and subscribing to them.

use std::{error::Error, sync::Arc};

use tracing::{debug, trace};

use crate::errors::SignalError;
use crate::observer::{Lifecycle, Observer};
use crate::subscription::subscribe::{Subscribeable, Subscriber, Subscription, Teardown};

type SubscribeFn<T> = Box<dyn FnMut(Observer<T>) -> Teardown + Send + Sync>;

/// The `Observable` struct represents a source of values that can be observed.
///
/// An `Observable` is cold: it does nothing until subscribed, and every
/// subscription runs its subscribe function again with a fresh [`Observer`].
///
/// # Example: basic synchronous `Observable`
///
/// This `Observable` emits values and completes. It emits synchronously, so
/// `subscribe` returns only after every value has been delivered.
///
/// ```no_run
/// use rxr_lite::subscribe::{Subscriber, Teardown};
/// use rxr_lite::{Observable, Subscribeable, Unsubscribeable};
///
/// // Create a custom observable that emits values from 1 to 10.
/// let mut emit_10_observable = Observable::new(|mut observer| {
///     for i in 1..=10 {
///         // Emit the value to the subscriber.
///         observer.next(i);
///     }
///     // Signal completion to the subscriber.
///     observer.complete();
///
///     // Nothing to clean up.
///     Teardown::nil()
/// });
///
/// // Only `next` is required, `error` and `complete` can be added when needed.
/// let mut subscriber = Subscriber::on_next(|v| println!("Emitted {}", v));
/// subscriber.on_complete(|| println!("Completed"));
///
/// let subscription = emit_10_observable.subscribe(subscriber);
/// assert!(subscription.is_unsubscribed());
///
/// // Releases the teardown; calling it again is a no-op.
/// subscription.unsubscribe();
/// ```
///
/// # Example: `Observable` with error handling
///
/// Errors are delivered as a [`SignalError`] and always end the subscription,
/// whether or not the subscriber registered an `error` callback.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use rxr_lite::subscribe::{Subscriber, Teardown};
/// use rxr_lite::{Observable, Subscribeable};
///
/// let mut parsed = Observable::new(|mut observer| {
///     match "forty two".parse::<i32>() {
///         Ok(num) => {
///             observer.next(num);
///             observer.complete();
///         }
///         // Send parsing error to the observer.
///         Err(e) => observer.error(Arc::new(e)),
///     }
///     Teardown::nil()
/// });
///
/// parsed.subscribe(Subscriber::new(
///     |num| println!("You entered: {}", num),
///     |e| eprintln!("{}", e),
///     || println!("Input handled"),
/// ));
/// ```
pub struct Observable<T> {
    subscribe_fn: SubscribeFn<T>,
}

impl<T: 'static> Observable<T> {
    /// Creates a new `Observable` with the provided subscribe function.
    ///
    /// The subscribe function (`sf`) is invoked once per subscription with the
    /// `Observer` to push values into. It returns a [`Teardown`] that is run at
    /// most once, on the first `unsubscribe` of the returned `Subscription`.
    /// An `error` or `complete` signaled after the subscribe function returned
    /// runs it as well.
    pub fn new(sf: impl FnMut(Observer<T>) -> Teardown + Send + Sync + 'static) -> Self {
        Observable {
            subscribe_fn: Box::new(sf),
        }
    }

    /// Subscribes with a `Subscriber` built from the subscription handle itself.
    ///
    /// `make_subscriber` receives the `Subscription` before the subscribe
    /// function starts, so callbacks can capture it and cancel the subscription
    /// while values are still being emitted.
    ///
    /// ```no_run
    /// use rxr_lite::subscribe::Subscriber;
    /// use rxr_lite::{Observable, Unsubscribeable};
    ///
    /// let mut numbers = Observable::from(1..=100);
    ///
    /// numbers.subscribe_with(|subscription| {
    ///     Subscriber::on_next(move |v: i32| {
    ///         println!("{}", v);
    ///         if v == 3 {
    ///             // Nothing past 3 is delivered.
    ///             subscription.unsubscribe();
    ///         }
    ///     })
    /// });
    /// ```
    pub fn subscribe_with(
        &mut self,
        make_subscriber: impl FnOnce(Subscription) -> Subscriber<T>,
    ) -> Subscription {
        let lifecycle = Arc::new(Lifecycle::new());
        let subscription = Subscription::new(Arc::clone(&lifecycle));
        let observer = Observer::new(make_subscriber(subscription.clone()), Arc::clone(&lifecycle));

        trace!("subscribing");
        let teardown = (self.subscribe_fn)(observer);
        lifecycle.attach(teardown);

        subscription
    }
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    /// Creates an `Observable` that synchronously emits every item of `values`
    /// in order and then completes.
    ///
    /// The items are collected once; every subscription replays them from the
    /// start. Emission stops early if the subscription is cancelled from inside
    /// a callback.
    #[allow(clippy::should_implement_trait)]
    pub fn from(values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().collect();

        Observable::new(move |mut observer| {
            for value in &values {
                if observer.is_closed() {
                    break;
                }
                observer.next(value.clone());
            }
            observer.complete();

            Teardown::logic(|| debug!("unsubscribed"))
        })
    }

    /// Creates an `Observable` that emits the `Ok` items of `values` in order.
    ///
    /// The first `Err` is delivered through `error` and ends the emission;
    /// otherwise the observable completes after the last item.
    pub fn from_results<E>(values: impl IntoIterator<Item = Result<T, E>>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let values: Vec<Result<T, SignalError>> = values
            .into_iter()
            .map(|r| r.map_err(|e| Arc::new(e) as SignalError))
            .collect();

        Observable::new(move |mut observer| {
            for value in &values {
                if observer.is_closed() {
                    break;
                }
                match value {
                    Ok(v) => observer.next(v.clone()),
                    Err(e) => {
                        observer.error(Arc::clone(e));
                        return Teardown::nil();
                    }
                }
            }
            observer.complete();

            Teardown::nil()
        })
    }
}

impl<T: 'static> Subscribeable for Observable<T> {
    type ObsType = T;

    fn subscribe(&mut self, s: Subscriber<Self::ObsType>) -> Subscription {
        self.subscribe_with(|_| s)
    }
}

impl<T> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}
