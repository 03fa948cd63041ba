//! The producer-side end of a subscription.
//!
//! An [`Observer`] is created for every `subscribe` call and handed to the
//! observable's subscribe function. It forwards values to the consumer's
//! [`Subscriber`] callbacks until the subscription reaches its terminal state,
//! after which every signal is ignored.

use std::{
    mem,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use tracing::{debug, trace};

use crate::errors::SignalError;
use crate::lock;
use crate::subscription::subscribe::{Subscriber, Teardown, UnsubscribeLogic, Unsubscribeable};

enum TeardownSlot {
    // Subscribe function has not returned yet.
    Pending,
    // Unsubscribed before the subscribe function returned.
    Requested,
    Attached(UnsubscribeLogic),
    Released,
}

/// State shared between an `Observer` and every `Subscription` handle for it.
pub(crate) struct Lifecycle {
    // No further signal is delivered once set. Closed before a terminal
    // callback runs so the callback cannot trigger a second terminal event.
    closed: AtomicBool,
    unsubscribed: AtomicBool,
    teardown: Mutex<TeardownSlot>,
}

impl Lifecycle {
    pub(crate) fn new() -> Self {
        Lifecycle {
            closed: AtomicBool::new(false),
            unsubscribed: AtomicBool::new(false),
            teardown: Mutex::new(TeardownSlot::Pending),
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    pub(crate) fn is_unsubscribed(&self) -> bool {
        self.unsubscribed.load(Ordering::Acquire)
    }

    /// Closes the signal gate. Returns `true` only for the call that closed it.
    pub(crate) fn close(&self) -> bool {
        !self.closed.swap(true, Ordering::AcqRel)
    }

    /// Explicit unsubscribe from the consumer or the producer.
    pub(crate) fn unsubscribe(&self) {
        self.end(true);
    }

    /// Ends the subscription after `error` or `complete`.
    ///
    /// A teardown that is already attached is released. While the subscribe
    /// function is still running the teardown is left for the first explicit
    /// `unsubscribe`.
    pub(crate) fn terminate(&self) {
        self.end(false);
    }

    fn end(&self, explicit: bool) {
        self.closed.store(true, Ordering::Release);
        if !self.unsubscribed.swap(true, Ordering::AcqRel) {
            debug!("subscription unsubscribed");
        }

        let logic = {
            let mut slot = lock(&self.teardown);
            match mem::replace(&mut *slot, TeardownSlot::Released) {
                TeardownSlot::Attached(logic) => Some(logic),
                TeardownSlot::Pending if explicit => {
                    *slot = TeardownSlot::Requested;
                    None
                }
                pending @ (TeardownSlot::Pending | TeardownSlot::Requested) => {
                    *slot = pending;
                    None
                }
                TeardownSlot::Released => None,
            }
        };
        if let Some(logic) = logic {
            Self::release(logic);
        }
    }

    /// Stores the teardown returned by the subscribe function. If the
    /// subscription was unsubscribed while the subscribe function was running
    /// the teardown is released right away.
    pub(crate) fn attach(&self, teardown: Teardown) {
        let mut slot = lock(&self.teardown);
        match mem::replace(&mut *slot, TeardownSlot::Released) {
            TeardownSlot::Pending => *slot = TeardownSlot::Attached(teardown.logic),
            TeardownSlot::Requested => {
                drop(slot);
                Self::release(teardown.logic);
            }
            previous => *slot = previous,
        }
    }

    fn release(logic: UnsubscribeLogic) {
        trace!(logic = ?logic, "running teardown");
        logic.run();
    }
}

/// Receives the signals of a single subscription and forwards them to the
/// consumer's [`Subscriber`].
///
/// `error` and `complete` are terminal: once either has been called, or the
/// subscription was cancelled, the observer ignores every further signal.
pub struct Observer<T> {
    handlers: Subscriber<T>,
    lifecycle: Arc<Lifecycle>,
}

impl<T> Observer<T> {
    pub(crate) fn new(handlers: Subscriber<T>, lifecycle: Arc<Lifecycle>) -> Self {
        Observer {
            handlers,
            lifecycle,
        }
    }

    /// Delivers `value` to the `next` callback, if the subscription is still
    /// active and the callback exists.
    pub fn next(&mut self, value: T) {
        if self.lifecycle.is_closed() {
            return;
        }
        trace!("delivering next");
        self.handlers.deliver_next(value);
    }

    /// Delivers `observable_error` to the `error` callback, if present, and
    /// ends the subscription.
    pub fn error(&mut self, observable_error: SignalError) {
        if !self.lifecycle.close() {
            return;
        }
        debug!(error = %observable_error, "observable errored");
        if let Some(efn) = self.handlers.take_error_fn() {
            (efn)(observable_error);
        }
        self.handlers.clear();
        self.lifecycle.terminate();
    }

    /// Calls the `complete` callback, if present, and ends the subscription.
    pub fn complete(&mut self) {
        if !self.lifecycle.close() {
            return;
        }
        debug!("observable completed");
        if let Some(cfn) = self.handlers.take_complete_fn() {
            (cfn)();
        }
        self.handlers.clear();
        self.lifecycle.terminate();
    }

    /// Returns `true` once the subscription has ended.
    #[must_use]
    pub fn is_unsubscribed(&self) -> bool {
        self.lifecycle.is_unsubscribed()
    }

    /// Returns `true` when signals are no longer delivered. Producers can poll
    /// this to stop emitting early.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lifecycle.is_closed()
    }
}

impl<T> Unsubscribeable for Observer<T> {
    fn unsubscribe(&self) {
        self.lifecycle.unsubscribe();
    }
}
