use std::{fmt, sync::Arc};

use crate::errors::SignalError;
use crate::observer::Lifecycle;

/// A trait for types that can be subscribed to, allowing consumers to receive
/// values emitted by an observable stream.
pub trait Subscribeable {
    /// The type of items emitted by the observable stream.
    type ObsType;

    /// Subscribes to the observable stream and specifies how to handle emitted values.
    ///
    /// The `Subscriber` parameter defines the behavior for processing values emitted
    /// by the observable stream. The returned `Subscription` allows the consumer to
    /// cancel the subscription.
    fn subscribe(&mut self, s: Subscriber<Self::ObsType>) -> Subscription;
}

/// A trait for types that can be unsubscribed, releasing the resources associated
/// with a subscription and signaling the producer to stop emitting values.
pub trait Unsubscribeable {
    /// Unsubscribes and runs the teardown registered by the producer.
    ///
    /// Calling this more than once is allowed; the teardown runs only once.
    fn unsubscribe(&self);
}

pub(crate) type NextFn<T> = Box<dyn FnMut(T) + Send>;
pub(crate) type ErrorFn = Box<dyn FnOnce(SignalError) + Send>;
pub(crate) type CompleteFn = Box<dyn FnOnce() + Send>;

/// The set of callbacks a consumer supplies when subscribing to an `Observable`.
///
/// Every callback is optional. A missing callback turns the matching event into a
/// no-op; in particular, an error delivered to a `Subscriber` without an error
/// callback is dropped, although it still ends the subscription.
///
/// `error` and `complete` are `FnOnce` because at most one terminal event is ever
/// delivered.
pub struct Subscriber<NextFnType> {
    next_fn: Option<NextFn<NextFnType>>,
    error_fn: Option<ErrorFn>,
    complete_fn: Option<CompleteFn>,
}

impl<NextFnType> Subscriber<NextFnType> {
    /// Creates a new `Subscriber` instance with custom handling functions for emitted
    /// values, errors, and completion.
    pub fn new(
        next_fn: impl FnMut(NextFnType) + 'static + Send,
        error_fn: impl FnOnce(SignalError) + 'static + Send,
        complete_fn: impl FnOnce() + 'static + Send,
    ) -> Self {
        Subscriber {
            next_fn: Some(Box::new(next_fn)),
            error_fn: Some(Box::new(error_fn)),
            complete_fn: Some(Box::new(complete_fn)),
        }
    }

    /// Create a new Subscriber with the provided `next` function.
    ///
    /// The `next` closure is called when the observable emits a new item. It takes
    /// a parameter of type `NextFnType`, which is an item emitted by the observable.
    pub fn on_next(next_fn: impl FnMut(NextFnType) + 'static + Send) -> Self {
        Subscriber {
            next_fn: Some(Box::new(next_fn)),
            error_fn: None,
            complete_fn: None,
        }
    }

    /// Set the completion function for the Subscriber.
    ///
    /// The provided closure will be called when the observable completes its
    /// emission sequence.
    pub fn on_complete(&mut self, complete_fn: impl FnOnce() + 'static + Send) {
        self.complete_fn = Some(Box::new(complete_fn));
    }

    /// Set the error-handling function for the Subscriber.
    ///
    /// The provided closure will be called when the observable signals a failure.
    /// It receives the error as a [`SignalError`].
    pub fn on_error(&mut self, error_fn: impl FnOnce(SignalError) + 'static + Send) {
        self.error_fn = Some(Box::new(error_fn));
    }

    pub(crate) fn deliver_next(&mut self, v: NextFnType) {
        if let Some(nfn) = &mut self.next_fn {
            (nfn)(v);
        }
    }

    pub(crate) fn take_error_fn(&mut self) -> Option<ErrorFn> {
        self.error_fn.take()
    }

    pub(crate) fn take_complete_fn(&mut self) -> Option<CompleteFn> {
        self.complete_fn.take()
    }

    pub(crate) fn clear(&mut self) {
        self.next_fn = None;
        self.error_fn = None;
        self.complete_fn = None;
    }
}

impl<T> Default for Subscriber<T> {
    /// A `Subscriber` with no callbacks; every event is ignored.
    fn default() -> Self {
        Subscriber {
            next_fn: None,
            error_fn: None,
            complete_fn: None,
        }
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber")
            .field("next", &self.next_fn.is_some())
            .field("error", &self.error_fn.is_some())
            .field("complete", &self.complete_fn.is_some())
            .finish()
    }
}

/// Enumerates various unsubscribe logic options for a subscription.
pub enum UnsubscribeLogic {
    /// No specific unsubscribe logic.
    Nil,

    /// If one subscription depends on another. Wrapped subscription's unsubscribe
    /// will be called upon unsubscribing.
    Wrapped(Box<Subscription>),

    /// Unsubscribe logic defined by a function.
    Logic(Box<dyn FnOnce() + Send>),
}

impl UnsubscribeLogic {
    pub(crate) fn run(self) {
        match self {
            UnsubscribeLogic::Nil => (),
            UnsubscribeLogic::Logic(fnc) => fnc(),
            UnsubscribeLogic::Wrapped(subscription) => subscription.unsubscribe(),
        }
    }
}

impl fmt::Debug for UnsubscribeLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnsubscribeLogic::Nil => "Nil",
            UnsubscribeLogic::Wrapped(_) => "Wrapped",
            UnsubscribeLogic::Logic(_) => "Logic",
        };
        f.write_str(name)
    }
}

/// What an observable's subscribe function hands back once it has started
/// emitting: the cleanup to run when the consumer unsubscribes.
///
/// The cleanup runs at most once per subscription, on the first `unsubscribe`
/// after the subscribe function has returned. A subscription that ends with
/// `error` or `complete` after the subscribe function returned runs it right
/// away.
#[derive(Debug)]
pub struct Teardown {
    pub(crate) logic: UnsubscribeLogic,
}

impl Teardown {
    /// Creates a teardown with the given unsubscribe logic.
    #[must_use]
    pub fn new(logic: UnsubscribeLogic) -> Self {
        Teardown { logic }
    }

    /// A teardown that does nothing.
    #[must_use]
    pub fn nil() -> Self {
        Teardown::new(UnsubscribeLogic::Nil)
    }

    /// A teardown that runs `f` when the subscription is released.
    pub fn logic(f: impl FnOnce() + Send + 'static) -> Self {
        Teardown::new(UnsubscribeLogic::Logic(Box::new(f)))
    }
}

impl Default for Teardown {
    fn default() -> Self {
        Teardown::nil()
    }
}

impl From<UnsubscribeLogic> for Teardown {
    fn from(logic: UnsubscribeLogic) -> Self {
        Teardown::new(logic)
    }
}

impl From<Subscription> for Teardown {
    fn from(subscription: Subscription) -> Self {
        UnsubscribeLogic::Wrapped(Box::new(subscription)).into()
    }
}

/// Represents a subscription to an observable, allowing control over it.
///
/// A `Subscription` only exposes cancellation; values can only be pushed by the
/// producer through its `Observer`. Clones share the same underlying
/// subscription.
#[derive(Clone)]
pub struct Subscription {
    lifecycle: Arc<Lifecycle>,
}

impl Subscription {
    pub(crate) fn new(lifecycle: Arc<Lifecycle>) -> Self {
        Subscription { lifecycle }
    }

    /// Returns `true` once the subscription has ended, either by an explicit
    /// unsubscribe or by the observable signaling `error` or `complete`.
    #[must_use]
    pub fn is_unsubscribed(&self) -> bool {
        self.lifecycle.is_unsubscribed()
    }
}

impl Unsubscribeable for Subscription {
    fn unsubscribe(&self) {
        self.lifecycle.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("unsubscribed", &self.is_unsubscribed())
            .finish()
    }
}
