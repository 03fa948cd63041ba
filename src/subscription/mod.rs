//! Provides structures and traits related to subscription management.
//!
//! This module includes `Subscriber`, the set of optional callbacks that handle
//! emitted values, errors and completion, `Teardown`, the cleanup an observable
//! hands back when it is subscribed, and `Subscription`, the handle a consumer
//! uses to cancel an active subscription.
pub mod subscribe;
