//! Error types shared by observables, observers and subscriptions.

use std::error::Error;
use std::sync::Arc;

/// Opaque error value a producer delivers through `Observer::error`.
///
/// Errors are reference counted so the same failure can be handed to the
/// subscriber and kept by the producer for logging without cloning the
/// underlying error.
pub type SignalError = Arc<dyn Error + Send + Sync + 'static>;
