#![allow(dead_code)]

use std::error::Error;
use std::sync::Arc;

use rxr_lite::SignalError;

#[derive(Debug)]
pub struct CustomError;

impl CustomError {
    /// The error wrapped the way producers deliver it through `Observer::error`.
    pub fn signal() -> SignalError {
        Arc::new(CustomError)
    }
}

impl std::fmt::Display for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Custom error occurred")
    }
}

impl Error for CustomError {}
