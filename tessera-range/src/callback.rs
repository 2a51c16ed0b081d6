//! Change notification handle.
//!
//! ## Usage
//!
//! Register a [`ChangeCallback`] through the slider args; it is invoked
//! synchronously after every committed update.

use std::{fmt, sync::Arc};

use crate::store::RangeValues;

/// Stable, comparable handle for the selection change observer.
///
/// `ChangeCallback` compares by identity (`Arc::ptr_eq`) so args carrying it
/// stay comparable without comparing closures.
#[derive(Clone)]
pub struct ChangeCallback {
    handler: Arc<dyn Fn(RangeValues) + Send + Sync>,
}

impl ChangeCallback {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(RangeValues) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with the current selection.
    pub fn call(&self, values: RangeValues) {
        (self.handler)(values);
    }
}

impl<F> From<F> for ChangeCallback
where
    F: Fn(RangeValues) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for ChangeCallback {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl PartialEq for ChangeCallback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for ChangeCallback {}

impl fmt::Debug for ChangeCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeCallback").finish_non_exhaustive()
    }
}
