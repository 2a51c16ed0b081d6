//! Scoped access to a slider from dependent controls.
//!
//! Thumbs, the track and value labels do not receive the slider explicitly.
//! The owner provides its handle for the duration of a closure and every
//! control built inside reads it back with [`use_range`].

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    sync::Arc,
};

use im::HashMap;

use crate::{domain::RangeDomain, error::ContextError, slider::RangeHandle};

type ContextMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

thread_local! {
    static RANGE_STACK: RefCell<Vec<ContextMap>> = RefCell::new(vec![ContextMap::new()]);
}

fn push_layer(type_id: TypeId, handle: Arc<dyn Any + Send + Sync>) {
    RANGE_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        let mut next = stack.last().cloned().unwrap_or_default();
        next.insert(type_id, handle);
        stack.push(next);
    });
}

fn pop_layer() {
    RANGE_STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        let popped = stack.pop();
        debug_assert!(popped.is_some(), "range context stack underflow");
        if stack.is_empty() {
            stack.push(ContextMap::new());
        }
    });
}

/// Makes `handle` visible to [`use_range`] while `f` runs.
///
/// Providers nest: an inner provider of the same mode shadows the outer one
/// until its closure returns. Sliders of different modes are independent.
pub fn provide_range<D, F, R>(handle: RangeHandle<D>, f: F) -> R
where
    D: RangeDomain,
    F: FnOnce() -> R,
{
    push_layer(TypeId::of::<D>(), handle);
    struct RangeScopeGuard;
    impl Drop for RangeScopeGuard {
        fn drop(&mut self) {
            pop_layer();
        }
    }
    let guard = RangeScopeGuard;
    let result = f();
    drop(guard);
    result
}

/// Reads the innermost provided slider of mode `D`.
pub fn try_use_range<D: RangeDomain>() -> Result<RangeHandle<D>, ContextError> {
    let found = RANGE_STACK.with(|stack| {
        stack
            .borrow()
            .last()
            .and_then(|layer| layer.get(&TypeId::of::<D>()).cloned())
    });
    found
        .and_then(|handle| handle.downcast().ok())
        .ok_or(ContextError::Missing { mode: D::MODE })
}

/// Reads the innermost provided slider of mode `D`.
///
/// # Panics
///
/// Panics when called outside [`provide_range`] for mode `D`. A thumb or
/// label without its slider is a wiring mistake, not a recoverable state.
pub fn use_range<D: RangeDomain>() -> RangeHandle<D> {
    try_use_range::<D>().unwrap_or_else(|err| panic!("{err}"))
}
