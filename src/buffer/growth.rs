//! Capacity policy shared by line storage and the row array.
//!
//! Capacity doubles from a baseline of [`MIN_CAPACITY`] until the requested
//! length fits. Growth goes through `try_reserve_exact` so that allocation
//! failure comes back as [`EditError::ResourceExhausted`] instead of aborting.

use crate::error::{EditError, Result};

/// Smallest non-zero capacity ever allocated.
pub const MIN_CAPACITY: usize = 8;

/// Compute the capacity to grow to so that `required` elements fit.
///
/// Returns `current` unchanged when it is already large enough.
pub fn next_capacity(current: usize, required: usize) -> Result<usize> {
    let mut cap = current;
    while cap < required {
        cap = cap
            .checked_mul(2)
            .map(|doubled| doubled.max(MIN_CAPACITY))
            .ok_or(EditError::ResourceExhausted { requested: required, source: None })?;
    }
    Ok(cap)
}

/// Make room for `additional` more elements in `vec`.
///
/// Nothing is allocated when the current capacity suffices.
pub fn reserve<T>(vec: &mut Vec<T>, additional: usize) -> Result<()> {
    let required = vec
        .len()
        .checked_add(additional)
        .ok_or(EditError::ResourceExhausted { requested: usize::MAX, source: None })?;
    if required <= vec.capacity() {
        return Ok(());
    }

    let target = next_capacity(vec.capacity(), required)?;
    vec.try_reserve_exact(target - vec.len()).map_err(|source| {
        tracing::error!(requested = target, "allocation failed while growing buffer");
        EditError::ResourceExhausted { requested: target, source: Some(source) }
    })?;
    tracing::trace!(from = required - additional, to = vec.capacity(), "grew buffer");
    Ok(())
}
