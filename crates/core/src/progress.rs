//! Progress rollup rules for the cached `progress_percent` on projects
//! and tasks.
//!
//! The cached value is derived, not authoritative: a progress update only
//! ever raises it, never lowers it. The conditional write itself is issued
//! by the repository layer as a single atomic UPDATE; this module holds the
//! bounds validation and the raise decision so both are unit-testable.

use crate::error::CoreError;

/// Lower bound of a progress percentage.
pub const MIN_PROGRESS_PERCENT: i32 = 0;
/// Upper bound of a progress percentage.
pub const MAX_PROGRESS_PERCENT: i32 = 100;

/// Validate that a percentage is within `[0, 100]`.
pub fn validate_progress_percent(percent: i32) -> Result<(), CoreError> {
    if !(MIN_PROGRESS_PERCENT..=MAX_PROGRESS_PERCENT).contains(&percent) {
        return Err(CoreError::Validation(
            "Progress percentage must be between 0 and 100".to_string(),
        ));
    }
    Ok(())
}

/// Whether a submitted percentage should raise the parent's cached value.
///
/// Monotonic-increase policy: late-arriving or corrective updates with a
/// lower percentage leave the cache untouched.
pub fn should_raise_progress(current: i32, submitted: i32) -> bool {
    submitted > current
}
