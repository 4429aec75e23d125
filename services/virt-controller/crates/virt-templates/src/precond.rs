//! Fail-fast checks for caller contracts.
//!
//! A violated precondition is a bug in the caller, not a runtime condition,
//! so these helpers panic instead of returning an error.

use thiserror::Error;

/// A required input was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("contract violation: {field} must be set and non-empty")]
pub struct ContractViolation {
    pub field: &'static str,
}

/// Returns `value` if it is non-empty.
///
/// # Panics
///
/// Panics with a [`ContractViolation`] message if `value` is empty.
#[track_caller]
pub fn must_not_be_empty<'a>(value: &'a str, field: &'static str) -> &'a str {
    if value.is_empty() {
        violated(field);
    }
    value
}

/// Returns the contained value if it is present and non-empty.
///
/// # Panics
///
/// Panics with a [`ContractViolation`] message if `value` is `None` or empty.
#[track_caller]
pub fn must_be_present<'a>(value: Option<&'a str>, field: &'static str) -> &'a str {
    match value {
        Some(v) => must_not_be_empty(v, field),
        None => violated(field),
    }
}

#[track_caller]
fn violated(field: &'static str) -> ! {
    panic!("{}", ContractViolation { field })
}
