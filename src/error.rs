//! Error types.
//!
//! Absence itself is never an error; the only error this crate originates is
//! the programmer-error class raised by reading an absent container. Errors
//! supplied by callers (`ok_or`, `require`) are returned by identity, never
//! wrapped, and failures inside user callbacks propagate untouched.

use thiserror::Error;

/// Raised by [`value`](crate::Optional::value) and
/// [`try_value`](crate::Optional::try_value) when the container is absent.
///
/// Carries the payload type's name for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempted to read the value of an empty Optional<{type_name}>")]
pub struct EmptyAccess {
    type_name: &'static str,
}

impl EmptyAccess {
    #[inline]
    pub(crate) fn new<T>() -> Self {
        Self {
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Name of the payload type whose value was read while absent.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
