//! The untyped absence tag.
//!
//! `Empty` stands in for "absence, with no payload type attached yet". It is
//! a zero-sized tag, not a runtime singleton: the conversion into a typed
//! `Optional<T>` is resolved entirely at the call site's type.

use core::fmt;

use crate::value::Optional;

// =============================================================================
// Empty
// =============================================================================

/// Untyped absence, convertible into `Optional::<T>::empty()` for any `T`.
///
/// # Example
///
/// ```
/// use tola_opt::{Empty, Optional};
///
/// fn lookup(key: &str) -> Optional<u32> {
///     if key.is_empty() {
///         return Empty.into();
///     }
///     Optional::of(key.len() as u32)
/// }
///
/// assert!(!lookup("").has_value());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl<T> From<Empty> for Optional<T> {
    #[inline]
    fn from(_: Empty) -> Self {
        Optional::empty()
    }
}

// =============================================================================
// Comparisons against typed optionals
// =============================================================================

// Comparing a typed box against the untyped tag resolves via the presence
// flag only, never via value equality.

impl<T> PartialEq<Empty> for Optional<T> {
    #[inline]
    fn eq(&self, _: &Empty) -> bool {
        !self.has_value()
    }
}

impl<T> PartialEq<Optional<T>> for Empty {
    #[inline]
    fn eq(&self, other: &Optional<T>) -> bool {
        !other.has_value()
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Empty {
    /// The untyped tag is always empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Optional[Empty]")
    }
}
