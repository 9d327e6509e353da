//! Construction policy and conversions.
//!
//! [`IntoOptional`] is the single place where "does this raw value count as
//! absent?" is decided. The rule is applied once, at construction, and never
//! re-evaluated:
//!
//! - a plain value is **always present**, even when it equals the type's
//!   zero/default value — absence is an explicit, caller-controlled state,
//!   never inferred from a bit pattern;
//! - the "no object" forms construct an absent container: `Option::None` and
//!   the null raw pointer.

use core::ptr::NonNull;

use crate::value::Optional;
use crate::value::Optional::{Absent, Present};

// =============================================================================
// IntoOptional (construction policy)
// =============================================================================

/// Conversion of a raw value into an `Optional<T>` under the construction
/// policy.
///
/// This is the bound taken by [`Optional::of`] and re-applied by
/// [`map`](Optional::map) to the mapper's result, so a mapping step that
/// produces `None` lands on an absent container:
///
/// ```
/// use tola_opt::Optional;
///
/// let absent: Optional<String> = Optional::of("x").map(|_| None);
/// assert!(!absent.has_value());
/// ```
pub trait IntoOptional<T> {
    /// Applies the construction policy to `self`.
    fn into_optional(self) -> Optional<T>;
}

/// A plain value is always present.
impl<T> IntoOptional<T> for T {
    #[inline]
    fn into_optional(self) -> Optional<T> {
        Present(self)
    }
}

/// `None` is the "no object" sentinel; `Some` is present.
impl<T> IntoOptional<T> for Option<T> {
    #[inline]
    fn into_optional(self) -> Optional<T> {
        match self {
            Some(value) => Present(value),
            None => Absent,
        }
    }
}

/// A null raw pointer is the other "no object" sentinel: null constructs an
/// absent container, everything else a present [`NonNull`].
impl<T> IntoOptional<NonNull<T>> for *mut T {
    #[inline]
    fn into_optional(self) -> Optional<NonNull<T>> {
        match NonNull::new(self) {
            Some(ptr) => Present(ptr),
            None => Absent,
        }
    }
}

// =============================================================================
// Std option adapter
// =============================================================================

// Bidirectional, allocation-free bridge to `std::option::Option`. Absence
// maps to absence, presence to presence; values pass through unchanged and
// the construction policy is not re-applied.

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.into_optional()
    }
}

// The reverse direction must be Into: a From impl for Option<T> leaves the
// type parameter uncovered ahead of the first local type (E0210).
#[allow(clippy::from_over_into)]
impl<T> Into<Option<T>> for Optional<T> {
    #[inline]
    fn into(self) -> Option<T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }
}
