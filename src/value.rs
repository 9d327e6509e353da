//! The core optional container.
//!
//! `Optional<T>` holds zero-or-one value of `T`. Its two states are `Present`
//! and `Absent`; absence is a first-class, error-free state, never a failure.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::convert::IntoOptional;
use crate::error::EmptyAccess;

// =============================================================================
// Optional<T>
// =============================================================================

/// A container holding either a present value of `T` or its deliberate absence.
///
/// `Optional` is a pure value: copying or moving it duplicates the state with
/// no side effects, and nothing about it is shared or mutable after
/// construction.
///
/// # Example
///
/// ```
/// use tola_opt::{Optional, Empty};
///
/// let name = Optional::of("Tola");
/// assert!(name.has_value());
///
/// let missing: Optional<&str> = Empty.into();
/// assert!(!missing.has_value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    Absent,
}

use self::Optional::{Absent, Present};

impl<T> Optional<T> {
    /// Wraps `value`, applying the construction policy exactly once.
    ///
    /// Plain values are always present, even when they equal the type's
    /// zero/default value. The "no object" forms construct an absent
    /// `Optional` instead: `Option::None` and the null raw pointer (see
    /// [`IntoOptional`]).
    ///
    /// # Example
    ///
    /// ```
    /// use tola_opt::Optional;
    ///
    /// assert!(Optional::of(0).has_value());
    /// assert!(!Optional::<i32>::of(None).has_value());
    /// ```
    #[inline]
    pub fn of(value: impl IntoOptional<T>) -> Self {
        value.into_optional()
    }

    /// The absent `Optional<T>`.
    ///
    /// Equal to every other absent `Optional<T>`, including ones obtained by
    /// converting the untyped [`Empty`](crate::Empty) tag.
    #[inline]
    pub const fn empty() -> Self {
        Absent
    }

    /// Returns true if this `Optional` contains a value, otherwise false.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Present(_))
    }

    /// Returns the value held inside this `Optional`.
    ///
    /// # Panics
    ///
    /// Panics with the [`EmptyAccess`] message when called on an absent
    /// `Optional`. Reading an absent value is a programmer error, not a
    /// recoverable condition; use [`try_value`](Self::try_value) or the
    /// combinators when absence is expected.
    #[inline]
    pub fn value(self) -> T {
        match self {
            Present(value) => value,
            Absent => panic!("{}", EmptyAccess::new::<T>()),
        }
    }

    /// Returns the value held inside this `Optional`, or [`EmptyAccess`] if
    /// it is absent.
    #[inline]
    pub fn try_value(self) -> Result<T, EmptyAccess> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(EmptyAccess::new::<T>()),
        }
    }

    /// Converts `&Optional<T>` to `Optional<&T>`, so combinators can run
    /// without consuming the container.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Converts `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }
}

// =============================================================================
// Default
// =============================================================================

impl<T> Default for Optional<T> {
    /// The default `Optional` is absent.
    #[inline]
    fn default() -> Self {
        Absent
    }
}

// =============================================================================
// Hashing
// =============================================================================

// Seed mixed in ahead of the presence flag so an absent box never collides
// with a bare `false`, and a present box never collides with its own payload.
const HASH_SEED: u64 = 486_187_739;

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_SEED.hash(state);
        match self {
            Present(value) => {
                true.hash(state);
                value.hash(state);
            }
            Absent => false.hash(state),
        }
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    /// Formats as `Optional[<value>]` when present and `Optional[Empty]` when
    /// absent. The exact format is part of the observable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Present(value) => write!(f, "Optional[{value}]"),
            Absent => f.write_str("Optional[Empty]"),
        }
    }
}
