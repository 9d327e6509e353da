//! Synchronous combinators.
//!
//! The transformation, inspection, and defaulting algebra on [`Optional`].
//! Every combinator is referentially transparent with respect to presence: a
//! callback tied to one of the two states runs exactly 0 or 1 times, never
//! more, and fallbacks are never evaluated when a value is present.

use crate::convert::IntoOptional;
use crate::value::Optional;
use crate::value::Optional::{Absent, Present};

impl<T> Optional<T> {
    // =========================================================================
    // Transformation
    // =========================================================================

    /// Maps the contained value through `mapper`, re-applying the
    /// construction policy to the result.
    ///
    /// When absent, `mapper` is not called. When present, the result goes
    /// through [`IntoOptional`] again, so mapping onto a "no object" form
    /// (e.g. `None`) yields an absent container.
    ///
    /// # Example
    ///
    /// ```
    /// use tola_opt::Optional;
    ///
    /// let len = Optional::of("four").map(str::len);
    /// assert_eq!(len, Optional::of(4));
    /// ```
    #[inline]
    pub fn map<U, R, F>(self, mapper: F) -> Optional<U>
    where
        R: IntoOptional<U>,
        F: FnOnce(T) -> R,
    {
        match self {
            Present(value) => mapper(value).into_optional(),
            Absent => Absent,
        }
    }

    /// Maps the contained value through `mapper`, which is itself
    /// authoritative about presence.
    ///
    /// When absent, `mapper` is not called. When present, the returned
    /// container is passed through unchanged — the construction policy is
    /// *not* re-applied.
    #[inline]
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Present(value) => mapper(value),
            Absent => Absent,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Calls `callback` with a borrow of the value only when present, then
    /// returns the container unchanged for further chaining.
    #[inline]
    pub fn if_present<F>(self, callback: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Present(value) = &self {
            callback(value);
        }
        self
    }

    /// Calls `callback` only when absent, then returns the container
    /// unchanged for further chaining.
    #[inline]
    pub fn if_not_present<F>(self, callback: F) -> Self
    where
        F: FnOnce(),
    {
        if let Absent = &self {
            callback();
        }
        self
    }

    // =========================================================================
    // Defaulting
    // =========================================================================

    /// Returns the contained value, or `fallback` when absent.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Present(value) => value,
            Absent => fallback,
        }
    }

    /// Returns the contained value, or the result of `fallback` when absent.
    ///
    /// `fallback` is evaluated at most once, and only on the absent path.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Present(value) => value,
            Absent => fallback(),
        }
    }

    /// Returns the container unchanged when present, or the full replacement
    /// produced by `fallback` when absent.
    ///
    /// The replacement may itself be absent.
    ///
    /// # Example
    ///
    /// ```
    /// use tola_opt::Optional;
    ///
    /// let cached: Optional<u32> = Optional::empty();
    /// let value = cached.or_else(|| Optional::of(42));
    /// assert_eq!(value, Optional::of(42));
    /// ```
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Present(value) => Present(value),
            Absent => fallback(),
        }
    }

    // =========================================================================
    // Raising
    // =========================================================================

    /// Returns the contained value, or `Err(error)` when absent.
    ///
    /// The caller's error is returned by identity — never wrapped, never
    /// replaced.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Present(value) => Ok(value),
            Absent => Err(error),
        }
    }

    /// Returns the contained value, or `Err(make_error())` when absent.
    ///
    /// `make_error` runs at most once, and only on the absent path.
    #[inline]
    pub fn ok_or_else<E, F>(self, make_error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Present(value) => Ok(value),
            Absent => Err(make_error()),
        }
    }

    /// Returns the container itself when present, or `Err(error)` when
    /// absent.
    ///
    /// Same raising contract as [`ok_or`](Self::ok_or), but yields the
    /// container back so a chain can continue after a `?`:
    ///
    /// ```
    /// use tola_opt::Optional;
    ///
    /// fn newest(versions: Optional<u32>) -> Result<u32, &'static str> {
    ///     let latest = versions.require("no versions published")?;
    ///     Ok(latest.map(|v| v + 1).value())
    /// }
    ///
    /// assert_eq!(newest(Optional::of(3)), Ok(4));
    /// assert_eq!(newest(Optional::empty()), Err("no versions published"));
    /// ```
    #[inline]
    pub fn require<E>(self, error: E) -> Result<Self, E> {
        match self {
            Present(value) => Ok(Present(value)),
            Absent => Err(error),
        }
    }

    /// Returns the container itself when present, or `Err(make_error())`
    /// when absent.
    #[inline]
    pub fn require_with<E, F>(self, make_error: F) -> Result<Self, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Present(value) => Ok(Present(value)),
            Absent => Err(make_error()),
        }
    }
}
