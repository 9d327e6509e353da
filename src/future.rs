//! Async bridging layer.
//!
//! Applies the combinator algebra when the `Optional` is the eventual result
//! of a pending computation, or when a callback starts one of its own. Two
//! layers:
//!
//! - async-callback operations on [`Optional`] itself (`map_async`,
//!   `or_else_async`, ...), each suspending at exactly one point;
//! - [`OptionalFuture`], blanket-implemented for every
//!   `Future<Output = Optional<T>>`, which awaits the source once and then
//!   delegates.
//!
//! `await` is the explicit flatten step: an async callback's future is
//! awaited and its output returned directly, so the bridge never produces a
//! future-of-future. Chained fallback steps stay lazy — a step's callback
//! runs only if every earlier step resolved absent. Panics from the source or
//! a callback propagate unchanged, and dropping the chain drops the source:
//! cancellation is never turned into absence and triggers no fallback.
//!
//! For data-driven fallback chains of arbitrary length, prefer the iterative
//! [`coalesce_async`], which polls at constant depth no matter how many
//! generators it is handed.

use core::future::Future;

use crate::convert::IntoOptional;
use crate::value::Optional;
use crate::value::Optional::{Absent, Present};

// =============================================================================
// Async-callback operations on Optional<T>
// =============================================================================

impl<T> Optional<T> {
    /// Maps the contained value through an asynchronous `mapper`, awaiting
    /// its result and re-applying the construction policy to it.
    ///
    /// When absent, `mapper` is not called and no suspension occurs.
    pub async fn map_async<U, R, F, Fut>(self, mapper: F) -> Optional<U>
    where
        R: IntoOptional<U>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Present(value) => mapper(value).await.into_optional(),
            Absent => Absent,
        }
    }

    /// Maps the contained value through an asynchronous `mapper` whose
    /// result is authoritative about presence.
    ///
    /// The awaited container is returned unchanged; the construction policy
    /// is not re-applied.
    pub async fn flat_map_async<U, F, Fut>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<U>>,
    {
        match self {
            Present(value) => mapper(value).await,
            Absent => Absent,
        }
    }

    /// Runs an asynchronous side effect on the value only when present, then
    /// returns the container unchanged.
    ///
    /// The returned future resolves only after `callback`'s future has fully
    /// completed. The callback receives a borrow; a future it returns must
    /// own its data (clone what it needs).
    pub async fn if_present_async<F, Fut>(self, callback: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Present(value) = &self {
            callback(value).await;
        }
        self
    }

    /// Runs an asynchronous side effect only when absent, then returns the
    /// container unchanged.
    pub async fn if_not_present_async<F, Fut>(self, callback: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Absent = &self {
            callback().await;
        }
        self
    }

    /// Returns the container unchanged when present; when absent, awaits the
    /// full replacement produced by `fallback`.
    ///
    /// `fallback` is invoked at most once, and never when a value is
    /// present.
    pub async fn or_else_async<F, Fut>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        match self {
            Present(value) => Present(value),
            Absent => fallback().await,
        }
    }

    /// Returns the contained value; when absent, awaits the substitute value
    /// produced by `fallback`.
    pub async fn unwrap_or_else_async<F, Fut>(self, fallback: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Present(value) => value,
            Absent => fallback().await,
        }
    }

    /// Returns the container itself when present; when absent, awaits the
    /// error produced by `make_error` and returns it by identity.
    pub async fn require_async<E, F, Fut>(self, make_error: F) -> Result<Self, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = E>,
    {
        match self {
            Present(value) => Ok(Present(value)),
            Absent => Err(make_error().await),
        }
    }
}

// =============================================================================
// OptionalFuture: combinators over pending computations
// =============================================================================

/// Combinator algebra over a pending computation that will eventually yield
/// an [`Optional`].
///
/// Blanket-implemented for every `Future<Output = Optional<T>>`, so a chain
/// reads the same as the synchronous one:
///
/// ```
/// use tola_opt::{Optional, OptionalFuture};
///
/// async fn primary() -> Optional<u32> {
///     Optional::empty()
/// }
///
/// # async fn demo() -> u32 {
/// primary()
///     .or_else(|| Optional::of(7))
///     .map(|v| v * 10)
///     .await
///     .value()
/// # }
/// ```
///
/// Each method awaits the source exactly once; steps of a chain execute
/// strictly in construction order, and a later step never begins before an
/// earlier step (side effects included) has fully resolved.
// Chains run on whatever executor the caller owns; no Send bound is promised.
#[allow(async_fn_in_trait)]
pub trait OptionalFuture<T>: Future<Output = Optional<T>> + Sized {
    /// Awaits the source, then maps the resulting value with
    /// [`Optional::map`].
    async fn map<U, R, F>(self, mapper: F) -> Optional<U>
    where
        R: IntoOptional<U>,
        F: FnOnce(T) -> R,
    {
        self.await.map(mapper)
    }

    /// Awaits the source, then maps with an asynchronous callback, awaiting
    /// its result in turn.
    async fn map_async<U, R, F, Fut>(self, mapper: F) -> Optional<U>
    where
        R: IntoOptional<U>,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        self.await.map_async(mapper).await
    }

    /// Awaits the source, then applies [`Optional::flat_map`].
    async fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.await.flat_map(mapper)
    }

    /// Awaits the source, then applies an asynchronous `flat_map`, flattening
    /// to a single pending computation.
    async fn flat_map_async<U, F, Fut>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<U>>,
    {
        self.await.flat_map_async(mapper).await
    }

    /// Awaits the source, runs `callback` when a value is present, and
    /// resolves to the original container.
    async fn if_present<F>(self, callback: F) -> Optional<T>
    where
        F: FnOnce(&T),
    {
        self.await.if_present(callback)
    }

    /// Awaits the source, runs an asynchronous `callback` to completion when
    /// a value is present, and only then resolves to the original container.
    async fn if_present_async<F, Fut>(self, callback: F) -> Optional<T>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.await.if_present_async(callback).await
    }

    /// Awaits the source, runs `callback` when absent, and resolves to the
    /// original container.
    async fn if_not_present<F>(self, callback: F) -> Optional<T>
    where
        F: FnOnce(),
    {
        self.await.if_not_present(callback)
    }

    /// Awaits the source, runs an asynchronous `callback` to completion when
    /// absent, and only then resolves to the original container.
    async fn if_not_present_async<F, Fut>(self, callback: F) -> Optional<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        self.await.if_not_present_async(callback).await
    }

    /// Awaits the source and, when it resolved absent, evaluates the
    /// replacement-producing `fallback`.
    ///
    /// In a chain of such steps, each fallback runs at most once and only if
    /// every preceding step resolved absent; the first present result
    /// short-circuits the rest of the chain's callbacks.
    async fn or_else<F>(self, fallback: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        self.await.or_else(fallback)
    }

    /// Awaits the source and, when it resolved absent, awaits the
    /// replacement produced by the asynchronous `fallback`.
    async fn or_else_async<F, Fut>(self, fallback: F) -> Optional<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Optional<T>>,
    {
        self.await.or_else_async(fallback).await
    }

    /// Awaits the source and returns its value, or `fallback` when absent.
    async fn unwrap_or(self, fallback: T) -> T {
        self.await.unwrap_or(fallback)
    }

    /// Awaits the source and returns its value, or the result of `fallback`
    /// when absent.
    async fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.unwrap_or_else(fallback)
    }

    /// Awaits the source and returns its value, or awaits the substitute
    /// produced by the asynchronous `fallback` when absent.
    async fn unwrap_or_else_async<F, Fut>(self, fallback: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.await.unwrap_or_else_async(fallback).await
    }

    /// Awaits the source, then applies [`Optional::require`].
    async fn require<E>(self, error: E) -> Result<Optional<T>, E> {
        self.await.require(error)
    }

    /// Awaits the source, then applies [`Optional::require_with`].
    async fn require_with<E, F>(self, make_error: F) -> Result<Optional<T>, E>
    where
        F: FnOnce() -> E,
    {
        self.await.require_with(make_error)
    }
}

impl<T, F> OptionalFuture<T> for F where F: Future<Output = Optional<T>> {}

// =============================================================================
// Iterative fallback chains
// =============================================================================

/// Awaits future-producing `generators` strictly in order and resolves to
/// the first present result.
///
/// Absent when every generator has been tried or the sequence is empty. Each
/// generator is invoked at most once, and none are invoked after the first
/// present result. The loop polls at constant depth, so chains of thousands
/// of fallbacks are fine.
pub async fn coalesce_async<T, I, F, Fut>(generators: I) -> Optional<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Optional<T>>,
{
    for generator in generators {
        let result = generator().await;
        if result.has_value() {
            return result;
        }
    }
    Absent
}
