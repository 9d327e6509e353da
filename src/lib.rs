#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std
// - async: enables the async bridging layer

//! # tola-opt
//!
//! Optional value algebra with combinator chaining and async bridging.
//!
//! **A present-or-absent container, without the null checks.**
//!
//! ## Architecture
//!
//! `tola-opt` models "zero-or-one value" as a first-class state and builds a
//! small algebra on top of it.
//!
//! ### 1. The container
//! [`Optional<T>`] is either `Present(T)` or `Absent`. The construction
//! policy lives in one place ([`IntoOptional`]): plain values are always
//! present — zero/default bit patterns included — while the "no object"
//! forms (`Option::None`, null raw pointers) construct absence.
//!
//! ### 2. Combinators
//! Transformation, inspection, and defaulting without reading the value out:
//! `map`, `flat_map`, `if_present`, `if_not_present`, `unwrap_or`,
//! `or_else`, `ok_or`, `require`. Callbacks run exactly 0 or 1 times.
//!
//! ### 3. Async bridge
//! The same algebra over a pending computation. [`OptionalFuture`] is
//! blanket-implemented for every `Future<Output = Optional<T>>`; `await` is
//! the explicit flatten step, and fallback chains stay lazy end-to-end.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Container                                               |
//! |  - Optional (Present/Absent), Empty tag, EmptyAccess              |
//! |  - IntoOptional (construction policy)                             |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Algebra                                                 |
//! |  - map / flat_map / if_present / or_else / ok_or / require        |
//! |  - OptionalFuture: the same steps over pending computations       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Collections & Interop                                   |
//! |  - all/any, coalesce, for_any, pack/unpack, take_present          |
//! |  - Option adapter, PackedOption (niche-packed, Reserved payloads) |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Features
//!
//! - **Absence is not an error**: no reason attached, nothing thrown; only
//!   reading an absent value raises (`EmptyAccess`, a programmer error).
//! - **Lazy fallbacks**: `or_else` chains — sync or async — evaluate each
//!   fallback at most once and stop at the first present result.
//! - **No double-wrapping**: async callbacks flatten to a single pending
//!   computation, never a future-of-future.
//! - **`no_std` ready**: the container and algebra are `core`-only; `alloc`
//!   gates the `Vec`-producing helpers, `async` gates the bridge.
//!
//! ## Quick Start
//!
//! ```
//! use tola_opt::{Empty, Optional};
//!
//! fn config_port() -> Optional<u16> {
//!     Empty.into()
//! }
//!
//! let port = config_port()
//!     .if_not_present(|| { /* fall back to the default */ })
//!     .unwrap_or(8080);
//!
//! assert_eq!(port, 8080);
//!
//! // Zero is a value, not an absence:
//! assert!(Optional::of(0u16).has_value());
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Container
// =============================================================================
pub mod convert;
pub mod empty;
pub mod error;
pub mod value;

// =============================================================================
// Layer 1: Algebra
// =============================================================================
mod ops;

#[cfg(feature = "async")]
pub mod future;

// =============================================================================
// Layer 2: Collections & Interop
// =============================================================================
pub mod aggregate;
pub mod packed;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use aggregate::{OptionalIterExt, Presence, TakePresent};
pub use convert::IntoOptional;
pub use empty::Empty;
pub use error::EmptyAccess;
#[cfg(feature = "async")]
pub use future::{OptionalFuture, coalesce_async};
pub use packed::{PackedOption, Reserved};
pub use value::Optional;
pub use value::Optional::{Absent, Present};

/// Common items for working with optional values.
pub mod prelude {
    pub use crate::aggregate::{OptionalIterExt, Presence};
    pub use crate::convert::IntoOptional;
    pub use crate::empty::Empty;
    pub use crate::error::EmptyAccess;
    #[cfg(feature = "async")]
    pub use crate::future::{OptionalFuture, coalesce_async};
    pub use crate::packed::{PackedOption, Reserved};
    pub use crate::value::Optional;
    pub use crate::value::Optional::{Absent, Present};
    // Note: all! and any! are #[macro_export] so they're at crate root
}
