//! Equality rules.
//!
//! Two containers are equal iff both are absent, or both are present with
//! equal values. Comparisons against the untyped `Empty` tag resolve via the
//! presence flag only.

use tola_opt::{Empty, Optional};

// =============================================================================
// Typed comparisons
// =============================================================================

#[test]
fn value_is_equal_to_itself() {
    let value = Optional::of("hello");
    assert_eq!(value, value);
}

#[test]
fn equal_values_are_equal_both_ways() {
    assert_eq!(Optional::of("hello"), Optional::of("hello"));
    assert_eq!(Optional::of(42), Optional::of(42));
}

#[test]
fn distinct_values_are_not_equal() {
    let value = Optional::of("hello");
    let other = Optional::of("world");
    assert_ne!(value, other);
    assert_ne!(other, value);
}

#[test]
fn value_is_not_equal_to_empty() {
    assert_ne!(Optional::of("hello"), Optional::<&str>::empty());
    assert_ne!(Optional::<&str>::empty(), Optional::of("hello"));
}

#[test]
fn empty_is_equal_to_empty() {
    assert_eq!(Optional::<String>::empty(), Optional::<String>::empty());
}

#[test]
fn equality_is_transitive() {
    let a = Optional::of(7);
    let b = Optional::of(7);
    let c = Optional::of(7);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a, c);
}

// =============================================================================
// Untyped tag comparisons
// =============================================================================

#[test]
fn value_is_not_equal_to_untyped_empty() {
    let value = Optional::of("hello");
    assert!(value != Empty);
    assert!(Empty != value);
}

#[test]
fn empty_is_equal_to_untyped_empty() {
    assert!(Optional::<String>::empty() == Empty);
    assert!(Empty == Optional::<String>::empty());
}

#[test]
fn untyped_empty_converts_to_the_typed_empty() {
    let converted: Optional<u64> = Empty.into();
    assert_eq!(converted, Optional::empty());
}

// =============================================================================
// Value semantics
// =============================================================================

#[test]
fn copies_are_independent_and_equal() {
    let original = Optional::of(3u8);
    let copy = original;
    assert_eq!(original, copy);
    assert_eq!(copy.value(), 3);
    assert_eq!(original.value(), 3);
}
