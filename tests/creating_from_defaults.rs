//! Construction policy tests.
//!
//! Plain values are always present — zero/default bit patterns included.
//! Only the "no object" forms (`Option::None`, null raw pointers) construct
//! an absent container.

use core::ptr::NonNull;

use paste::paste;
use tola_opt::Optional;

// =============================================================================
// Value-like types: the zero/default value is a value
// =============================================================================

macro_rules! default_is_present {
    ($($ty:ty),+ $(,)?) => {
        paste! {
            $(
                #[test]
                fn [<default_ $ty _is_present>]() {
                    let boxed = Optional::of(<$ty>::default());
                    assert!(boxed.has_value());
                    assert_eq!(boxed.value(), <$ty>::default());
                }
            )+
        }
    };
}

default_is_present!(
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char,
);

#[test]
fn default_string_is_present() {
    let boxed = Optional::of(String::new());
    assert!(boxed.has_value());
    assert_eq!(boxed.value(), "");
}

#[test]
fn empty_slice_is_present() {
    let boxed = Optional::of(&[] as &[u8]);
    assert!(boxed.has_value());
}

// =============================================================================
// Reference-like forms: the sentinel constructs absence
// =============================================================================

#[test]
fn none_constructs_absent() {
    let boxed: Optional<String> = Optional::of(None);
    assert!(!boxed.has_value());
}

#[test]
fn some_constructs_present() {
    let boxed: Optional<u32> = Optional::of(Some(5));
    assert!(boxed.has_value());
    assert_eq!(boxed.value(), 5);
}

#[test]
fn some_of_default_is_present() {
    // The policy applies to the wrapper, not the payload's bit pattern.
    let boxed: Optional<u32> = Optional::of(Some(0));
    assert!(boxed.has_value());
}

#[test]
fn null_pointer_constructs_absent() {
    let null: *mut u8 = core::ptr::null_mut();
    let boxed: Optional<NonNull<u8>> = Optional::of(null);
    assert!(!boxed.has_value());
}

#[test]
fn live_pointer_constructs_present() {
    let mut slot = 7u8;
    let boxed: Optional<NonNull<u8>> = Optional::of(&mut slot as *mut u8);
    assert!(boxed.has_value());
}

// =============================================================================
// Policy applies once, at construction
// =============================================================================

#[test]
fn option_typed_payload_is_stored_as_is() {
    // The target type decides: a raw value of exactly the payload type is a
    // plain value, so an Option stored at its own type never goes through
    // sentinel detection.
    let raw: Option<u32> = None;
    let boxed: Optional<Option<u32>> = Optional::of(raw);
    assert!(boxed.has_value());
    assert_eq!(boxed.value(), None);
}
