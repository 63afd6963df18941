//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] works around this with a generic associated type that
//! re-applies the same constructor to a different inner type.
//!
//! # Example
//!
//! ```rust
//! use maybe_outcome::carrier::Maybe;
//! use maybe_outcome::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Maybe<String> = emptied(Maybe::some(42));
//! assert_eq!(none_string, Maybe::empty());
//! ```

use crate::carrier::{Maybe, Outcome};

/// A trait representing a type constructor.
///
/// The implementing type is a constructor applied to some type `Inner`, for
/// example `Maybe<i32>` or `Outcome<i32, E>`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Outcome<i32, E>` it is the success
    /// type `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn outcome_inner_type_is_success_type() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Outcome<String, i32>>();
    }

    #[test]
    fn outcome_with_type_keeps_error_type() {
        fn assert_same<T>(_left: T, _right: T) {}
        fn retype<T: TypeConstructor>(_value: &T) -> Option<T::WithType<u8>> {
            None
        }

        let outcome: Outcome<i32, &str> = Outcome::failure("e");
        let retyped = retype(&outcome);
        assert_same(retyped, None::<Outcome<u8, &str>>);
    }
}
