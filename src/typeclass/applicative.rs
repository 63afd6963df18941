//! Applicative type class - combining independent carrier values.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value
//! into the carrier, and `map2`, which combines two carriers with a function.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::carrier::{Maybe, Outcome};
//! use maybe_outcome::typeclass::Applicative;
//!
//! let width = Maybe::some(3);
//! let height = Maybe::some(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Maybe::some(12));
//!
//! let lifted: Outcome<i32, String> = <Outcome<(), String>>::pure(42);
//! assert_eq!(lifted, Outcome::success(42));
//! ```
//!
//! [`Functor`]: super::Functor

use super::functor::Functor;
use crate::carrier::{Maybe, Outcome};

/// A type class for carriers that can lift values and combine independent
/// computations.
///
/// For [`Outcome`], combining two failures keeps the first (left) error.
pub trait Applicative: Functor {
    /// Lifts a pure value into the carrier.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two carriers with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    /// use maybe_outcome::typeclass::Applicative;
    ///
    /// let left: Outcome<i32, &str> = Outcome::failure("left");
    /// let right: Outcome<i32, &str> = Outcome::failure("right");
    /// assert_eq!(left.map2(right, |a, b| a + b), Outcome::failure("left"));
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two carriers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function held in the receiver to the value held in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    /// use maybe_outcome::typeclass::Applicative;
    ///
    /// let increment: Maybe<fn(i32) -> i32> = Maybe::Just(|x| x + 1);
    /// assert_eq!(increment.apply(Maybe::some(5)), Maybe::some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B, E>, function: F) -> Outcome<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, E>) -> Outcome<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_pure_creates_just() {
        assert_eq!(<Maybe<()>>::pure(7), Maybe::some(7));
    }

    #[rstest]
    #[case(Maybe::some(1), Maybe::some(2), Maybe::some(3))]
    #[case(Maybe::some(1), Maybe::empty(), Maybe::empty())]
    #[case(Maybe::empty(), Maybe::some(2), Maybe::empty())]
    #[case(Maybe::empty(), Maybe::empty(), Maybe::empty())]
    fn maybe_map2_needs_both(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(left.map2(right, |a, b| a + b), expected);
    }

    #[rstest]
    fn maybe_product_pairs_values() {
        assert_eq!(Maybe::some(1).product(Maybe::some("a")), Maybe::some((1, "a")));
    }

    #[rstest]
    fn outcome_map2_keeps_right_error_when_left_succeeds() {
        let left: Outcome<i32, &str> = Outcome::success(1);
        let right: Outcome<i32, &str> = Outcome::failure("right");
        assert_eq!(left.map2(right, |a, b| a + b), Outcome::failure("right"));
    }

    #[rstest]
    fn outcome_apply_with_failure_function() {
        let function: Outcome<fn(i32) -> i32, &str> = Outcome::failure("no function");
        assert_eq!(function.apply(Outcome::success(1)), Outcome::failure("no function"));
    }
}
