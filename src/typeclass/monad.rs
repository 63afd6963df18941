//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, where the next computation
//! is chosen from the result of the previous one. An empty [`Maybe`] or a
//! failed [`Outcome`] short-circuits the rest of the chain.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::carrier::Maybe;
//! use maybe_outcome::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::from(text.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//! ```
//!
//! [`Applicative`]: super::Applicative

use super::applicative::Applicative;
use crate::carrier::{Maybe, Outcome};

/// A type class for carriers that support sequencing of computations.
pub trait Monad: Applicative {
    /// Chains a computation that depends on the inner value.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after the receiver, discarding the receiver's value.
    ///
    /// `next` is still dropped unused when the receiver short-circuits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    /// use maybe_outcome::typeclass::Monad;
    ///
    /// let first: Outcome<i32, &str> = Outcome::success(1);
    /// assert_eq!(first.then(Outcome::success("two")), Outcome::success("two"));
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_flat_map_short_circuits() {
        let empty: Maybe<i32> = Maybe::empty();
        let result = empty.flat_map(|_| -> Maybe<i32> { panic!("must not run") });
        assert_eq!(result, Maybe::empty());
    }

    #[rstest]
    fn maybe_then_on_nothing() {
        let empty: Maybe<i32> = Maybe::empty();
        assert_eq!(empty.then(Maybe::some("next")), Maybe::empty());
    }

    #[rstest]
    fn outcome_flat_map_chains_success() {
        let start: Outcome<i32, String> = Outcome::success(2);
        let result = start
            .flat_map(|n| Outcome::success(n * 3))
            .flat_map(|n| Outcome::success(n.to_string()));
        assert_eq!(result, Outcome::success("6".to_string()));
    }

    #[rstest]
    fn outcome_then_keeps_first_failure() {
        let first: Outcome<i32, &str> = Outcome::failure("first");
        assert_eq!(first.then(Outcome::<&str, &str>::failure("second")), Outcome::failure("first"));
    }
}
