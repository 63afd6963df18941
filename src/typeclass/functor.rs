//! Functor type class - mapping over carrier values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::carrier::{Maybe, Outcome};
//! use maybe_outcome::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::some("5".to_string()));
//!
//! let failure: Outcome<i32, &str> = Outcome::failure("e");
//! assert_eq!(failure.fmap(|n| n + 1), Outcome::failure("e"));
//! ```

use super::higher::TypeConstructor;
use crate::carrier::{Maybe, Outcome};

/// A type class for carriers that can have a function mapped over their
/// contents while preserving their shape.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    /// use maybe_outcome::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::some(5).fmap(|n| n * 2), Maybe::some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the receiver usable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    /// use maybe_outcome::typeclass::Functor;
    ///
    /// let word = Maybe::some("hello".to_string());
    /// assert_eq!(word.fmap_ref(|s| s.len()), Maybe::some(5));
    /// assert!(word.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Only the shape (present/absent, success/failure) survives.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(function(value)),
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
        }
    }
}
