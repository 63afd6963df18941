//! Outcome type - a success value or an error value.
//!
//! This module provides the `Outcome<T, E>` type, which is exactly one of
//! `Success(T)` or `Failure(E)`. An `Outcome` never changes variant after it is
//! built: every operation either inspects it or produces a new value.
//!
//! Besides the explicit constructors, two attempt factories turn a fallible
//! operation into an `Outcome`:
//!
//! - [`Outcome::attempt`] runs an operation returning `Result<T, E>` and keeps
//!   its error as the failure payload.
//! - [`Outcome::catching`] runs an operation that may panic and keeps the panic
//!   payload, wrapped in [`CaughtPanic`], as the failure payload.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::carrier::Outcome;
//!
//! let parsed: Outcome<u16, std::num::ParseIntError> =
//!     Outcome::attempt(|| "8080".parse::<u16>());
//! let port = parsed
//!     .map(|number| number + 1)
//!     .map_err(|error| error.to_string())
//!     .unwrap_or(80);
//! assert_eq!(port, 8081);
//! ```

use std::fmt;
use std::panic::{self, UnwindSafe};

use super::maybe::Maybe;
use super::panic::CaughtPanic;

const UNWRAP_FAILURE: &str = "called `Outcome::unwrap()` on a `Failure` value";
const UNWRAP_ERR_SUCCESS: &str = "called `Outcome::unwrap_err()` on a `Success` value";

/// Either a success value or an error value.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::carrier::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::success(2);
/// let failure: Outcome<i32, String> = Outcome::failure("boom".to_string());
///
/// assert_eq!(success.map(|n| n * 21), Outcome::success(42));
/// assert_eq!(failure.clone().map(|n| n * 21), failure);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Outcome<T, E> {
    /// The success variant.
    Success(T),
    /// The failure variant.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful `Outcome`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed `Outcome`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Runs `operation` and captures its `Result` as an `Outcome`.
    ///
    /// The error returned by `operation` becomes the failure payload as-is,
    /// without conversion or wrapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    ///
    /// let outcome = Outcome::attempt(|| "x1".parse::<i32>());
    /// assert!(outcome.is_err());
    /// assert_eq!(outcome.unwrap_err(), "x1".parse::<i32>().unwrap_err());
    /// ```
    #[inline]
    pub fn attempt<F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        operation().into()
    }

    // =========================================================================
    // State Queries
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Success` whose value satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::success(2);
    /// assert!(outcome.is_ok_and(|n| *n > 1));
    /// assert!(!outcome.is_ok_and(|n| *n > 5));
    /// ```
    #[inline]
    pub fn is_ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Failure` whose error satisfies `predicate`.
    #[inline]
    pub fn is_err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    // =========================================================================
    // Conversion to Maybe
    // =========================================================================

    /// Returns the success value as a `Maybe`, discarding any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::{Maybe, Outcome};
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(5).ok(), Maybe::some(5));
    /// assert_eq!(Outcome::<i32, &str>::failure("e").ok(), Maybe::empty());
    /// ```
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }

    /// Returns the error as a `Maybe`, discarding any success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::{Maybe, Outcome};
    ///
    /// assert_eq!(Outcome::<i32, &str>::failure("e").err(), Maybe::some("e"));
    /// assert_eq!(Outcome::<i32, &str>::success(5).err(), Maybe::empty());
    /// ```
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Success(_) => Maybe::Nothing,
            Self::Failure(error) => Maybe::Just(error),
        }
    }

    /// Converts into the standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the success value, passing a failure through.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the error, passing a success through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("timeout");
    /// assert_eq!(failure.map_err(str::len), Outcome::failure(7));
    ///
    /// let success: Outcome<i32, &str> = Outcome::success(1);
    /// assert_eq!(success.map_err(str::len), Outcome::success(1));
    /// ```
    #[inline]
    pub fn map_err<O, F>(self, function: F) -> Outcome<T, O>
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `function` to the success value, or computes a fallback with
    /// `default` on a failure.
    ///
    /// Only one of the two closures is invoked. The error is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    ///
    /// let failure: Outcome<usize, &str> = Outcome::failure("bad");
    /// assert_eq!(failure.map_or_else(|| 0, |n| n * 2), 0);
    ///
    /// let success: Outcome<usize, &str> = Outcome::success(3);
    /// assert_eq!(success.map_or_else(|| 0, |n| n * 2), 6);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default(),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Calls `inspector` with the success value, if any, and returns the
    /// receiver unchanged.
    #[inline]
    pub fn inspect<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            inspector(value);
        }
        self
    }

    /// Calls `inspector` with the error, if any, and returns the receiver
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let outcome: Outcome<i32, &str> = Outcome::failure("disk full");
    /// let outcome = outcome.inspect_err(|error| log.push(error.to_string()));
    /// assert!(outcome.is_err());
    /// assert_eq!(log, vec!["disk full".to_string()]);
    /// ```
    #[inline]
    pub fn inspect_err<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            inspector(error);
        }
        self
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the success value, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Outcome::unwrap()` on a `Failure` value`` if this
    /// is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{UNWRAP_FAILURE}"),
        }
    }

    /// Returns the success value, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. The panic message is `message` followed
    /// by a newline and the message of [`Outcome::unwrap`].
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{message}\n{UNWRAP_FAILURE}"),
        }
    }

    /// Returns the error, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Outcome::unwrap_err()` on a `Success` value`` if
    /// this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("e");
    /// assert_eq!(failure.unwrap_err(), "e");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Success(_) => panic!("{UNWRAP_ERR_SUCCESS}"),
            Self::Failure(error) => error,
        }
    }

    /// Returns the error, consuming the `Outcome`.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`. The panic message is `message` followed
    /// by a newline and the message of [`Outcome::unwrap_err`].
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Success(_) => panic!("{message}\n{UNWRAP_ERR_SUCCESS}"),
            Self::Failure(error) => error,
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or calls `default` on a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    ///
    /// let failure: Outcome<Vec<u8>, &str> = Outcome::failure("empty");
    /// assert_eq!(failure.unwrap_or_else(Vec::new), Vec::<u8>::new());
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default(),
        }
    }

    // =========================================================================
    // Combining
    // =========================================================================

    /// Returns `other` if this is a `Success`, otherwise this failure.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `function` with the success value, or passes this failure
    /// through without invoking it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    ///
    /// let checked_half = |n: i32| {
    ///     if n % 2 == 0 { Outcome::success(n / 2) } else { Outcome::failure("odd") }
    /// };
    /// assert_eq!(Outcome::success(12).and_then(checked_half).and_then(checked_half), Outcome::success(3));
    /// assert_eq!(Outcome::success(6).and_then(checked_half).and_then(checked_half), Outcome::failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns this success, or `fallback` if this is a `Failure`.
    #[inline]
    pub fn or<O>(self, fallback: Outcome<T, O>) -> Outcome<T, O> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => fallback,
        }
    }

    /// Returns this success, or calls `fallback` with the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Outcome;
    ///
    /// let primary: Outcome<&str, &str> = Outcome::failure("primary down");
    /// let recovered: Outcome<&str, ()> = primary.or_else(|_| Outcome::success("replica"));
    /// assert_eq!(recovered, Outcome::success("replica"));
    /// ```
    #[inline]
    pub fn or_else<O, F>(self, fallback: F) -> Outcome<T, O>
    where
        F: FnOnce(E) -> Outcome<T, O>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => fallback(error),
        }
    }
}

// =============================================================================
// Panic Capture
// =============================================================================

impl<T> Outcome<T, CaughtPanic> {
    /// Runs `operation` and captures a panic raised inside it as the failure
    /// payload.
    ///
    /// The payload passed to `panic!` (or [`std::panic::panic_any`]) is kept
    /// unaltered inside the returned [`CaughtPanic`]. The process panic hook
    /// still runs, so the panic message is reported as usual.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::{Maybe, Outcome};
    ///
    /// let outcome = Outcome::catching(|| Maybe::<i32>::empty().unwrap());
    /// assert_eq!(
    ///     outcome.unwrap_err().message(),
    ///     Some("called `Maybe::unwrap()` on a `Nothing` value"),
    /// );
    ///
    /// assert_eq!(Outcome::catching(|| 1 + 1).unwrap(), 2);
    /// ```
    pub fn catching<F>(operation: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(operation) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(CaughtPanic::new(payload)),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }
}

// =============================================================================
// Structural Operations
// =============================================================================

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts `Ok(v)` into `Success(v)` and `Err(e)` into `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
