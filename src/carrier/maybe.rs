//! Maybe type - a value that may be absent.
//!
//! This module provides the `Maybe<T>` type, which is either `Just(T)`,
//! holding a value, or `Nothing`. Emptiness is its own variant rather than a
//! sentinel, so a stored value can never be mistaken for absence: a
//! `Maybe<Option<i32>>` holding `Just(None)` is present.
//!
//! Most operations consume the receiver and return a new `Maybe`. A small set
//! of operations (`insert`, `get_or_insert`, `get_or_insert_with`, `take`,
//! `take_if`, `replace`) mutate the receiver in place through `&mut self`.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::carrier::Maybe;
//!
//! let port: Maybe<&str> = Maybe::some("8080");
//! let parsed = port
//!     .map(|text| text.parse::<u16>().unwrap_or(0))
//!     .filter(|&number| number != 0);
//! assert_eq!(parsed, Maybe::some(8080));
//!
//! let missing: Maybe<u16> = Maybe::empty();
//! assert_eq!(missing.unwrap_or(80), 80);
//! ```

use std::fmt;

use super::outcome::Outcome;

const UNWRAP_NOTHING: &str = "called `Maybe::unwrap()` on a `Nothing` value";

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// `Nothing` orders before any `Just` value, so sorting a slice of `Maybe`
/// puts the empty entries first.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::carrier::Maybe;
///
/// let present = Maybe::some(3);
/// let absent: Maybe<i32> = Maybe::empty();
///
/// assert!(present.is_some());
/// assert!(absent.is_none());
/// assert!(absent < present);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// No value.
    Nothing,
    /// A present value.
    Just(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn empty() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // State Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// assert!(Maybe::some(1).is_some());
    /// assert!(!Maybe::<i32>::empty().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    ///
    /// The predicate is not invoked when the `Maybe` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// assert!(Maybe::some(4).is_some_and(|n| n % 2 == 0));
    /// assert!(!Maybe::some(3).is_some_and(|n| n % 2 == 0));
    /// assert!(!Maybe::<i32>::empty().is_some_and(|_| true));
    /// ```
    #[inline]
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => predicate(value),
            Self::Nothing => false,
        }
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Borrowing Views
    // =========================================================================

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let name = Maybe::some("ferris".to_string());
    /// assert_eq!(name.as_ref().map(String::len), Maybe::some(6));
    /// // `name` is still usable here
    /// assert!(name.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts `&mut Maybe<T>` into `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the contained value, if any.
    ///
    /// An empty `Maybe` stays empty and `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|n| n * 10), Maybe::some(20));
    /// assert_eq!(Maybe::<i32>::empty().map(|n| n * 10), Maybe::empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies `function` to the contained value, or returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// assert_eq!(Maybe::some("abc").map_or(0, str::len), 3);
    /// assert_eq!(Maybe::<&str>::empty().map_or(0, str::len), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default,
        }
    }

    /// Applies `function` to the contained value, or computes a default.
    ///
    /// Exactly one of the two closures is invoked; `default` only runs when
    /// the `Maybe` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let width = Maybe::<usize>::empty().map_or_else(|| 80, |n| n * 2);
    /// assert_eq!(width, 80);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => default(),
        }
    }

    // =========================================================================
    // Conversion to Outcome
    // =========================================================================

    /// Transforms `Just(v)` into `Success(v)` and `Nothing` into
    /// `Failure(error)`.
    ///
    /// `error` is evaluated eagerly; use [`Maybe::ok_or_else`] when building it
    /// is costly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::some(1).ok_or("missing"), Outcome::success(1));
    /// assert_eq!(Maybe::<i32>::empty().ok_or("missing"), Outcome::failure("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(error),
        }
    }

    /// Transforms `Just(v)` into `Success(v)` and `Nothing` into
    /// `Failure(error())`, invoking `error` only in the empty case.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(error()),
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Calls `inspector` with a reference to the contained value, if any,
    /// and returns the receiver unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let value = Maybe::some(7).inspect(|n| seen.push(*n)).map(|n| n + 1);
    /// assert_eq!(value, Maybe::some(8));
    /// assert_eq!(seen, vec![7]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            inspector(value);
        }
        self
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Maybe::unwrap()` on a `Nothing` value`` if the
    /// `Maybe` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// assert_eq!(Maybe::some("air").unwrap(), "air");
    /// ```
    ///
    /// ```rust,should_panic
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let empty: Maybe<&str> = Maybe::empty();
    /// empty.unwrap(); // panics
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{UNWRAP_NOTHING}"),
        }
    }

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if the `Maybe` is empty. The panic message is `message`
    /// followed by a newline and the message of [`Maybe::unwrap`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let home = Maybe::some("/home/ferris");
    /// assert_eq!(home.expect("HOME must be set"), "/home/ferris");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{message}\n{UNWRAP_NOTHING}"),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value or computes one from `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let retries = Maybe::<u32>::empty().unwrap_or_else(|| 2 + 1);
    /// assert_eq!(retries, 3);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    // =========================================================================
    // Filtering and Combining
    // =========================================================================

    /// Keeps the contained value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let is_even = |n: &i32| n % 2 == 0;
    /// assert_eq!(Maybe::some(4).filter(is_even), Maybe::some(4));
    /// assert_eq!(Maybe::some(3).filter(is_even), Maybe::empty());
    /// assert_eq!(Maybe::empty().filter(is_even), Maybe::empty());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Just(value) = self
            && predicate(&value)
        {
            return Self::Just(value);
        }
        Self::Nothing
    }

    /// Returns `Nothing` if the receiver is empty, otherwise `other`.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Just(_) => other,
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns `Nothing` if the receiver is empty, otherwise calls `function`
    /// with the contained value and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::empty() };
    /// assert_eq!(Maybe::some(8).and_then(half).and_then(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).and_then(half).and_then(half), Maybe::empty());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the receiver if it holds a value, otherwise `fallback`.
    #[inline]
    pub fn or(self, fallback: Self) -> Self {
        match self {
            Self::Just(_) => self,
            Self::Nothing => fallback,
        }
    }

    /// Returns the receiver if it holds a value, otherwise the result of
    /// `fallback`.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Just(_) => self,
            Self::Nothing => fallback(),
        }
    }

    /// Returns whichever side holds a value when exactly one of them does,
    /// otherwise `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).xor(Maybe::empty()), Maybe::some(1));
    /// assert_eq!(Maybe::empty().xor(Maybe::some(2)), Maybe::some(2));
    /// assert_eq!(Maybe::some(1).xor(Maybe::some(2)), Maybe::empty());
    /// assert_eq!(Maybe::<i32>::empty().xor(Maybe::empty()), Maybe::empty());
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            _ => Self::Nothing,
        }
    }

    /// Pairs the receiver with `other` when both hold a value.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Just(left), Maybe::Just(right)) => Maybe::Just((left, right)),
            _ => Maybe::Nothing,
        }
    }

    // =========================================================================
    // In-place Mutation
    // =========================================================================

    /// Stores `value`, dropping any previous value, and returns a mutable
    /// reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let mut slot = Maybe::some(1);
    /// *slot.insert(5) += 1;
    /// assert_eq!(slot, Maybe::some(6));
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Self::Just(value);
        let Self::Just(value) = self else {
            unreachable!("insert left the slot empty")
        };
        value
    }

    /// Stores `value` only if the receiver is empty, then returns a mutable
    /// reference to the current value.
    #[inline]
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Stores the result of `supplier` only if the receiver is empty, then
    /// returns a mutable reference to the current value.
    ///
    /// `supplier` is not invoked when a value is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let mut cache: Maybe<Vec<u8>> = Maybe::empty();
    /// cache.get_or_insert_with(Vec::new).push(1);
    /// cache.get_or_insert_with(|| unreachable!()).push(2);
    /// assert_eq!(cache, Maybe::some(vec![1, 2]));
    /// ```
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, supplier: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if let Self::Nothing = self {
            *self = Self::Just(supplier());
        }
        let Self::Just(value) = self else {
            unreachable!("get_or_insert_with left the slot empty")
        };
        value
    }

    /// Takes the value out, leaving `Nothing` in its place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let mut slot = Maybe::some(2);
    /// assert_eq!(slot.take(), Maybe::some(2));
    /// assert_eq!(slot.take(), Maybe::empty());
    /// assert!(slot.is_none());
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::Nothing)
    }

    /// Takes the value out only if it satisfies `predicate`.
    ///
    /// When the receiver is empty or the predicate fails, the receiver is left
    /// untouched and `Nothing` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let mut slot = Maybe::some(3);
    /// assert_eq!(slot.take_if(|n| *n > 5), Maybe::empty());
    /// assert_eq!(slot, Maybe::some(3));
    /// assert_eq!(slot.take_if(|n| *n < 5), Maybe::some(3));
    /// assert!(slot.is_none());
    /// ```
    #[inline]
    pub fn take_if<P>(&mut self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if self.is_some_and(predicate) {
            self.take()
        } else {
            Self::Nothing
        }
    }

    /// Stores `value` and returns whatever was stored before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// let mut slot = Maybe::empty();
    /// assert_eq!(slot.replace(1), Maybe::empty());
    /// assert_eq!(slot.replace(2), Maybe::some(1));
    /// assert_eq!(slot, Maybe::some(2));
    /// ```
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        std::mem::replace(self, Self::Just(value))
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<T: Default> Maybe<T> {
    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => T::default(),
        }
    }

    /// Stores `T::default()` if the receiver is empty, then returns a mutable
    /// reference to the current value.
    #[inline]
    pub fn get_or_insert_default(&mut self) -> &mut T {
        self.get_or_insert_with(T::default)
    }
}

// =============================================================================
// Structural Operations
// =============================================================================

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::carrier::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::empty()).flatten(), Maybe::empty());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// Swaps a `Maybe` of an `Outcome` into an `Outcome` of a `Maybe`.
    ///
    /// `Nothing` maps to `Success(Nothing)`, `Just(Success(v))` to
    /// `Success(Just(v))` and `Just(Failure(e))` to `Failure(e)`.
    #[inline]
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Self::Just(Outcome::Success(value)) => Outcome::Success(Maybe::Just(value)),
            Self::Just(Outcome::Failure(error)) => Outcome::Failure(error),
            Self::Nothing => Outcome::Success(Maybe::Nothing),
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts `Some(v)` into `Just(v)` and `None` into `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
