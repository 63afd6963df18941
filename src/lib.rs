//! # maybe-outcome
//!
//! Explicit value carriers for Rust code that wants "a value that may be
//! absent" and "an operation that may fail with a typed error" as ordinary,
//! composable values.
//!
//! ## Overview
//!
//! - **[`Maybe<T>`](carrier::Maybe)**: zero or one value (`Just` / `Nothing`)
//! - **[`Outcome<T, E>`](carrier::Outcome)**: a success value or an error value
//!   (`Success` / `Failure`), plus attempt factories that capture a returned
//!   error or a panic as the failure payload
//! - **Type Classes**: `Functor`, `Applicative` and `Monad` instances for both
//!   carriers
//!
//! Every combinator comes in the shape callers need: eager (`..._or`) and lazy
//! (`..._or_else`) defaults, short-circuiting `and`/`or` chains, and explicit
//! unwrapping that panics with a fixed diagnostic on misuse.
//!
//! ## Feature Flags
//!
//! - `carrier`: The `Maybe` and `Outcome` carriers
//! - `typeclass`: Functor, Applicative and Monad instances
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_outcome::prelude::*;
//!
//! let retries = Maybe::some("3")
//!     .ok_or("retries is unset")
//!     .and_then(|text| Outcome::attempt(|| text.parse::<u8>()).map_err(|_| "not a number"))
//!     .unwrap_or(1);
//! assert_eq!(retries, 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the carriers and, when enabled, the type classes.
///
/// # Usage
///
/// ```rust
/// use maybe_outcome::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "carrier")]
    pub use crate::carrier::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

#[cfg(feature = "carrier")]
pub mod carrier;

#[cfg(feature = "typeclass")]
pub mod typeclass;
