//! Type class instances for the value carriers.
//!
//! This module provides the core type classes, implemented for
//! [`Maybe`](crate::carrier::Maybe) and [`Outcome`](crate::carrier::Outcome):
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over the carried value
//! - [`Applicative`]: Lifting values and combining independent carriers
//! - [`Monad`]: Sequencing computations that depend on each other
//!
//! `Outcome` instances require `E: Clone` so that `fmap_ref` can rebuild a
//! failure from a borrowed receiver.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::carrier::{Maybe, Outcome};
//! use maybe_outcome::typeclass::{Applicative, Functor, Monad};
//!
//! fn total<M>(left: M, right: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Applicative<Inner = i32>,
//! {
//!     left.map2(right, |a, b| a + b)
//! }
//!
//! assert_eq!(total(Maybe::some(1), Maybe::some(2)), Maybe::some(3));
//!
//! let sum: Outcome<i32, &str> = total(Outcome::success(1), Outcome::failure("bad"));
//! assert_eq!(sum, Outcome::failure("bad"));
//!
//! let chained = Maybe::some(2).fmap(|n| n + 1).flat_map(|n| Maybe::some(n * 10));
//! assert_eq!(chained, Maybe::some(30));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
