//! Value carriers: an optional value and a success/failure value.
//!
//! - [`Maybe`]: zero or one value (`Just` / `Nothing`)
//! - [`Outcome`]: a success value or an error value (`Success` / `Failure`)
//! - [`CaughtPanic`]: the failure payload produced by [`Outcome::catching`]
//!
//! The two carriers convert into each other: [`Maybe::ok_or`] and
//! [`Maybe::ok_or_else`] supply the error for the empty case, while
//! [`Outcome::ok`] and [`Outcome::err`] keep one side and drop the other.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::carrier::{Maybe, Outcome};
//!
//! fn lookup(key: &str) -> Maybe<u32> {
//!     match key {
//!         "workers" => Maybe::some(4),
//!         _ => Maybe::empty(),
//!     }
//! }
//!
//! let workers: Outcome<u32, String> = lookup("workers").ok_or_else(|| "unset".to_string());
//! assert_eq!(workers, Outcome::success(4));
//!
//! let threads = lookup("threads").ok_or("threads is unset");
//! assert_eq!(threads.err(), Maybe::some("threads is unset"));
//! ```
//!
//! # Ownership
//!
//! `Maybe`'s in-place operations take `&mut self`, so concurrent mutation
//! needs external synchronisation. `Outcome` has no mutating operation and is
//! `Send` and `Sync` whenever its payloads are.

mod maybe;
mod outcome;
mod panic;

pub use maybe::Maybe;
pub use outcome::Outcome;
pub use panic::CaughtPanic;

static_assertions::assert_impl_all!(Maybe<i32>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(Outcome<String, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(CaughtPanic: Send, std::error::Error);
static_assertions::assert_not_impl_any!(CaughtPanic: Sync, Clone);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, ()>: Send, Sync);
