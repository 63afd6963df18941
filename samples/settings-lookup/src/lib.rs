//! Settings lookup sample.
//!
//! Loads `key = value` settings and resolves keys against them, using
//! [`Outcome`](maybe_outcome::carrier::Outcome) for every fallible step and
//! [`Maybe`](maybe_outcome::carrier::Maybe) for absent values.

pub mod entry;
pub mod error;
pub mod settings;

pub use entry::{Entry, parse_line};
pub use error::LookupError;
pub use settings::Settings;
