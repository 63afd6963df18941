//! Error payload for panics captured by [`Outcome::catching`].
//!
//! [`Outcome::catching`]: super::Outcome::catching

use std::any::Any;
use std::fmt;
use std::panic;

/// A panic captured while running an operation.
///
/// The payload handed to `panic!` or [`std::panic::panic_any`] is stored
/// exactly as it was raised. String payloads are readable through
/// [`CaughtPanic::message`]; any other payload can be recovered with
/// [`CaughtPanic::downcast_ref`] or [`CaughtPanic::into_payload`].
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::carrier::Outcome;
///
/// #[derive(Debug, PartialEq)]
/// struct Overheated(u32);
///
/// let outcome: Outcome<(), _> = Outcome::catching(|| std::panic::panic_any(Overheated(97)));
/// let caught = outcome.unwrap_err();
/// assert_eq!(caught.message(), None);
/// assert_eq!(caught.downcast_ref::<Overheated>(), Some(&Overheated(97)));
/// ```
pub struct CaughtPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CaughtPanic {
    /// Wraps a payload returned by [`std::panic::catch_unwind`].
    #[inline]
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message when the payload is a `&'static str` or a
    /// `String`, which is the case for every `panic!` with a format string.
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            return Some(*message);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    /// Returns a reference to the raw payload.
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        self.payload.as_ref()
    }

    /// Returns the payload as `P` if it has that type.
    #[inline]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Returns the raw payload, consuming the `CaughtPanic`.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continues unwinding with the original payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CaughtPanic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "panicked: {message}"),
            None => write!(formatter, "panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for CaughtPanic {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::static_str(Box::new("static message"), Some("static message"))]
    #[case::owned_string(Box::new(String::from("owned message")), Some("owned message"))]
    #[case::other(Box::new(42_u8), None)]
    fn message_reads_string_payloads(
        #[case] payload: Box<dyn Any + Send>,
        #[case] expected: Option<&str>,
    ) {
        let caught = CaughtPanic::new(payload);
        assert_eq!(caught.message(), expected);
    }

    #[rstest]
    fn display_includes_message() {
        let caught = CaughtPanic::new(Box::new("boom"));
        assert_eq!(caught.to_string(), "panicked: boom");

        let caught = CaughtPanic::new(Box::new(1_i32));
        assert_eq!(caught.to_string(), "panicked with a non-string payload");
    }

    #[rstest]
    fn into_payload_returns_original_box() {
        let caught = CaughtPanic::new(Box::new(vec![1, 2, 3]));
        let payload = caught.into_payload();
        assert_eq!(payload.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
    }

    #[rstest]
    fn resume_continues_unwinding() {
        let caught = CaughtPanic::new(Box::new("again"));
        let result = panic::catch_unwind(panic::AssertUnwindSafe(move || {
            caught.resume();
        }));
        let payload = result.expect_err("resume must unwind");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"again"));
    }
}
