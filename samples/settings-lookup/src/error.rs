//! Error type for the settings lookup sample

use thiserror::Error;

/// Errors raised while parsing settings or resolving keys.
///
/// # Examples
///
/// ```
/// use settings_lookup::LookupError;
///
/// let error = LookupError::Missing { key: "port".to_string() };
/// assert_eq!(error.to_string(), "no value for key `port`");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The line is not of the form `key = value`.
    #[error("line {line}: expected `key = value`, found `{content}`")]
    Malformed {
        /// One-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// The line has a separator but nothing before it.
    #[error("line {line}: key must not be empty")]
    EmptyKey {
        /// One-based line number
        line: usize,
    },

    /// The key is absent and no default was given.
    #[error("no value for key `{key}`")]
    Missing {
        /// The requested key
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::malformed(
        LookupError::Malformed { line: 3, content: "oops".to_string() },
        "line 3: expected `key = value`, found `oops`"
    )]
    #[case::empty_key(LookupError::EmptyKey { line: 7 }, "line 7: key must not be empty")]
    #[case::missing(
        LookupError::Missing { key: "host".to_string() },
        "no value for key `host`"
    )]
    fn test_display(#[case] error: LookupError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
