//! Parsing of single settings lines

use maybe_outcome::carrier::{Maybe, Outcome};

use crate::LookupError;

const SEPARATOR: char = '=';
const COMMENT: char = '#';

/// One `key = value` pair read from a settings source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Setting name, surrounding whitespace removed
    pub key: String,
    /// Setting value, surrounding whitespace removed; may be empty
    pub value: String,
}

impl Entry {
    /// Creates a new `Entry`
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Parses one line of a settings source.
///
/// Blank lines and lines starting with `#` carry no entry and yield
/// `Nothing`. Every other line yields `Just` the parse outcome. The value is
/// everything after the first `=`, so values may contain `=` themselves.
///
/// # Examples
///
/// ```
/// use maybe_outcome::carrier::{Maybe, Outcome};
/// use settings_lookup::{Entry, parse_line};
///
/// assert_eq!(
///     parse_line(1, "port = 8080"),
///     Maybe::Just(Outcome::Success(Entry::new("port", "8080")))
/// );
/// assert_eq!(parse_line(2, "   "), Maybe::Nothing);
/// assert!(parse_line(3, "nonsense").is_some_and(Outcome::is_err));
/// ```
pub fn parse_line(line: usize, text: &str) -> Maybe<Outcome<Entry, LookupError>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
        return Maybe::Nothing;
    }

    let parsed = Maybe::from(trimmed.split_once(SEPARATOR))
        .ok_or_else(|| LookupError::Malformed {
            line,
            content: trimmed.to_string(),
        })
        .and_then(|(key, value)| {
            let key = key.trim();
            if key.is_empty() {
                Outcome::failure(LookupError::EmptyKey { line })
            } else {
                Outcome::success(Entry::new(key, value.trim()))
            }
        });

    Maybe::Just(parsed)
}
