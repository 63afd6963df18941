//! In-memory settings table

use std::collections::HashMap;

use maybe_outcome::carrier::{Maybe, Outcome};

use crate::{Entry, LookupError, parse_line};

/// Settings loaded from a `key = value` source.
///
/// When a key appears more than once, the last occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    /// Parses a whole settings source.
    ///
    /// Returns the settings built from every well-formed line together with
    /// the errors for the lines that were rejected. A rejected line never
    /// prevents the rest of the source from loading.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_outcome::carrier::Maybe;
    /// use settings_lookup::Settings;
    ///
    /// let (settings, rejected) = Settings::parse("host = localhost\nbroken\n");
    /// assert_eq!(settings.lookup("host"), Maybe::Just("localhost"));
    /// assert_eq!(rejected.len(), 1);
    /// ```
    pub fn parse(source: &str) -> (Self, Vec<LookupError>) {
        let mut settings = Self::default();
        let mut rejected = Vec::new();

        for (index, text) in source.lines().enumerate() {
            let Maybe::Just(parsed) = parse_line(index + 1, text) else {
                continue;
            };
            match parsed {
                Outcome::Success(entry) => settings.insert(entry),
                Outcome::Failure(error) => {
                    tracing::warn!(%error, "skipping settings line");
                    rejected.push(error);
                }
            }
        }

        tracing::debug!(
            entries = settings.len(),
            rejected = rejected.len(),
            "parsed settings source"
        );
        (settings, rejected)
    }

    /// Adds an entry, replacing any earlier value for the same key.
    pub fn insert(&mut self, entry: Entry) {
        if let Some(previous) = self.values.insert(entry.key.clone(), entry.value) {
            tracing::debug!(key = %entry.key, %previous, "overriding earlier value");
        }
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no key is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Looks up the value stored for `key`.
    pub fn lookup(&self, key: &str) -> Maybe<&str> {
        self.values.get(key).map(String::as_str).into()
    }

    /// Resolves `key`, falling back to `fallback` when it is not set.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Missing`] when the key is absent and
    /// `fallback` is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_outcome::carrier::{Maybe, Outcome};
    /// use settings_lookup::{LookupError, Settings};
    ///
    /// let (settings, _) = Settings::parse("port = 8080");
    /// assert_eq!(settings.resolve("port", Maybe::Nothing), Outcome::Success("8080".to_string()));
    /// assert_eq!(settings.resolve("host", Maybe::Just("::1")), Outcome::Success("::1".to_string()));
    /// assert_eq!(
    ///     settings.resolve("host", Maybe::Nothing),
    ///     Outcome::Failure(LookupError::Missing { key: "host".to_string() })
    /// );
    /// ```
    pub fn resolve(&self, key: &str, fallback: Maybe<&str>) -> Outcome<String, LookupError> {
        self.lookup(key)
            .inspect(|value| tracing::debug!(key, value = *value, "found in settings"))
            .or_else(|| fallback.inspect(|value| tracing::info!(key, value = *value, "using default")))
            .map(str::to_string)
            .ok_or_else(|| LookupError::Missing {
                key: key.to_string(),
            })
    }
}
