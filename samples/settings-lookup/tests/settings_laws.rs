//! Property-based tests for settings parsing

use maybe_outcome::carrier::Maybe;
use proptest::prelude::*;
use settings_lookup::Settings;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.]{0,15}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_:/=.-]{0,24}"
}

proptest! {
    #[test]
    fn prop_written_entries_are_found(
        entries in prop::collection::btree_map(key_strategy(), value_strategy(), 0..16)
    ) {
        let source: String = entries
            .iter()
            .map(|(key, value)| format!("{key} = {value}\n"))
            .collect();

        let (settings, rejected) = Settings::parse(&source);

        prop_assert!(rejected.is_empty());
        prop_assert_eq!(settings.len(), entries.len());
        for (key, value) in &entries {
            prop_assert_eq!(settings.lookup(key), Maybe::Just(value.as_str()));
        }
    }

    #[test]
    fn prop_comment_lines_never_load(text in "#[^\n]{0,32}") {
        let (settings, rejected) = Settings::parse(&text);

        prop_assert!(settings.is_empty());
        prop_assert!(rejected.is_empty());
    }

    #[test]
    fn prop_missing_key_uses_default(key in key_strategy(), default in value_strategy()) {
        let (settings, _) = Settings::parse("");

        prop_assert_eq!(
            settings.resolve(&key, Maybe::Just(default.as_str())).ok(),
            Maybe::Just(default)
        );
    }
}
