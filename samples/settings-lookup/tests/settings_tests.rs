//! Integration tests for loading and resolving settings

use maybe_outcome::carrier::{Maybe, Outcome};
use rstest::rstest;
use settings_lookup::{Entry, LookupError, Settings, parse_line};

const SOURCE: &str = "\
# database
db.host = db.internal
db.port = 5432

# cache
cache.ttl = 30s
cache.url = redis://cache:6379/0?timeout=5
this line is broken
";

#[rstest]
fn test_source_loads_valid_lines() {
    let (settings, rejected) = Settings::parse(SOURCE);

    assert_eq!(settings.len(), 4);
    assert_eq!(settings.lookup("db.port"), Maybe::Just("5432"));
    assert_eq!(
        settings.lookup("cache.url"),
        Maybe::Just("redis://cache:6379/0?timeout=5")
    );
    assert_eq!(
        rejected,
        vec![LookupError::Malformed {
            line: 8,
            content: "this line is broken".to_string(),
        }]
    );
}

#[rstest]
#[case::found("db.host", "db.internal")]
#[case::defaulted("db.user", "postgres")]
fn test_resolve_with_default(#[case] key: &str, #[case] expected: &str) {
    let (settings, _) = Settings::parse(SOURCE);

    assert_eq!(
        settings.resolve(key, Maybe::Just("postgres")),
        Outcome::Success(expected.to_string())
    );
}

#[rstest]
fn test_resolve_many_collects_missing() {
    let (settings, _) = Settings::parse(SOURCE);
    let keys = ["db.host", "db.user", "cache.ttl", "cache.size"];

    let missing: Vec<LookupError> = keys
        .iter()
        .filter_map(|key| settings.resolve(key, Maybe::Nothing).err().into_option())
        .collect();

    assert_eq!(
        missing,
        vec![
            LookupError::Missing {
                key: "db.user".to_string(),
            },
            LookupError::Missing {
                key: "cache.size".to_string(),
            },
        ]
    );
}

#[rstest]
fn test_parse_line_transposes_into_optional_entry() {
    let parsed = parse_line(1, "# only a comment").transpose();
    assert_eq!(parsed, Outcome::Success(Maybe::Nothing));

    let parsed = parse_line(1, "key = value").transpose();
    assert_eq!(parsed, Outcome::Success(Maybe::Just(Entry::new("key", "value"))));
}

#[rstest]
fn test_empty_source() {
    let (settings, rejected) = Settings::parse("");
    assert!(settings.is_empty());
    assert!(rejected.is_empty());
}
