//! Property-based tests for Outcome combinator semantics.
//!
//! - `map` and `map_err` each touch exactly one side
//! - `ok` and `err` partition the carrier
//! - `attempt` agrees with converting the `Result` directly

#![cfg(feature = "carrier")]

use maybe_outcome::carrier::Outcome;
use proptest::prelude::*;

fn any_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
}

proptest! {
    #[test]
    fn prop_map_keeps_variant(value in any_outcome()) {
        let mapped = value.clone().map(|n| n.wrapping_sub(1));
        prop_assert_eq!(mapped.is_ok(), value.is_ok());
        prop_assert_eq!(mapped.err(), value.err());
    }

    #[test]
    fn prop_map_err_keeps_success(value in any_outcome()) {
        let mapped = value.clone().map_err(|error| error.len());
        prop_assert_eq!(mapped.ok(), value.clone().ok());
        prop_assert_eq!(mapped.err(), value.err().map(|error| error.len()));
    }

    #[test]
    fn prop_ok_and_err_partition(value in any_outcome()) {
        let ok = value.clone().ok();
        let err = value.err();
        prop_assert!(ok.is_some() != err.is_some());
    }

    #[test]
    fn prop_unwrap_or_matches_unwrap_or_else(value in any_outcome(), default in any::<i32>()) {
        prop_assert_eq!(
            value.clone().unwrap_or(default),
            value.unwrap_or_else(|| default)
        );
    }

    #[test]
    fn prop_map_or_matches_map_or_else(value in any_outcome(), default in any::<i32>()) {
        let function = |n: i32| n.wrapping_sub(1);
        prop_assert_eq!(
            value.clone().map_or(default, function),
            value.map_or_else(|| default, function)
        );
    }

    #[test]
    fn prop_attempt_matches_from(result in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let expected = Outcome::from(result.clone());
        prop_assert_eq!(Outcome::attempt(|| result), expected);
    }

    #[test]
    fn prop_and_then_short_circuits(error in any::<String>()) {
        let failure: Outcome<i32, String> = Outcome::failure(error.clone());
        let mut called = false;
        let result = failure.and_then(|n| {
            called = true;
            Outcome::success(n)
        });
        prop_assert!(!called);
        prop_assert_eq!(result, Outcome::failure(error));
    }

    #[test]
    fn prop_or_else_recovers_everything(value in any_outcome()) {
        let recovered: Outcome<i32, ()> = value.clone().or_else(|error| {
            Outcome::success(i32::try_from(error.len()).unwrap_or(i32::MAX))
        });
        prop_assert!(recovered.is_ok());
        if value.is_ok() {
            prop_assert_eq!(recovered.ok(), value.ok());
        }
    }
}
