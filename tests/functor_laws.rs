//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`

#![cfg(feature = "typeclass")]

use maybe_outcome::carrier::{Maybe, Outcome};
use maybe_outcome::typeclass::Functor;
use proptest::prelude::*;

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in any::<Option<i32>>().prop_map(Maybe::from)) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in any::<Option<i32>>().prop_map(Maybe::from)) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_fmap_ref_matches_fmap(value in any::<Option<String>>().prop_map(Maybe::from)) {
        prop_assert_eq!(value.fmap_ref(String::len), value.clone().fmap(|s| s.len()));
    }
}

// =============================================================================
// Outcome<T, E> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_identity_law(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
    ) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_outcome_composition_law(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
    ) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.to_string();

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}
