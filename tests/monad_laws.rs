//! Property-based tests for Monad and Applicative laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - **Applicative Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`

#![cfg(feature = "typeclass")]

use maybe_outcome::carrier::{Maybe, Outcome};
use maybe_outcome::typeclass::{Applicative, Monad};
use proptest::prelude::*;

fn halve(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::empty() }
}

fn shrink(n: i32) -> Maybe<i32> {
    Maybe::some(n.wrapping_sub(1)).filter(|m| *m > 0)
}

fn checked_double(n: i32) -> Outcome<i32, String> {
    n.checked_mul(2)
        .map_or_else(|| Outcome::failure(format!("{n} overflows")), Outcome::success)
}

fn non_negative(n: i32) -> Outcome<i32, String> {
    if n >= 0 { Outcome::success(n) } else { Outcome::failure("negative".to_string()) }
}

proptest! {
    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(<Maybe<()>>::pure(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_maybe_right_identity(value in any::<Option<i32>>().prop_map(Maybe::from)) {
        prop_assert_eq!(value.flat_map(<Maybe<()>>::pure), value);
    }

    #[test]
    fn prop_maybe_associativity(value in any::<Option<i32>>().prop_map(Maybe::from)) {
        let left = value.flat_map(halve).flat_map(shrink);
        let right = value.flat_map(|x| halve(x).flat_map(shrink));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_homomorphism(value in any::<i32>()) {
        let function: fn(i32) -> i32 = |n| n.wrapping_add(7);
        let applied = <Maybe<()>>::pure(function).apply(<Maybe<()>>::pure(value));
        prop_assert_eq!(applied, Maybe::some(function(value)));
    }

    #[test]
    fn prop_outcome_left_identity(value in any::<i32>()) {
        prop_assert_eq!(
            <Outcome<(), String>>::pure(value).flat_map(checked_double),
            checked_double(value)
        );
    }

    #[test]
    fn prop_outcome_right_identity(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
    ) {
        prop_assert_eq!(value.clone().flat_map(<Outcome<(), String>>::pure), value);
    }

    #[test]
    fn prop_outcome_associativity(
        value in prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
    ) {
        let left = value.clone().flat_map(checked_double).flat_map(non_negative);
        let right = value.flat_map(|x| checked_double(x).flat_map(non_negative));
        prop_assert_eq!(left, right);
    }
}
