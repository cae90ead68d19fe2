//! Named arithmetic and relational operations.
//!
//! These forward to the operator and ordering impls
//! and accept anything convertible into [`Int`],
//! so natural numbers and references mix freely.

use core::cmp::Ordering;

use crate::Int;

/// Return `-a`.
pub fn negate(a: impl Into<Int>) -> Int {
    Into::<Int>::into(a).negate()
}

/// Return `a + b`.
pub fn add(a: impl Into<Int>, b: impl Into<Int>) -> Int {
    Into::<Int>::into(a) + Into::<Int>::into(b)
}

/// Return `a - b`.
pub fn subtract(a: impl Into<Int>, b: impl Into<Int>) -> Int {
    Into::<Int>::into(a) - Into::<Int>::into(b)
}

/// Return `a * b`.
pub fn multiply(a: impl Into<Int>, b: impl Into<Int>) -> Int {
    Into::<Int>::into(a) * Into::<Int>::into(b)
}

/// Return whether `a` and `b` have the same structure.
pub fn equals(a: impl Into<Int>, b: impl Into<Int>) -> bool {
    Into::<Int>::into(a) == Into::<Int>::into(b)
}

/// Return the three-way comparison of `a` and `b`.
pub fn compare(a: impl Into<Int>, b: impl Into<Int>) -> Ordering {
    Into::<Int>::into(a).cmp(&Into::<Int>::into(b))
}

/// Return `a < b`.
pub fn less(a: impl Into<Int>, b: impl Into<Int>) -> bool {
    compare(a, b).is_lt()
}

/// Return `a <= b`.
pub fn less_or_equal(a: impl Into<Int>, b: impl Into<Int>) -> bool {
    compare(a, b).is_le()
}

/// Return `a > b`.
pub fn greater(a: impl Into<Int>, b: impl Into<Int>) -> bool {
    compare(a, b).is_gt()
}

/// Return `a >= b`.
pub fn greater_or_equal(a: impl Into<Int>, b: impl Into<Int>) -> bool {
    compare(a, b).is_ge()
}

/// Project `a` into a native integer.
pub fn to_integer(a: impl Into<Int>) -> i64 {
    Into::<Int>::into(a).to_integer()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use crate::{
        constants::*,
        testing::{int, nat},
    };

    use super::*;

    #[test]
    fn add_should_sum_constants() {
        assert_eq!(to_integer(add(three(), four())), 7);
        assert!(equals(add(two(), three()), five()));
    }

    #[test]
    fn subtract_should_cross_zero() {
        assert_eq!(to_integer(subtract(two(), five())), -3);
    }

    #[test]
    fn multiply_should_compose_signs() {
        assert_eq!(to_integer(multiply(negate(three()), four())), -12);
        assert_eq!(to_integer(multiply(four(), negate(three()))), -12);
    }

    #[test]
    fn less_should_order_negatives_below_zero() {
        assert!(less(negate(ten()), zero()));
        assert!(!less(zero(), negate(ten())));
    }

    #[test]
    fn compare_should_order_negatives_inversely() {
        assert_eq!(compare(negate(two()), negate(five())), Ordering::Greater);
    }

    #[test]
    fn operations_should_accept_references() {
        let x = int(-4);
        let n = nat(6);
        assert_eq!(add(&x, &n), int(2));
        assert_eq!(to_integer(&x), -4);
    }

    #[proptest]
    fn exactly_one_of_less_equals_greater_should_hold(
        #[strategy(-16..=16i32)] x: i32,
        #[strategy(-16..=16i32)] y: i32,
    ) {
        let facets = [less(int(x), int(y)), equals(int(x), int(y)), greater(int(x), int(y))];
        prop_assert_eq!(facets.iter().filter(|b| **b).count(), 1);
    }

    #[proptest]
    fn facets_should_agree_with_native_comparison(
        #[strategy(-16..=16i32)] x: i32,
        #[strategy(-16..=16i32)] y: i32,
    ) {
        prop_assert_eq!(less(int(x), int(y)), x < y);
        prop_assert_eq!(less_or_equal(int(x), int(y)), x <= y);
        prop_assert_eq!(greater(int(x), int(y)), x > y);
        prop_assert_eq!(greater_or_equal(int(x), int(y)), x >= y);
    }

    #[proptest]
    fn less_should_be_consistent_with_negation(
        #[strategy(-16..=16i32)] x: i32,
        #[strategy(-16..=16i32)] y: i32,
    ) {
        prop_assert_eq!(less(int(x), int(y)), less(negate(int(y)), negate(int(x))));
    }

    #[proptest]
    fn subtract_should_add_negation(
        #[strategy(-16..=16i32)] x: i32,
        #[strategy(-16..=16i32)] y: i32,
    ) {
        prop_assert_eq!(subtract(int(x), int(y)), add(int(x), negate(int(y))));
    }

    #[proptest]
    fn to_integer_should_be_a_homomorphism(
        #[strategy(-12..=12i32)] x: i32,
        #[strategy(-12..=12i32)] y: i32,
    ) {
        let (a, b) = (i64::from(x), i64::from(y));
        prop_assert_eq!(to_integer(add(int(x), int(y))), a + b);
        prop_assert_eq!(to_integer(multiply(int(x), int(y))), a * b);
        prop_assert_eq!(to_integer(negate(int(x))), -a);
    }
}
