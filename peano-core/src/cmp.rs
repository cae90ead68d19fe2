//! Structural equality and total ordering.

use core::cmp::Ordering;
use std::sync::Arc;

use crate::{Int, Nat};

impl PartialEq for Nat {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Nat::Zero, Nat::Zero) => return true,
                (Nat::Suc(x), Nat::Suc(y)) => {
                    // Shared sub-terms are equal without descending.
                    if Arc::ptr_eq(x, y) {
                        return true;
                    }
                    a = &**x;
                    b = &**y;
                }
                (Nat::Zero, Nat::Suc(_)) | (Nat::Suc(_), Nat::Zero) => return false,
            }
        }
    }
}

impl PartialOrd for Nat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Nat {
    fn cmp(&self, other: &Self) -> Ordering {
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Nat::Zero, Nat::Zero) => return Ordering::Equal,
                (Nat::Zero, Nat::Suc(_)) => return Ordering::Less,
                (Nat::Suc(_), Nat::Zero) => return Ordering::Greater,
                (Nat::Suc(x), Nat::Suc(y)) => {
                    if Arc::ptr_eq(x, y) {
                        return Ordering::Equal;
                    }
                    a = &**x;
                    b = &**y;
                }
            }
        }
    }
}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Int::Nat(a), Int::Nat(b)) => a.cmp(b),
            // Negation reverses magnitude order.
            (Int::Neg(a), Int::Neg(b)) => b.cmp(a),
            (Int::Neg(_), Int::Nat(_)) => Ordering::Less,
            (Int::Nat(_), Int::Neg(_)) => Ordering::Greater,
        }
    }
}
