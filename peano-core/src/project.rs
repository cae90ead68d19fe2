//! One-way projection into native integers.
//!
//! There is deliberately no conversion in the other direction.

use num_traits::{One, ToPrimitive, Zero};

use crate::{Int, Nat};

fn project<T>(n: &Nat) -> T
where
    T: Zero + One,
{
    let mut acc = T::zero();
    let mut n = n;
    while let Nat::Suc(pred) = n {
        acc = acc + T::one();
        n = &**pred;
    }
    acc
}

impl Nat {
    /// Return the number of successors in this natural number.
    pub fn to_natural(&self) -> u64 {
        project(self)
    }
}

impl Int {
    /// Return this integer as a native integer.
    pub fn to_integer(&self) -> i64 {
        match self {
            Int::Nat(n) => project(n),
            Int::Neg(p) => -(1 + project::<i64>(p.pred())),
        }
    }
}

impl ToPrimitive for Nat {
    fn to_i64(&self) -> Option<i64> {
        Some(project(self))
    }

    fn to_u64(&self) -> Option<u64> {
        Some(project(self))
    }
}

impl ToPrimitive for Int {
    fn to_i64(&self) -> Option<i64> {
        Some(self.to_integer())
    }

    fn to_u64(&self) -> Option<u64> {
        match self {
            Int::Nat(n) => Some(n.to_natural()),
            Int::Neg(_) => None,
        }
    }
}

impl From<&Int> for i64 {
    fn from(value: &Int) -> Self {
        value.to_integer()
    }
}

impl From<Int> for i64 {
    fn from(value: Int) -> Self {
        value.to_integer()
    }
}

impl From<&Nat> for u64 {
    fn from(value: &Nat) -> Self {
        value.to_natural()
    }
}

impl From<Nat> for u64 {
    fn from(value: Nat) -> Self {
        value.to_natural()
    }
}
