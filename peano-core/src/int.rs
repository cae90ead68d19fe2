use core::fmt;

use derive_more::IsVariant;

use crate::{InvalidNatError, InvalidPositiveError, Nat, Positive};

/// An integer,
/// a natural number
/// or the negation of a strictly positive number.
///
/// Every integer has exactly one representation:
/// negative zero and double negation
/// cannot be built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum Int {
    /// `0`, `1`, `2`, ...
    Nat(Nat),
    /// `-p`.
    Neg(Positive),
}

impl Int {
    /// Return the additive inverse of this integer.
    ///
    /// Negation is an involution:
    /// negating twice returns the original value.
    pub fn negate(&self) -> Int {
        match self {
            Int::Nat(n) => n.negate(),
            Int::Neg(p) => p.to_int(),
        }
    }

    /// Return the successor of this integer
    /// if it is non-negative.
    pub fn successor(self) -> Result<Int, InvalidNatError> {
        Nat::try_from(self).map(|n| Int::Nat(n.suc()))
    }

    /// Return the negation of this integer
    /// if it is strictly positive.
    ///
    /// Unlike [`Int::negate`],
    /// this refuses to build negative zero
    /// or to wrap a negative value.
    pub fn negative(self) -> Result<Int, InvalidPositiveError> {
        Positive::try_from(self).map(Int::Neg)
    }
}

impl Nat {
    /// Return the additive inverse of this natural number.
    pub fn negate(&self) -> Int {
        match self {
            Nat::Zero => Int::Nat(Nat::Zero),
            Nat::Suc(pred) => Int::Neg(Positive(pred.clone())),
        }
    }
}

impl Default for Int {
    fn default() -> Self {
        Int::Nat(Nat::Zero)
    }
}

impl num_traits::Zero for Int {
    fn zero() -> Self {
        Int::Nat(Nat::Zero)
    }

    fn is_zero(&self) -> bool {
        matches!(self, Int::Nat(Nat::Zero))
    }
}

impl num_traits::One for Int {
    fn one() -> Self {
        Int::Nat(Nat::Zero.suc())
    }
}

impl From<Nat> for Int {
    fn from(value: Nat) -> Self {
        Int::Nat(value)
    }
}

impl From<&Nat> for Int {
    fn from(value: &Nat) -> Self {
        Int::Nat(value.clone())
    }
}

impl From<&Int> for Int {
    fn from(value: &Int) -> Self {
        value.clone()
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_integer())
    }
}
