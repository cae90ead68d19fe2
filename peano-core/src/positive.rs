use core::fmt;
use std::sync::Arc;

use num_traits::bounds::LowerBounded;

use crate::{Int, Nat};

/// A strictly positive natural number.
///
/// Stored as its predecessor,
/// so zero cannot be represented.
/// This is the only operand
/// a negative integer may wrap.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positive(pub(crate) Arc<Nat>);

/// Error returned when 'Positive' is given a value that is not strictly positive.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0} is below lower bound ({})", Positive::min_value())]
pub struct InvalidPositiveError(pub(crate) Int);

impl InvalidPositiveError {
    /// Unwrap the rejected value.
    pub fn into_inner(self) -> Int {
        self.0
    }
}

impl Positive {
    /// Return a new 'Positive' if given a valid value.
    pub fn new(value: Nat) -> Result<Self, InvalidPositiveError> {
        match &value {
            Nat::Zero => Err(InvalidPositiveError(Int::Nat(Nat::Zero))),
            Nat::Suc(pred) => Ok(Self(Arc::clone(pred))),
        }
    }

    /// Return the successor of `pred`,
    /// which is always positive.
    pub fn suc(pred: Nat) -> Self {
        Self(Arc::new(pred))
    }

    /// Return the natural number one below this.
    pub fn pred(&self) -> &Nat {
        &self.0
    }

    /// Return this number as a natural number.
    pub fn to_nat(&self) -> Nat {
        Nat::Suc(Arc::clone(&self.0))
    }

    /// Return this number as a non-negative integer.
    pub fn to_int(&self) -> Int {
        Int::Nat(self.to_nat())
    }
}

impl LowerBounded for Positive {
    fn min_value() -> Self {
        Self::suc(Nat::Zero)
    }
}

impl TryFrom<Nat> for Positive {
    type Error = InvalidPositiveError;

    fn try_from(value: Nat) -> Result<Self, Self::Error> {
        Positive::new(value)
    }
}

impl TryFrom<Int> for Positive {
    type Error = InvalidPositiveError;

    fn try_from(value: Int) -> Result<Self, Self::Error> {
        if let Int::Nat(Nat::Suc(pred)) = &value {
            return Ok(Self(Arc::clone(pred)));
        }
        Err(InvalidPositiveError(value))
    }
}

impl From<Positive> for Nat {
    fn from(value: Positive) -> Self {
        Nat::Suc(value.0)
    }
}

impl From<Positive> for Int {
    fn from(value: Positive) -> Self {
        Int::Nat(value.into())
    }
}

impl fmt::Debug for Positive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Positive").field(&self.to_nat()).finish()
    }
}

impl fmt::Display for Positive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_nat(), f)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use crate::testing::{int, nat};

    use super::*;

    #[test]
    fn new_should_reject_zero() {
        assert_eq!(
            Positive::new(Nat::Zero),
            Err(InvalidPositiveError(Int::Nat(Nat::Zero)))
        );
    }

    #[proptest]
    fn new_should_accept_successors(#[strategy(0..32u32)] n: u32) {
        let p = Positive::new(nat(n).suc()).unwrap();
        prop_assert_eq!(p.pred().clone(), nat(n));
        prop_assert_eq!(p.to_nat(), nat(n).suc());
    }

    #[proptest]
    fn try_from_int_should_reject_non_positive_values(#[strategy(-32..=0i32)] x: i32) {
        prop_assert_eq!(Positive::try_from(int(x)), Err(InvalidPositiveError(int(x))));
    }

    #[proptest]
    fn try_from_int_should_accept_positive_values(#[strategy(1..32i32)] x: i32) {
        prop_assert_eq!(Positive::try_from(int(x)).map(Int::from), Ok(int(x)));
    }

    #[test]
    fn min_value_should_be_one() {
        assert_eq!(Positive::min_value().to_nat(), nat(1));
    }

    #[test]
    fn invalid_positive_error_should_display_value_and_bound() {
        assert_eq!(
            InvalidPositiveError(int(0)).to_string(),
            "0 is below lower bound (1)"
        );
        assert_eq!(
            InvalidPositiveError(int(-2)).to_string(),
            "-2 is below lower bound (1)"
        );
    }
}
