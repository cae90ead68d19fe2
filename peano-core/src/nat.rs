use core::fmt;
use std::sync::Arc;

use num_traits::bounds::LowerBounded;

use crate::Int;

/// A natural number,
/// zero or the successor of another natural number.
///
/// Nesting depth of `Suc`
/// is the magnitude of the number.
/// Sub-terms are shared,
/// so cloning is cheap
/// and values may be aliased freely.
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Clone, Debug, Default, Eq, Hash)]
pub enum Nat {
    /// `0`.
    #[default]
    Zero,
    /// `n + 1`.
    Suc(Arc<Nat>),
}

/// Error returned when 'Nat' is given a negative value.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0} is below lower bound ({})", Nat::min_value())]
pub struct InvalidNatError(pub(crate) Int);

impl InvalidNatError {
    /// Unwrap the rejected value.
    pub fn into_inner(self) -> Int {
        self.0
    }
}

impl Nat {
    /// Return the successor of this number.
    pub fn suc(self) -> Self {
        Nat::Suc(Arc::new(self))
    }

    /// Return the predecessor of this number,
    /// or `None` if it is zero.
    pub fn pred(&self) -> Option<&Nat> {
        match self {
            Nat::Zero => None,
            Nat::Suc(n) => Some(n),
        }
    }
}

impl Drop for Nat {
    fn drop(&mut self) {
        // Unlink uniquely owned successors one at a time,
        // so dropping does not recurse once per layer.
        let Nat::Suc(pred) = self else { return };
        if matches!(**pred, Nat::Zero) {
            return;
        }
        let zero = Arc::new(Nat::Zero);
        let mut next = core::mem::replace(pred, Arc::clone(&zero));
        while let Ok(mut node) = Arc::try_unwrap(next) {
            match &mut node {
                Nat::Zero => break,
                Nat::Suc(pred) => next = core::mem::replace(pred, Arc::clone(&zero)),
            }
        }
    }
}

impl LowerBounded for Nat {
    fn min_value() -> Self {
        Nat::Zero
    }
}

impl num_traits::Zero for Nat {
    fn zero() -> Self {
        Nat::Zero
    }

    fn is_zero(&self) -> bool {
        matches!(self, Nat::Zero)
    }
}

impl num_traits::One for Nat {
    fn one() -> Self {
        Nat::Zero.suc()
    }
}

impl TryFrom<Int> for Nat {
    type Error = InvalidNatError;

    fn try_from(value: Int) -> Result<Self, Self::Error> {
        match value {
            Int::Nat(n) => Ok(n),
            Int::Neg(_) => Err(InvalidNatError(value)),
        }
    }
}

impl fmt::Display for Nat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_natural())
    }
}
