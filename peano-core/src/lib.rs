#![warn(missing_debug_implementations)]
// `missing_docs` does not work with `IsVariant`,
// see <https://github.com/JelteF/derive_more/issues/215>.
// #![warn(missing_docs)]

//! Inductively constructed integers
//! with arithmetic defined by structural recursion.
//!
//! Every value is zero,
//! the successor of a natural number,
//! or the negation of a strictly positive number.
//! Operations never fall back to machine arithmetic;
//! they rewrite one layer of structure at a time.
//! The only way out of the algebra
//! is projection to a native integer.
//!
//! Values are expected to be small constants,
//! so the unary representation is not a concern.
//!
//! # Examples
//!
//! ```
//! use peano_core::*;
//!
//! assert_eq!(to_integer(add(three(), four())), 7);
//! assert_eq!(to_integer(subtract(two(), five())), -3);
//! assert_eq!(to_integer(multiply(negate(three()), four())), -12);
//! assert!(equals(add(two(), three()), five()));
//! assert!(less(negate(ten()), zero()));
//! ```

mod arith;
mod cmp;
mod constants;
mod int;
mod nat;
mod positive;
mod project;
mod vocabulary;

pub use self::{constants::*, int::*, nat::*, positive::*, vocabulary::*};

#[cfg(test)]
pub(crate) mod testing {
    use crate::{Int, Nat};

    /// Build a natural number by nesting `n` successors around zero.
    pub fn nat(n: u32) -> Nat {
        (0..n).fold(Nat::Zero, |acc, _| acc.suc())
    }

    /// Build an integer by explicit nesting.
    pub fn int(x: i32) -> Int {
        if x < 0 {
            nat(x.unsigned_abs()).negate()
        } else {
            Int::Nat(nat(x.unsigned_abs()))
        }
    }
}
