//! Types, traits, and functions unlikely to conflict with existing definitions.

pub use peano_core::{
    add, compare, equals, greater, greater_or_equal, less, less_or_equal, multiply, negate,
    subtract, to_integer, Int, InvalidNatError, InvalidPositiveError, Nat, Positive,
};
pub use peano_static::Integer;
