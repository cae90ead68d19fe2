#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

//! Integers built from zero,
//! successor,
//! and negation,
//! with arithmetic defined by structural recursion.
//!
//! Peano provides two encodings
//! of the same algebra:
//! runtime values
//! (re-exported at the crate root from `peano-core`)
//! and types
//! (in [`types`], from `peano-static`).
//! Type-level integers reify
//! into the equivalent runtime value,
//! and both agree on every operation.
//!
//! Values are unary,
//! so every operation costs at least linear time
//! in the magnitude of its operands.
//! They are intended for small constants
//! known ahead of time.
//!
//! # Examples
//!
//! Compute with runtime values:
//!
//! ```
//! use peano::prelude::*;
//! use peano::{five, four, three, two};
//!
//! let x = multiply(negate(three()), four());
//! assert_eq!(to_integer(&x), -12);
//! assert_eq!(x.to_string(), "-12");
//! assert!(less(&x, subtract(two(), five())));
//! ```
//!
//! Compute with types,
//! then reify the result:
//!
//! ```
//! use peano::prelude::*;
//! use peano::types::{Product, Negation, Four, Three};
//!
//! type X = Product<Negation<Three>, Four>;
//! assert_eq!(X::VALUE, -12);
//! assert_eq!(X::reify(), multiply(negate(peano::three()), peano::four()));
//! ```
//!
//! Ill-formed values are rejected at construction:
//!
//! ```
//! use peano::prelude::*;
//!
//! assert!(Positive::new(Nat::Zero).is_err());
//! assert!(negate(peano::one()).negative().is_err());
//! assert!(negate(peano::one()).successor().is_err());
//! ```

pub mod prelude;

pub use peano_core::*;
/// Integers encoded as types.
pub use peano_static as types;

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use num_traits::ToPrimitive;
    use paste::paste;
    use static_assertions::assert_impl_all;

    use crate::{add, compare, equals, multiply, negate, subtract, types::*, Int, Nat};

    assert_impl_all!(Int: Clone, Send, Sync);
    assert_impl_all!(Nat: Clone, Send, Sync);

    type NegOne = Neg<One>;
    type NegTwo = Neg<Two>;
    type NegThree = Neg<Three>;
    type NegFour = Neg<Four>;

    fn ordering<A, B>() -> Ordering
    where
        A: Compare<B>,
    {
        <Compared<A, B> as Comparison>::ORDERING
    }

    macro_rules! test_agreement {
        ( $( $a:ident $b:ident ),* $(,)? ) => {
            paste! {
                $(
                    #[test]
                    fn [<type_level_ $a:snake _and_ $b:snake _should_agree_with_runtime>]() {
                        let (a, b) = ($a::reify(), $b::reify());
                        assert_eq!(a.to_i64(), Some($a::VALUE));
                        assert_eq!(<Negation<$a>>::reify(), negate(&a));
                        assert_eq!(<Sum<$a, $b>>::reify(), add(&a, &b));
                        assert_eq!(<Difference<$a, $b>>::reify(), subtract(&a, &b));
                        assert_eq!(<Product<$a, $b>>::reify(), multiply(&a, &b));
                        assert_eq!(ordering::<$a, $b>(), compare(&a, &b));
                        assert_eq!(less::<$a, $b>(), crate::less(&a, &b));
                        assert_eq!(equal::<$a, $b>(), equals(&a, &b));
                    }
                )*
            }
        };
    }

    test_agreement!(
        Zero Zero,
        Zero Three,
        Three Zero,
        Two Three,
        Three Two,
        Four Four,
        NegOne One,
        One NegOne,
        NegTwo Three,
        Three NegTwo,
        NegThree NegFour,
        NegFour NegThree,
        Zero NegTwo,
        NegTwo Zero,
    );
}
