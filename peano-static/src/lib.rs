#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

//! Integers encoded as types,
//! with arithmetic resolved by the trait solver.
//!
//! Each integer is a distinct type,
//! so results are known before any code runs.
//! Every type-level integer reifies
//! into the equivalent [`peano_core::Int`].
//!
//! # Examples
//!
//! ```
//! use peano_static::*;
//!
//! assert_eq!(<Sum<Three, Four>>::VALUE, 7);
//! assert_eq!(<Difference<Two, Five>>::VALUE, -3);
//! assert_eq!(<Product<Negation<Three>, Four>>::VALUE, -12);
//! assert!(less::<Negation<Ten>, Zero>());
//!
//! // Operators on values produce values of the resulting type.
//! let _: Five = TWO + THREE;
//! let _: Negation<Three> = TWO - FIVE;
//! ```

use core::{cmp::Ordering, fmt, ops};

use paste::paste;
use peano_core::{Int, Nat};

pub use self::{add::*, cmp::*, mul::*, negate::*, sub::*};

/// The integer `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

/// The successor of natural number `A`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Suc<A>(A);

/// The negation of positive number `A`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neg<A>(A);

/// A well-formed type-level integer.
pub trait Integer: Copy + Default + fmt::Debug {
    /// Native value of this integer.
    const VALUE: i64;

    /// Return the equivalent runtime integer.
    fn reify() -> Int;

    /// Compare this value with `rhs`,
    /// returning the marker of the type-level ordering.
    ///
    /// Operands may have different types,
    /// so `THREE.compare(FOUR)` is [`Less`].
    fn compare<B>(self, _rhs: B) -> Compared<Self, B>
    where
        Self: Compare<B>,
        B: Integer,
    {
        Default::default()
    }
}

/// A type-level integer that is zero or a successor.
pub trait Natural: Integer {
    /// Return the equivalent runtime natural number.
    fn reify_nat() -> Nat;
}

/// A type-level integer that is a successor.
///
/// Only these may be negated into [`Neg`].
pub trait Positive: Natural {
    /// Return the equivalent runtime positive number.
    fn reify_positive() -> peano_core::Positive;
}

impl Integer for Zero {
    const VALUE: i64 = 0;

    fn reify() -> Int {
        Int::Nat(Self::reify_nat())
    }
}

impl Natural for Zero {
    fn reify_nat() -> Nat {
        Nat::Zero
    }
}

impl<A> Integer for Suc<A>
where
    A: Natural,
{
    const VALUE: i64 = 1 + A::VALUE;

    fn reify() -> Int {
        Int::Nat(Self::reify_nat())
    }
}

impl<A> Natural for Suc<A>
where
    A: Natural,
{
    fn reify_nat() -> Nat {
        A::reify_nat().suc()
    }
}

impl<A> Positive for Suc<A>
where
    A: Natural,
{
    fn reify_positive() -> peano_core::Positive {
        peano_core::Positive::suc(A::reify_nat())
    }
}

impl<A> Integer for Neg<A>
where
    A: Positive,
{
    const VALUE: i64 = -A::VALUE;

    fn reify() -> Int {
        Int::Neg(A::reify_positive())
    }
}

macro_rules! impl_constants {
    ( $( $pred:ident => $name:ident ),* $(,)? ) => {
        paste! {
            /// The value of [`Zero`].
            pub const ZERO: Zero = Zero;

            $(
                #[doc = "The type-level integer `" $name "`."]
                pub type $name = Suc<$pred>;

                #[doc = "The value of [`" $name "`]."]
                pub const [<$name:upper>]: $name = Suc([<$pred:upper>]);
            )*
        }
    };
}

impl_constants!(
    Zero => One,
    One => Two,
    Two => Three,
    Three => Four,
    Four => Five,
    Five => Six,
    Six => Seven,
    Seven => Eight,
    Eight => Nine,
    Nine => Ten,
);

mod negate {
    use super::*;

    /// Type-level negation.
    pub trait Negate {
        /// Additive inverse of `Self`.
        type Negate;
    }

    impl Negate for Zero {
        type Negate = Zero;
    }

    impl<A> Negate for Suc<A> {
        type Negate = Neg<Suc<A>>;
    }

    impl<A> Negate for Neg<A> {
        type Negate = A;
    }

    /// Additive inverse of `A`.
    pub type Negation<A> = <A as Negate>::Negate;
}

mod add {
    use super::*;

    /// Type-level addition.
    ///
    /// A negative left operand takes priority,
    /// then a positive left operand meeting a negative right operand,
    /// then the generic successor rule.
    pub trait Add<B> {
        /// `Self + B`.
        type Add;
    }

    impl<B> Add<B> for Zero {
        type Add = B;
    }

    impl<A, B> Add<B> for Neg<A>
    where
        B: Negate,
        A: Add<Negation<B>>,
        <A as Add<Negation<B>>>::Add: Negate,
    {
        type Add = Negation<<A as Add<Negation<B>>>::Add>;
    }

    impl<A> Add<Zero> for Suc<A> {
        type Add = Suc<A>;
    }

    impl<A, B> Add<Suc<B>> for Suc<A>
    where
        A: Add<Suc<B>>,
    {
        type Add = Suc<<A as Add<Suc<B>>>::Add>;
    }

    // Negating `B` rather than wrapping it
    // keeps `1 + -1` from producing a negative zero.
    impl<A, B> Add<Neg<Suc<B>>> for Suc<A>
    where
        B: Negate,
        A: Add<Negation<B>>,
    {
        type Add = <A as Add<Negation<B>>>::Add;
    }

    /// `A + B`.
    pub type Sum<A, B> = <A as Add<B>>::Add;
}

mod sub {
    use super::*;

    /// Type-level subtraction,
    /// addition of the negation.
    pub trait Sub<B> {
        /// `Self - B`.
        type Sub;
    }

    impl<A, B> Sub<B> for A
    where
        B: Negate,
        A: Add<Negation<B>>,
    {
        type Sub = Sum<A, Negation<B>>;
    }

    /// `A - B`.
    pub type Difference<A, B> = <A as Sub<B>>::Sub;
}

mod mul {
    use super::*;

    /// Type-level multiplication,
    /// by repeated addition of the right operand.
    pub trait Mul<B> {
        /// `Self * B`.
        type Mul;
    }

    impl<B> Mul<B> for Zero {
        type Mul = Zero;
    }

    impl<A, B> Mul<B> for Neg<A>
    where
        A: Mul<B>,
        <A as Mul<B>>::Mul: Negate,
    {
        type Mul = Negation<<A as Mul<B>>::Mul>;
    }

    impl<A> Mul<Zero> for Suc<A>
    where
        A: Mul<Zero>,
        Zero: Add<<A as Mul<Zero>>::Mul>,
    {
        type Mul = Sum<Zero, <A as Mul<Zero>>::Mul>;
    }

    impl<A, B> Mul<Suc<B>> for Suc<A>
    where
        A: Mul<Suc<B>>,
        Suc<B>: Add<<A as Mul<Suc<B>>>::Mul>,
    {
        type Mul = Sum<Suc<B>, <A as Mul<Suc<B>>>::Mul>;
    }

    impl<A, B> Mul<Neg<B>> for Suc<A>
    where
        Suc<A>: Mul<B>,
        <Suc<A> as Mul<B>>::Mul: Negate,
    {
        type Mul = Negation<<Suc<A> as Mul<B>>::Mul>;
    }

    /// `A * B`.
    pub type Product<A, B> = <A as Mul<B>>::Mul;
}

mod cmp {
    use super::*;

    /// Result of a type-level comparison.
    pub trait Comparison: Copy + Default + fmt::Debug {
        /// Equivalent runtime ordering.
        const ORDERING: Ordering;
        /// Whether left is less than right.
        const LESS: bool = Self::ORDERING.is_lt();
        /// Whether left is less than or equal to right.
        const LESS_OR_EQUAL: bool = Self::ORDERING.is_le();
        /// Whether left equals right.
        const EQUAL: bool = Self::ORDERING.is_eq();
        /// Whether left is greater than or equal to right.
        const GREATER_OR_EQUAL: bool = Self::ORDERING.is_ge();
        /// Whether left is greater than right.
        const GREATER: bool = Self::ORDERING.is_gt();

        /// Return [`Comparison::LESS`].
        fn is_lt(self) -> bool {
            Self::LESS
        }

        /// Return [`Comparison::LESS_OR_EQUAL`].
        fn is_le(self) -> bool {
            Self::LESS_OR_EQUAL
        }

        /// Return [`Comparison::EQUAL`].
        fn is_eq(self) -> bool {
            Self::EQUAL
        }

        /// Return [`Comparison::GREATER_OR_EQUAL`].
        fn is_ge(self) -> bool {
            Self::GREATER_OR_EQUAL
        }

        /// Return [`Comparison::GREATER`].
        fn is_gt(self) -> bool {
            Self::GREATER
        }
    }

    /// Left is less than right.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Less;

    /// Left equals right.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Equal;

    /// Left is greater than right.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Greater;

    impl Comparison for Less {
        const ORDERING: Ordering = Ordering::Less;
    }

    impl Comparison for Equal {
        const ORDERING: Ordering = Ordering::Equal;
    }

    impl Comparison for Greater {
        const ORDERING: Ordering = Ordering::Greater;
    }

    /// Type-level three-way comparison.
    pub trait Compare<B> {
        /// Ordering of `Self` relative to `B`.
        type Compare: Comparison;
    }

    impl Compare<Zero> for Zero {
        type Compare = Equal;
    }

    impl<B> Compare<Suc<B>> for Zero {
        type Compare = Less;
    }

    impl<B> Compare<Neg<B>> for Zero {
        type Compare = Greater;
    }

    impl<A> Compare<Zero> for Suc<A> {
        type Compare = Greater;
    }

    impl<A, B> Compare<Suc<B>> for Suc<A>
    where
        A: Compare<B>,
    {
        type Compare = <A as Compare<B>>::Compare;
    }

    impl<A, B> Compare<Neg<B>> for Suc<A> {
        type Compare = Greater;
    }

    impl<A> Compare<Zero> for Neg<A> {
        type Compare = Less;
    }

    impl<A, B> Compare<Suc<B>> for Neg<A> {
        type Compare = Less;
    }

    impl<A, B> Compare<Neg<B>> for Neg<A>
    where
        B: Compare<A>,
    {
        type Compare = <B as Compare<A>>::Compare;
    }

    /// Ordering of `A` relative to `B`.
    pub type Compared<A, B> = <A as Compare<B>>::Compare;

    macro_rules! impl_facet {
        ( $name:ident, $const:ident, $inline:literal ) => {
            #[doc = concat!("Return whether `A ", $inline, " B`.")]
            pub const fn $name<A, B>() -> bool
            where
                A: Compare<B>,
            {
                <Compared<A, B> as Comparison>::$const
            }
        };
    }

    impl_facet!(less, LESS, "<");
    impl_facet!(less_or_equal, LESS_OR_EQUAL, "<=");
    impl_facet!(equal, EQUAL, "==");
    impl_facet!(greater_or_equal, GREATER_OR_EQUAL, ">=");
    impl_facet!(greater, GREATER, ">");
}

macro_rules! impl_value_ops {
    ( $ty:ident $( < $gen:ident > )? ) => {
        impl_value_ops!(@impl Add, Sum for $ty $( < $gen > )?);
        impl_value_ops!(@impl Sub, Difference for $ty $( < $gen > )?);
        impl_value_ops!(@impl Mul, Product for $ty $( < $gen > )?);

        impl $( < $gen > )? ops::Neg for $ty $( < $gen > )?
        where
            Self: Integer + Negate,
            Negation<Self>: Integer,
        {
            type Output = Negation<Self>;

            fn neg(self) -> Self::Output {
                Default::default()
            }
        }
    };
    ( @impl $op:ident, $alias:ident for $ty:ident $( < $gen:ident > )? ) => {
        paste! {
            impl<Rhs $( , $gen )?> ops::$op<Rhs> for $ty $( < $gen > )?
            where
                Self: Integer + $op<Rhs>,
                Rhs: Integer,
                $alias<Self, Rhs>: Integer,
            {
                type Output = $alias<Self, Rhs>;

                fn [<$op:lower>](self, _rhs: Rhs) -> Self::Output {
                    Default::default()
                }
            }
        }
    };
}

impl_value_ops!(Zero);
impl_value_ops!(Suc<A>);
impl_value_ops!(Neg<A>);
