//! Addition, subtraction, and multiplication
//! by structural recursion.
//!
//! Rules are tried top to bottom.
//! Sign-specific rules must precede
//! the generic rules for non-negative operands,
//! or mixed-sign operands would never cross zero.

use core::ops;

use paste::paste;

use crate::{Int, Nat};

pub(crate) fn add_nat(a: &Nat, b: &Nat) -> Nat {
    match a {
        Nat::Zero => b.clone(),
        Nat::Suc(a) => add_nat(a, b).suc(),
    }
}

pub(crate) fn add_int(a: &Int, b: &Int) -> Int {
    match (a, b) {
        (Int::Nat(Nat::Zero), b) => b.clone(),
        (Int::Neg(a), b) => add_int(&a.to_int(), &b.negate()).negate(),
        (Int::Nat(Nat::Suc(a)), Int::Neg(b)) => add_int(&Int::from(&**a), &b.pred().negate()),
        (Int::Nat(a), Int::Nat(b)) => Int::Nat(add_nat(a, b)),
    }
}

pub(crate) fn sub_int(a: &Int, b: &Int) -> Int {
    add_int(a, &b.negate())
}

pub(crate) fn sub_nat(a: &Nat, b: &Nat) -> Int {
    add_int(&Int::from(a), &b.negate())
}

pub(crate) fn mul_nat(a: &Nat, b: &Nat) -> Nat {
    match a {
        Nat::Zero => Nat::Zero,
        Nat::Suc(a) => add_nat(b, &mul_nat(a, b)),
    }
}

pub(crate) fn mul_int(a: &Int, b: &Int) -> Int {
    match (a, b) {
        (Int::Nat(Nat::Zero), _) => Int::Nat(Nat::Zero),
        (Int::Neg(a), b) => mul_int(&a.to_int(), b).negate(),
        (Int::Nat(a @ Nat::Suc(_)), Int::Neg(b)) => mul_int(&Int::from(a), &b.to_int()).negate(),
        (Int::Nat(a), Int::Nat(b)) => Int::Nat(mul_nat(a, b)),
    }
}

macro_rules! impl_binary_op {
    ( $op:ident for $ty:ident -> $out:ident, $f:ident ) => {
        paste! {
            impl ops::$op<&$ty> for &$ty {
                type Output = $out;

                fn [<$op:lower>](self, rhs: &$ty) -> Self::Output {
                    $f(self, rhs)
                }
            }

            impl ops::$op<$ty> for &$ty {
                type Output = $out;

                fn [<$op:lower>](self, rhs: $ty) -> Self::Output {
                    $f(self, &rhs)
                }
            }

            impl ops::$op<&$ty> for $ty {
                type Output = $out;

                fn [<$op:lower>](self, rhs: &$ty) -> Self::Output {
                    $f(&self, rhs)
                }
            }

            impl ops::$op<$ty> for $ty {
                type Output = $out;

                fn [<$op:lower>](self, rhs: $ty) -> Self::Output {
                    $f(&self, &rhs)
                }
            }
        }
    };
}

macro_rules! impl_neg {
    ( $ty:ident ) => {
        impl ops::Neg for &$ty {
            type Output = Int;

            fn neg(self) -> Self::Output {
                self.negate()
            }
        }

        impl ops::Neg for $ty {
            type Output = Int;

            fn neg(self) -> Self::Output {
                self.negate()
            }
        }
    };
}

impl_binary_op!(Add for Int -> Int, add_int);
impl_binary_op!(Sub for Int -> Int, sub_int);
impl_binary_op!(Mul for Int -> Int, mul_int);
impl_neg!(Int);

impl_binary_op!(Add for Nat -> Nat, add_nat);
impl_binary_op!(Sub for Nat -> Int, sub_nat);
impl_binary_op!(Mul for Nat -> Nat, mul_nat);
impl_neg!(Nat);
