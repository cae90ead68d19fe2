//! Named small natural numbers.

use paste::paste;

use crate::Nat;

/// Return `0`.
pub const fn zero() -> Nat {
    Nat::Zero
}

macro_rules! impl_successor_constants {
    ( $( $pred:ident => $name:ident ),* $(,)? ) => {
        paste! {
            $(
                #[doc = "Return `" $name "`, the successor of [`" $pred "`]."]
                pub fn $name() -> Nat {
                    $pred().suc()
                }
            )*
        }
    };
}

impl_successor_constants!(
    zero => one,
    one => two,
    two => three,
    three => four,
    four => five,
    five => six,
    six => seven,
    seven => eight,
    eight => nine,
    nine => ten,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_should_count_up_from_zero() {
        let constants = [
            zero(),
            one(),
            two(),
            three(),
            four(),
            five(),
            six(),
            seven(),
            eight(),
            nine(),
            ten(),
        ];
        for (i, n) in constants.iter().enumerate() {
            assert_eq!(n.to_natural(), i as u64);
        }
        for pair in constants.windows(2) {
            assert_eq!(pair[1].pred(), Some(&pair[0]));
        }
    }
}
