//! Integer capabilities required by modular arithmetic.
//!
//! `ModInt` is generic over any primitive integer width through the
//! [`ModularInt`] trait. The trait adds the few operations that plain
//! `num_traits::PrimInt` does not cover: floor-modulo reduction, gcd,
//! wide-intermediate reduced arithmetic, and the extended Euclidean
//! modular inverse.

use std::fmt;
use std::hash::Hash;

use dashu::base::Signed;
use dashu::integer::IBig;
use num_traits::{PrimInt, ToPrimitive, Zero};

/// A primitive integer usable as the backing type of a modular value.
///
/// The widths up to 64 bits use the double-width primitive as their wide
/// intermediate (`u64` escalates to `u128`, and so on). The 128-bit widths
/// have no wider primitive and fall back to `dashu::integer::IBig`.
pub trait ModularInt: PrimInt + Hash + fmt::Debug + fmt::Display {
    /// Remainder with the mathematical sign convention: the result is
    /// always in `[0, modulus)` for `modulus >= 1`, regardless of the
    /// sign of `self`.
    fn floor_rem(self, modulus: Self) -> Self;

    /// Computes `(a + b) mod modulus` through a wide intermediate, for
    /// operands whose native-width sum may overflow.
    ///
    /// Both operands must be non-negative and reduced below `modulus`.
    fn add_wide_rem(a: Self, b: Self, modulus: Self) -> Self;

    /// Computes `(a * b) mod modulus` through a wide intermediate, for
    /// operands whose native-width product may overflow.
    ///
    /// Both operands must be non-negative and reduced below `modulus`.
    fn mul_wide_rem(a: Self, b: Self, modulus: Self) -> Self;

    /// Runs the extended Euclidean algorithm on `(value, modulus)` and
    /// returns the Bezout coefficient of `value` reduced into
    /// `[0, modulus)`, or `None` when `gcd(value, modulus) != 1`.
    fn inverse_mod(value: Self, modulus: Self) -> Option<Self>;

    /// Computes the greatest common divisor of two non-negative values.
    fn gcd(self, other: Self) -> Self {
        let (mut a, mut b) = (self, other);
        while !b.is_zero() {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    /// Projects a non-negative value into `u128`.
    ///
    /// Residues and moduli of every backing width hash through this
    /// projection, so values that compare equal after a widening
    /// conversion also hash equal.
    fn to_canonical(self) -> u128 {
        self.to_u128().expect("residues and moduli are non-negative")
    }
}

macro_rules! impl_modular_int {
    ($($t:ty => ($wide:ty, $xgcd:ty)),+ $(,)?) => {$(
        impl ModularInt for $t {
            #[inline]
            fn floor_rem(self, modulus: Self) -> Self {
                self.rem_euclid(modulus)
            }

            #[inline]
            fn add_wide_rem(a: Self, b: Self, modulus: Self) -> Self {
                ((a as $wide + b as $wide) % modulus as $wide) as $t
            }

            #[inline]
            fn mul_wide_rem(a: Self, b: Self, modulus: Self) -> Self {
                ((a as $wide * b as $wide) % modulus as $wide) as $t
            }

            fn inverse_mod(value: Self, modulus: Self) -> Option<Self> {
                let mut t: $xgcd = 0;
                let mut new_t: $xgcd = 1;
                let mut r = modulus as $xgcd;
                let mut new_r = value as $xgcd;

                while new_r != 0 {
                    let quotient = r / new_r;
                    (t, new_t) = (new_t, t - quotient * new_t);
                    (r, new_r) = (new_r, r - quotient * new_r);
                }

                if r != 1 {
                    return None;
                }
                if t < 0 {
                    t += modulus as $xgcd;
                }
                Some(t as $t)
            }
        }
    )+};
}

impl_modular_int!(
    i8 => (i16, i16),
    i16 => (i32, i32),
    i32 => (i64, i64),
    i64 => (i128, i128),
    u8 => (u16, i16),
    u16 => (u32, i32),
    u32 => (u64, i64),
    u64 => (u128, i128),
);

// Shared big-integer paths for the 128-bit widths.

fn add_big_rem(a: IBig, b: IBig, modulus: &IBig) -> IBig {
    (a + b) % modulus
}

fn mul_big_rem(a: IBig, b: IBig, modulus: &IBig) -> IBig {
    (a * b) % modulus
}

fn inverse_mod_big(value: IBig, modulus: &IBig) -> Option<IBig> {
    let mut t = IBig::ZERO;
    let mut new_t = IBig::ONE;
    let mut r = modulus.clone();
    let mut new_r = value;

    while new_r != IBig::ZERO {
        let quotient = &r / &new_r;
        let next_t = &t - &quotient * &new_t;
        t = std::mem::replace(&mut new_t, next_t);
        let next_r = &r - &quotient * &new_r;
        r = std::mem::replace(&mut new_r, next_r);
    }

    if r != IBig::ONE {
        return None;
    }
    if t.is_negative() {
        t += modulus.clone();
    }
    Some(t)
}

macro_rules! impl_modular_int_big {
    ($($t:ty),+ $(,)?) => {$(
        impl ModularInt for $t {
            #[inline]
            fn floor_rem(self, modulus: Self) -> Self {
                self.rem_euclid(modulus)
            }

            fn add_wide_rem(a: Self, b: Self, modulus: Self) -> Self {
                let reduced = add_big_rem(IBig::from(a), IBig::from(b), &IBig::from(modulus));
                <$t>::try_from(reduced).expect("reduced value fits the native width")
            }

            fn mul_wide_rem(a: Self, b: Self, modulus: Self) -> Self {
                let reduced = mul_big_rem(IBig::from(a), IBig::from(b), &IBig::from(modulus));
                <$t>::try_from(reduced).expect("reduced value fits the native width")
            }

            fn inverse_mod(value: Self, modulus: Self) -> Option<Self> {
                let coefficient = inverse_mod_big(IBig::from(value), &IBig::from(modulus))?;
                Some(<$t>::try_from(coefficient).expect("reduced value fits the native width"))
            }
        }
    )+};
}

impl_modular_int_big!(i128, u128);
