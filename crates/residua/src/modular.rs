//! Modular arithmetic over ℤ/mℤ with a runtime modulus.
//!
//! [`ModInt`] pairs a residue with its modulus and keeps the invariant
//! `0 <= residue < modulus` through every operation. Addition and
//! multiplication first try checked native arithmetic and escalate to a
//! wider intermediate only when the native width overflows.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use num_traits::{One, Zero};
use thiserror::Error;

use crate::traits::ModularInt;

/// Errors reported by modular operations.
///
/// All variants are caller-input errors; no operation mutates its
/// operands on failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ModularError {
    /// The modulus supplied to a constructor was below 1.
    #[error("modulus must be at least 1")]
    InvalidModulus,

    /// A binary operation was invoked on values with different moduli.
    #[error("operands have incompatible moduli")]
    IncompatibleModuli,

    /// Inversion or division was attempted on a value whose residue is
    /// not coprime with its modulus, or under the trivial modulus 1.
    #[error("value is not invertible under its modulus")]
    NotInvertible,

    /// CRT combination was attempted on moduli sharing a factor above 1.
    #[error("moduli are not coprime")]
    NonCoprimeModuli,

    /// The combined CRT modulus does not fit the native integer width.
    #[error("combined modulus exceeds the native integer range")]
    ModulusOverflow,
}

/// An integer residue modulo a runtime modulus.
///
/// Values are immutable plain data: every operation returns a freshly
/// constructed instance and never touches its operands. Two values
/// interoperate only when their moduli are equal.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ModInt<T: ModularInt> {
    residue: T,
    modulus: T,
}

/// Right-hand operands accepted by the arithmetic methods.
///
/// Raw integers are normalized into the left operand's ring before the
/// operation runs, mirroring mixed-type numeric promotion.
pub trait ModOperand<T: ModularInt> {
    /// Coerces the operand into a residue under `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::InvalidModulus`] if the coercion has to
    /// construct a value under an invalid modulus.
    fn into_modular(self, modulus: T) -> Result<ModInt<T>, ModularError>;
}

impl<T: ModularInt> ModOperand<T> for ModInt<T> {
    fn into_modular(self, _modulus: T) -> Result<ModInt<T>, ModularError> {
        Ok(self)
    }
}

impl<T: ModularInt> ModOperand<T> for T {
    fn into_modular(self, modulus: T) -> Result<ModInt<T>, ModularError> {
        ModInt::new(self, modulus)
    }
}

impl<T: ModularInt> ModInt<T> {
    /// Creates a modular integer, reducing `value` into `[0, modulus)`
    /// with the floor-modulo convention.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::InvalidModulus`] if `modulus < 1`.
    pub fn new(value: T, modulus: T) -> Result<Self, ModularError> {
        if modulus < T::one() {
            return Err(ModularError::InvalidModulus);
        }
        Ok(Self {
            residue: value.floor_rem(modulus),
            modulus,
        })
    }

    /// Creates the additive identity of ℤ/mℤ.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::InvalidModulus`] if `modulus < 1`.
    pub fn zero(modulus: T) -> Result<Self, ModularError> {
        Self::new(T::zero(), modulus)
    }

    /// Creates the multiplicative identity of ℤ/mℤ.
    ///
    /// Under the trivial modulus 1 this reduces to 0, the ring's only
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::InvalidModulus`] if `modulus < 1`.
    pub fn one(modulus: T) -> Result<Self, ModularError> {
        Self::new(T::one(), modulus)
    }

    /// Returns the residue, always in `[0, modulus)`.
    #[must_use]
    pub fn residue(self) -> T {
        self.residue
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(self) -> T {
        self.modulus
    }

    fn check_compatible(self, other: Self) -> Result<(), ModularError> {
        if self.modulus == other.modulus {
            Ok(())
        } else {
            Err(ModularError::IncompatibleModuli)
        }
    }

    /// Adds two residues, escalating to a wide intermediate when the
    /// native-width sum overflows.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::IncompatibleModuli`] if the moduli differ.
    pub fn add(self, rhs: impl ModOperand<T>) -> Result<Self, ModularError> {
        let rhs = rhs.into_modular(self.modulus)?;
        self.check_compatible(rhs)?;
        match self.residue.checked_add(&rhs.residue) {
            Some(sum) => Self::new(sum, self.modulus),
            None => Self::new(
                T::add_wide_rem(self.residue, rhs.residue, self.modulus),
                self.modulus,
            ),
        }
    }

    /// Subtracts `rhs`, defined as addition of the additive inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::IncompatibleModuli`] if the moduli differ.
    pub fn sub(self, rhs: impl ModOperand<T>) -> Result<Self, ModularError> {
        let rhs = rhs.into_modular(self.modulus)?;
        self.add(rhs.neg())
    }

    /// Subtracts `self` from `lhs`, for the operand order where the
    /// raw integer stands on the left of the minus sign.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::IncompatibleModuli`] if the moduli differ.
    pub fn sub_from(self, lhs: impl ModOperand<T>) -> Result<Self, ModularError> {
        lhs.into_modular(self.modulus)?.sub(self)
    }

    /// Multiplies two residues, escalating to a wide intermediate when
    /// the native-width product overflows.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::IncompatibleModuli`] if the moduli differ.
    pub fn mul(self, rhs: impl ModOperand<T>) -> Result<Self, ModularError> {
        let rhs = rhs.into_modular(self.modulus)?;
        self.check_compatible(rhs)?;
        match self.residue.checked_mul(&rhs.residue) {
            Some(product) => Self::new(product, self.modulus),
            None => Self::new(
                T::mul_wide_rem(self.residue, rhs.residue, self.modulus),
                self.modulus,
            ),
        }
    }

    /// Divides by `rhs`, i.e. multiplies by its modular inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::IncompatibleModuli`] if the moduli differ
    /// and [`ModularError::NotInvertible`] if `rhs` has no inverse.
    pub fn div(self, rhs: impl ModOperand<T>) -> Result<Self, ModularError> {
        let rhs = rhs.into_modular(self.modulus)?;
        self.check_compatible(rhs)?;
        self.mul(rhs.inv()?)
    }

    /// Divides `lhs` by `self`, for the operand order where the raw
    /// integer stands on the left of the division.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::IncompatibleModuli`] if the moduli differ
    /// and [`ModularError::NotInvertible`] if `self` has no inverse.
    pub fn div_into(self, lhs: impl ModOperand<T>) -> Result<Self, ModularError> {
        lhs.into_modular(self.modulus)?.div(self)
    }

    /// Returns the additive inverse.
    ///
    /// The magnitude of a residue never exceeds its modulus, so negation
    /// wraps within the native width and cannot fail.
    #[must_use]
    pub fn neg(self) -> Self {
        if self.residue.is_zero() {
            self
        } else {
            Self {
                residue: self.modulus - self.residue,
                modulus: self.modulus,
            }
        }
    }

    /// Returns true iff the value has a multiplicative inverse.
    ///
    /// The trivial ring ℤ/1ℤ is defined to contain no invertible
    /// elements.
    #[must_use]
    pub fn is_invertible(self) -> bool {
        self.modulus > T::one() && self.residue.gcd(self.modulus) == T::one()
    }

    /// Computes the multiplicative inverse via the extended Euclidean
    /// algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::NotInvertible`] when
    /// `gcd(residue, modulus) != 1` or when the modulus is 1.
    pub fn inv(self) -> Result<Self, ModularError> {
        if self.modulus == T::one() {
            return Err(ModularError::NotInvertible);
        }
        match T::inverse_mod(self.residue, self.modulus) {
            Some(coefficient) => Self::new(coefficient, self.modulus),
            None => Err(ModularError::NotInvertible),
        }
    }

    /// Computes `self^exp` by repeated squaring.
    ///
    /// Every squaring step runs over a wide intermediate, so the loop is
    /// overflow-safe for any modulus representable in the native width.
    /// `exp == 0` yields the multiplicative identity regardless of
    /// invertibility; a negative `exp` raises the inverse to `-exp`.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::NotInvertible`] when `exp < 0` and the
    /// value has no inverse.
    pub fn pow(self, exp: i64) -> Result<Self, ModularError> {
        if exp < 0 {
            Ok(self.inv()?.pow_unsigned(exp.unsigned_abs()))
        } else {
            Ok(self.pow_unsigned(exp.unsigned_abs()))
        }
    }

    fn pow_unsigned(self, mut exp: u64) -> Self {
        let modulus = self.modulus;
        let mut base = self.residue;
        let mut acc = T::one().floor_rem(modulus);

        while exp > 0 {
            if exp & 1 == 1 {
                acc = T::mul_wide_rem(acc, base, modulus);
            }
            base = T::mul_wide_rem(base, base, modulus);
            exp >>= 1;
        }

        Self {
            residue: acc,
            modulus,
        }
    }
}

impl<T: ModularInt> Neg for ModInt<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        ModInt::neg(self)
    }
}

// Residue and modulus hash through their canonical u128 projection, so a
// value and its widened copy hash identically.
impl<T: ModularInt> Hash for ModInt<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.residue.to_canonical().hash(state);
        self.modulus.to_canonical().hash(state);
    }
}

impl<T: ModularInt> PartialEq<T> for ModInt<T> {
    fn eq(&self, raw: &T) -> bool {
        (*raw).floor_rem(self.modulus) == self.residue
    }
}

macro_rules! impl_raw_eq {
    ($($t:ty),+ $(,)?) => {$(
        impl PartialEq<ModInt<$t>> for $t {
            fn eq(&self, other: &ModInt<$t>) -> bool {
                other == self
            }
        }
    )+};
}

impl_raw_eq!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! impl_widening_from {
    ($($narrow:ty => $wide:ty),+ $(,)?) => {$(
        impl From<ModInt<$narrow>> for ModInt<$wide> {
            fn from(value: ModInt<$narrow>) -> Self {
                Self {
                    residue: <$wide>::from(value.residue),
                    modulus: <$wide>::from(value.modulus),
                }
            }
        }
    )+};
}

impl_widening_from!(
    i8 => i16, i16 => i32, i32 => i64, i64 => i128,
    u8 => u16, u16 => u32, u32 => u64, u64 => u128,
);

impl<T: ModularInt> fmt::Display for ModInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.residue)
    }
}

impl<T: ModularInt> fmt::Debug for ModInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.residue, self.modulus)
    }
}
