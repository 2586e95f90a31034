//! Chinese Remainder Theorem reconstruction.
//!
//! Built entirely on the public `ModInt` operations: each pairwise step
//! inverts one modulus inside the other ring and lifts the difference of
//! residues onto the combined modulus.

use crate::modular::{ModInt, ModularError};
use crate::traits::ModularInt;

/// Combines two residues over coprime moduli into a single residue over
/// the product of the moduli.
///
/// # Errors
///
/// Returns [`ModularError::NonCoprimeModuli`] when the moduli share a
/// factor above 1, [`ModularError::ModulusOverflow`] when their product
/// does not fit the native width, and [`ModularError::NotInvertible`]
/// when the right-hand modulus is 1 (its ring has no invertible
/// elements, so the reconstruction coefficient does not exist there).
pub fn crt_pair<T: ModularInt>(x: ModInt<T>, y: ModInt<T>) -> Result<ModInt<T>, ModularError> {
    let n = x.modulus();
    let m = y.modulus();
    if n.gcd(m) != T::one() {
        return Err(ModularError::NonCoprimeModuli);
    }
    let combined = n.checked_mul(&m).ok_or(ModularError::ModulusOverflow)?;

    // k = (y - x) / n, computed in Z/mZ.
    let lift = ModInt::new(n, m)?
        .inv()?
        .mul(ModInt::new(y.residue(), m)?.sub(x.residue())?)?;

    // z = x + k * n may exceed the native width before reduction.
    let residue = T::add_wide_rem(
        x.residue(),
        T::mul_wide_rem(lift.residue(), n, combined),
        combined,
    );
    ModInt::new(residue, combined)
}

/// Reconstructs the unique residue modulo the product of all input
/// moduli from an ordered sequence of residues.
///
/// The sequence is combined by a left fold over [`crt_pair`], so each
/// input's modulus must be coprime with the running product of the
/// moduli before it, and the result's modulus is the product in fold
/// order. An empty sequence yields the trivial identity `0 (mod 1)`.
///
/// # Errors
///
/// Propagates the first [`crt_pair`] failure.
pub fn crt<T: ModularInt>(values: &[ModInt<T>]) -> Result<ModInt<T>, ModularError> {
    let Some((first, rest)) = values.split_first() else {
        return ModInt::new(T::zero(), T::one());
    };
    rest.iter().try_fold(*first, |acc, value| crt_pair(acc, *value))
}
