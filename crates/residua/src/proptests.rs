//! Property-based tests for the modular arithmetic laws.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use proptest::prelude::*;

    use crate::{crt, ModInt, ModularError};

    // Strategy for moduli comfortably inside the native width
    fn modulus() -> impl Strategy<Value = i64> {
        1i64..1_000_000
    }

    // Strategy for values far from the overflow boundary
    fn small_value() -> impl Strategy<Value = i64> {
        -1_000_000_000_000i64..1_000_000_000_000
    }

    // Strategy for moduli within 10_000 of u64::MAX, forcing the
    // escalation path on nearly every add and mul
    fn huge_modulus() -> impl Strategy<Value = u64> {
        (u64::MAX - 10_000)..u64::MAX
    }

    proptest! {
        // Construction

        #[test]
        fn residue_always_in_range(v in small_value(), m in modulus()) {
            let x = ModInt::new(v, m).unwrap();
            prop_assert!(x.residue() >= 0);
            prop_assert!(x.residue() < m);
        }

        #[test]
        fn construction_is_periodic(v in small_value(), m in modulus()) {
            prop_assert_eq!(
                ModInt::new(v, m).unwrap(),
                ModInt::new(v + m, m).unwrap()
            );
        }

        // Ring axioms

        #[test]
        fn add_commutative(a in small_value(), b in small_value(), m in modulus()) {
            let a = ModInt::new(a, m).unwrap();
            let b = ModInt::new(b, m).unwrap();
            prop_assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
        }

        #[test]
        fn add_identity(v in small_value(), m in modulus()) {
            let x = ModInt::new(v, m).unwrap();
            prop_assert_eq!(x.add(ModInt::zero(m).unwrap()).unwrap(), x);
        }

        #[test]
        fn additive_inverse(v in small_value(), m in modulus()) {
            let x = ModInt::new(v, m).unwrap();
            prop_assert_eq!(x.add(x.neg()).unwrap(), ModInt::zero(m).unwrap());
        }

        #[test]
        fn mul_commutative(a in small_value(), b in small_value(), m in modulus()) {
            let a = ModInt::new(a, m).unwrap();
            let b = ModInt::new(b, m).unwrap();
            prop_assert_eq!(a.mul(b).unwrap(), b.mul(a).unwrap());
        }

        #[test]
        fn mul_identity(v in small_value(), m in modulus()) {
            let x = ModInt::new(v, m).unwrap();
            prop_assert_eq!(x.mul(ModInt::one(m).unwrap()).unwrap(), x);
        }

        // Escalation correctness against an unbounded-precision oracle

        #[test]
        fn add_matches_bigint_reference(a in any::<u64>(), b in any::<u64>(), m in huge_modulus()) {
            let x = ModInt::new(a, m).unwrap();
            let y = ModInt::new(b, m).unwrap();
            let expected = (IBig::from(x.residue()) + IBig::from(y.residue())) % IBig::from(m);
            prop_assert_eq!(IBig::from(x.add(y).unwrap().residue()), expected);
        }

        #[test]
        fn mul_matches_bigint_reference(a in any::<u64>(), b in any::<u64>(), m in huge_modulus()) {
            let x = ModInt::new(a, m).unwrap();
            let y = ModInt::new(b, m).unwrap();
            let expected = (IBig::from(x.residue()) * IBig::from(y.residue())) % IBig::from(m);
            prop_assert_eq!(IBig::from(x.mul(y).unwrap().residue()), expected);
        }

        // Inversion

        #[test]
        fn inverse_round_trip((m, v) in (2u64..10_000).prop_flat_map(|m| (Just(m), 0..m))) {
            let x = ModInt::new(v, m).unwrap();
            if x.is_invertible() {
                prop_assert_eq!(x.mul(x.inv().unwrap()).unwrap(), ModInt::one(m).unwrap());
            } else {
                prop_assert_eq!(x.inv(), Err(ModularError::NotInvertible));
            }
        }

        // Exponentiation

        #[test]
        fn pow_of_inverse_mirrors_negative_exponent(v in 1u64..10_007, k in -64i64..64) {
            // 10007 is prime, so every non-zero residue is invertible.
            let x = ModInt::new(v, 10_007).unwrap();
            prop_assert_eq!(x.pow(k).unwrap(), x.inv().unwrap().pow(-k).unwrap());
        }

        #[test]
        fn pow_zero_is_one(v in small_value(), m in modulus()) {
            let x = ModInt::new(v, m).unwrap();
            prop_assert_eq!(x.pow(0).unwrap(), ModInt::one(m).unwrap());
        }

        // CRT

        #[test]
        fn crt_round_trip(residues in proptest::collection::vec(any::<u64>(), 5)) {
            let moduli = [3u64, 5, 7, 11, 13];
            let values: Vec<ModInt<u64>> = residues
                .iter()
                .zip(&moduli)
                .map(|(&r, &m)| ModInt::new(r, m).unwrap())
                .collect();
            let z = crt(&values).unwrap();
            prop_assert_eq!(z.modulus(), moduli.iter().product::<u64>());
            for (value, &m) in values.iter().zip(&moduli) {
                prop_assert_eq!(ModInt::new(z.residue(), m).unwrap(), *value);
            }
        }
    }
}
