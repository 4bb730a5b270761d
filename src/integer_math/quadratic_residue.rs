// src/integer_math/quadratic_residue.rs

use num::{BigInt, Integer, One, Zero};

pub struct QuadraticResidue;

impl QuadraticResidue {
    // a^(p-1)/2 ≡ 1 (mod p)
    pub fn is_quadratic_residue(a: i64, p: i64) -> bool {
        p == 2 || Self::euler_symbol(a, p) == 1
    }

    /// Legendre symbol by Euler's criterion: 0 when p divides a, otherwise ±1.
    pub fn euler_symbol(a: i64, p: i64) -> i32 {
        let modulus = BigInt::from(p);
        let base = BigInt::from(a).mod_floor(&modulus);
        if base.is_zero() {
            return 0;
        }

        let quotient = (&modulus - 1) / 2;
        let mod_pow = base.modpow(&quotient, &modulus);
        if mod_pow == BigInt::one() {
            1
        } else {
            -1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residues_mod_7() {
        // squares mod 7 are 1, 2, 4
        let residues: Vec<i64> = (1..7).filter(|&a| QuadraticResidue::is_quadratic_residue(a, 7)).collect();
        assert_eq!(residues, vec![1, 2, 4]);
    }

    #[test]
    fn test_euler_symbol_values() {
        assert_eq!(QuadraticResidue::euler_symbol(0, 11), 0);
        assert_eq!(QuadraticResidue::euler_symbol(22, 11), 0);
        assert_eq!(QuadraticResidue::euler_symbol(3, 11), 1);
        assert_eq!(QuadraticResidue::euler_symbol(2, 11), -1);
        assert_eq!(QuadraticResidue::euler_symbol(-1, 13), 1);
        assert_eq!(QuadraticResidue::euler_symbol(-1, 11), -1);
    }

    #[test]
    fn test_modulus_two() {
        assert!(QuadraticResidue::is_quadratic_residue(1, 2));
    }
}
