// tests/number_theory_tests.rs

use legendre::integer_math::perfect_square::is_perfect_square;
use legendre::integer_math::prime_table::{PrimeTable, PRIMES_BELOW_1000};
use legendre::integer_math::quadratic_residue::QuadraticResidue;

#[cfg(test)]
mod number_theory_tests {
    use super::*;

    #[test]
    fn test_table_agrees_with_trial_division() {
        let is_prime_slow = |n: i64| n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
        for n in -5..1000 {
            assert_eq!(PRIMES_BELOW_1000.is_prime(n), is_prime_slow(n), "{}", n);
        }
    }

    #[test]
    fn test_factorization_reconstructs_every_value() {
        for n in 2..1000 {
            let factorization = PRIMES_BELOW_1000.prime_factorization(n);
            assert!(factorization.is_complete());
            assert_eq!(factorization.factors.product(), n);
            assert!(factorization.factors.iter().all(|(p, _)| PRIMES_BELOW_1000.is_prime(p)));
        }
    }

    #[test]
    fn test_factorization_of_one_is_empty() {
        let factorization = PRIMES_BELOW_1000.prime_factorization(1);
        assert!(factorization.factors.is_empty());
        assert!(factorization.is_complete());
    }

    #[test]
    fn test_small_table_leaves_cofactor() {
        let table = PrimeTable::below(10);
        let factorization = table.prime_factorization(2 * 2 * 11);
        assert_eq!(factorization.factors.get(2), Some(2));
        assert_eq!(factorization.cofactor, 11);
    }

    #[test]
    fn test_perfect_squares_below_1000() {
        let count = (0..1000).filter(|&n| is_perfect_square(n)).count();
        // 0, 1, 4, ..., 961
        assert_eq!(count, 32);
    }

    #[test]
    fn test_half_of_nonzero_values_are_residues() {
        for &p in [101i64, 557, 997].iter() {
            let residues = (1..p).filter(|&a| QuadraticResidue::is_quadratic_residue(a, p)).count() as i64;
            assert_eq!(residues, (p - 1) / 2);
        }
    }
}
