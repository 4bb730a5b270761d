// src/integer_math/prime_table.rs

use bitvec::prelude::*;
use lazy_static::lazy_static;
use log::debug;
use crate::core::count_dictionary::CountDictionary;

/// Sieve bound used by the puzzle.
pub const DEFAULT_PRIME_BOUND: i64 = 1000;

lazy_static! {
    pub static ref PRIMES_BELOW_1000: PrimeTable = PrimeTable::below(DEFAULT_PRIME_BOUND);
}

/// Result of dividing out every table prime from a value.
///
/// `cofactor` is whatever is left over; it is 1 when the value factors completely
/// over the table and otherwise holds the product of the primes at or above the bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    pub factors: CountDictionary,
    pub cofactor: i64,
}

impl Factorization {
    pub fn is_complete(&self) -> bool {
        self.cofactor == 1
    }
}

/// Immutable ascending list of every prime below a bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    bound: i64,
    primes: Vec<i64>,
}

impl PrimeTable {
    /// Sieve of Eratosthenes over `[0, bound)`.
    pub fn below(bound: i64) -> Self {
        let size = bound.max(0) as usize;
        let mut sieve = bitvec![1; size];
        for i in 0..size.min(2) {
            sieve.set(i, false);
        }

        let mut candidate = 2;
        while candidate * candidate < size {
            if sieve[candidate] {
                let mut multiple = candidate * candidate;
                while multiple < size {
                    sieve.set(multiple, false);
                    multiple += candidate;
                }
            }
            candidate += 1;
        }

        let primes: Vec<i64> = sieve.iter_ones().map(|i| i as i64).collect();
        debug!("Sieved {} primes below {}", primes.len(), bound);
        PrimeTable { bound, primes }
    }

    pub fn bound(&self) -> i64 {
        self.bound
    }

    pub fn primes(&self) -> &[i64] {
        &self.primes
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.primes.get(index).copied()
    }

    /// Table membership. Values at or above the bound are never reported prime.
    pub fn is_prime(&self, value: i64) -> bool {
        self.primes.binary_search(&value).is_ok()
    }

    /// Divides out each table prime fully, in ascending order, stopping once the
    /// running cofactor reaches 1.
    pub fn prime_factorization(&self, value: i64) -> Factorization {
        let mut factors = CountDictionary::new();
        let mut remaining = value;

        for &p in &self.primes {
            while remaining != 0 && remaining % p == 0 {
                factors.add(p);
                remaining /= p;
            }

            if remaining == 1 {
                break;
            }
        }

        Factorization { factors, cofactor: remaining }
    }
}

impl Default for PrimeTable {
    fn default() -> Self {
        PRIMES_BELOW_1000.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primes_below_1000() {
        let table = PrimeTable::below(1000);
        assert_eq!(table.len(), 168);
        assert_eq!(table.get(0), Some(2));
        assert_eq!(table.get(24), Some(97));
        assert_eq!(table.get(25), Some(101));
        assert_eq!(table.primes().last(), Some(&997));
    }

    #[test]
    fn test_small_bounds() {
        assert!(PrimeTable::below(0).is_empty());
        assert!(PrimeTable::below(2).is_empty());
        assert_eq!(PrimeTable::below(3).primes(), &[2]);
        assert_eq!(PrimeTable::below(30).primes(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime() {
        let table = PrimeTable::below(1000);
        assert!(table.is_prime(2));
        assert!(table.is_prime(997));
        assert!(!table.is_prime(1));
        assert!(!table.is_prime(0));
        assert!(!table.is_prime(-3));
        assert!(!table.is_prime(561));
        assert!(!table.is_prime(1009));
    }

    #[test]
    fn test_prime_factorization() {
        let table = PrimeTable::below(1000);
        let result = table.prime_factorization(600);
        assert!(result.is_complete());
        assert_eq!(result.factors.iter().collect::<Vec<_>>(), vec![(2, 3), (3, 1), (5, 2)]);

        let prime = table.prime_factorization(997);
        assert_eq!(prime.factors.iter().collect::<Vec<_>>(), vec![(997, 1)]);
    }

    #[test]
    fn test_prime_factorization_drops_large_cofactor() {
        let table = PrimeTable::below(1000);
        // 2 * 1009, with 1009 beyond the table
        let result = table.prime_factorization(2018);
        assert!(!result.is_complete());
        assert_eq!(result.cofactor, 1009);
        assert_eq!(result.factors.iter().collect::<Vec<_>>(), vec![(2, 1)]);
    }

    #[test]
    fn test_default_table_matches_lazy_static() {
        assert_eq!(PrimeTable::default(), *PRIMES_BELOW_1000);
    }
}
