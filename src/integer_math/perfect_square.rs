// src/integer_math/perfect_square.rs

/// Integer nearest to the square root of `n`.
pub fn rounded_sqrt(n: i64) -> i64 {
    (n as f64).sqrt().round() as i64
}

/// True iff `n` is the square of its rounded square root. Negative values are never squares.
pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let root = rounded_sqrt(n);
    root * root == n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_squares() {
        for k in 0..32 {
            assert!(is_perfect_square(k * k), "{} should be a square", k * k);
        }
    }

    #[test]
    fn test_non_squares() {
        for n in [2, 3, 5, 8, 10, 15, 17, 99, 101, 998] {
            assert!(!is_perfect_square(n));
        }
    }

    #[test]
    fn test_negative_is_not_square() {
        assert!(!is_perfect_square(-1));
        assert!(!is_perfect_square(-4));
    }

    #[test]
    fn test_rounded_sqrt() {
        assert_eq!(rounded_sqrt(9), 3);
        assert_eq!(rounded_sqrt(900), 30);
        assert_eq!(rounded_sqrt(10), 3);
    }
}
