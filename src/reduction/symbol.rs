// src/reduction/symbol.rs

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use crate::integer_math::perfect_square::rounded_sqrt;

/// A Legendre-style term `(top|modulus)`.
///
/// A squared-top symbol is already known to equal 1; it only exists so that the
/// trace can show it as `(s²|p)` for one generation before it collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub top: i64,
    pub modulus: i64,
    pub is_squared_top: bool,
}

impl Symbol {
    pub fn new(top: i64, modulus: i64) -> Self {
        Symbol { top, modulus, is_squared_top: false }
    }

    pub fn squared(top: i64, modulus: i64) -> Self {
        Symbol { top, modulus, is_squared_top: true }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_squared_top {
            write!(f, "({}²|{})", rounded_sqrt(self.top), self.modulus)
        } else {
            write!(f, "({}|{})", self.top, self.modulus)
        }
    }
}
