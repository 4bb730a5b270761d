// src/reduction/evaluation.rs

use serde::Serialize;
use crate::reduction::trace::Trace;

/// Outcome of reducing one `(top|modulus)` symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub top: i64,
    pub modulus: i64,
    pub is_residue: bool,
    pub generations: usize,
    pub trace: Trace,
}

impl Evaluation {
    /// Value of the Legendre symbol, ±1.
    pub fn value(&self) -> i32 {
        if self.is_residue { 1 } else { -1 }
    }

    pub fn trace_lines(&self) -> Vec<String> {
        self.trace.lines()
    }

    pub fn verdict(&self) -> String {
        if self.is_residue {
            format!("{} IS a quadratic residue modulo {}", self.top, self.modulus)
        } else {
            format!("{} is NOT a quadratic residue modulo {}", self.top, self.modulus)
        }
    }
}
