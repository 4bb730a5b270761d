// src/puzzle/answer.rs

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The two buttons of the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// "R": the top value is a quadratic residue
    Residue,
    /// "N": it is not
    NonResidue,
}

impl Answer {
    pub fn from_residue(is_residue: bool) -> Self {
        if is_residue { Answer::Residue } else { Answer::NonResidue }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Answer::Residue => "R",
            Answer::NonResidue => "N",
        }
    }
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
