// src/reduction/token.rs

use serde::Serialize;
use std::fmt::Display;
use crate::reduction::symbol::Symbol;

/// One factor printed on a trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Token {
    Constant(i32),
    Symbol(Symbol),
    /// Reciprocity swap that picked up a factor of -1.
    Negated(Symbol),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Constant(value) => write!(f, "{}", value),
            Token::Symbol(symbol) => write!(f, "{}", symbol),
            Token::Negated(symbol) => write!(f, "-{}", symbol),
        }
    }
}

/// Tokens joined with the multiplication sign used throughout the trace.
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" × ")
}
