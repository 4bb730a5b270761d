// src/reduction/trace.rs

use serde::{Serialize, Serializer};
use std::fmt::Display;
use crate::reduction::symbol::Symbol;
use crate::reduction::token::{join_tokens, Token};

/// Explanation printed when a value-2 or value-(-1) symbol is evaluated directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleNote {
    /// (2|p) from p mod 8
    Two { modulus: i64, remainder: i64, value: i32 },
    /// (-1|p) from p mod 4
    NegativeOne { modulus: i64, remainder: i64, value: i32 },
}

impl Display for RuleNote {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            RuleNote::Two { modulus, remainder, value } => {
                write!(f, "{} mod 8 = {}, so (2|{}) = {}", modulus, remainder, modulus, value)
            }
            RuleNote::NegativeOne { modulus, remainder, value } => {
                write!(f, "{} mod 4 = {}, so (-1|{}) = {}", modulus, remainder, modulus, value)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEntry {
    /// The symbol the derivation starts from.
    Start(Symbol),
    Note(RuleNote),
    /// One rewritten generation.
    Line(Vec<Token>),
    /// Final product of a multi-token last line.
    Summary(i32),
}

impl Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TraceEntry::Start(symbol) => write!(f, "{}", symbol),
            TraceEntry::Note(note) => write!(f, "    {}", note),
            TraceEntry::Line(tokens) => write!(f, "= {}", join_tokens(tokens)),
            TraceEntry::Summary(value) => write!(f, "= {}", value),
        }
    }
}

/// Step-by-step derivation, in the order the steps were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new(start: Symbol) -> Self {
        Trace { entries: vec![TraceEntry::Start(start)] }
    }

    pub fn push(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Only the `= ...` lines, summary included.
    pub fn equation_lines(&self) -> impl Iterator<Item = &TraceEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e, TraceEntry::Line(_) | TraceEntry::Summary(_)))
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.to_string()).collect()
    }
}

impl Serialize for Trace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter().map(|e| e.to_string()))
    }
}
