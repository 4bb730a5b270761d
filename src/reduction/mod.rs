// src/reduction/mod.rs

pub mod engine;
pub mod evaluation;
pub mod survey;
pub mod symbol;
pub mod token;
pub mod trace;

pub use engine::{evaluate, Generation, ReductionEngine};
pub use evaluation::Evaluation;
pub use survey::{survey, SurveyReport};
pub use symbol::Symbol;
pub use token::Token;
pub use trace::{RuleNote, Trace, TraceEntry};
