// src/reduction/engine.rs
//
// Generation-by-generation reduction of a Legendre symbol.
//
// Every pending symbol of the current line is rewritten by the first matching
// identity, in this order:
//
//   1. (s²|p) already shown as a square      -> 1
//   2. top is a perfect square               -> (s²|p), resolved next generation
//   3. (2|p)                                 -> ±1 from p mod 8
//   4. (-1|p)                                -> ±1 from p mod 4
//   5. top ≡ -1 (mod p)                      -> (-1|p)
//   6. top > p                               -> (top mod p|p)
//   7. top prime                             -> (p|top), negated when both are 3 mod 4
//   8. top composite                         -> (square|p) × (q|p) per odd-exponent prime q
//
// A -1 produced by rules 3, 4 or 7 is not carried as a symbol. It toggles the
// pending negation flag instead, which is printed as a leading -1 on every later
// line while it is set, and which decides the final sign.

use log::{debug, warn};
use crate::core::error::{LegendreError, Result};
use crate::integer_math::perfect_square::is_perfect_square;
use crate::integer_math::prime_table::{PrimeTable, PRIMES_BELOW_1000};
use crate::reduction::evaluation::Evaluation;
use crate::reduction::symbol::Symbol;
use crate::reduction::token::{join_tokens, Token};
use crate::reduction::trace::{RuleNote, Trace, TraceEntry};

pub const DEFAULT_MAX_GENERATIONS: usize = 64;

/// Output of rewriting one full line of symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    pub notes: Vec<RuleNote>,
    pub tokens: Vec<Token>,
    pub successors: Vec<Symbol>,
}

impl Generation {
    fn emit(&mut self, symbol: Symbol) {
        self.tokens.push(Token::Symbol(symbol));
        self.successors.push(symbol);
    }
}

pub struct ReductionEngine<'a> {
    primes: &'a PrimeTable,
    max_generations: usize,
}

impl<'a> ReductionEngine<'a> {
    pub fn new(primes: &'a PrimeTable) -> Self {
        Self::with_limit(primes, DEFAULT_MAX_GENERATIONS)
    }

    pub fn with_limit(primes: &'a PrimeTable, max_generations: usize) -> Self {
        ReductionEngine { primes, max_generations }
    }

    pub fn primes(&self) -> &'a PrimeTable {
        self.primes
    }

    /// Rejects anything outside odd primes of the table and tops outside `[1, modulus)`.
    pub fn validate(&self, top: i64, modulus: i64) -> Result<()> {
        let bound = self.primes.bound();
        if modulus < 3 || modulus >= bound {
            return Err(LegendreError::ModulusOutOfRange { modulus, bound });
        }
        if !self.primes.is_prime(modulus) {
            return Err(LegendreError::ModulusNotOddPrime(modulus));
        }
        if top < 1 || top >= modulus {
            return Err(LegendreError::TopOutOfRange { top, modulus });
        }
        Ok(())
    }

    pub fn evaluate_checked(&self, top: i64, modulus: i64) -> Result<Evaluation> {
        self.validate(top, modulus)?;
        self.reduce(top, modulus)
    }

    /// Runs generations until no symbol is left. Inputs are not validated; only
    /// the generation limit can fail.
    pub fn reduce(&self, top: i64, modulus: i64) -> Result<Evaluation> {
        let start = Symbol::new(top, modulus);
        let mut trace = Trace::new(start);
        let mut current = vec![start];
        let mut pending_negation = false;
        let mut generations = 0;

        while !current.is_empty() {
            if generations == self.max_generations {
                return Err(LegendreError::GenerationLimit { limit: self.max_generations });
            }
            generations += 1;

            let generation = self.step(&current, &mut pending_negation);
            debug!("Generation {}: {}", generations, join_tokens(&generation.tokens));

            for note in generation.notes {
                trace.push(TraceEntry::Note(note));
            }
            let token_count = generation.tokens.len();
            trace.push(TraceEntry::Line(generation.tokens));

            current = generation.successors;
            if current.is_empty() && token_count > 1 {
                trace.push(TraceEntry::Summary(if pending_negation { -1 } else { 1 }));
            }
        }

        Ok(Evaluation {
            top,
            modulus,
            is_residue: !pending_negation,
            generations,
            trace,
        })
    }

    /// Rewrites one line. The leading -1 reflects the flag as it stood before
    /// this line; toggles made while rewriting show up on the next line.
    pub fn step(&self, current: &[Symbol], pending_negation: &mut bool) -> Generation {
        let mut generation = Generation::default();
        if *pending_negation {
            generation.tokens.push(Token::Constant(-1));
        }
        for symbol in current {
            self.rewrite(symbol, pending_negation, &mut generation);
        }
        generation
    }

    pub fn rewrite(&self, symbol: &Symbol, pending_negation: &mut bool, out: &mut Generation) {
        let Symbol { top, modulus, is_squared_top } = *symbol;

        if is_squared_top {
            out.tokens.push(Token::Constant(1));
        } else if is_perfect_square(top) {
            out.emit(Symbol::squared(top, modulus));
        } else if top == 2 {
            let remainder = modulus % 8;
            let value = if remainder == 1 || remainder == 7 { 1 } else { -1 };
            debug!("{} mod 8 = {}, so (2|{}) = {}", modulus, remainder, modulus, value);
            if value == -1 {
                *pending_negation = !*pending_negation;
            }
            out.notes.push(RuleNote::Two { modulus, remainder, value });
            out.tokens.push(Token::Constant(value));
        } else if top == -1 {
            let remainder = modulus % 4;
            let value = if remainder == 1 { 1 } else { -1 };
            debug!("{} mod 4 = {}, so (-1|{}) = {}", modulus, remainder, modulus, value);
            if value == -1 {
                *pending_negation = !*pending_negation;
            }
            out.notes.push(RuleNote::NegativeOne { modulus, remainder, value });
            out.tokens.push(Token::Constant(value));
        } else if top % modulus == modulus - 1 {
            out.emit(Symbol::new(-1, modulus));
        } else if top > modulus {
            out.emit(Symbol::new(top % modulus, modulus));
        } else if self.primes.is_prime(top) {
            let flip = top % 4 == 3 && modulus % 4 == 3;
            let swapped = Symbol::new(modulus, top);
            debug!("Reciprocity {} -> {} (flip: {})", symbol, swapped, flip);
            if flip {
                *pending_negation = !*pending_negation;
                out.tokens.push(Token::Negated(swapped));
                out.successors.push(swapped);
            } else {
                out.emit(swapped);
            }
        } else {
            self.split_composite(symbol, out);
        }
    }

    fn split_composite(&self, symbol: &Symbol, out: &mut Generation) {
        let factorization = self.primes.prime_factorization(symbol.top);
        debug!("{}{}", symbol.top, factorization.factors.format_string_as_factorization());
        if !factorization.is_complete() {
            warn!(
                "Cofactor {} of {} lies beyond the prime table and was dropped",
                factorization.cofactor, symbol.top
            );
        }

        let mut squared_term = 1;
        let mut square_free_primes = Vec::new();
        for (p, exp) in factorization.factors.iter() {
            if exp >= 2 {
                squared_term *= p.pow(exp - exp % 2);
            }
            if exp % 2 == 1 {
                square_free_primes.push(p);
            }
        }

        if squared_term != 1 {
            out.emit(Symbol::squared(squared_term, symbol.modulus));
        }
        for p in square_free_primes {
            out.emit(Symbol::new(p, symbol.modulus));
        }
    }
}

/// Validated evaluation against the primes below 1000.
pub fn evaluate(top: i64, modulus: i64) -> Result<Evaluation> {
    ReductionEngine::new(&PRIMES_BELOW_1000).evaluate_checked(top, modulus)
}
