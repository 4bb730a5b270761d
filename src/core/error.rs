// src/core/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegendreError {
    #[error("modulus {modulus} is outside the prime table range [3, {bound})")]
    ModulusOutOfRange { modulus: i64, bound: i64 },
    #[error("modulus {0} is not an odd prime")]
    ModulusNotOddPrime(i64),
    #[error("no odd primes available at or after index {min_index} below {bound}")]
    EmptyPrimeRange { min_index: usize, bound: i64 },
    #[error("top value {top} must lie in [1, {modulus})")]
    TopOutOfRange { top: i64, modulus: i64 },
    #[error("reduction did not settle within {limit} generations")]
    GenerationLimit { limit: usize },
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LegendreError>;
