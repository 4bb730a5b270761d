// src/core/mod.rs

pub mod count_dictionary;
pub mod error;
pub mod static_random;

pub use error::{LegendreError, Result};
