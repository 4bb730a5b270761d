// src/lib.rs

pub mod config;
pub mod core;
pub mod integer_math;
pub mod puzzle;
pub mod reduction;

pub use crate::core::error::{LegendreError, Result};
pub use crate::reduction::{evaluate, Evaluation};
