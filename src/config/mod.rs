// src/config/mod.rs

pub mod legendre_config;

// Re-export main types for convenience
pub use legendre_config::{EngineConfig, LegendreConfig, PuzzleConfig};
