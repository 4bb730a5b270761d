// src/config/legendre_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendreConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Reduction engine limits
    pub engine: EngineConfig,

    /// Puzzle round generation
    pub puzzle: PuzzleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Primes are sieved below this bound (default: 1000)
    pub prime_bound: i64,

    /// Generations allowed before a reduction is abandoned (default: 64)
    pub max_generations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Moduli are drawn from table indices at or above this one (default: 25, skipping primes below 100)
    pub min_prime_index: usize,

    /// Delay between a strike and the next round, in milliseconds (default: 750)
    pub strike_delay_ms: i64,

    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
}

impl Default for LegendreConfig {
    fn default() -> Self {
        LegendreConfig {
            log_level: "info".to_string(),
            engine: EngineConfig::default(),
            puzzle: PuzzleConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            prime_bound: 1000,
            max_generations: 64,
        }
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig {
            min_prime_index: 25,
            strike_delay_ms: 750,
            seed: None,
        }
    }
}

impl LegendreConfig {
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("engine.prime_bound", 1000)?
            .set_default("engine.max_generations", 64)?
            .set_default("puzzle.min_prime_index", 25)?
            .set_default("puzzle.strike_delay_ms", 750)
    }

    fn environment() -> Environment {
        // LEGENDRE_PUZZLE__SEED=42 -> puzzle.seed
        Environment::with_prefix("LEGENDRE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // Try to load from config files (TOML preferred, YAML fallback)
        if Path::new("legendre.toml").exists() {
            builder = builder.add_source(File::with_name("legendre.toml"));
        } else if Path::new("legendre.yaml").exists() {
            builder = builder.add_source(File::with_name("legendre.yaml"));
        }

        let config = builder.add_source(Self::environment()).build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        let config = builder.add_source(Self::environment()).build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = LegendreConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.engine.prime_bound, 1000);
        assert_eq!(config.engine.max_generations, 64);
        assert_eq!(config.puzzle.min_prime_index, 25);
        assert_eq!(config.puzzle.strike_delay_ms, 750);
        assert_eq!(config.puzzle.seed, None);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = LegendreConfig::load().unwrap_or_else(|_| LegendreConfig::default());
        assert_eq!(config.engine.prime_bound, 1000);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("legendre_config_test_{}.toml", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "[puzzle]").unwrap();
            writeln!(file, "strike_delay_ms = 10").unwrap();
            writeln!(file, "seed = 99").unwrap();
        }

        let config = LegendreConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.puzzle.strike_delay_ms, 10);
        assert_eq!(config.puzzle.seed, Some(99));
        assert_eq!(config.puzzle.min_prime_index, 25);
        assert_eq!(config.log_level, "info");
    }
}
