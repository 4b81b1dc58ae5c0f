//! Configuration
//!
//! Hierarchical configuration loading, layering sources from lowest to
//! highest precedence:
//!
//! - `ila.toml` (base configuration)
//! - Environment variables (`ILA_` prefix, `__` nesting separator)
//!
//! None of these knobs change a learned `RuleSet` or a classification —
//! the result is identical whichever way they're set; they only control
//! logging and whether the embarrassingly-parallel parts of
//! selection/classification run on a `rayon` scope.
//!
//! ```toml
//! # ila.toml
//! [performance]
//! parallel_select = true
//! parallel_classify = true
//! parallel_threshold = 5000
//!
//! [logging]
//! level = "info"
//! format = "text"
//! ```

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Knobs controlling the opt-in `rayon` paths used by selection and
/// classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Scan the forward map in parallel during `select_largest`/
    /// `select_next_largest` once it holds at least `parallel_threshold`
    /// entries.
    #[serde(default)]
    pub parallel_select: bool,

    /// Classify independent records in parallel once the record group
    /// holds at least `parallel_threshold` records.
    #[serde(default)]
    pub parallel_classify: bool,

    /// Entry/record count above which the parallel paths activate.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    5000
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        PerformanceConfig {
            parallel_select: false,
            parallel_classify: false,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

/// Logging configuration, consumed once by the CLI binary to initialize
/// the `tracing-subscriber` `fmt` layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            performance: PerformanceConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from `ila.toml` in the current directory,
    /// overridden by `ILA_`-prefixed environment variables. Missing files
    /// are not an error: defaults apply.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("ila.toml"))
            .merge(Env::prefixed("ILA_").split("__"))
            .extract()
    }

    /// Loads configuration from an explicit file path, still allowing
    /// environment overrides.
    pub fn from_file(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("ILA_").split("__"))
            .extract()
    }
}
