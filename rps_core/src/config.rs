//! Configuration loading and typed config structures.
//!
//! The configuration lives in `rps-config.yaml`. Every section and field is
//! optional; missing values fall back to the defaults below. Values outside
//! their accepted range are clamped on load, with a warning.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::board::MAX_DIMENSION;

/// Slowest accepted tick rate.
pub const MIN_TICKS_PER_SECOND: f32 = 1.0;

/// Fastest accepted tick rate.
pub const MAX_TICKS_PER_SECOND: f32 = 120.0;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Board dimensions.
    pub grid: GridConfig,

    /// Tick timing.
    pub timing: TimingConfig,

    /// Canvas and overlay settings.
    pub display: DisplayConfig,

    /// Seed for the evolution RNG. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Whether cells can be painted while the simulation is running.
    pub paint_while_running: bool,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            timing: TimingConfig::default(),
            display: DisplayConfig::default(),
            seed: None,
            paint_while_running: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.sanitize();
        Ok(config)
    }

    /// Clamp every field into its accepted range.
    pub fn sanitize(&mut self) {
        self.grid.rows = clamp_logged("grid.rows", self.grid.rows, 1, MAX_DIMENSION);
        self.grid.cols = clamp_logged("grid.cols", self.grid.cols, 1, MAX_DIMENSION);

        let tps = self.timing.ticks_per_second;
        let clamped = clamp_ticks_per_second(tps);
        if clamped != tps {
            warn!(field = "timing.ticks_per_second", requested = tps, clamped, "Config value out of range");
            self.timing.ticks_per_second = clamped;
        }

        if !(self.display.canvas_size.is_finite() && self.display.canvas_size >= 1.0) {
            warn!(field = "display.canvas_size", requested = self.display.canvas_size, "Config value out of range");
            self.display.canvas_size = default_canvas_size();
        }
    }
}

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_dimension")]
    pub rows: usize,

    #[serde(default = "default_dimension")]
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_dimension(),
            cols: default_dimension(),
        }
    }
}

/// Tick timing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimingConfig {
    /// Target evolution steps per second while running.
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: default_ticks_per_second(),
        }
    }
}

/// Canvas and overlay settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayConfig {
    /// Draw grid lines between cells.
    #[serde(default)]
    pub show_grid: bool,

    /// Side length of the square canvas, in points.
    #[serde(default = "default_canvas_size")]
    pub canvas_size: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_grid: false,
            canvas_size: default_canvas_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Clamp a tick rate into `MIN_TICKS_PER_SECOND..=MAX_TICKS_PER_SECOND`.
/// Non-finite rates fall back to the default rate.
pub fn clamp_ticks_per_second(tps: f32) -> f32 {
    if tps.is_finite() {
        tps.clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND)
    } else {
        default_ticks_per_second()
    }
}

fn clamp_logged(field: &str, value: usize, min: usize, max: usize) -> usize {
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!(field, requested = value, clamped, "Config value out of range");
    }
    clamped
}

const fn default_dimension() -> usize {
    50
}

const fn default_ticks_per_second() -> f32 {
    60.0
}

const fn default_canvas_size() -> f32 {
    600.0
}

fn default_log_level() -> String {
    "info".to_owned()
}
