//! Configuration file support for dialpick.
//!
//! Configuration is loaded from `~/.config/dialpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Configuration file
//! 3. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/dialpick/config.toml
//! min = 40
//! max = 150
//! value = 70
//! label = "Weight"
//! unit = "kg"
//! quiet_period_ms = 150
//! bell = true
//! cell_width = 8
//!
//! [breakpoints]
//! medium = 640
//! wide = 1024
//!
//! [layout.narrow]
//! item_extent = 40.0
//! half_window = 2
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::picker::{
    Breakpoints, DEFAULT_QUIET_PERIOD, LayoutPolicy, LayoutTable, PickerOptions, PickerProps,
};

/// Terminal columns are converted to layout units with this many units per column.
pub const DEFAULT_CELL_WIDTH: u32 = 8;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Lower bound of the selectable range
    pub min: Option<i64>,

    /// Upper bound of the selectable range
    pub max: Option<i64>,

    /// Value the picker starts on
    pub value: Option<i64>,

    /// Caption shown above the picker
    pub label: Option<String>,

    /// Unit shown next to the value
    pub unit: Option<String>,

    /// Quiet period before a scroll gesture snaps
    pub quiet_period_ms: Option<u64>,

    /// Ring the terminal bell on each tick
    pub bell: Option<bool>,

    /// Layout units per terminal column
    pub cell_width: Option<u32>,

    /// Viewport class thresholds
    pub breakpoints: Breakpoints,

    /// Row geometry per viewport class
    pub layout: LayoutTable,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub value: Option<i64>,
    pub label: Option<String>,
    pub unit: Option<String>,
    pub quiet_period_ms: Option<u64>,
    pub no_bell: bool,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::parse(&contents)
    }

    /// Parse and validate TOML contents.
    pub fn parse(contents: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the picker cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        self.policy().validate()?;
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "min {} is greater than max {}",
                    min, max
                )));
            }
        }
        if self.cell_width == Some(0) {
            return Err(ConfigError::Invalid("cell_width must be positive".to_string()));
        }
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dialpick")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, cli: CliOverrides) -> Self {
        if cli.min.is_some() {
            self.min = cli.min;
        }
        if cli.max.is_some() {
            self.max = cli.max;
        }
        if cli.value.is_some() {
            self.value = cli.value;
        }
        if cli.label.is_some() {
            self.label = cli.label;
        }
        if cli.unit.is_some() {
            self.unit = cli.unit;
        }
        if cli.quiet_period_ms.is_some() {
            self.quiet_period_ms = cli.quiet_period_ms;
        }
        if cli.no_bell {
            self.bell = Some(false);
        }
        self
    }

    /// Props for the picker, falling back to a 40..=150 range starting at 70.
    pub fn props(&self) -> PickerProps {
        let min = self.min.unwrap_or(40);
        let max = self.max.unwrap_or(150.max(min));
        let value = self.value.unwrap_or(70);

        PickerProps {
            current_value: value,
            min,
            max,
            label: self.label.clone(),
            unit: self.unit.clone(),
        }
    }

    pub fn policy(&self) -> LayoutPolicy {
        LayoutPolicy {
            breakpoints: self.breakpoints,
            table: self.layout,
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_QUIET_PERIOD)
    }

    pub fn options(&self) -> PickerOptions {
        PickerOptions {
            quiet_period: self.quiet_period(),
            policy: self.policy(),
        }
    }

    pub fn bell(&self) -> bool {
        self.bell.unwrap_or(true)
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width.unwrap_or(DEFAULT_CELL_WIDTH).max(1)
    }
}
