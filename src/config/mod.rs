//! Configuration management for `nobg.toml`.
//!
//! The file is optional. Every field falls back to the default image pair
//! and threshold, so running without any config processes
//! `src/assets/images/lungs_new.png` into
//! `src/assets/images/lungs_transparent.png`.
//!
//! # Example
//!
//! ```toml
//! input = "src/assets/images/lungs_new.png"          # Image to process
//! output = "src/assets/images/lungs_transparent.png" # PNG to write
//! threshold = 50                                     # 0-255, strict `<` per channel
//! ```
//!
//! Paths are used as written, relative to the current working directory.

mod error;

pub use error::ConfigError;

use crate::{cli::Cli, debug, image::background::DEFAULT_THRESHOLD, log};
use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "nobg.toml";

const DEFAULT_INPUT: &str = "src/assets/images/lungs_new.png";
const DEFAULT_OUTPUT: &str = "src/assets/images/lungs_transparent.png";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing nobg.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NobgConfig {
    /// Image to read.
    pub input: PathBuf,

    /// PNG to write. Its parent directory must exist.
    pub output: PathBuf,

    /// Channels strictly below this value count as near-black.
    ///
    /// Kept wide so out-of-range values reach validation instead of
    /// failing as a TOML type error.
    pub threshold: i64,
}

impl Default for NobgConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            threshold: i64::from(DEFAULT_THRESHOLD),
        }
    }
}

/// Validated settings handed to the removal pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub threshold: u8,
}

impl TryFrom<NobgConfig> for Settings {
    type Error = ConfigError;

    fn try_from(config: NobgConfig) -> Result<Self, ConfigError> {
        let threshold = config.threshold()?;
        Ok(Self {
            input: config.input,
            output: config.output,
            threshold,
        })
    }
}

impl NobgConfig {
    /// Load and validate configuration from CLI arguments.
    ///
    /// A missing `nobg.toml` yields the defaults; a missing file named with
    /// `--config` is an error.
    pub fn load(cli: &Cli) -> Result<Settings> {
        let config = match &cli.config {
            Some(path) => Self::from_path(path)?,
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::from_path(path)?
                } else {
                    debug!("config"; "{} not found, using defaults", CONFIG_FILE);
                    Self::default()
                }
            }
        };

        Ok(Settings::try_from(config)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}:", path.display());
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Threshold as a channel value.
    ///
    /// Values outside `0..=255` are rejected rather than clamped.
    fn threshold(&self) -> Result<u8, ConfigError> {
        u8::try_from(self.threshold).map_err(|_| {
            ConfigError::Validation(format!(
                "`threshold` must be between 0 and 255, got {}",
                self.threshold
            ))
        })
    }
}

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> NobgConfig {
    let (parsed, ignored) = NobgConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
