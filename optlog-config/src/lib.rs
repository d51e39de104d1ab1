//! Shared configuration loader for the optlog toolchain.
//!
//! `defaults/optlog.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer a basin-specific
//! configuration file on top of those defaults via [`Loader`] before
//! deserializing into [`BasinConfig`].
//!
//! The log converter itself never reads this file format; it only receives
//! the ordered objective-function descriptors the CLI extracts from
//! [`BasinConfig::of_link`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/optlog.default.toml");

/// Basin/calibration configuration consumed by optlog applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BasinConfig {
    /// Root of the per-basin calibration trees (surrounding tooling only).
    pub base_calib_dir: String,
    /// Objective-function links in declaration order.
    pub of_link: Vec<ObjectiveFunctionLink>,
}

/// One declared objective-function link.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectiveFunctionLink {
    /// Link identifier used by the calibration tooling.
    pub id: String,
    /// Human-friendly name; becomes the `OF_<of_desc>` output column.
    pub of_desc: String,
}

impl BasinConfig {
    /// Objective-function descriptors in link declaration order.
    pub fn objective_descriptors(&self) -> impl Iterator<Item = &str> {
        self.of_link.iter().map(|link| link.of_desc.as_str())
    }
}

/// Helper for layering a basin file over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a basin configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BasinConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BasinConfig, ConfigError> {
    Loader::new().build()
}
