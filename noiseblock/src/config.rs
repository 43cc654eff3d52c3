//! Renderer configuration loaded from a JSON5 file.

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/noiseblock_config.json5");

/// Config file used when `NOISEBLOCK_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "noiseblock_config.json5";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_VAR: &str = "NOISEBLOCK_CONFIG";

/// Largest accepted image side, in pixels.
pub const MAX_SIZE: usize = 1 << 15;

/// Settings for a single render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Width and height of the square image, in pixels. Need not be a multiple
    /// of 4; edge tiles are clipped.
    pub size: usize,
    /// Pixels per noise unit.
    pub scale: f64,
    /// Where the raw image bytes are written.
    pub output: PathBuf,
}

impl NoiseConfig {
    /// Path of the config file, honouring [`CONFIG_PATH_VAR`].
    #[must_use]
    pub fn path() -> PathBuf {
        env::var_os(CONFIG_PATH_VAR).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
    }

    /// Reads and validates the config at `path`, or writes the bundled default
    /// there and returns [`NoiseConfig::default`] if no file exists yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let config: Self = serde_json5::from_str(&config_str)?;
            config.validate()?;
            return Ok(config);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, DEFAULT_CONFIG).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote default config to {}", path.display());

        Ok(Self::default())
    }

    /// Checks the values a render depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::Invalid("Size must be greater than 0"));
        }
        if self.size > MAX_SIZE || self.size.checked_mul(self.size).is_none() {
            return Err(ConfigError::Invalid("Size must be at most 32768"));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::Invalid("Scale must be a finite number greater than 0"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("Output path must not be empty"));
        }
        Ok(())
    }
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            scale: 64.0,
            output: PathBuf::from("noise.bin"),
        }
    }
}
