//! Errors surfaced by the renderer.

use std::{io, path::PathBuf};
use thiserror::Error;

/// An error that can occur while loading the config.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file or its directory could not be read or written.
    #[error("Failed to access config at {path}: {source}")]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The config file is not valid JSON5 for [`NoiseConfig`](crate::config::NoiseConfig).
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A config value is out of range.
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

/// An error that can occur while persisting a rendered image.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output file could not be written.
    #[error("Failed to write image to {path}: {source}")]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}
