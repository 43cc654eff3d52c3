//! # Noiseblock
//!
//! Renders 2D simplex noise into a raw 8-bit grayscale image.
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(
    clippy::single_call_fn,
    clippy::multiple_inherent_impl,
    clippy::shadow_unrelated,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]
use std::time::Instant;

use crate::config::NoiseConfig;
use crate::error::OutputError;
use crate::image::NoiseImage;

/// The config module.
pub mod config;
/// The error module.
pub mod error;
/// The image module.
pub mod image;
/// The logger module.
pub mod logger;

/// Renders the image described by `config` and writes it to its output path.
pub fn run(config: &NoiseConfig) -> Result<NoiseImage, OutputError> {
    log::info!(
        "Rendering {size}x{size} noise at scale {scale}",
        size = config.size,
        scale = config.scale
    );

    let start = Instant::now();
    let image = NoiseImage::render(config.size, config.scale);
    log::info!("Rendered in {}ms", start.elapsed().as_millis());

    image.write_to(&config.output)?;
    log::info!(
        "Wrote {} bytes to {}",
        image.pixels().len(),
        config.output.display()
    );

    Ok(image)
}
