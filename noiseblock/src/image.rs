//! Tiled rendering of noise blocks into an 8-bit grayscale buffer.

use std::{fs, path::Path};

use noiseblock_utils::noise::{BLOCK_SIZE, evaluate_block};

use crate::error::OutputError;

/// Maps a noise value in `[-1, 1]` to a byte.
///
/// The product is truncated toward zero and saturates at the ends of the byte
/// range, so small overshoots past `[-1, 1]` land on 0 or 255.
#[inline]
#[must_use]
pub fn quantize(value: f32) -> u8 {
    ((value + 1.0) * 127.5) as u8
}

/// Noise coordinate of a pixel edge.
#[inline]
fn to_noise_space(pixel: usize, scale: f64) -> f32 {
    (pixel as f64 / scale) as f32
}

/// A square, row-major grayscale image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseImage {
    size: usize,
    pixels: Vec<u8>,
}

impl NoiseImage {
    /// Renders a `size x size` image with `scale` pixels per noise unit.
    ///
    /// The image is filled in 4x4 tiles; tiles hanging over the right or
    /// bottom edge are clipped.
    ///
    /// # Panics
    /// Panics if `size * size` overflows `usize`. [`NoiseConfig::validate`]
    /// rejects such sizes.
    ///
    /// [`NoiseConfig::validate`]: crate::config::NoiseConfig::validate
    #[must_use]
    #[tracing::instrument(level = "debug")]
    pub fn render(size: usize, scale: f64) -> Self {
        let len = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("image size {size} overflows the pixel buffer"));
        let mut pixels = vec![0u8; len];

        for y in (0..size).step_by(BLOCK_SIZE) {
            for x in (0..size).step_by(BLOCK_SIZE) {
                let block = evaluate_block(
                    to_noise_space(x, scale),
                    to_noise_space(y, scale),
                    to_noise_space(x + BLOCK_SIZE, scale),
                    to_noise_space(y + BLOCK_SIZE, scale),
                );

                for (lane, value) in block.into_iter().enumerate() {
                    let px = x + lane % BLOCK_SIZE;
                    let py = y + lane / BLOCK_SIZE;
                    if px < size && py < size {
                        pixels[py * size + px] = quantize(value);
                    }
                }
            }
        }

        Self { size, pixels }
    }

    /// Width and height in pixels.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Raw pixel bytes, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, if inside the image.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.size && y < self.size {
            Some(self.pixels[y * self.size + x])
        } else {
            None
        }
    }

    /// Writes the pixels to `path` as a flat byte stream.
    pub fn write_to(&self, path: &Path) -> Result<(), OutputError> {
        fs::write(path, &self.pixels).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noiseblock_utils::noise::sample_2d;

    #[test]
    fn test_quantize_range() {
        assert_eq!(quantize(-1.0), 0);
        assert_eq!(quantize(0.0), 127);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(1.02), 255);
        assert_eq!(quantize(-1.02), 0);
        assert_eq!(quantize(f32::NAN), 0);
    }

    #[test]
    fn test_render_places_blocks_row_major() {
        let scale = 16.0;
        let image = NoiseImage::render(8, scale);
        assert_eq!(image.pixels().len(), 64);

        for y in 0..8 {
            for x in 0..8 {
                let expected = quantize(sample_2d(
                    to_noise_space(x, scale),
                    to_noise_space(y, scale),
                ));
                let actual = image.get(x, y).expect("in bounds");
                assert!(
                    actual.abs_diff(expected) <= 1,
                    "pixel ({x}, {y}): {actual} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_render_clips_partial_tiles() {
        let full = NoiseImage::render(8, 64.0);
        let clipped = NoiseImage::render(6, 64.0);
        assert_eq!(clipped.pixels().len(), 36);
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(clipped.get(x, y), full.get(x, y));
            }
        }
        assert_eq!(clipped.get(6, 0), None);
    }

    #[test]
    #[should_panic(expected = "overflows the pixel buffer")]
    fn test_render_rejects_overflowing_size() {
        let _ = NoiseImage::render(usize::MAX, 64.0);
    }
}
