//! Single-point 2D simplex noise.
//!
//! Evaluates exactly the per-lane formula of [`evaluate_block`](super::evaluate_block)
//! for one coordinate pair, in the same `f32` operation order, so the two
//! paths agree bit for bit on the same sample point.

// Noise code uses mathematical single-letter variables (x, y, i, j)
#![allow(clippy::many_single_char_names)]

use super::gradient::gradient_dot;
use super::hash::hash_i32;
use super::math::truncate_to_i32;

/// Skew factor, `(sqrt(3) - 1) / 2`.
pub const F2: f32 = 0.366_025_403;
/// Unskew factor, `(3 - sqrt(3)) / 6`.
pub const G2: f32 = 0.211_324_865;
/// Empirical normalization into roughly `[-1, 1]`.
pub const NOISE_SCALE: f32 = 90.4613;

/// Contribution of one simplex corner.
#[inline]
fn corner_noise(hash: i32, x: f32, y: f32) -> f32 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * gradient_dot(hash, x, y)
    }
}

#[inline]
fn hash_corner(i: i32, j: i32) -> i32 {
    hash_i32(i.wrapping_add(hash_i32(j)))
}

/// Samples 2D simplex noise at `(x, y)`.
#[must_use]
pub fn sample_2d(x: f32, y: f32) -> f32 {
    // Skew input space to determine which simplex cell we're in
    let s = (x + y) * F2;
    let i_fl = (x + s).floor();
    let j_fl = (y + s).floor();
    let i = truncate_to_i32(i_fl);
    let j = truncate_to_i32(j_fl);

    // Unskew the cell origin back to (x, y) space
    let t = (i_fl + j_fl) * G2;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);

    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    // Middle corner
    let x1 = x0 - i1 as f32 + G2;
    let y1 = y0 - j1 as f32 + G2;

    // Last corner
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let gi0 = hash_corner(i, j);
    let gi1 = hash_corner(i.wrapping_add(i1), j.wrapping_add(j1));
    let gi2 = hash_corner(i.wrapping_add(1), j.wrapping_add(1));

    let n0 = corner_noise(gi0, x0, y0);
    let n1 = corner_noise(gi1, x1, y1);
    let n2 = corner_noise(gi2, x2, y2);

    (n0 + n1 + n2) * NOISE_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_origin_is_zero() {
        assert!(sample_2d(0.0, 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_deterministic() {
        for (x, y) in [(0.5, 0.5), (-12.75, 3.1), (1000.25, -999.5)] {
            assert_eq!(sample_2d(x, y).to_bits(), sample_2d(x, y).to_bits());
        }
    }

    #[test]
    fn test_sample_range() {
        for x in 0..50 {
            for y in 0..50 {
                let value = sample_2d(x as f32 * 0.137, y as f32 * 0.091 - 2.0);
                assert!((-1.05..=1.05).contains(&value), "value out of range: {value}");
            }
        }
    }

    #[test]
    fn test_far_cells_match_block_path() {
        let (x, y) = (3.0e9_f32, -4.0e9_f32);
        let block = super::super::evaluate_block(x, y, x + 1.0, y + 1.0);
        assert_eq!(block[0].to_bits(), sample_2d(x, y).to_bits());
    }

    #[test]
    fn test_non_finite_input_propagates() {
        assert!(sample_2d(f32::NAN, 0.0).is_nan());
    }
}
