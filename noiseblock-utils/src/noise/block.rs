//! Batched simplex noise over a 4x4 sample grid.
//!
//! A block call takes a rectangle, places 16 sample points on a regular 4x4
//! grid inside it and evaluates all of them lane by lane. The end boundary of
//! the rectangle is never sampled, so adjacent rectangles tile without
//! duplicating a row or column.

// Noise code uses mathematical single-letter variables (x, y, i, j)
#![allow(clippy::many_single_char_names)]

use super::gradient::gradient;
use super::hash::hash_corner;
use super::lanes::{LANE_COUNT, Lanes};
use super::lerp_f32;
use super::simplex_noise::{F2, G2, NOISE_SCALE};

/// Side length of the sample grid.
pub const BLOCK_SIZE: usize = 4;

/// Noise values of one block, row-major: lane `row * 4 + col`.
pub type NoiseBlock = [f32; LANE_COUNT];

/// Fractional x offset of every lane inside the rectangle.
const X_STEPS: Lanes<f32> = Lanes([
    0.0, 0.25, 0.5, 0.75, //
    0.0, 0.25, 0.5, 0.75, //
    0.0, 0.25, 0.5, 0.75, //
    0.0, 0.25, 0.5, 0.75,
]);

/// Fractional y offset of every lane inside the rectangle.
const Y_STEPS: Lanes<f32> = Lanes([
    0.0, 0.0, 0.0, 0.0, //
    0.25, 0.25, 0.25, 0.25, //
    0.5, 0.5, 0.5, 0.5, //
    0.75, 0.75, 0.75, 0.75,
]);

/// Fractional offset of grid column (or row) `index`.
#[inline]
#[must_use]
pub fn grid_step(index: usize) -> f32 {
    X_STEPS.0[index % BLOCK_SIZE]
}

/// Sample coordinates of every lane for the rectangle
/// `[x_begin, x_end) x [y_begin, y_end)`.
#[inline]
#[must_use]
pub fn sample_points(
    x_begin: f32,
    y_begin: f32,
    x_end: f32,
    y_end: f32,
) -> (Lanes<f32>, Lanes<f32>) {
    (
        X_STEPS.map(|step| lerp_f32(step, x_begin, x_end)),
        Y_STEPS.map(|step| lerp_f32(step, y_begin, y_end)),
    )
}

/// Contribution of one simplex corner for every lane.
///
/// Lanes outside the corner's radius of influence are forced to exactly zero.
#[inline]
fn corner_noise(hashes: Lanes<i32>, x: Lanes<f32>, y: Lanes<f32>) -> Lanes<f32> {
    let t = Lanes::splat(0.5) - x.pow2() - y.pow2();
    let n = t.pow4() * gradient(hashes, x, y);
    t.simd_lt(Lanes::splat(0.0)).select(Lanes::splat(0.0), n)
}

/// Evaluates simplex noise for the 4x4 grid inside
/// `[x_begin, x_end) x [y_begin, y_end)`.
///
/// The rectangle is not validated: reversed or empty bounds give a mirrored or
/// degenerate grid.
#[must_use]
pub fn evaluate_block(x_begin: f32, y_begin: f32, x_end: f32, y_end: f32) -> NoiseBlock {
    let (x, y) = sample_points(x_begin, y_begin, x_end, y_end);

    // Skew input space to determine which simplex cell we're in
    let s = (x + y) * F2;
    let i_fl = (x + s).floor();
    let j_fl = (y + s).floor();
    let i = i_fl.to_i32();
    let j = j_fl.to_i32();

    // Unskew the cell origin back to (x, y) space
    let t = (i_fl + j_fl) * G2;
    let x0 = x - (i.to_f32() - t);
    let y0 = y - (j.to_f32() - t);

    // Lanes disagree on the triangle, so both offsets are built and masked
    let lower = x0.simd_gt(y0);
    let i1 = lower.select(Lanes::splat(1), Lanes::splat(0));
    let j1 = lower.select(Lanes::splat(0), Lanes::splat(1));

    // Middle corner
    let x1 = x0 - i1.to_f32() + G2;
    let y1 = y0 - j1.to_f32() + G2;

    // Last corner
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let one = Lanes::splat(1);
    let gi0 = hash_corner(i, j);
    let gi1 = hash_corner(i.wrapping_add(i1), j.wrapping_add(j1));
    let gi2 = hash_corner(i.wrapping_add(one), j.wrapping_add(one));

    let n0 = corner_noise(gi0, x0, y0);
    let n1 = corner_noise(gi1, x1, y1);
    let n2 = corner_noise(gi2, x2, y2);

    ((n0 + n1 + n2) * NOISE_SCALE).to_array()
}
