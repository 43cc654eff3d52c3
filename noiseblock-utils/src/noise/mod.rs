//! 2D simplex noise evaluated in fixed blocks of 16 samples.
//!
//! [`evaluate_block`] is the batched kernel; [`sample_2d`] evaluates the same
//! formula for a single point.

mod block;
mod gradient;
mod hash;
mod lanes;
mod math;
mod simplex_noise;

pub use block::{BLOCK_SIZE, NoiseBlock, evaluate_block, grid_step, sample_points};
pub use gradient::{gradient, gradient_dot, multipliers};
pub use hash::{hash, hash_corner, hash_i32, hash_u32};
pub use lanes::{LANE_COUNT, Lanes};
pub use math::{lerp_f32, truncate_to_i32};
pub use simplex_noise::{F2, G2, NOISE_SCALE, sample_2d};
