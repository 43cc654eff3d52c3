//! # Noiseblock Utils
//!
//! The block-parallel 2D simplex noise kernel used by `noiseblock`.

pub mod noise;

pub use noise::{NoiseBlock, evaluate_block, sample_2d};
