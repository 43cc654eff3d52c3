//! Corner gradients selected by the low three bits of a corner hash.
//!
//! The eight directions come in two length scales and are derived
//! arithmetically from the hash bits instead of being looked up in a table.

use super::lanes::Lanes;

/// Gradient multipliers `(mult_x, mult_y)` for a single hash.
#[inline]
#[must_use]
pub fn multipliers(hash: i32) -> (f32, f32) {
    let mult_1 = (hash & 1) as f32 - 0.5;
    let mult_2 = (hash & 2) as f32 - 1.0;
    if hash & 4 != 0 {
        (mult_1, mult_2)
    } else {
        (mult_2, mult_1)
    }
}

/// Dot product of the gradient picked by `hash` with the offset `(x, y)`.
#[inline]
#[must_use]
pub fn gradient_dot(hash: i32, x: f32, y: f32) -> f32 {
    let (mult_x, mult_y) = multipliers(hash);
    x * mult_x + y * mult_y
}

/// Lane-wise [`gradient_dot`].
#[inline]
#[must_use]
pub fn gradient(hashes: Lanes<i32>, x: Lanes<f32>, y: Lanes<f32>) -> Lanes<f32> {
    let mult_1 = (hashes & 1).to_f32() - 0.5;
    let mult_2 = (hashes & 2).to_f32() - 1.0;
    let swap = (hashes & 4).is_nonzero();

    let mult_x = swap.select(mult_1, mult_2);
    let mult_y = swap.select(mult_2, mult_1);

    x * mult_x + y * mult_y
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Directions for `hash & 7`, written out.
    const DIRECTIONS: [(f32, f32); 8] = [
        (-1.0, -0.5),
        (-1.0, 0.5),
        (1.0, -0.5),
        (1.0, 0.5),
        (-0.5, -1.0),
        (0.5, -1.0),
        (-0.5, 1.0),
        (0.5, 1.0),
    ];

    #[test]
    fn test_multipliers_cover_eight_directions() {
        for (hash, expected) in DIRECTIONS.iter().enumerate() {
            assert_eq!(multipliers(hash as i32), *expected, "hash {hash}");
        }
    }

    #[test]
    fn test_only_low_three_bits_matter() {
        for hash in [-1, i32::MIN, 0x7fff_fff8, 0x1234_5675] {
            assert_eq!(multipliers(hash), DIRECTIONS[(hash & 7) as usize]);
        }
    }

    #[test]
    fn test_batched_matches_scalar() {
        let hashes = Lanes(std::array::from_fn(|lane| lane as i32 * 0x0101_0101 - 3));
        let x = Lanes(std::array::from_fn(|lane| lane as f32 * 0.1 - 0.7));
        let y = Lanes(std::array::from_fn(|lane| 0.4 - lane as f32 * 0.05));

        let batched = gradient(hashes, x, y);
        for lane in 0..16 {
            let scalar = gradient_dot(hashes.0[lane], x.0[lane], y.0[lane]);
            assert_eq!(batched.0[lane].to_bits(), scalar.to_bits(), "lane {lane}");
        }
    }
}
