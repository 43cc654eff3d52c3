//! Integer hash used to pick corner gradients.
//!
//! The mixing sequence is a fixed contract: changing a single constant changes
//! every noise value.

use super::lanes::Lanes;

/// Mixes a single 32-bit value.
///
/// Arithmetic wraps and right shifts are logical.
#[inline]
#[must_use]
pub const fn hash_u32(mut h: u32) -> u32 {
    h = h.wrapping_add(0x7ed5_5d16).wrapping_add(h << 12);
    h = (h ^ 0xc761_c23c) ^ (h >> 19);
    h = h.wrapping_add(0x1656_67b1).wrapping_add(h << 5);
    h = h.wrapping_add(0xd3a2_646c) ^ (h << 9);
    h = h.wrapping_add(0xfd70_46c5).wrapping_add(h << 3);
    h = (h ^ 0xb55a_4f09) ^ (h >> 16);
    h
}

/// Hashes a signed lattice coordinate.
///
/// The input and output are reinterpreted bit for bit; only the unsigned view
/// is ever mixed.
#[inline]
#[must_use]
pub const fn hash_i32(value: i32) -> i32 {
    hash_u32(value as u32) as i32
}

/// Hashes every lane independently.
#[inline]
#[must_use]
pub fn hash(values: Lanes<i32>) -> Lanes<i32> {
    values.map(hash_i32)
}

/// Hash of the lattice point `(i, j)`: `j` is hashed first and folded into `i`
/// before the outer hash.
#[inline]
#[must_use]
pub fn hash_corner(i: Lanes<i32>, j: Lanes<i32>) -> Lanes<i32> {
    hash(i.wrapping_add(hash(j)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash_u32(0), 0x6b4e_d927);
        assert_eq!(hash_u32(1), 0xb486_81b6);
        assert_eq!(hash_i32(-1), -26_951_294);
        assert_eq!(hash_i32(12345), -1_236_124_589);
        assert_eq!(hash_i32(i32::MAX), -346_602_319);
        assert_eq!(hash_i32(i32::MIN), 2_122_005_522);
    }

    #[test]
    fn test_signed_view_matches_unsigned_bits() {
        for value in [-1, i32::MIN, -123_456, 0, 42] {
            assert_eq!(hash_i32(value) as u32, hash_u32(value as u32));
        }
    }

    #[test]
    fn test_hash_is_lane_independent() {
        let input = Lanes(std::array::from_fn(|lane| lane as i32 - 8));
        let hashed = hash(input);
        for (lane, value) in hashed.to_array().into_iter().enumerate() {
            assert_eq!(value, hash_i32(lane as i32 - 8));
        }
    }

    #[test]
    fn test_corner_hash_chains_j_into_i() {
        let i = Lanes::splat(3);
        let j = Lanes::splat(-7);
        let expected = hash_i32(3_i32.wrapping_add(hash_i32(-7)));
        assert_eq!(hash_corner(i, j), Lanes::splat(expected));
        assert_ne!(hash_corner(i, j), hash_corner(j, i));
    }
}
