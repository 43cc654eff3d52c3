//! Fixed-width lane batches.
//!
//! A [`Lanes`] value holds one scalar per sample point of a noise block. Every
//! operation is applied uniformly to all lanes, so lane `i` keeps referring to
//! the same sample point through the whole computation.

use std::array;
use std::ops::{Add, BitAnd, Mul, Sub};

use super::math::truncate_to_i32;

/// Number of lanes in a batch.
pub const LANE_COUNT: usize = 16;

/// A batch of [`LANE_COUNT`] scalars processed in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lanes<T>(pub [T; LANE_COUNT]);

impl<T: Copy> Lanes<T> {
    /// Creates a batch with every lane set to `value`.
    #[inline]
    #[must_use]
    pub fn splat(value: T) -> Self {
        Self([value; LANE_COUNT])
    }

    /// Applies `f` to every lane.
    #[inline]
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Lanes<U> {
        Lanes(self.0.map(f))
    }

    /// Combines two batches lane by lane.
    #[inline]
    #[must_use]
    pub fn zip_with<U: Copy, V>(self, other: Lanes<U>, mut f: impl FnMut(T, U) -> V) -> Lanes<V> {
        Lanes(array::from_fn(|lane| f(self.0[lane], other.0[lane])))
    }

    /// Returns the lanes as a plain array.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [T; LANE_COUNT] {
        self.0
    }
}

impl Lanes<f32> {
    /// Lane-wise `floor`.
    #[inline]
    #[must_use]
    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }

    /// Converts every lane to `i32`, truncating toward zero.
    ///
    /// NaN and out-of-range lanes become `i32::MIN`, see [`truncate_to_i32`].
    #[inline]
    #[must_use]
    pub fn to_i32(self) -> Lanes<i32> {
        self.map(truncate_to_i32)
    }

    /// Lane-wise `self > other`.
    #[inline]
    #[must_use]
    pub fn simd_gt(self, other: Self) -> Lanes<bool> {
        self.zip_with(other, |a, b| a > b)
    }

    /// Lane-wise `self < other`.
    #[inline]
    #[must_use]
    pub fn simd_lt(self, other: Self) -> Lanes<bool> {
        self.zip_with(other, |a, b| a < b)
    }

    /// Lane-wise square.
    #[inline]
    #[must_use]
    pub fn pow2(self) -> Self {
        self * self
    }

    /// Lane-wise fourth power, computed as a squared square.
    #[inline]
    #[must_use]
    pub fn pow4(self) -> Self {
        self.pow2().pow2()
    }
}

impl Lanes<i32> {
    /// Converts every lane to `f32`.
    #[inline]
    #[must_use]
    pub fn to_f32(self) -> Lanes<f32> {
        self.map(|v| v as f32)
    }

    /// Lane-wise two's complement addition.
    #[inline]
    #[must_use]
    pub fn wrapping_add(self, other: Self) -> Self {
        self.zip_with(other, i32::wrapping_add)
    }

    /// Lane-wise test for a non-zero value.
    #[inline]
    #[must_use]
    pub fn is_nonzero(self) -> Lanes<bool> {
        self.map(|v| v != 0)
    }
}

impl Lanes<bool> {
    /// Picks `on` where the lane is set and `off` elsewhere.
    ///
    /// Both inputs are fully computed beforehand; this never branches on the
    /// mask as a whole.
    #[inline]
    #[must_use]
    pub fn select<T: Copy>(self, on: Lanes<T>, off: Lanes<T>) -> Lanes<T> {
        Lanes(array::from_fn(|lane| {
            if self.0[lane] { on.0[lane] } else { off.0[lane] }
        }))
    }
}

macro_rules! impl_float_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Lanes<f32> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl $trait<f32> for Lanes<f32> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: f32) -> Self {
                self.map(|a| a $op rhs)
            }
        }
    };
}

impl_float_op!(Add, add, +);
impl_float_op!(Sub, sub, -);
impl_float_op!(Mul, mul, *);

impl BitAnd<i32> for Lanes<i32> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: i32) -> Self {
        self.map(|a| a & rhs)
    }
}
