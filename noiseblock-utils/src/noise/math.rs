//! Math helpers shared by the noise kernel.

/// Linear interpolation between two f32 values.
#[inline]
#[must_use]
pub fn lerp_f32(delta: f32, start: f32, end: f32) -> f32 {
    start + delta * (end - start)
}

/// Truncates toward zero like a packed float-to-int conversion.
///
/// NaN and values outside the `i32` range map to `i32::MIN` instead of
/// saturating, which is what `cvttps2dq` returns for them.
#[inline]
#[must_use]
pub fn truncate_to_i32(value: f32) -> i32 {
    if (-2_147_483_648.0..2_147_483_648.0).contains(&value) {
        value as i32
    } else {
        i32::MIN
    }
}
