//! 16.16 fixed-point scalars and the 8-bit rounding rule shared by every blend path.

/// Signed 16.16 fixed-point scalar used for texture-space coordinates and their deltas.
pub type Fixed = i32;

/// Number of fractional bits in [`Fixed`].
pub const FRAC_BITS: u32 = 16;

/// `1.0` in 16.16.
pub const FIXED_ONE: Fixed = 1 << FRAC_BITS;

/// Largest image side that can be addressed with a 16.16 coordinate.
pub const MAX_DIMENSION: u32 = i16::MAX as u32;

/// Integer part (floor) of a 16.16 value.
#[inline(always)]
pub const fn to_int(x: Fixed) -> i32 {
    x >> FRAC_BITS
}

/// Fractional part of a 16.16 value, in `0..=0xFFFF`.
#[inline(always)]
pub const fn frac(x: Fixed) -> i32 {
    x & 0xFFFF
}

/// Convert an integer to 16.16.
#[inline(always)]
pub const fn from_int(i: i32) -> Fixed {
    i << FRAC_BITS
}

/// Upper 8 bits of the fraction, the sub-texel position used by bilinear sampling.
#[inline(always)]
pub const fn frac8(x: Fixed) -> u8 {
    ((x & 0xFF00) >> 8) as u8
}

/// Round a real value to 16.16. Saturates at the representable range.
///
/// For callers building requests; not used on the per-pixel path.
pub fn from_f64(x: f64) -> Fixed {
    if !x.is_finite() {
        return 0;
    }
    (x * f64::from(FIXED_ONE))
        .round()
        .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as Fixed
}

/// `round(t / 255)` for `t` in `[0, 255 * 255]`, evaluated with shifts only.
///
/// Bit-exact with `(t + 127) / 255` over that range. Every 8-bit "multiply and scale back"
/// in the crate goes through this one rule so results reproduce across blend modes.
#[inline(always)]
pub const fn div255(t: u32) -> u32 {
    let t = t + 128;
    (t + (t >> 8)) >> 8
}

/// `round(x * y / 255)` for 8-bit operands.
#[inline(always)]
pub const fn mul_div255(x: u32, y: u32) -> u32 {
    div255(x * y)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
