use crate::foundation::math::mul_div255;

/// 32-bit packed pixel, `0xAARRGGBB`.
///
/// Unless stated otherwise the color channels are premultiplied: `r, g, b <= a`.
pub type Argb = u32;

/// Alpha channel mask; OR-ing it in forces a pixel fully opaque.
pub const OPAQUE_ALPHA_MASK: Argb = 0xFF00_0000;

/// Alpha channel, `0..=255`.
#[inline(always)]
pub const fn alpha(p: Argb) -> u32 {
    p >> 24
}

/// Red channel, `0..=255`.
#[inline(always)]
pub const fn red(p: Argb) -> u32 {
    (p >> 16) & 0xFF
}

/// Green channel, `0..=255`.
#[inline(always)]
pub const fn green(p: Argb) -> u32 {
    (p >> 8) & 0xFF
}

/// Blue channel, `0..=255`.
#[inline(always)]
pub const fn blue(p: Argb) -> u32 {
    p & 0xFF
}

/// Pack four channels. Each channel must already be in `0..=255`.
#[inline(always)]
pub const fn pack(a: u32, r: u32, g: u32, b: u32) -> Argb {
    debug_assert!(a <= 0xFF && r <= 0xFF && g <= 0xFF && b <= 0xFF);
    (a << 24) | (r << 16) | (g << 8) | b
}

/// `true` when every color channel is `<=` alpha.
pub const fn is_premultiplied(p: Argb) -> bool {
    let a = alpha(p);
    red(p) <= a && green(p) <= a && blue(p) <= a
}

/// Convert a straight-alpha pixel to premultiplied form.
pub const fn premultiply(p: Argb) -> Argb {
    premultiply_rgb(p, alpha(p))
}

/// Combine the color of `rgb` (alpha ignored) with `alpha`, premultiplying.
pub const fn premultiply_rgb(rgb: Argb, alpha: u32) -> Argb {
    pack(
        alpha,
        mul_div255(red(rgb), alpha),
        mul_div255(green(rgb), alpha),
        mul_div255(blue(rgb), alpha),
    )
}

/// Convert a premultiplied pixel back to straight alpha.
pub const fn unpremultiply(p: Argb) -> Argb {
    let a = alpha(p);
    if a == 0 {
        return 0;
    }
    if a == 0xFF {
        return p;
    }
    // Channels above alpha would overflow; clamp so a malformed pixel still packs.
    let r = min_u32(255 * red(p) / a, 255);
    let g = min_u32(255 * green(p) / a, 255);
    let b = min_u32(255 * blue(p) / a, 255);
    pack(a, r, g, b)
}

/// Scale every channel of a premultiplied pixel by an extra alpha (`0..=255`).
#[inline(always)]
pub const fn mult_alpha(p: Argb, extra_alpha: u32) -> Argb {
    pack(
        mul_div255(alpha(p), extra_alpha),
        mul_div255(red(p), extra_alpha),
        mul_div255(green(p), extra_alpha),
        mul_div255(blue(p), extra_alpha),
    )
}

const fn min_u32(a: u32, b: u32) -> u32 {
    if a < b { a } else { b }
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/argb.rs"]
mod tests;
