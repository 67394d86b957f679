use crate::foundation::error::{SpriteCompError, SpriteCompResult};
use crate::pixel::argb::{Argb, alpha, blue, green, pack, premultiply, red, unpremultiply};

/// Pack a straight-alpha RGBA8 image into premultiplied ARGB pixels, row-major.
pub fn argb_from_rgba8(img: &image::RgbaImage) -> Vec<Argb> {
    img.pixels()
        .map(|px| {
            let [r, g, b, a] = px.0;
            premultiply(pack(
                u32::from(a),
                u32::from(r),
                u32::from(g),
                u32::from(b),
            ))
        })
        .collect()
}

/// Unpack premultiplied ARGB pixels into a straight-alpha RGBA8 image.
pub fn rgba8_from_argb(
    pixels: &[Argb],
    width: u32,
    height: u32,
) -> SpriteCompResult<image::RgbaImage> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| SpriteCompError::validation("rgba8 image size overflow"))?;
    if pixels.len() != expected {
        return Err(SpriteCompError::validation(
            "rgba8_from_argb expects width*height pixels",
        ));
    }

    let mut raw = Vec::with_capacity(expected * 4);
    for &p in pixels {
        let s = unpremultiply(p);
        raw.extend_from_slice(&[red(s) as u8, green(s) as u8, blue(s) as u8, alpha(s) as u8]);
    }
    image::RgbaImage::from_raw(width, height, raw)
        .ok_or_else(|| SpriteCompError::validation("rgba8 buffer does not match dimensions"))
}

#[cfg(test)]
#[path = "../../tests/unit/pixel/convert.rs"]
mod tests;
