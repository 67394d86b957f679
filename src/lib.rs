//! spritecomp is the pixel-compositing core of a 2D sprite engine.
//!
//! Everything runs in integer arithmetic over premultiplied `0xAARRGGBB` pixels with 16.16
//! fixed-point texture coordinates:
//!
//! - Describe the image with a [`Source`] and the framebuffer with a [`Destination`]
//! - Describe one span (or a stack of rows) with a [`RenderRequest`]
//! - Hand both to a [`Compositor`] together with a [`BlendMode`]
//!
//! Calls are synchronous and keep no state between them.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod blend;
mod compositor;
pub(crate) mod pixel;
pub(crate) mod raster;
pub(crate) mod sample;
pub(crate) mod surface;

pub use crate::foundation::error::{SpriteCompError, SpriteCompResult};
pub use crate::foundation::math::{
    FIXED_ONE, FRAC_BITS, Fixed, MAX_DIMENSION, div255, frac, frac8, from_f64, from_int,
    mul_div255, to_int,
};

pub use crate::pixel::argb::{
    Argb, OPAQUE_ALPHA_MASK, alpha, blue, green, is_premultiplied, mult_alpha, pack, premultiply,
    premultiply_rgb, red, unpremultiply,
};
pub use crate::pixel::convert::{argb_from_rgba8, rgba8_from_argb};

pub use crate::blend::{Add, BlendMode, BlendRule, DstIn, DstOut, Multiply, Src, SrcOver};
pub use crate::compositor::{Compositor, CompositorOpts, draw};
pub use crate::raster::{RasterPath, RenderRequest};
pub use crate::sample::bilinear::{
    BilinearWeights, Quad, blend_quad_opaque, blend_quad_premultiplied, blend_quad_straight,
};
pub use crate::surface::desc::{Destination, EdgeClamp, Source};
