//! Affine row rasterizer.
//!
//! A [`RenderRequest`] describes one horizontal destination span (or a stack of them for
//! axis-aligned draws) together with the texture-space walk that feeds it. The sampling path
//! and the pixel writer are both chosen once per request; the per-pixel loops are generic
//! over both and monomorphize into one kernel per combination.

pub(crate) mod request;
pub(crate) mod span;

pub use request::{RasterPath, RenderRequest};
