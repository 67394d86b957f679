//! Porter-Duff compositing rules over premultiplied ARGB.
//!
//! Every rule shares one contract, [`BlendRule`]. The rasterizer is generic over it, so each
//! rule gets its own monomorphized span loops with the per-pixel math inlined.

pub(crate) mod add;
pub(crate) mod dst_in;
pub(crate) mod dst_out;
pub(crate) mod mode;
pub(crate) mod multiply;
pub(crate) mod src;
pub(crate) mod src_over;

use crate::pixel::argb::Argb;

/// Compositing algebra for one source pixel onto one destination pixel.
///
/// Inputs and outputs are premultiplied. Implementations must keep every channel in
/// `0..=255`, keep `r, g, b <= a` when both inputs satisfy it, and write alpha `0xFF` when
/// the destination is opaque.
pub trait BlendRule: Copy {
    /// Stable rule name, used for logging.
    const NAME: &'static str;

    /// Whether a source pixel with alpha 0 can change the destination.
    ///
    /// When `false` the rasterizer skips such pixels without calling the rule.
    const BLEND_TRANSPARENT: bool = false;

    /// Build the rule for a destination with (`true`) or without a usable alpha channel.
    fn new(dest_opaque: bool) -> Self;

    /// `true` when written pixels are forced fully opaque.
    fn dest_opaque(&self) -> bool;

    /// Blend a source whose alpha is known to be `0xFF`; its alpha bits are ignored.
    fn blend_opaque(&self, dst: Argb, src: Argb) -> Argb;

    /// Blend an opaque source scaled by `extra_alpha`; values above 255 act as 255.
    fn blend_opaque_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb;

    /// Blend an arbitrary premultiplied source.
    fn blend(&self, dst: Argb, src: Argb) -> Argb;

    /// Blend an arbitrary premultiplied source scaled by `extra_alpha`; values above 255 act
    /// as 255.
    fn blend_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb;
}

pub use add::Add;
pub use dst_in::DstIn;
pub use dst_out::DstOut;
pub use mode::BlendMode;
pub use multiply::Multiply;
pub use src::Src;
pub use src_over::SrcOver;

#[cfg(test)]
#[path = "../../tests/unit/blend/rules.rs"]
mod tests;
