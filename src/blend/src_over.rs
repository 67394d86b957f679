use crate::blend::BlendRule;
use crate::foundation::math::mul_div255;
use crate::pixel::argb::{Argb, OPAQUE_ALPHA_MASK, alpha, blue, green, mult_alpha, pack, red};

/// Porter-Duff SRC_OVER, the "normal" mode.
///
/// ```text
/// Ar = As + Ad*(1-As)
/// Cr = Cs + Cd*(1-As)
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SrcOver {
    dest_opaque: bool,
}

impl BlendRule for SrcOver {
    const NAME: &'static str = "src_over";

    fn new(dest_opaque: bool) -> Self {
        Self { dest_opaque }
    }

    #[inline(always)]
    fn dest_opaque(&self) -> bool {
        self.dest_opaque
    }

    #[inline(always)]
    fn blend_opaque(&self, _dst: Argb, src: Argb) -> Argb {
        OPAQUE_ALPHA_MASK | src
    }

    #[inline(always)]
    fn blend_opaque_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        self.blend(dst, mult_alpha(OPAQUE_ALPHA_MASK | src, extra_alpha))
    }

    #[inline(always)]
    fn blend(&self, dst: Argb, src: Argb) -> Argb {
        let inv = 0xFF - alpha(src);
        let r = (red(src) + mul_div255(red(dst), inv)).min(0xFF);
        let g = (green(src) + mul_div255(green(dst), inv)).min(0xFF);
        let b = (blue(src) + mul_div255(blue(dst), inv)).min(0xFF);
        let a = if self.dest_opaque {
            0xFF
        } else {
            (alpha(src) + mul_div255(alpha(dst), inv)).min(0xFF)
        };
        pack(a, r, g, b)
    }

    #[inline(always)]
    fn blend_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        self.blend(dst, mult_alpha(src, extra_alpha))
    }
}
