use crate::blend::BlendRule;
use crate::foundation::math::mul_div255;
use crate::pixel::argb::{Argb, OPAQUE_ALPHA_MASK, alpha, blue, green, pack, red};

/// Porter-Duff SRC, replacing the destination.
///
/// ```text
/// Ar = As*Ae + Ad*(1-Ae)
/// Cr = Cs*Ae + Cd*(1-Ae)
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Src {
    dest_opaque: bool,
}

impl BlendRule for Src {
    const NAME: &'static str = "src";
    const BLEND_TRANSPARENT: bool = true;

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
        self.blend_alpha(dst, OPAQUE_ALPHA_MASK | src, extra_alpha)
    }

    #[inline(always)]
    fn blend(&self, _dst: Argb, src: Argb) -> Argb {
        if self.dest_opaque {
            OPAQUE_ALPHA_MASK | src
        } else {
            src
        }
    }

    #[inline(always)]
    fn blend_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        let inv = 0xFF - extra_alpha;
        let lerp = |s: u32, d: u32| mul_div255(s, extra_alpha) + mul_div255(d, inv);
        let a = if self.dest_opaque {
            0xFF
        } else {
            lerp(alpha(src), alpha(dst))
        };
        pack(
            a,
            lerp(red(src), red(dst)),
            lerp(green(src), green(dst)),
            lerp(blue(src), blue(dst)),
        )
    }
}
