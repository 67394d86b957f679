use crate::blend::BlendRule;
use crate::foundation::math::mul_div255;
use crate::pixel::argb::{Argb, OPAQUE_ALPHA_MASK, alpha, blue, green, mult_alpha, pack, red};

/// Multiply, composited source-over.
///
/// ```text
/// Ar = As + Ad*(1-As)
/// Cr = Cs*Cd + Cs*(1-Ad) + Cd*(1-As)
/// ```
///
/// The three rounded color terms can overshoot alpha by one, so color is clamped to alpha.
#[derive(Clone, Copy, Debug)]
pub struct Multiply {
    dest_opaque: bool,
}

impl BlendRule for Multiply {
    const NAME: &'static str = "multiply";

    fn new(dest_opaque: bool) -> Self {
        Self { dest_opaque }
    }

    #[inline(always)]
    fn dest_opaque(&self) -> bool {
        self.dest_opaque
    }

    #[inline(always)]
    fn blend_opaque(&self, dst: Argb, src: Argb) -> Argb {
        self.blend(dst, OPAQUE_ALPHA_MASK | src)
    }

    #[inline(always)]
    fn blend_opaque_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        self.blend(dst, mult_alpha(OPAQUE_ALPHA_MASK | src, extra_alpha))
    }

    #[inline(always)]
    fn blend(&self, dst: Argb, src: Argb) -> Argb {
        let sa = alpha(src);
        let da = if self.dest_opaque { 0xFF } else { alpha(dst) };
        let inv_sa = 0xFF - sa;
        let inv_da = 0xFF - da;
        let a = (sa + mul_div255(da, inv_sa)).min(0xFF);
        let channel = |s: u32, d: u32| {
            (mul_div255(s, d) + mul_div255(s, inv_da) + mul_div255(d, inv_sa)).min(a)
        };
        pack(
            if self.dest_opaque { 0xFF } else { a },
            channel(red(src), red(dst)),
            channel(green(src), green(dst)),
            channel(blue(src), blue(dst)),
        )
    }

    #[inline(always)]
    fn blend_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        self.blend(dst, mult_alpha(src, extra_alpha))
    }
}
