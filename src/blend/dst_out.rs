use crate::blend::BlendRule;
use crate::foundation::math::mul_div255;
use crate::pixel::argb::{Argb, alpha, blue, green, pack, red};

/// Porter-Duff DST_OUT, erasing the destination where the source is covered.
///
/// ```text
/// Ar = Ad*(1-As*Ae)
/// Cr = Cd*(1-As*Ae)
/// ```
///
/// Source color never reaches the destination; only source coverage matters.
#[derive(Clone, Copy, Debug)]
pub struct DstOut {
    dest_opaque: bool,
}

impl DstOut {
    /// Scale the destination by `keep` (`0xFF - effective source alpha`).
    #[inline(always)]
    fn keep(&self, dst: Argb, keep: u32) -> Argb {
        let a = if self.dest_opaque {
            0xFF
        } else {
            mul_div255(alpha(dst), keep)
        };
        pack(
            a,
            mul_div255(red(dst), keep),
            mul_div255(green(dst), keep),
            mul_div255(blue(dst), keep),
        )
    }
}

impl BlendRule for DstOut {
    const NAME: &'static str = "dst_out";

    fn new(dest_opaque: bool) -> Self {
        Self { dest_opaque }
    }

    #[inline(always)]
    fn dest_opaque(&self) -> bool {
        self.dest_opaque
    }

    #[inline(always)]
    fn blend_opaque(&self, _dst: Argb, _src: Argb) -> Argb {
        if self.dest_opaque { 0xFF00_0000 } else { 0 }
    }

    #[inline(always)]
    fn blend_opaque_alpha(&self, dst: Argb, _src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        self.keep(dst, 0xFF - extra_alpha)
    }

    #[inline(always)]
    fn blend(&self, dst: Argb, src: Argb) -> Argb {
        self.keep(dst, 0xFF - alpha(src))
    }

    #[inline(always)]
    fn blend_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        self.keep(dst, 0xFF - mul_div255(alpha(src), extra_alpha))
    }
}
