use crate::blend::BlendRule;
use crate::foundation::math::mul_div255;
use crate::pixel::argb::{Argb, OPAQUE_ALPHA_MASK, alpha, blue, green, pack, red};

/// Porter-Duff DST_IN, keeping the destination only where the source is covered.
///
/// ```text
/// Ar = Ad*As
/// Cr = Cd*As
/// ```
///
/// Extra alpha fades the effect rather than the source: `Ae = 0` leaves the destination
/// untouched, i.e. `Ar = Ad*(1 - Ae + As*Ae)`.
#[derive(Clone, Copy, Debug)]
pub struct DstIn {
    dest_opaque: bool,
}

impl DstIn {
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

impl BlendRule for DstIn {
    const NAME: &'static str = "dst_in";
    const BLEND_TRANSPARENT: bool = true;

    fn new(dest_opaque: bool) -> Self {
        Self { dest_opaque }
    }

    #[inline(always)]
    fn dest_opaque(&self) -> bool {
        self.dest_opaque
    }

    #[inline(always)]
    fn blend_opaque(&self, dst: Argb, _src: Argb) -> Argb {
        if self.dest_opaque {
            OPAQUE_ALPHA_MASK | dst
        } else {
            dst
        }
    }

    #[inline(always)]
    fn blend_opaque_alpha(&self, dst: Argb, src: Argb, _extra_alpha: u32) -> Argb {
        self.blend_opaque(dst, src)
    }

    #[inline(always)]
    fn blend(&self, dst: Argb, src: Argb) -> Argb {
        self.keep(dst, alpha(src))
    }

    #[inline(always)]
    fn blend_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        self.keep(dst, 0xFF - extra_alpha + mul_div255(alpha(src), extra_alpha))
    }
}
