use crate::blend::BlendRule;
use crate::pixel::argb::{Argb, OPAQUE_ALPHA_MASK, alpha, blue, green, mult_alpha, pack, red};

/// Additive blending, `glBlendFunc(GL_ONE, GL_ONE)`.
///
/// ```text
/// Ar = min(1, As*Ae + Ad)
/// Cr = min(1, Cs*Ae + Cd)
/// ```
///
/// Overflow saturates silently.
#[derive(Clone, Copy, Debug)]
pub struct Add {
    dest_opaque: bool,
}

impl BlendRule for Add {
    const NAME: &'static str = "add";

    fn new(dest_opaque: bool) -> Self {
        Self { dest_opaque }
    }

    #[inline(always)]
    fn dest_opaque(&self) -> bool {
        self.dest_opaque
    }

    #[inline(always)]
    fn blend_opaque(&self, dst: Argb, src: Argb) -> Argb {
        // As = 1 saturates alpha whatever the destination holds.
        self.blend(dst, OPAQUE_ALPHA_MASK | src)
    }

    #[inline(always)]
    fn blend_opaque_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        self.blend(dst, mult_alpha(OPAQUE_ALPHA_MASK | src, extra_alpha))
    }

    #[inline(always)]
    fn blend(&self, dst: Argb, src: Argb) -> Argb {
        let r = (red(dst) + red(src)).min(0xFF);
        let g = (green(dst) + green(src)).min(0xFF);
        let b = (blue(dst) + blue(src)).min(0xFF);
        let a = if self.dest_opaque {
            0xFF
        } else {
            (alpha(dst) + alpha(src)).min(0xFF)
        };
        pack(a, r, g, b)
    }

    #[inline(always)]
    fn blend_alpha(&self, dst: Argb, src: Argb, extra_alpha: u32) -> Argb {
        let extra_alpha = extra_alpha.min(0xFF);
        self.blend(dst, mult_alpha(src, extra_alpha))
    }
}
