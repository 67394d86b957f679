use serde::{Deserialize, Serialize};

use crate::blend::{Add, BlendMode, BlendRule, DstIn, DstOut, Multiply, Src, SrcOver};
use crate::foundation::error::{SpriteCompError, SpriteCompResult};
use crate::pixel::argb::{Argb, alpha};
use crate::raster::request::RenderRequest;
use crate::raster::span::{FillKernel, SourceKernel, WriterFlags, dispatch};
use crate::surface::desc::{Destination, Source};

/// Options for a [`Compositor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorOpts {
    /// Route zero-alpha source pixels through every blend rule instead of skipping them.
    ///
    /// Only rules for which such pixels can change the destination need this; for the others
    /// it changes speed, not output. Meant for debugging.
    pub blend_transparent_pixels: bool,
}

impl CompositorOpts {
    /// Return options with the transparent-pixel debug switch set.
    pub fn with_blend_transparent_pixels(mut self, on: bool) -> Self {
        self.blend_transparent_pixels = on;
        self
    }

    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> SpriteCompResult<Self> {
        serde_json::from_str(json).map_err(|e| SpriteCompError::serde(e.to_string()))
    }
}

/// Draws sources and solid colors into destinations.
///
/// Holds no per-call state; one value can serve any number of threads drawing into
/// disjoint destinations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor {
    opts: CompositorOpts,
}

impl Compositor {
    /// A compositor with the given options.
    pub fn new(opts: CompositorOpts) -> Self {
        Self { opts }
    }

    /// The options in use.
    pub fn opts(&self) -> &CompositorOpts {
        &self.opts
    }

    /// Draw `src` into `dst` as described by `req`, blending with `mode`.
    pub fn draw(
        &self,
        mode: BlendMode,
        src: &Source<'_>,
        req: &RenderRequest,
        dst: &mut Destination<'_>,
    ) -> SpriteCompResult<()> {
        // Perf contract: blend mode dispatch is chosen once per request (not per pixel).
        match mode {
            BlendMode::SrcOver => self.draw_with::<SrcOver>(src, req, dst),
            BlendMode::Src => self.draw_with::<Src>(src, req, dst),
            BlendMode::DstIn => self.draw_with::<DstIn>(src, req, dst),
            BlendMode::DstOut => self.draw_with::<DstOut>(src, req, dst),
            BlendMode::Add => self.draw_with::<Add>(src, req, dst),
            BlendMode::Multiply => self.draw_with::<Multiply>(src, req, dst),
        }
    }

    /// Draw with a statically chosen rule.
    ///
    /// Requests that cannot write anything return `Ok(())` without touching `dst`. A span
    /// that does not fit in `dst` is rejected before any pixel is written.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(rule = R::NAME, path = ?req.path(), pixels = req.num_pixels, rows = req.rendered_rows())
    )]
    pub fn draw_with<R: BlendRule>(
        &self,
        src: &Source<'_>,
        req: &RenderRequest,
        dst: &mut Destination<'_>,
    ) -> SpriteCompResult<()> {
        if req.is_noop() {
            return Ok(());
        }
        if let Err(err) = dst.check_span(
            req.dest_offset,
            req.num_pixels as usize,
            req.rendered_rows(),
        ) {
            tracing::debug!(%err, offset = req.dest_offset, "rejected draw request");
            return Err(err);
        }
        let flags = WriterFlags {
            dest_opaque: dst.is_opaque(),
            src_opaque: src.is_opaque(),
            extra_alpha: req.extra_alpha(),
            blend_transparent: self.opts.blend_transparent_pixels,
        };
        dispatch::<R, _>(SourceKernel { src, req, dst }, flags);
        Ok(())
    }

    /// Blend the premultiplied `color` across `num_rows` rows of `num_pixels` pixels starting
    /// at `offset`, scaled by `extra_alpha`.
    ///
    /// Follows the same no-op and validation rules as [`Compositor::draw`].
    #[allow(clippy::too_many_arguments)]
    #[tracing::instrument(level = "trace", skip(self, dst))]
    pub fn fill(
        &self,
        mode: BlendMode,
        color: Argb,
        extra_alpha: i32,
        dst: &mut Destination<'_>,
        offset: usize,
        num_pixels: i32,
        num_rows: i32,
    ) -> SpriteCompResult<()> {
        if extra_alpha <= 0 || num_pixels <= 0 || num_rows <= 0 {
            return Ok(());
        }
        let (num_pixels, num_rows) = (num_pixels as usize, num_rows as usize);
        if let Err(err) = dst.check_span(offset, num_pixels, num_rows) {
            tracing::debug!(%err, offset, "rejected fill request");
            return Err(err);
        }
        let flags = WriterFlags {
            dest_opaque: dst.is_opaque(),
            src_opaque: alpha(color) == 0xFF,
            extra_alpha: extra_alpha.min(0xFF) as u32,
            blend_transparent: self.opts.blend_transparent_pixels,
        };
        let kernel = FillKernel {
            color,
            dst,
            offset,
            num_pixels,
            num_rows,
        };
        match mode {
            BlendMode::SrcOver => dispatch::<SrcOver, _>(kernel, flags),
            BlendMode::Src => dispatch::<Src, _>(kernel, flags),
            BlendMode::DstIn => dispatch::<DstIn, _>(kernel, flags),
            BlendMode::DstOut => dispatch::<DstOut, _>(kernel, flags),
            BlendMode::Add => dispatch::<Add, _>(kernel, flags),
            BlendMode::Multiply => dispatch::<Multiply, _>(kernel, flags),
        }
        Ok(())
    }
}

/// Draw with default [`CompositorOpts`].
pub fn draw(
    mode: BlendMode,
    src: &Source<'_>,
    req: &RenderRequest,
    dst: &mut Destination<'_>,
) -> SpriteCompResult<()> {
    Compositor::default().draw(mode, src, req, dst)
}

#[cfg(test)]
#[path = "../tests/unit/compositor.rs"]
mod tests;
