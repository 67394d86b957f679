//! Per-pixel loops.
//!
//! Perf contract: writer and path dispatch happen once per request. Every loop below is
//! generic over a [`PixelWriter`] and a sampling closure, so the inner loops contain no
//! branches on the blend rule, source opacity or extra alpha.

use crate::blend::BlendRule;
use crate::foundation::math::{Fixed, to_int};
use crate::pixel::argb::{Argb, alpha};
use crate::raster::request::{RasterPath, RenderRequest};
use crate::sample::bilinear::{RowPair, TranslucentRows, sample_opaque, sample_translucent};
use crate::surface::desc::{Destination, Source};

/// Writes one sampled source pixel into one destination pixel.
pub(crate) trait PixelWriter: Copy {
    fn write(&self, dst: &mut Argb, src: Argb);
}

/// Opaque source, full extra alpha.
#[derive(Clone, Copy)]
struct OpaqueWriter<R> {
    rule: R,
}

impl<R: BlendRule> PixelWriter for OpaqueWriter<R> {
    #[inline(always)]
    fn write(&self, dst: &mut Argb, src: Argb) {
        *dst = self.rule.blend_opaque(*dst, src);
    }
}

/// Opaque source scaled by extra alpha.
#[derive(Clone, Copy)]
struct OpaqueAlphaWriter<R> {
    rule: R,
    extra_alpha: u32,
}

impl<R: BlendRule> PixelWriter for OpaqueAlphaWriter<R> {
    #[inline(always)]
    fn write(&self, dst: &mut Argb, src: Argb) {
        *dst = self.rule.blend_opaque_alpha(*dst, src, self.extra_alpha);
    }
}

/// Translucent source, full extra alpha.
#[derive(Clone, Copy)]
struct TranslucentWriter<R> {
    rule: R,
    blend_transparent: bool,
}

impl<R: BlendRule> PixelWriter for TranslucentWriter<R> {
    #[inline(always)]
    fn write(&self, dst: &mut Argb, src: Argb) {
        match alpha(src) {
            0xFF => *dst = self.rule.blend_opaque(*dst, src),
            0 if !self.blend_transparent => {}
            _ => *dst = self.rule.blend(*dst, src),
        }
    }
}

/// Translucent source scaled by extra alpha.
#[derive(Clone, Copy)]
struct TranslucentAlphaWriter<R> {
    rule: R,
    extra_alpha: u32,
    blend_transparent: bool,
}

impl<R: BlendRule> PixelWriter for TranslucentAlphaWriter<R> {
    #[inline(always)]
    fn write(&self, dst: &mut Argb, src: Argb) {
        match alpha(src) {
            0xFF => *dst = self.rule.blend_opaque_alpha(*dst, src, self.extra_alpha),
            0 if !self.blend_transparent => {}
            _ => *dst = self.rule.blend_alpha(*dst, src, self.extra_alpha),
        }
    }
}

/// A loop that can run with any writer.
pub(crate) trait SpanKernel {
    fn run<W: PixelWriter>(self, writer: W);
}

/// Everything writer selection depends on, fixed for the whole request.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WriterFlags {
    pub(crate) dest_opaque: bool,
    pub(crate) src_opaque: bool,
    /// `1..=255`.
    pub(crate) extra_alpha: u32,
    pub(crate) blend_transparent: bool,
}

/// Pick the writer for `flags` and run `kernel` with it.
pub(crate) fn dispatch<R: BlendRule, K: SpanKernel>(kernel: K, flags: WriterFlags) {
    let WriterFlags {
        dest_opaque,
        src_opaque,
        extra_alpha,
        blend_transparent,
    } = flags;
    debug_assert!((1..=0xFF).contains(&extra_alpha));
    let rule = R::new(dest_opaque);
    let blend_transparent = R::BLEND_TRANSPARENT || blend_transparent;
    match (src_opaque, extra_alpha == 0xFF) {
        (true, true) => kernel.run(OpaqueWriter { rule }),
        (true, false) => kernel.run(OpaqueAlphaWriter { rule, extra_alpha }),
        (false, true) => kernel.run(TranslucentWriter {
            rule,
            blend_transparent,
        }),
        (false, false) => kernel.run(TranslucentAlphaWriter {
            rule,
            extra_alpha,
            blend_transparent,
        }),
    }
}

/// Renders a [`RenderRequest`] whose destination span has already been validated.
pub(crate) struct SourceKernel<'s, 'a, 'd, 'b> {
    pub(crate) src: &'s Source<'a>,
    pub(crate) req: &'s RenderRequest,
    pub(crate) dst: &'d mut Destination<'b>,
}

impl SpanKernel for SourceKernel<'_, '_, '_, '_> {
    fn run<W: PixelWriter>(self, w: W) {
        let Self { src, req, dst } = self;
        let opaque = src.is_opaque();
        match req.path() {
            RasterPath::RotatedBilinear if opaque => rotated(req, dst, w, |u, v| {
                sample_opaque(src, RowPair::opaque(src, v), u, v)
            }),
            RasterPath::RotatedBilinear => rotated(req, dst, w, |u, v| {
                sample_translucent(src, TranslucentRows::new(src, v), u, v)
            }),
            RasterPath::RotatedNearest => rotated(req, dst, w, |u, v| {
                let (x, y) = clamp_texel(src, u, v);
                src.pixel(src.row_offset(y), x)
            }),
            RasterPath::AxisBilinear if opaque => {
                axis_bilinear(req, dst, w, |v| RowPair::opaque(src, v), |rows, u, v| {
                    sample_opaque(src, rows, u, v)
                })
            }
            RasterPath::AxisBilinear => axis_bilinear(
                req,
                dst,
                w,
                |v| TranslucentRows::new(src, v),
                |rows, u, v| sample_translucent(src, rows, u, v),
            ),
            RasterPath::AxisNearest => axis_nearest(src, req, dst, w),
            RasterPath::AxisNearestUnscaled => axis_nearest_unscaled(src, req, dst, w),
        }
    }
}

/// Blends one solid color across a validated span.
pub(crate) struct FillKernel<'d, 'b> {
    pub(crate) color: Argb,
    pub(crate) dst: &'d mut Destination<'b>,
    pub(crate) offset: usize,
    pub(crate) num_pixels: usize,
    pub(crate) num_rows: usize,
}

impl SpanKernel for FillKernel<'_, '_> {
    fn run<W: PixelWriter>(self, w: W) {
        for r in 0..self.num_rows {
            for px in self.dst.span_row_mut(self.offset, r, self.num_pixels) {
                w.write(px, self.color);
            }
        }
    }
}

#[inline(always)]
fn clamp_texel(src: &Source<'_>, u: Fixed, v: Fixed) -> (i32, i32) {
    (
        to_int(u).clamp(0, src.width() - 1),
        to_int(v).clamp(0, src.height() - 1),
    )
}

fn rotated<W, S>(req: &RenderRequest, dst: &mut Destination<'_>, w: W, sample: S)
where
    W: PixelWriter,
    S: Fn(Fixed, Fixed) -> Argb,
{
    // Coordinates saturate at the i32 bounds instead of wrapping around the source.
    let (mut u, mut v) = (req.u, req.v);
    for px in dst.span_row_mut(req.dest_offset, 0, req.num_pixels as usize) {
        w.write(px, sample(u, v));
        u = u.saturating_add(req.du);
        v = v.saturating_add(req.dv);
    }
}

fn axis_bilinear<W, P, RF, S>(
    req: &RenderRequest,
    dst: &mut Destination<'_>,
    w: W,
    rows_at: RF,
    sample: S,
) where
    W: PixelWriter,
    P: Copy,
    RF: Fn(Fixed) -> P,
    S: Fn(P, Fixed, Fixed) -> Argb,
{
    let n = req.num_pixels as usize;
    let mut v = req.v;
    for r in 0..req.rendered_rows() {
        let rows = rows_at(v);
        let mut u = req.u;
        for px in dst.span_row_mut(req.dest_offset, r, n) {
            w.write(px, sample(rows, u, v));
            u = u.saturating_add(req.du);
        }
        v = v.saturating_add(req.dv);
    }
}

fn axis_nearest<W: PixelWriter>(
    src: &Source<'_>,
    req: &RenderRequest,
    dst: &mut Destination<'_>,
    w: W,
) {
    let n = req.num_pixels as usize;
    let last = src.width() - 1;
    let mut v = req.v;
    for r in 0..req.rendered_rows() {
        let y = to_int(v).clamp(0, src.height() - 1);
        let texels = src.row(src.row_offset(y));
        let mut u = req.u;
        for px in dst.span_row_mut(req.dest_offset, r, n) {
            let x = to_int(u).clamp(0, last);
            w.write(px, texels[x as usize]);
            u = u.saturating_add(req.du);
        }
        v = v.saturating_add(req.dv);
    }
}

/// One texel per pixel: clamped head, a straight zip over the in-image texels, clamped tail.
fn axis_nearest_unscaled<W: PixelWriter>(
    src: &Source<'_>,
    req: &RenderRequest,
    dst: &mut Destination<'_>,
    w: W,
) {
    let n = req.num_pixels as usize;
    let x0 = to_int(req.u);
    let mut v = req.v;
    for r in 0..req.rendered_rows() {
        let y = to_int(v).clamp(0, src.height() - 1);
        v = v.saturating_add(req.dv);
        let texels = src.row(src.row_offset(y));
        let (first, last) = (texels[0], texels[texels.len() - 1]);
        let out = dst.span_row_mut(req.dest_offset, r, n);

        let head = if x0 < 0 {
            (x0.unsigned_abs() as usize).min(n)
        } else {
            0
        };
        let (head_px, rest) = out.split_at_mut(head);
        for px in head_px {
            w.write(px, first);
        }

        let inside = texels.get(x0.max(0) as usize..).unwrap_or(&[]);
        let body = inside.len().min(rest.len());
        let (body_px, tail_px) = rest.split_at_mut(body);
        for (px, &texel) in body_px.iter_mut().zip(inside) {
            w.write(px, texel);
        }
        for px in tail_px {
            w.write(px, last);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/span.rs"]
mod tests;
