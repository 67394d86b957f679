use serde::{Deserialize, Serialize};

use crate::foundation::math::{FIXED_ONE, Fixed};

/// One draw request: where to sample the source and where to write in the destination.
///
/// Texture coordinates are 16.16 fixed point in source-region pixels. Pixel `i` of row `r`
/// samples `(u + i*du, v + i*dv)` for rotated requests and `(u + i*du, v + r*dv)` for
/// axis-aligned ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    /// Starting horizontal texture coordinate.
    pub u: Fixed,
    /// Starting vertical texture coordinate.
    pub v: Fixed,
    /// Horizontal texture step per destination pixel.
    pub du: Fixed,
    /// Vertical texture step: per pixel when rotated, per row otherwise.
    pub dv: Fixed,
    /// `true` when `(u, v)` walks diagonally across the texture.
    pub rotation: bool,
    /// Bilinear filtering instead of nearest-neighbor.
    pub bilinear: bool,
    /// Extra opacity, `0..=255`. Values `<= 0` make the request a no-op; values above 255
    /// saturate.
    pub alpha: i32,
    /// Index of the first destination pixel.
    pub dest_offset: usize,
    /// Pixels per row.
    pub num_pixels: i32,
    /// Rows to render. Rotated requests always render a single row.
    pub num_rows: i32,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            u: 0,
            v: 0,
            du: FIXED_ONE,
            dv: FIXED_ONE,
            rotation: false,
            bilinear: false,
            alpha: 255,
            dest_offset: 0,
            num_pixels: 0,
            num_rows: 1,
        }
    }
}

/// The per-pixel loop a request is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RasterPath {
    /// Diagonal walk, four-texel filter.
    RotatedBilinear,
    /// Diagonal walk, nearest texel.
    RotatedNearest,
    /// Horizontal walk, four-texel filter.
    AxisBilinear,
    /// Horizontal walk, nearest texel, arbitrary scale.
    AxisNearest,
    /// Horizontal walk at one texel per pixel: a straight row copy through the blend rule.
    AxisNearestUnscaled,
}

impl RenderRequest {
    /// An unscaled, fully opaque, single-row request of `num_pixels` pixels at `dest_offset`.
    pub fn new(dest_offset: usize, num_pixels: i32) -> Self {
        Self {
            dest_offset,
            num_pixels,
            ..Self::default()
        }
    }

    /// Set the starting texture coordinate.
    pub fn with_origin(mut self, u: Fixed, v: Fixed) -> Self {
        self.u = u;
        self.v = v;
        self
    }

    /// Set the texture steps.
    pub fn with_step(mut self, du: Fixed, dv: Fixed) -> Self {
        self.du = du;
        self.dv = dv;
        self
    }

    /// Walk the texture diagonally.
    pub fn with_rotation(mut self, rotation: bool) -> Self {
        self.rotation = rotation;
        self
    }

    /// Use bilinear filtering.
    pub fn with_bilinear(mut self, bilinear: bool) -> Self {
        self.bilinear = bilinear;
        self
    }

    /// Set the extra opacity.
    pub fn with_alpha(mut self, alpha: i32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the number of destination rows.
    pub fn with_rows(mut self, num_rows: i32) -> Self {
        self.num_rows = num_rows;
        self
    }

    /// `true` when the request cannot write any pixel.
    pub fn is_noop(&self) -> bool {
        self.alpha <= 0 || self.num_pixels <= 0 || self.num_rows <= 0
    }

    /// Rows actually rendered: one for rotated requests, `num_rows` otherwise.
    pub fn rendered_rows(&self) -> usize {
        if self.rotation {
            1
        } else {
            self.num_rows.max(0) as usize
        }
    }

    /// Extra opacity clamped to `0..=255`.
    pub(crate) fn extra_alpha(&self) -> u32 {
        self.alpha.clamp(0, 0xFF) as u32
    }

    /// The loop this request is rendered with.
    pub fn path(&self) -> RasterPath {
        match (self.rotation, self.bilinear) {
            (true, true) => RasterPath::RotatedBilinear,
            (true, false) => RasterPath::RotatedNearest,
            (false, true) => RasterPath::AxisBilinear,
            (false, false) if self.du == FIXED_ONE => RasterPath::AxisNearestUnscaled,
            (false, false) => RasterPath::AxisNearest,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/request.rs"]
mod tests;
