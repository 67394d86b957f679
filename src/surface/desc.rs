use serde::{Deserialize, Serialize};

use crate::foundation::error::{SpriteCompError, SpriteCompResult};
use crate::foundation::math::MAX_DIMENSION;
use crate::pixel::argb::Argb;

/// Edges of a translucent source that fold their outermost texel into the bilinear filter
/// instead of fading to transparent.
///
/// Only the band one texel wide outside each edge is affected; further out the source is
/// transparent either way. Opaque sources always clamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeClamp {
    /// Fold row 0 into the band above the image.
    pub top: bool,
    /// Fold the last row into the band below the image.
    pub bottom: bool,
    /// Fold column 0 into the band left of the image.
    pub left: bool,
    /// Fold the last column into the band right of the image.
    pub right: bool,
}

impl EdgeClamp {
    /// Every edge fades.
    pub const NONE: Self = Self {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };
    /// Top and bottom fold, left and right fade.
    pub const ROWS: Self = Self {
        top: true,
        bottom: true,
        left: false,
        right: false,
    };
    /// Every edge folds.
    pub const ALL: Self = Self {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };
}

impl Default for EdgeClamp {
    fn default() -> Self {
        Self::ROWS
    }
}

/// Read-only view of the source image region being drawn.
///
/// The region is `width x height` pixels starting at `(x, y)` inside a larger buffer with
/// `scan` pixels per row, so one frame of a sprite sheet can be drawn without copying.
#[derive(Clone, Copy, Debug)]
pub struct Source<'a> {
    data: &'a [Argb],
    scan: usize,
    x: usize,
    y: usize,
    width: i32,
    height: i32,
    opaque: bool,
    edge_clamp: EdgeClamp,
}

impl<'a> Source<'a> {
    /// A source covering a whole tightly-packed image.
    pub fn new(data: &'a [Argb], width: u32, height: u32, opaque: bool) -> SpriteCompResult<Self> {
        Self::with_region(data, width as usize, 0, 0, width, height, opaque)
    }

    /// A source covering the `width x height` region at `(x, y)` of a buffer with `scan`
    /// pixels per row.
    pub fn with_region(
        data: &'a [Argb],
        scan: usize,
        x: usize,
        y: usize,
        width: u32,
        height: u32,
        opaque: bool,
    ) -> SpriteCompResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpriteCompError::validation("source region must not be empty"));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(SpriteCompError::validation(format!(
                "source region {width}x{height} exceeds the 16.16 limit of {MAX_DIMENSION}"
            )));
        }
        let row_end = x
            .checked_add(width as usize)
            .ok_or_else(|| SpriteCompError::validation("source region overflow"))?;
        if row_end > scan {
            return Err(SpriteCompError::validation(
                "source region extends past the scan stride",
            ));
        }
        let required = y
            .checked_add(height as usize - 1)
            .and_then(|v| v.checked_mul(scan))
            .and_then(|v| v.checked_add(row_end))
            .ok_or_else(|| SpriteCompError::validation("source region overflow"))?;
        if data.len() < required {
            return Err(SpriteCompError::validation(format!(
                "source buffer holds {} pixels, region needs {required}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            scan,
            x,
            y,
            width: width as i32,
            height: height as i32,
            opaque,
            edge_clamp: EdgeClamp::default(),
        })
    }

    /// Return the source with the given translucent edge policy.
    pub fn with_edge_clamp(mut self, edge_clamp: EdgeClamp) -> Self {
        self.edge_clamp = edge_clamp;
        self
    }

    /// Translucent edge policy, [`EdgeClamp::ROWS`] unless set.
    pub fn edge_clamp(&self) -> EdgeClamp {
        self.edge_clamp
    }

    /// Region width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Region height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `true` when every pixel's alpha is `0xFF` and may be ignored.
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Buffer offset of region row `row`. `row` must already be clamped to the region.
    #[inline(always)]
    pub(crate) fn row_offset(&self, row: i32) -> usize {
        debug_assert!((0..self.height).contains(&row), "source row {row} out of range");
        (self.y + row as usize) * self.scan + self.x
    }

    /// Pixel at column `col` of the row starting at `row_offset`.
    #[inline(always)]
    pub(crate) fn pixel(&self, row_offset: usize, col: i32) -> Argb {
        debug_assert!((0..self.width).contains(&col), "source column {col} out of range");
        let idx = row_offset + col as usize;
        debug_assert!(idx < self.data.len());
        self.data[idx]
    }

    /// The in-region pixels of the row starting at `row_offset`.
    #[inline(always)]
    pub(crate) fn row(&self, row_offset: usize) -> &'a [Argb] {
        &self.data[row_offset..row_offset + self.width as usize]
    }
}

/// Mutable view of the destination framebuffer.
#[derive(Debug)]
pub struct Destination<'a> {
    data: &'a mut [Argb],
    scan: usize,
    opaque: bool,
}

impl<'a> Destination<'a> {
    /// Wrap `data` with `scan` pixels per row.
    ///
    /// An opaque destination has no usable alpha channel: every written pixel gets alpha `0xFF`.
    pub fn new(data: &'a mut [Argb], scan: usize, opaque: bool) -> SpriteCompResult<Self> {
        if scan == 0 {
            return Err(SpriteCompError::validation(
                "destination scan stride must be > 0",
            ));
        }
        Ok(Self { data, scan, opaque })
    }

    /// Pixels per row.
    pub fn scan(&self) -> usize {
        self.scan
    }

    /// `true` when the destination has no alpha channel.
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Read-only access to the underlying pixels.
    pub fn pixels(&self) -> &[Argb] {
        &*self.data
    }

    /// Check that `num_rows` rows of `num_pixels` starting at `offset` fit in the buffer.
    pub(crate) fn check_span(
        &self,
        offset: usize,
        num_pixels: usize,
        num_rows: usize,
    ) -> SpriteCompResult<()> {
        debug_assert!(num_rows >= 1);
        let end = (num_rows - 1)
            .checked_mul(self.scan)
            .and_then(|v| v.checked_add(offset))
            .and_then(|v| v.checked_add(num_pixels))
            .ok_or_else(|| SpriteCompError::validation("destination span overflow"))?;
        if num_rows > 1 && num_pixels > self.scan {
            return Err(SpriteCompError::validation(
                "multi-row destination span is wider than the scan stride",
            ));
        }
        if end > self.data.len() {
            return Err(SpriteCompError::validation(format!(
                "destination span ends at {end}, buffer holds {} pixels",
                self.data.len()
            )));
        }
        Ok(())
    }

    /// `num_pixels` destination pixels of row `row` of a span starting at `offset`.
    #[inline(always)]
    pub(crate) fn span_row_mut(
        &mut self,
        offset: usize,
        row: usize,
        num_pixels: usize,
    ) -> &mut [Argb] {
        let start = offset + row * self.scan;
        &mut self.data[start..start + num_pixels]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/desc.rs"]
mod tests;
