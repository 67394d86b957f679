//! Bilinear sampling over premultiplied ARGB images.
//!
//! Sub-texel positions use the upper 8 bits of the 16.16 fraction. The four weights always
//! sum to 255 and channel sums are reduced with [`div255`], so a uniform quad reproduces its
//! input exactly even without the uniform-region shortcut.

use crate::foundation::math::{Fixed, div255, frac, frac8, to_int};
use crate::pixel::argb::{Argb, OPAQUE_ALPHA_MASK, alpha, blue, green, pack, red};
use crate::surface::desc::Source;

/// Integer weights of the four neighbors of a sub-texel position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BilinearWeights {
    /// Weight of the top-left neighbor.
    pub top_left: u32,
    /// Weight of the top-right neighbor.
    pub top_right: u32,
    /// Weight of the bottom-left neighbor.
    pub bottom_left: u32,
    /// Weight of the bottom-right neighbor.
    pub bottom_right: u32,
}

impl BilinearWeights {
    /// Weights for fractional offsets `frac_x`, `frac_y` in `0..=255`.
    #[inline(always)]
    pub fn new(frac_x: u8, frac_y: u8) -> Self {
        let fx = u32::from(frac_x);
        let fy = u32::from(frac_y);
        let m = (fx * fy + 0xFF) >> 8;
        Self {
            // m >= fx + fy - 255, so adding it first keeps the subtraction non-negative.
            top_left: 0xFF + m - fx - fy,
            top_right: fx - m,
            bottom_left: fy - m,
            bottom_right: m,
        }
    }

    /// Sum of the four weights (255 for weights produced by [`BilinearWeights::new`]).
    pub fn total(&self) -> u32 {
        self.top_left + self.top_right + self.bottom_left + self.bottom_right
    }

    #[inline(always)]
    fn as_array(&self) -> [u32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }
}

/// Four neighbor pixels in `[top_left, top_right, bottom_left, bottom_right]` order.
pub type Quad = [Argb; 4];

#[inline(always)]
fn fast_exit(q: &Quad, frac_x: u8, frac_y: u8) -> Option<Argb> {
    if frac_x == 0 && frac_y == 0 {
        return Some(q[0]);
    }
    if q[0] == q[1] && q[0] == q[2] && q[0] == q[3] {
        return Some(q[0]);
    }
    None
}

#[inline(always)]
fn weighted(q: &Quad, w: &[u32; 4], channel: fn(Argb) -> u32) -> u32 {
    div255(
        w[0] * channel(q[0]) + w[1] * channel(q[1]) + w[2] * channel(q[2]) + w[3] * channel(q[3]),
    )
}

/// Blend an opaque quad.
///
/// The weighted result is forced fully opaque. The fast exits (zero fraction, four identical
/// pixels) return the top-left pixel bit-for-bit, alpha included.
#[inline(always)]
pub fn blend_quad_opaque(q: Quad, frac_x: u8, frac_y: u8) -> Argb {
    if let Some(p) = fast_exit(&q, frac_x, frac_y) {
        return p;
    }
    let w = BilinearWeights::new(frac_x, frac_y).as_array();
    OPAQUE_ALPHA_MASK
        | pack(
            0,
            weighted(&q, &w, red),
            weighted(&q, &w, green),
            weighted(&q, &w, blue),
        )
}

/// Blend a premultiplied quad.
///
/// A zero-alpha neighbor already carries zero color, so it contributes only transparency and
/// no weight redistribution is needed.
#[inline(always)]
pub fn blend_quad_premultiplied(q: Quad, frac_x: u8, frac_y: u8) -> Argb {
    if let Some(p) = fast_exit(&q, frac_x, frac_y) {
        return p;
    }
    let w = BilinearWeights::new(frac_x, frac_y).as_array();
    pack(
        weighted(&q, &w, alpha),
        weighted(&q, &w, red),
        weighted(&q, &w, green),
        weighted(&q, &w, blue),
    )
}

/// Blend a straight-alpha (non-premultiplied) quad.
///
/// The color of a zero-alpha neighbor is meaningless, so its weight is split evenly among the
/// neighbors with non-zero alpha before the color channels are summed. Alpha keeps the
/// original weights.
pub fn blend_quad_straight(q: Quad, frac_x: u8, frac_y: u8) -> Argb {
    if let Some(p) = fast_exit(&q, frac_x, frac_y) {
        return p;
    }
    let w = BilinearWeights::new(frac_x, frac_y).as_array();
    let a = weighted(&q, &w, alpha);

    let mut cw = w;
    let mut freed = 0;
    let mut zero_count = 0;
    for (i, p) in q.iter().enumerate() {
        if alpha(*p) == 0 {
            freed += cw[i];
            cw[i] = 0;
            zero_count += 1;
        }
    }
    if zero_count == 4 {
        return 0;
    }
    if zero_count > 0 {
        let share = freed / (4 - zero_count);
        for (i, p) in q.iter().enumerate() {
            if alpha(*p) != 0 {
                cw[i] += share;
            }
        }
    }

    pack(
        a,
        weighted(&q, &cw, red),
        weighted(&q, &cw, green),
        weighted(&q, &cw, blue),
    )
}

/// Buffer offsets of the two source rows straddling a vertical texture position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowPair {
    pub(crate) top: usize,
    pub(crate) bottom: usize,
}

impl RowPair {
    /// Rows for an opaque source: positions clamp to the first/last row.
    #[inline(always)]
    pub(crate) fn opaque(src: &Source<'_>, v: Fixed) -> Self {
        let h = src.height();
        let y = to_int(v);
        let (top, bottom) = if y >= h - 1 {
            (h - 1, h - 1)
        } else if y < 0 {
            (0, 0)
        } else if frac(v) == 0 {
            (y, y)
        } else {
            (y, y + 1)
        };
        Self {
            top: src.row_offset(top),
            bottom: src.row_offset(bottom),
        }
    }
}

/// Buffer offsets of the two source rows straddling a vertical position in a translucent
/// source. A missing row reads as transparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TranslucentRows {
    pub(crate) top: Option<usize>,
    pub(crate) bottom: Option<usize>,
}

impl TranslucentRows {
    /// Resolve the rows at `v`.
    ///
    /// When exactly one row lies outside the image, a clamped edge uses the valid row for
    /// both; an unclamped edge leaves it transparent so the sprite fades out.
    #[inline(always)]
    pub(crate) fn new(src: &Source<'_>, v: Fixed) -> Self {
        let h = src.height();
        let edges = src.edge_clamp();
        let y = to_int(v);
        let row = |r: i32| Some(src.row_offset(r));
        let (top, bottom) = if y >= 0 && y < h - 1 {
            (row(y), row(y + 1))
        } else if y == h - 1 {
            (row(y), if edges.bottom { row(y) } else { None })
        } else if y == -1 {
            (if edges.top { row(0) } else { None }, row(0))
        } else {
            (None, None)
        };
        Self { top, bottom }
    }

    /// Both rows lie outside the image.
    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none()
    }
}

/// Sample an opaque source at `(u, v)`. Columns clamp to the image edge.
#[inline(always)]
pub(crate) fn sample_opaque(src: &Source<'_>, rows: RowPair, u: Fixed, v: Fixed) -> Argb {
    let w = src.width();
    let x = to_int(u);
    let (left, right) = if x >= w - 1 {
        (w - 1, w - 1)
    } else if x < 0 {
        (0, 0)
    } else if frac(u) == 0 {
        (x, x)
    } else {
        (x, x + 1)
    };

    let fx = frac8(u);
    let fy = frac8(v);
    if fx == 0 && fy == 0 {
        return src.pixel(rows.top, left);
    }
    blend_quad_opaque(
        [
            src.pixel(rows.top, left),
            src.pixel(rows.top, right),
            src.pixel(rows.bottom, left),
            src.pixel(rows.bottom, right),
        ],
        fx,
        fy,
    )
}

/// Sample a translucent, premultiplied source at `(u, v)`.
///
/// Texels outside the image read as transparent, except that a clamped left or right edge
/// folds the outermost column in the same way [`TranslucentRows`] folds rows.
#[inline(always)]
pub(crate) fn sample_translucent(
    src: &Source<'_>,
    rows: TranslucentRows,
    u: Fixed,
    v: Fixed,
) -> Argb {
    if rows.is_empty() {
        return 0;
    }
    let w = src.width();
    let x = to_int(u);

    let fx = frac8(u);
    let fy = frac8(v);
    if fx == 0 && fy == 0 {
        return match rows.top {
            Some(top) if (0..w).contains(&x) => src.pixel(top, x),
            _ => 0,
        };
    }

    let edges = src.edge_clamp();
    let left = if (0..w).contains(&x) {
        Some(x)
    } else if x == -1 && edges.left {
        Some(0)
    } else {
        None
    };
    let right = if (-1..w - 1).contains(&x) {
        Some(x + 1)
    } else if x == w - 1 && edges.right {
        Some(w - 1)
    } else {
        None
    };
    let fetch = |row: Option<usize>, col: Option<i32>| match (row, col) {
        (Some(row), Some(col)) => src.pixel(row, col),
        _ => 0,
    };
    blend_quad_premultiplied(
        [
            fetch(rows.top, left),
            fetch(rows.top, right),
            fetch(rows.bottom, left),
            fetch(rows.bottom, right),
        ],
        fx,
        fy,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/sample/bilinear.rs"]
mod tests;
