use super::*;
use crate::foundation::math::{FIXED_ONE, from_int};
use crate::surface::desc::EdgeClamp;

const HALF: Fixed = FIXED_ONE / 2;

#[test]
fn weights_sum_to_255_and_stay_non_negative() {
    for fx in 0..=255u8 {
        for fy in 0..=255u8 {
            let w = BilinearWeights::new(fx, fy);
            assert_eq!(w.total(), 255, "fx = {fx}, fy = {fy}");
        }
    }
}

#[test]
fn weights_at_corners() {
    assert_eq!(
        BilinearWeights::new(0, 0),
        BilinearWeights {
            top_left: 255,
            top_right: 0,
            bottom_left: 0,
            bottom_right: 0
        }
    );
    assert_eq!(BilinearWeights::new(255, 255).bottom_right, 255);
    assert_eq!(BilinearWeights::new(255, 0).top_right, 255);
}

#[test]
fn zero_fraction_returns_top_left_bit_for_bit() {
    let q = [0x7F_10_20_30, 0xFF_FF_FF_FF, 0, 0x01_01_01_01];
    assert_eq!(blend_quad_opaque(q, 0, 0), q[0]);
    assert_eq!(blend_quad_premultiplied(q, 0, 0), q[0]);
    assert_eq!(blend_quad_straight(q, 0, 0), q[0]);
}

#[test]
fn uniform_quad_is_returned_unchanged() {
    let p = 0x80_40_20_10;
    for (fx, fy) in [(1, 1), (128, 7), (255, 255), (3, 250)] {
        assert_eq!(blend_quad_opaque([p; 4], fx, fy), p);
        assert_eq!(blend_quad_premultiplied([p; 4], fx, fy), p);
        assert_eq!(blend_quad_straight([p; 4], fx, fy), p);
    }
}

#[test]
fn half_way_between_black_and_white() {
    let q = [0xFF_00_00_00, 0xFF_FF_FF_FF, 0xFF_00_00_00, 0xFF_FF_FF_FF];
    assert_eq!(blend_quad_opaque(q, 128, 0), 0xFF_80_80_80);
    assert_eq!(blend_quad_premultiplied(q, 128, 0), 0xFF_80_80_80);
}

#[test]
fn opaque_blend_keeps_alpha_on_fast_exits() {
    let p = 0x7F_10_20_30;
    assert_eq!(blend_quad_opaque([p; 4], 64, 64), p);
    let q = [p, 0xFF_FF_FF_FF, 0xFF_00_00_00, 0xFF_80_80_80];
    assert_eq!(blend_quad_opaque(q, 0, 0), p);
}

#[test]
fn weights_with_both_fractions_past_half() {
    assert_eq!(
        BilinearWeights::new(192, 192),
        BilinearWeights {
            top_left: 15,
            top_right: 48,
            bottom_left: 48,
            bottom_right: 144
        }
    );
    assert_eq!(BilinearWeights::new(200, 255).top_left, 0);
}

#[test]
fn opaque_blend_forces_alpha() {
    let q = [0x00_00_00_00, 0x00_FF_FF_FF, 0x00_00_00_00, 0x00_FF_FF_FF];
    assert_eq!(alpha(blend_quad_opaque(q, 64, 64)), 0xFF);
}

#[test]
fn premultiplied_blend_lets_transparent_neighbors_darken_alpha_only() {
    let q = [0, 0xFF_FF_00_00, 0, 0xFF_FF_00_00];
    assert_eq!(blend_quad_premultiplied(q, 128, 0), 0x80_80_00_00);
}

#[test]
fn straight_blend_redistributes_transparent_weight() {
    let q = [0, 0xFF_FF_00_00, 0, 0xFF_FF_00_00];
    // Alpha keeps the plain weights; color only sees the opaque neighbors.
    assert_eq!(blend_quad_straight(q, 128, 0), 0x80_FE_00_00);
}

#[test]
fn straight_blend_of_all_transparent_is_transparent() {
    let q = [0x00_11_22_33, 0x00_44_55_66, 0x00_77_88_99, 0x00_AA_BB_CC];
    assert_eq!(blend_quad_straight(q, 10, 10), 0);
}

#[test]
fn premultiplied_blend_preserves_invariant() {
    let q = [0x80_80_00_00, 0xFF_00_FF_00, 0x10_10_10_10, 0];
    for f in [1u8, 60, 128, 200, 255] {
        let p = blend_quad_premultiplied(q, f, 255 - f);
        assert!(crate::pixel::argb::is_premultiplied(p), "{p:08X}");
    }
}

#[test]
fn translucent_rows_fold_at_the_edges() {
    let px = [0xFF_00_00_FF, 0x80_80_00_00, 0x40_00_40_00];
    let src = Source::new(&px, 1, 3, false).unwrap();

    let mid = TranslucentRows::new(&src, HALF);
    assert_eq!((mid.top, mid.bottom), (Some(0), Some(1)));

    let last = TranslucentRows::new(&src, from_int(2) + HALF);
    assert_eq!((last.top, last.bottom), (Some(2), Some(2)));

    let above = TranslucentRows::new(&src, from_int(-1) + HALF);
    assert_eq!((above.top, above.bottom), (Some(0), Some(0)));

    assert!(TranslucentRows::new(&src, from_int(3)).is_empty());
    assert!(TranslucentRows::new(&src, from_int(-2)).is_empty());
}

#[test]
fn unclamped_rows_leave_the_outside_row_missing() {
    let px = [0xFF_00_00_FF, 0x80_80_00_00, 0x40_00_40_00];
    let src = Source::new(&px, 1, 3, false)
        .unwrap()
        .with_edge_clamp(EdgeClamp::NONE);

    let last = TranslucentRows::new(&src, from_int(2) + HALF);
    assert_eq!((last.top, last.bottom), (Some(2), None));

    let above = TranslucentRows::new(&src, from_int(-1) + HALF);
    assert_eq!((above.top, above.bottom), (None, Some(0)));
    assert!(!above.is_empty());
}

#[test]
fn translucent_sample_below_last_row_uses_last_row() {
    let px = [0xFF_00_00_FF, 0x80_80_00_00];
    let src = Source::new(&px, 1, 2, false).unwrap();
    let v = from_int(1) + HALF;
    let rows = TranslucentRows::new(&src, v);
    assert_eq!(sample_translucent(&src, rows, 0, v), 0x80_80_00_00);
}

#[test]
fn translucent_sample_fades_past_the_left_edge() {
    let px = [0xFF_FF_FF_FF];
    let src = Source::new(&px, 1, 1, false).unwrap();
    let rows = TranslucentRows::new(&src, 0);
    let u = from_int(-1) + HALF;
    assert_eq!(sample_translucent(&src, rows, u, 0), 0x80_80_80_80);
    assert_eq!(sample_translucent(&src, rows, from_int(-1), 0), 0);
    let nothing = TranslucentRows {
        top: None,
        bottom: None,
    };
    assert_eq!(sample_translucent(&src, nothing, 0, 0), 0);
}

#[test]
fn vertical_edges_follow_the_edge_clamp_setting() {
    let px = [0xFF_FF_FF_FF];
    let above = -HALF;
    let below = HALF;

    let folded = Source::new(&px, 1, 1, false).unwrap();
    assert_eq!(folded.edge_clamp(), EdgeClamp::ROWS);
    for v in [above, below] {
        let rows = TranslucentRows::new(&folded, v);
        assert_eq!(sample_translucent(&folded, rows, 0, v), 0xFF_FF_FF_FF, "v = {v}");
    }

    // The in-image row carries weight 128 above the image and 127 below it.
    let fading = folded.with_edge_clamp(EdgeClamp::NONE);
    for (v, expected) in [(above, 0x80_80_80_80), (below, 0x7F_7F_7F_7F)] {
        let rows = TranslucentRows::new(&fading, v);
        assert_eq!(sample_translucent(&fading, rows, 0, v), expected, "v = {v}");
    }
}

#[test]
fn horizontal_edges_follow_the_edge_clamp_setting() {
    let px = [0xFF_FF_FF_FF];
    let left = -HALF;
    let right = HALF;

    let fading = Source::new(&px, 1, 1, false).unwrap();
    let rows = TranslucentRows::new(&fading, 0);
    for (u, expected) in [(left, 0x80_80_80_80), (right, 0x7F_7F_7F_7F)] {
        assert_eq!(sample_translucent(&fading, rows, u, 0), expected, "u = {u}");
    }

    let folded = fading.with_edge_clamp(EdgeClamp::ALL);
    let rows = TranslucentRows::new(&folded, 0);
    for u in [left, right] {
        assert_eq!(sample_translucent(&folded, rows, u, 0), 0xFF_FF_FF_FF, "u = {u}");
    }
    // A full texel out is transparent whatever the setting.
    assert_eq!(sample_translucent(&folded, rows, from_int(-2) + HALF, 0), 0);
}

#[test]
fn opaque_rows_and_columns_clamp() {
    let px = [0xFF_00_00_00, 0xFF_FF_FF_FF, 0xFF_10_10_10, 0xFF_20_20_20];
    let src = Source::new(&px, 2, 2, true).unwrap();

    let rows = RowPair::opaque(&src, from_int(5));
    assert_eq!((rows.top, rows.bottom), (2, 2));
    assert_eq!(RowPair::opaque(&src, from_int(-3)).top, 0);

    // One texel past the right edge with a fraction still reads the last column.
    let below = RowPair::opaque(&src, from_int(1));
    assert_eq!(
        sample_opaque(&src, below, from_int(2) + HALF, from_int(1)),
        0xFF_20_20_20
    );
    let top = RowPair::opaque(&src, 0);
    assert_eq!(sample_opaque(&src, top, from_int(-4) + HALF, 0), 0xFF_00_00_00);
}

#[test]
fn opaque_sample_interpolates_inside() {
    let px = [0xFF_00_00_00, 0xFF_FF_FF_FF];
    let src = Source::new(&px, 2, 1, true).unwrap();
    let rows = RowPair::opaque(&src, 0);
    assert_eq!(sample_opaque(&src, rows, HALF, 0), 0xFF_80_80_80);
    assert_eq!(sample_opaque(&src, rows, from_int(1), 0), 0xFF_FF_FF_FF);
}
