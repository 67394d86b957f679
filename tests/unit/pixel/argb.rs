use super::*;

#[test]
fn channels_roundtrip_through_pack() {
    let p = 0x80_40_20_10;
    assert_eq!(alpha(p), 0x80);
    assert_eq!(red(p), 0x40);
    assert_eq!(green(p), 0x20);
    assert_eq!(blue(p), 0x10);
    assert_eq!(pack(alpha(p), red(p), green(p), blue(p)), p);
}

#[test]
fn premultiply_scales_color_by_alpha() {
    assert_eq!(premultiply(0xFF_12_34_56), 0xFF_12_34_56);
    assert_eq!(premultiply(0x00_FF_FF_FF), 0);
    assert_eq!(premultiply(0x80_FF_00_FF), 0x80_80_00_80);
    assert!(is_premultiplied(premultiply(0x7F_FF_C0_01)));
}

#[test]
fn unpremultiply_handles_extremes() {
    assert_eq!(unpremultiply(0), 0);
    assert_eq!(unpremultiply(0x00_10_10_10), 0);
    assert_eq!(unpremultiply(0xFF_01_02_03), 0xFF_01_02_03);
    assert_eq!(unpremultiply(0x80_80_00_40), 0x80_FF_00_7F);
}

#[test]
fn unpremultiply_clamps_malformed_input() {
    let p = unpremultiply(0x10_FF_FF_FF);
    assert_eq!(p, 0x10_FF_FF_FF);
}

#[test]
fn mult_alpha_keeps_premultiplied_invariant() {
    let p = 0xC0_C0_80_10;
    for ea in [0u32, 1, 64, 128, 200, 255] {
        let q = mult_alpha(p, ea);
        assert!(is_premultiplied(q), "ea = {ea}, q = {q:08X}");
    }
    assert_eq!(mult_alpha(p, 255), p);
    assert_eq!(mult_alpha(p, 0), 0);
}

#[test]
fn premultiply_rgb_ignores_source_alpha() {
    assert_eq!(premultiply_rgb(0x00_FF_FF_FF, 0xFF), 0xFF_FF_FF_FF);
    assert_eq!(premultiply_rgb(0x12_FF_00_00, 0x80), 0x80_80_00_00);
}
