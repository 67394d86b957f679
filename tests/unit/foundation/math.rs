use super::*;

#[test]
fn div255_matches_integer_division_rounding() {
    for t in 0..=255u32 * 255 {
        assert_eq!(div255(t), (t + 127) / 255, "t = {t}");
    }
}

#[test]
fn mul_div255_endpoints() {
    for x in [0u32, 1, 127, 128, 254, 255] {
        assert_eq!(mul_div255(x, 255), x);
        assert_eq!(mul_div255(255, x), x);
        assert_eq!(mul_div255(x, 0), 0);
    }
    assert_eq!(mul_div255(128, 128), 64);
}

#[test]
fn fixed_point_split_and_join() {
    let x = from_int(3) + 0x8000;
    assert_eq!(to_int(x), 3);
    assert_eq!(frac(x), 0x8000);
    assert_eq!(frac8(x), 0x80);

    let neg = from_int(-1) + 0x4000;
    assert_eq!(to_int(neg), -1);
    assert_eq!(frac(neg), 0x4000);
}

#[test]
fn from_f64_rounds_and_saturates() {
    assert_eq!(from_f64(1.0), FIXED_ONE);
    assert_eq!(from_f64(-0.5), -(FIXED_ONE / 2));
    assert_eq!(from_f64(1e12), i32::MAX);
    assert_eq!(from_f64(f64::NAN), 0);
}
