use super::*;

#[test]
fn source_accepts_tight_image() {
    let px = [0u32; 6];
    let src = Source::new(&px, 3, 2, false).unwrap();
    assert_eq!(src.width(), 3);
    assert_eq!(src.height(), 2);
    assert_eq!(src.row_offset(1), 3);
}

#[test]
fn source_region_offsets_into_sheet() {
    // 4x3 sheet; 2x2 frame at (1, 1).
    let px: Vec<u32> = (0..12).collect();
    let src = Source::with_region(&px, 4, 1, 1, 2, 2, true).unwrap();
    let top = src.row_offset(0);
    let bottom = src.row_offset(1);
    assert_eq!(src.pixel(top, 0), 5);
    assert_eq!(src.pixel(top, 1), 6);
    assert_eq!(src.pixel(bottom, 0), 9);
    assert_eq!(src.row(bottom), &[9, 10]);
}

#[test]
fn source_rejects_bad_geometry() {
    let px = [0u32; 4];
    assert!(Source::new(&px, 0, 1, false).is_err());
    assert!(Source::new(&px, 3, 2, false).is_err());
    assert!(Source::with_region(&px, 2, 1, 0, 2, 2, false).is_err());
    assert!(Source::new(&px, 40_000, 1, false).is_err());
}

#[test]
fn source_region_needs_only_last_row_width() {
    // Last row does not have to extend to the full stride.
    let px = [0u32; 7];
    assert!(Source::with_region(&px, 4, 1, 0, 2, 2, false).is_ok());
    assert!(Source::with_region(&px, 4, 2, 0, 2, 2, false).is_err());
}

#[test]
fn destination_span_checks() {
    let mut px = [0u32; 8];
    let dst = Destination::new(&mut px, 4, false).unwrap();
    assert!(dst.check_span(0, 4, 2).is_ok());
    assert!(dst.check_span(1, 3, 2).is_ok());
    assert!(dst.check_span(1, 4, 2).is_err());
    assert!(dst.check_span(0, 5, 2).is_err());
    assert!(dst.check_span(0, 8, 1).is_ok());
}

#[test]
fn destination_rejects_zero_scan() {
    let mut px = [0u32; 1];
    assert!(Destination::new(&mut px, 0, false).is_err());
}
