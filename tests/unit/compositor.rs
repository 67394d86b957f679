use super::*;

#[test]
fn opts_builder_and_json() {
    let opts = CompositorOpts::default().with_blend_transparent_pixels(true);
    assert!(opts.blend_transparent_pixels);
    assert_eq!(
        CompositorOpts::from_json_str("{}").unwrap(),
        CompositorOpts::default()
    );
    assert_eq!(
        CompositorOpts::from_json_str(r#"{"blend_transparent_pixels": true}"#).unwrap(),
        opts
    );
    assert_eq!(Compositor::new(opts).opts(), &opts);
}

#[test]
fn malformed_opts_json_is_a_serde_error() {
    let err = CompositorOpts::from_json_str(r#"{"blend_transparent_pixels": 3}"#).unwrap_err();
    assert!(matches!(err, SpriteCompError::Serde(_)), "{err}");
}

#[test]
fn span_past_the_buffer_is_rejected_untouched() {
    let px = [0xFF_FF_FF_FF; 4];
    let src = Source::new(&px, 4, 1, true).unwrap();
    let mut out = [0u32; 4];
    let mut dst = Destination::new(&mut out, 4, false).unwrap();
    let err = draw(
        BlendMode::SrcOver,
        &src,
        &RenderRequest::new(2, 4),
        &mut dst,
    )
    .unwrap_err();
    assert!(matches!(err, SpriteCompError::Validation(_)));
    assert_eq!(out, [0; 4]);
}

#[test]
fn rotated_request_only_validates_one_row() {
    let px = [0xFF_FF_FF_FF; 4];
    let src = Source::new(&px, 2, 2, true).unwrap();
    let mut out = [0u32; 2];
    let mut dst = Destination::new(&mut out, 2, false).unwrap();
    let req = RenderRequest::new(0, 2).with_rotation(true).with_rows(50);
    draw(BlendMode::Src, &src, &req, &mut dst).unwrap();
    assert_eq!(out, [0xFF_FF_FF_FF; 2]);
}

#[test]
fn noop_requests_skip_validation() {
    let px = [0xFF_FF_FF_FF];
    let src = Source::new(&px, 1, 1, true).unwrap();
    let mut out = [7u32; 2];
    let mut dst = Destination::new(&mut out, 2, false).unwrap();
    let far = RenderRequest::new(1000, 5);
    for req in [far.with_alpha(0), far.with_rows(0), RenderRequest::new(1000, 0)] {
        draw(BlendMode::Add, &src, &req, &mut dst).unwrap();
    }
    assert_eq!(out, [7, 7]);
}

#[test]
fn fill_blends_a_solid_color() {
    let mut out = [0xFF_00_00_FF; 4];
    let mut dst = Destination::new(&mut out, 2, false).unwrap();
    let c = Compositor::default();
    c.fill(BlendMode::Add, 0xFF_FF_00_00, 255, &mut dst, 2, 2, 1)
        .unwrap();
    c.fill(BlendMode::DstOut, 0xFF_00_00_00, 0, &mut dst, 0, 2, 1)
        .unwrap();
    assert!(
        c.fill(BlendMode::Src, 0, 255, &mut dst, 3, 2, 1)
            .is_err()
    );
    assert_eq!(out, [0xFF_00_00_FF, 0xFF_00_00_FF, 0xFF_FF_00_FF, 0xFF_FF_00_FF]);
}

#[test]
fn fill_with_transparent_color_only_changes_copy_rules() {
    let mut out = [0xFF_10_20_30; 2];
    let mut dst = Destination::new(&mut out, 2, false).unwrap();
    let c = Compositor::default();
    c.fill(BlendMode::SrcOver, 0, 255, &mut dst, 0, 2, 1).unwrap();
    assert_eq!(out_of(&dst), [0xFF_10_20_30; 2]);
    c.fill(BlendMode::Src, 0, 255, &mut dst, 0, 1, 1).unwrap();
    assert_eq!(out_of(&dst), [0, 0xFF_10_20_30]);
}

fn out_of(dst: &Destination<'_>) -> Vec<Argb> {
    dst.pixels().to_vec()
}
