use super::*;

#[test]
fn over_transparent_src_is_noop() {
    let dst = Rgb8::new(10, 20, 30);
    assert_eq!(over_opaque(dst, Rgba8::new(255, 255, 255, 0)), dst);
}

#[test]
fn over_opaque_src_replaces_dst() {
    let dst = Rgb8::new(10, 20, 30);
    assert_eq!(
        over_opaque(dst, Rgba8::new(167, 139, 250, 255)),
        Rgb8::new(167, 139, 250)
    );
}

#[test]
fn over_half_alpha_lands_between() {
    let out = over_opaque(Rgb8::new(0, 0, 0), Rgba8::new(255, 255, 255, 128));
    assert_eq!(out, Rgb8::new(128, 128, 128));

    let out = over_opaque(Rgb8::new(200, 200, 200), Rgba8::new(0, 0, 0, 128));
    assert_eq!(out, Rgb8::new(100, 100, 100));
}

#[test]
fn composite_rejects_mismatched_layer() {
    let mut canvas = RgbImage::new(4, 4);
    let layer = RgbaImage::new(4, 5);
    let err = composite_layer_over(&mut canvas, &layer).unwrap_err();
    assert!(err.to_string().contains("render error:"));
}

#[test]
fn composite_transparent_layer_keeps_canvas() {
    let mut canvas = RgbImage::from_pixel(3, 2, image::Rgb([9, 8, 7]));
    let before = canvas.clone();
    composite_layer_over(&mut canvas, &RgbaImage::new(3, 2)).unwrap();
    assert_eq!(canvas, before);
}

#[test]
fn blend_pixel_scales_alpha_by_coverage_and_clips() {
    let mut canvas = RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]));
    let white = Rgba8::new(255, 255, 255, 133);

    blend_pixel(&mut canvas, 0, 0, white, 255);
    assert_eq!(canvas.get_pixel(0, 0).0, [133, 133, 133]);

    blend_pixel(&mut canvas, 1, 0, white, 0);
    assert_eq!(canvas.get_pixel(1, 0).0, [0, 0, 0]);

    blend_pixel(&mut canvas, -1, 0, white, 255);
    blend_pixel(&mut canvas, 0, 2, white, 255);
    assert_eq!(canvas.get_pixel(0, 1).0, [0, 0, 0]);
}
