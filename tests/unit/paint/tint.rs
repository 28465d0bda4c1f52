use super::*;
use crate::foundation::core::Rgb8;

fn stops() -> GradientStops {
    GradientStops::new(Rgb8::new(167, 139, 250), Rgb8::new(96, 165, 250))
}

#[test]
fn tint_keeps_alpha_and_uses_column_color() {
    let mut stencil = RgbaImage::new(11, 3);
    stencil.put_pixel(0, 0, image::Rgba([255, 255, 255, 255]));
    stencil.put_pixel(5, 1, image::Rgba([255, 255, 255, 90]));
    stencil.put_pixel(10, 2, image::Rgba([255, 255, 255, 7]));

    let out = tint_horizontal(&stencil, stops());

    assert_eq!(out.get_pixel(0, 0).0, [167, 139, 250, 255]);
    let mid = stops().at(0.5);
    assert_eq!(out.get_pixel(5, 1).0, [mid.r, mid.g, mid.b, 90]);
    assert_eq!(out.get_pixel(10, 2).0, [96, 165, 250, 7]);
}

#[test]
fn uncovered_pixels_stay_fully_transparent() {
    let mut stencil = RgbaImage::new(4, 4);
    stencil.put_pixel(2, 2, image::Rgba([255, 255, 255, 255]));
    let out = tint_horizontal(&stencil, stops());

    for (x, y, px) in out.enumerate_pixels() {
        if (x, y) != (2, 2) {
            assert_eq!(px.0, [0, 0, 0, 0]);
        }
    }
}

#[test]
fn tint_color_depends_on_column_only() {
    let stencil = RgbaImage::from_pixel(9, 5, image::Rgba([255, 255, 255, 255]));
    let out = tint_horizontal(&stencil, stops());
    for x in 0..9 {
        let top = out.get_pixel(x, 0);
        for y in 1..5 {
            assert_eq!(out.get_pixel(x, y), top);
        }
    }
}
