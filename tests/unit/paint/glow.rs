use super::*;

fn glow() -> RadialGlow {
    RadialGlow {
        center: Point::new(30.0, 20.0),
        radius: 15.0,
        color: Rgb8::new(112, 100, 242),
        peak: 0.38,
        falloff: 1.6,
    }
}

#[test]
fn strength_is_strictly_decreasing_inside_the_disk() {
    let g = glow();
    let mut prev = g.strength_at(0.0);
    assert!((prev - 0.38).abs() < 1e-12);

    let mut d = 0.25;
    while d < g.radius {
        let s = g.strength_at(d);
        assert!(s < prev, "strength not decreasing at {d}");
        assert!(s > 0.0);
        prev = s;
        d += 0.25;
    }
    assert_eq!(g.strength_at(g.radius), 0.0);
    assert_eq!(g.strength_at(g.radius + 3.0), 0.0);
}

#[test]
fn strength_approaches_zero_near_the_edge() {
    let g = glow();
    assert!(g.strength_at(g.radius - 1e-6) < 1e-6);
}

#[test]
fn pixels_outside_the_disk_are_untouched() {
    let mut canvas = RgbImage::from_pixel(64, 48, image::Rgb([20, 18, 30]));
    let before = canvas.clone();
    let g = glow();
    apply_radial_glow(&mut canvas, &g);

    for (x, y, px) in canvas.enumerate_pixels() {
        let dist = Point::new(f64::from(x), f64::from(y)).distance(g.center);
        if dist >= g.radius {
            assert_eq!(px, before.get_pixel(x, y), "pixel ({x},{y}) changed");
        }
    }
}

#[test]
fn center_pixel_blends_with_peak_strength() {
    let mut canvas = RgbImage::from_pixel(64, 48, image::Rgb([20, 18, 30]));
    apply_radial_glow(&mut canvas, &glow());

    let expected = [
        (20.0 * 0.62 + 112.0 * 0.38) as u8,
        (18.0 * 0.62 + 100.0 * 0.38) as u8,
        (30.0 * 0.62 + 242.0 * 0.38) as u8,
    ];
    assert_eq!(canvas.get_pixel(30, 20).0, expected);
}

#[test]
fn disk_partially_off_canvas_is_clipped() {
    let mut canvas = RgbImage::from_pixel(10, 10, image::Rgb([0, 0, 0]));
    let g = RadialGlow {
        center: Point::new(-2.0, 5.0),
        radius: 6.0,
        ..glow()
    };
    apply_radial_glow(&mut canvas, &g);
    assert_ne!(canvas.get_pixel(0, 5).0, [0, 0, 0]);
    assert_eq!(canvas.get_pixel(9, 5).0, [0, 0, 0]);
}

#[test]
fn zero_radius_is_noop() {
    let mut canvas = RgbImage::from_pixel(8, 8, image::Rgb([5, 6, 7]));
    let before = canvas.clone();
    let g = RadialGlow {
        radius: 0.0,
        ..glow()
    };
    apply_radial_glow(&mut canvas, &g);
    assert_eq!(canvas, before);
}
