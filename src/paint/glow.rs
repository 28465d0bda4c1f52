use image::RgbImage;

use crate::foundation::core::{Point, Rgb8};

/// A soft radial light blended over an opaque canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGlow {
    pub center: Point,
    pub radius: f64,
    pub color: Rgb8,
    /// Blend weight at the exact center.
    pub peak: f64,
    pub falloff: f64,
}

impl RadialGlow {
    pub fn strength_at(&self, dist: f64) -> f64 {
        glow_strength(dist, self.radius, self.peak, self.falloff)
    }
}

/// `(1 - dist/radius)^falloff * peak` inside the disk, 0 at or beyond `radius`.
pub fn glow_strength(dist: f64, radius: f64, peak: f64, falloff: f64) -> f64 {
    if radius.is_nan() || radius <= 0.0 || dist.is_nan() || dist >= radius {
        return 0.0;
    }
    let alpha = (1.0 - dist / radius).max(0.0);
    alpha.powf(falloff) * peak
}

fn blend_channel(base: u8, glow: u8, strength: f64) -> u8 {
    (f64::from(base) * (1.0 - strength) + f64::from(glow) * strength) as u8
}

/// Blends `glow` into every pixel strictly inside its disk. Pixels at or beyond
/// the radius keep their exact value.
#[tracing::instrument(skip_all, fields(cx = glow.center.x, cy = glow.center.y, radius = glow.radius))]
pub fn apply_radial_glow(canvas: &mut RgbImage, glow: &RadialGlow) {
    if glow.radius.is_nan() || glow.radius <= 0.0 {
        return;
    }

    let (w, h) = canvas.dimensions();
    let x0 = (glow.center.x - glow.radius).floor().max(0.0) as u32;
    let y0 = (glow.center.y - glow.radius).floor().max(0.0) as u32;
    let x1 = ((glow.center.x + glow.radius).ceil().max(0.0) as u32).min(w);
    let y1 = ((glow.center.y + glow.radius).ceil().max(0.0) as u32).min(h);

    let mut touched = 0usize;
    for y in y0..y1 {
        for x in x0..x1 {
            let dist = Point::new(f64::from(x), f64::from(y)).distance(glow.center);
            if dist >= glow.radius {
                continue;
            }
            let strength = glow.strength_at(dist);
            let px = canvas.get_pixel_mut(x, y);
            let [r, g, b] = px.0;
            px.0 = [
                blend_channel(r, glow.color.r, strength),
                blend_channel(g, glow.color.g, strength),
                blend_channel(b, glow.color.b, strength),
            ];
            touched += 1;
        }
    }
    tracing::debug!(touched, "radial glow applied");
}

#[cfg(test)]
#[path = "../../tests/unit/paint/glow.rs"]
mod tests;
