use image::RgbaImage;

use crate::foundation::core::GradientStops;

/// Builds a layer that carries `stencil`'s alpha with a left-to-right gradient
/// color. Pixels with zero alpha stay fully transparent.
#[tracing::instrument(skip_all, fields(width = stencil.width(), height = stencil.height()))]
pub fn tint_horizontal(stencil: &RgbaImage, stops: GradientStops) -> RgbaImage {
    let (w, h) = stencil.dimensions();
    let mut out = RgbaImage::new(w, h);

    for x in 0..w {
        let color = stops.sample(x, w);
        for y in 0..h {
            let a = stencil.get_pixel(x, y).0[3];
            if a > 0 {
                out.put_pixel(x, y, color.with_alpha(a).into());
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/paint/tint.rs"]
mod tests;
