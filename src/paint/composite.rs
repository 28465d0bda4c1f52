use image::{RgbImage, RgbaImage};

use crate::foundation::core::{Rgb8, Rgba8, mul_div255};
use crate::foundation::error::{OgError, OgResult};

/// Straight-alpha `src` over an opaque `dst`; the result stays opaque.
pub fn over_opaque(dst: Rgb8, src: Rgba8) -> Rgb8 {
    if src.a == 0 {
        return dst;
    }
    if src.a == 255 {
        return src.rgb();
    }

    let inv = 255 - src.a;
    Rgb8 {
        r: mul_div255(src.r, src.a).saturating_add(mul_div255(dst.r, inv)),
        g: mul_div255(src.g, src.a).saturating_add(mul_div255(dst.g, inv)),
        b: mul_div255(src.b, src.a).saturating_add(mul_div255(dst.b, inv)),
    }
}

/// Composites a same-size straight-alpha layer onto the canvas.
#[tracing::instrument(skip_all)]
pub fn composite_layer_over(canvas: &mut RgbImage, layer: &RgbaImage) -> OgResult<()> {
    if canvas.dimensions() != layer.dimensions() {
        return Err(OgError::render(format!(
            "layer is {:?} but canvas is {:?}",
            layer.dimensions(),
            canvas.dimensions()
        )));
    }
    for (d, s) in canvas.pixels_mut().zip(layer.pixels()) {
        let out = over_opaque(Rgb8::from(*d), Rgba8::from(*s));
        *d = out.into();
    }
    Ok(())
}

/// Blends `color` at `(x, y)` with its alpha scaled by `coverage`. Out-of-bounds
/// coordinates are ignored.
pub fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgba8, coverage: u8) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }
    let a = mul_div255(color.a, coverage);
    let px = canvas.get_pixel_mut(x, y);
    *px = over_opaque(Rgb8::from(*px), Rgba8 { a, ..color }).into();
}

#[cfg(test)]
#[path = "../../tests/unit/paint/composite.rs"]
mod tests;
