use image::RgbImage;

use crate::foundation::core::{CanvasSize, GradientStops};

pub fn new_canvas(size: CanvasSize) -> RgbImage {
    RgbImage::new(size.width, size.height)
}

/// Fills every row with `stops` sampled at `y / (height - 1)`.
#[tracing::instrument(skip(canvas), fields(width = canvas.width(), height = canvas.height()))]
pub fn paint_vertical_gradient(canvas: &mut RgbImage, stops: GradientStops) {
    let height = canvas.height();
    for (y, row) in canvas.enumerate_rows_mut() {
        let color = image::Rgb::from(stops.sample(y, height));
        for (_, _, px) in row {
            *px = color;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/background.rs"]
mod tests;
