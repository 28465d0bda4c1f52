use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use image::{GrayImage, RgbImage, RgbaImage};

use crate::foundation::core::{Rgba8, mul_div255};
use crate::paint::composite::blend_pixel;
use crate::text::bitmap::{BitmapFont, CELL_WIDTH};
use crate::text::font::{FontFace, LoadedFont};

/// Coverage of one glyph, positioned relative to the run's pen origin
/// (top-left of the line box).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMask {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

/// Tight box around every covered pixel; `right`/`bottom` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InkBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl InkBounds {
    pub fn width(self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}

/// A single line of text laid out and rasterized with one font.
#[derive(Clone, Debug, Default)]
pub struct TextRun {
    glyphs: Vec<GlyphMask>,
}

impl TextRun {
    pub fn layout(font: &LoadedFont, text: &str) -> Self {
        let glyphs = match &font.face {
            FontFace::Outline(f) => layout_outline(f, font.px, text),
            FontFace::Bitmap(b) => layout_bitmap(*b, text),
        };
        Self { glyphs }
    }

    pub fn glyphs(&self) -> &[GlyphMask] {
        &self.glyphs
    }

    /// `None` when nothing is covered (empty or whitespace-only text).
    pub fn ink_bounds(&self) -> Option<InkBounds> {
        let mut bounds: Option<InkBounds> = None;
        for g in &self.glyphs {
            visit_glyph(g, 0, 0, |x, y, _| {
                let b = bounds.get_or_insert(InkBounds {
                    left: x,
                    top: y,
                    right: x + 1,
                    bottom: y + 1,
                });
                b.left = b.left.min(x);
                b.top = b.top.min(y);
                b.right = b.right.max(x + 1);
                b.bottom = b.bottom.max(y + 1);
            });
        }
        bounds
    }

    /// Calls `f(x, y, coverage)` for every covered pixel with the pen at `(pen_x, pen_y)`.
    pub fn for_each_covered(&self, pen_x: i32, pen_y: i32, mut f: impl FnMut(i32, i32, u8)) {
        for g in &self.glyphs {
            visit_glyph(g, pen_x, pen_y, &mut f);
        }
    }
}

fn visit_glyph(g: &GlyphMask, pen_x: i32, pen_y: i32, mut f: impl FnMut(i32, i32, u8)) {
    let w = g.width as usize;
    if w == 0 {
        return;
    }
    for (i, &c) in g.coverage.iter().enumerate() {
        if c == 0 {
            continue;
        }
        let gx = (i % w) as i32;
        let gy = (i / w) as i32;
        f(pen_x + g.x + gx, pen_y + g.y + gy, c);
    }
}

fn layout_outline(font: &fontdue::Font, px: f32, text: &str) -> Vec<GlyphMask> {
    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &TextStyle::new(text, px, 0));

    layout
        .glyphs()
        .iter()
        .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
        .map(|g| {
            let (metrics, coverage) = font.rasterize_config(g.key);
            GlyphMask {
                x: g.x.round() as i32,
                y: g.y.round() as i32,
                width: metrics.width as u32,
                height: metrics.height as u32,
                coverage,
            }
        })
        .collect()
}

fn layout_bitmap(font: BitmapFont, text: &str) -> Vec<GlyphMask> {
    let width = CELL_WIDTH * font.scale();
    let height = font.cell_height();

    text.chars()
        .enumerate()
        .filter(|(_, ch)| *ch != ' ')
        .map(|(i, ch)| GlyphMask {
            x: (i as u32 * font.advance()) as i32,
            y: 0,
            width,
            height,
            coverage: font.rasterize(ch),
        })
        .filter(|g| g.coverage.iter().any(|c| *c != 0))
        .collect()
}

/// Left edge that centers an ink box of `ink_width` on a canvas (floor division).
pub fn centered_left(canvas_width: u32, ink_width: u32) -> i32 {
    (i64::from(canvas_width) - i64::from(ink_width)).div_euclid(2) as i32
}

/// Where a run is drawn: the pen origin plus the ink box it produces on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub pen_x: i32,
    pub pen_y: i32,
    pub ink: InkBounds,
}

/// Positions `run` so its ink box is horizontally centered, with the line box top at `y`.
pub fn place_centered(run: &TextRun, canvas_width: u32, y: i32) -> Option<Placement> {
    let local = run.ink_bounds()?;
    let left = centered_left(canvas_width, local.width());
    let pen_x = left - local.left;
    Some(Placement {
        pen_x,
        pen_y: y,
        ink: InkBounds {
            left,
            top: local.top + y,
            right: left + local.width() as i32,
            bottom: local.bottom + y,
        },
    })
}

/// Union coverage of the run on a `width x height` mask; overlapping glyph
/// edges keep the larger coverage.
pub fn coverage_mask(
    run: &TextRun,
    pen_x: i32,
    pen_y: i32,
    width: u32,
    height: u32,
) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    run.for_each_covered(pen_x, pen_y, |x, y, c| {
        if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
            return;
        }
        let px = mask.get_pixel_mut(x as u32, y as u32);
        px.0[0] = px.0[0].max(c);
    });
    mask
}

/// Renders the run in `color` onto a fresh transparent layer.
#[tracing::instrument(level = "debug", skip(run))]
pub fn render_layer(
    run: &TextRun,
    pen_x: i32,
    pen_y: i32,
    width: u32,
    height: u32,
    color: Rgba8,
) -> RgbaImage {
    let mask = coverage_mask(run, pen_x, pen_y, width, height);
    let mut layer = RgbaImage::new(width, height);
    for (dst, cov) in layer.pixels_mut().zip(mask.pixels()) {
        let c = cov.0[0];
        if c > 0 {
            *dst = Rgba8 {
                a: mul_div255(color.a, c),
                ..color
            }
            .into();
        }
    }
    layer
}

/// Blends the run directly over an opaque canvas.
#[tracing::instrument(level = "debug", skip(canvas, run))]
pub fn draw_over(canvas: &mut RgbImage, run: &TextRun, pen_x: i32, pen_y: i32, color: Rgba8) {
    let (w, h) = canvas.dimensions();
    let mask = coverage_mask(run, pen_x, pen_y, w, h);
    for (x, y, cov) in mask.enumerate_pixels() {
        let c = cov.0[0];
        if c > 0 {
            blend_pixel(canvas, x as i32, y as i32, color, c);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/raster.rs"]
mod tests;
