use image::RgbImage;

use crate::card::model::{CardSpec, SubtitleSpec, TitleSpec};
use crate::foundation::core::Rgba8;
use crate::foundation::error::OgResult;
use crate::paint::background::{new_canvas, paint_vertical_gradient};
use crate::paint::composite::composite_layer_over;
use crate::paint::glow::apply_radial_glow;
use crate::paint::tint::tint_horizontal;
use crate::text::font::{FontResolver, LoadedFont};
use crate::text::raster::{Placement, TextRun, draw_over, place_centered, render_layer};

const OPAQUE_WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

/// Fonts for both text weights, resolved once per card.
#[derive(Clone, Debug)]
pub struct CardFonts {
    pub title: LoadedFont,
    pub subtitle: LoadedFont,
}

impl CardFonts {
    pub fn resolve(spec: &CardSpec) -> Self {
        Self::resolve_with(spec, &spec.fonts.resolver())
    }

    pub fn resolve_with(spec: &CardSpec, resolver: &FontResolver) -> Self {
        Self {
            title: resolver.resolve(spec.title.size, spec.title.weight),
            subtitle: resolver.resolve(spec.subtitle.size, spec.subtitle.weight),
        }
    }

    pub fn builtin(spec: &CardSpec) -> Self {
        Self {
            title: LoadedFont::builtin(spec.title.size),
            subtitle: LoadedFont::builtin(spec.subtitle.size),
        }
    }
}

/// Canvas with background and glow only.
#[tracing::instrument(skip_all)]
pub fn render_backdrop(spec: &CardSpec) -> OgResult<RgbImage> {
    let size = spec.canvas()?;
    let mut canvas = new_canvas(size);
    paint_vertical_gradient(&mut canvas, spec.background);
    apply_radial_glow(&mut canvas, &spec.glow.resolve(size));
    Ok(canvas)
}

/// Draws the gradient-tinted title; returns where it landed (`None` for blank text).
#[tracing::instrument(skip_all, fields(text = %title.text))]
pub fn render_title(
    canvas: &mut RgbImage,
    title: &TitleSpec,
    font: &LoadedFont,
) -> OgResult<Option<Placement>> {
    let run = TextRun::layout(font, &title.text);
    let Some(placement) = place_centered(&run, canvas.width(), title.y) else {
        return Ok(None);
    };

    let (w, h) = canvas.dimensions();
    let stencil = render_layer(&run, placement.pen_x, placement.pen_y, w, h, OPAQUE_WHITE);
    let tint = tint_horizontal(&stencil, title.gradient);
    composite_layer_over(canvas, &tint)?;
    Ok(Some(placement))
}

/// Draws the subtitle straight onto the canvas in its translucent color.
#[tracing::instrument(skip_all, fields(text = %subtitle.text))]
pub fn render_subtitle(
    canvas: &mut RgbImage,
    subtitle: &SubtitleSpec,
    font: &LoadedFont,
) -> Option<Placement> {
    let run = TextRun::layout(font, &subtitle.text);
    let placement = place_centered(&run, canvas.width(), subtitle.y)?;
    draw_over(canvas, &run, placement.pen_x, placement.pen_y, subtitle.color);
    Some(placement)
}

/// Runs every stage in order and returns the finished opaque canvas.
#[tracing::instrument(skip_all, fields(width = spec.width, height = spec.height))]
pub fn render_card(spec: &CardSpec, fonts: &CardFonts) -> OgResult<RgbImage> {
    spec.validate()?;
    let mut canvas = render_backdrop(spec)?;
    render_title(&mut canvas, &spec.title, &fonts.title)?;
    render_subtitle(&mut canvas, &spec.subtitle, &fonts.subtitle);
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/card/render.rs"]
mod tests;
