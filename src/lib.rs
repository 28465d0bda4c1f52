//! ogcard renders a fixed-layout Open Graph card to PNG.
//!
//! The pipeline is a single forward pass over one RGB canvas:
//!
//! 1. **Backdrop**: vertical gradient, then a soft radial glow ([`render_backdrop`]).
//! 2. **Fonts**: one outline font per text weight, probed from an ordered candidate
//!    list, with a builtin bitmap font as the last resort ([`FontResolver`]).
//! 3. **Title**: glyph coverage is used as a stencil for a left-to-right color
//!    gradient and composited over the canvas ([`render_title`]).
//! 4. **Subtitle**: translucent white drawn straight onto the canvas ([`render_subtitle`]).
//! 5. **Encode**: PNG with maximum compression ([`save_png`]).
//!
//! Every constant lives in [`CardSpec`]; its `Default` is the built-in design.
#![forbid(unsafe_code)]

mod card;
mod encode;
mod foundation;
mod paint;
mod text;

pub use card::model::{
    CardSpec, DEFAULT_OUTPUT_NAME, FontsSpec, GlowSpec, SubtitleSpec, TitleSpec,
};
pub use card::render::{
    CardFonts, render_backdrop, render_card, render_subtitle, render_title,
};
pub use encode::png::{
    PNG_SIGNATURE, encode_png, ensure_parent_dir, save_png, saved_report,
};
pub use foundation::core::{
    CanvasSize, GradientStops, MAX_CANVAS_SIDE, Point, Rgb8, Rgba8, lerp_u8, unit_fraction,
};
pub use foundation::error::{OgError, OgResult};
pub use paint::background::{new_canvas, paint_vertical_gradient};
pub use paint::composite::{blend_pixel, composite_layer_over, over_opaque};
pub use paint::glow::{RadialGlow, apply_radial_glow, glow_strength};
pub use paint::tint::tint_horizontal;
pub use text::bitmap::BitmapFont;
pub use text::font::{
    FontFace, FontResolver, FontSource, FontWeight, LoadedFont, load_font_file,
    system_font_candidates,
};
pub use text::raster::{
    GlyphMask, InkBounds, Placement, TextRun, centered_left, coverage_mask, draw_over,
    place_centered, render_layer,
};
