use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::core::{CanvasSize, GradientStops, Point, Rgb8, Rgba8};
use crate::foundation::error::{OgError, OgResult};
use crate::paint::glow::RadialGlow;
use crate::text::font::{FontResolver, FontWeight};

pub const DEFAULT_OUTPUT_NAME: &str = "webshare-og.png";

const PURPLE: Rgb8 = Rgb8::new(167, 139, 250);
const BLUE: Rgb8 = Rgb8::new(96, 165, 250);

/// Everything that determines the rendered card. `Default` is the built-in design.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardSpec {
    pub width: u32,
    pub height: u32,
    pub background: GradientStops,
    pub glow: GlowSpec,
    pub title: TitleSpec,
    pub subtitle: SubtitleSpec,
    pub fonts: FontsSpec,
}

impl Default for CardSpec {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            background: GradientStops::new(
                Rgb8::new(0x0f, 0x0f, 0x13),
                Rgb8::new(0x1e, 0x1b, 0x2e),
            ),
            glow: GlowSpec::default(),
            title: TitleSpec::default(),
            subtitle: SubtitleSpec::default(),
            fonts: FontsSpec::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlowSpec {
    /// Defaults to `width / 2` (integer division).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_x: Option<f64>,
    pub center_y: f64,
    pub radius: f64,
    pub primary: Rgb8,
    pub secondary: Rgb8,
    /// Weight of `primary` in the glow color.
    pub mix: f64,
    pub strength: f64,
    pub falloff: f64,
}

impl Default for GlowSpec {
    fn default() -> Self {
        Self {
            center_x: None,
            center_y: 265.0,
            radius: 420.0,
            primary: Rgb8::new(124, 58, 237),
            secondary: BLUE,
            mix: 0.6,
            strength: 0.38,
            falloff: 1.6,
        }
    }
}

impl GlowSpec {
    pub fn resolve(&self, canvas: CanvasSize) -> RadialGlow {
        let cx = self.center_x.unwrap_or(f64::from(canvas.width / 2));
        RadialGlow {
            center: Point::new(cx, self.center_y),
            radius: self.radius,
            color: self.primary.mix(self.secondary, self.mix),
            peak: self.strength,
            falloff: self.falloff,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleSpec {
    pub text: String,
    /// Top of the line box.
    pub y: i32,
    pub size: f32,
    pub weight: FontWeight,
    pub gradient: GradientStops,
}

impl Default for TitleSpec {
    fn default() -> Self {
        Self {
            text: "Web Share API Demo".to_owned(),
            y: 220,
            size: 74.0,
            weight: FontWeight::Bold,
            gradient: GradientStops::new(PURPLE, BLUE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubtitleSpec {
    pub text: String,
    pub y: i32,
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgba8,
}

impl Default for SubtitleSpec {
    fn default() -> Self {
        Self {
            text: "Native sharing + social media fallbacks".to_owned(),
            y: 318,
            size: 34.0,
            weight: FontWeight::Regular,
            color: Rgba8::new(255, 255, 255, 133),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsSpec {
    /// Tried in order before the system list.
    pub candidates: Vec<PathBuf>,
    pub system: bool,
}

impl Default for FontsSpec {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            system: true,
        }
    }
}

impl FontsSpec {
    pub fn resolver(&self) -> FontResolver {
        FontResolver::new()
            .with_candidates(self.candidates.iter().cloned())
            .include_system(self.system)
    }
}

impl CardSpec {
    pub fn from_json_file(path: &Path) -> OgResult<Self> {
        let f = File::open(path).with_context(|| format!("open card spec '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| OgError::config(format!("parse '{}': {e}", path.display())))
    }

    pub fn from_json_str(s: &str) -> OgResult<Self> {
        serde_json::from_str(s).map_err(|e| OgError::config(e.to_string()))
    }

    pub fn canvas(&self) -> OgResult<CanvasSize> {
        CanvasSize::new(self.width, self.height)
    }

    pub fn validate(&self) -> OgResult<()> {
        self.canvas()?;

        let g = &self.glow;
        if let Some(cx) = g.center_x
            && !cx.is_finite()
        {
            return Err(OgError::validation("glow.center_x must be finite"));
        }
        if !g.center_y.is_finite() {
            return Err(OgError::validation("glow.center_y must be finite"));
        }
        if !g.radius.is_finite() || g.radius <= 0.0 {
            return Err(OgError::validation("glow.radius must be > 0"));
        }
        if !(0.0..=1.0).contains(&g.mix) {
            return Err(OgError::validation("glow.mix must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&g.strength) {
            return Err(OgError::validation("glow.strength must be in [0, 1]"));
        }
        if !g.falloff.is_finite() || g.falloff <= 0.0 {
            return Err(OgError::validation("glow.falloff must be > 0"));
        }

        for (name, size) in [("title", self.title.size), ("subtitle", self.subtitle.size)] {
            if !size.is_finite() || size <= 0.0 {
                return Err(OgError::validation(format!("{name}.size must be > 0")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/model.rs"]
mod tests;
