use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;

use crate::foundation::error::{OgError, OgResult};
use crate::text::bitmap::BitmapFont;

const DISPLAY_FACES: [&str; 3] = [
    "/System/Library/Fonts/SFNS.ttf",
    "/System/Library/Fonts/SFNSDisplay.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];
const DEJAVU_BOLD: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
const DEJAVU_REGULAR: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Built-in system paths for `weight`, most preferred first.
///
/// Regular puts DejaVuSans ahead of DejaVuSans-Bold, so a Linux subtitle renders in the
/// regular face rather than sharing the bold title face.
pub fn system_font_candidates(weight: FontWeight) -> [&'static str; 5] {
    let [a, b, c] = DISPLAY_FACES;
    match weight {
        FontWeight::Bold => [a, b, c, DEJAVU_BOLD, DEJAVU_REGULAR],
        FontWeight::Regular => [a, b, c, DEJAVU_REGULAR, DEJAVU_BOLD],
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(p) => write!(f, "{}", p.display()),
            FontSource::Builtin => f.write_str("builtin 5x7 bitmap"),
        }
    }
}

#[derive(Clone)]
pub enum FontFace {
    Outline(Box<fontdue::Font>),
    Bitmap(BitmapFont),
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFace::Outline(_) => f.write_str("Outline(..)"),
            FontFace::Bitmap(b) => f.debug_tuple("Bitmap").field(b).finish(),
        }
    }
}

/// A font resolved for one pixel size.
#[derive(Clone, Debug)]
pub struct LoadedFont {
    pub face: FontFace,
    pub px: f32,
    pub source: FontSource,
    /// Raw file bytes for outline fonts.
    pub font_bytes: Option<Arc<[u8]>>,
}

impl LoadedFont {
    pub fn builtin(px: f32) -> Self {
        Self {
            face: FontFace::Bitmap(BitmapFont::for_pixel_size(px)),
            px,
            source: FontSource::Builtin,
            font_bytes: None,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Bitmap(_))
    }
}

/// Reads and parses one font file at `px`.
pub fn load_font_file(path: &Path, px: f32) -> OgResult<LoadedFont> {
    if !path.is_file() {
        return Err(OgError::font(format!("'{}' does not exist", path.display())));
    }
    let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    let settings = fontdue::FontSettings {
        scale: px,
        ..fontdue::FontSettings::default()
    };
    let font = fontdue::Font::from_bytes(bytes.as_slice(), settings)
        .map_err(|e| OgError::font(format!("parse '{}': {e}", path.display())))?;

    Ok(LoadedFont {
        face: FontFace::Outline(Box::new(font)),
        px,
        source: FontSource::File(path.to_path_buf()),
        font_bytes: Some(Arc::from(bytes)),
    })
}

/// Ordered first-success font lookup that always yields a font.
#[derive(Clone, Debug)]
pub struct FontResolver {
    extra: Vec<PathBuf>,
    include_system: bool,
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FontResolver {
    pub fn new() -> Self {
        Self {
            extra: Vec::new(),
            include_system: true,
        }
    }

    /// Paths tried before the system list, in order.
    pub fn with_candidates(mut self, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        self.extra.extend(paths);
        self
    }

    pub fn include_system(mut self, include: bool) -> Self {
        self.include_system = include;
        self
    }

    pub fn candidates(&self, weight: FontWeight) -> Vec<PathBuf> {
        let mut out = self.extra.clone();
        if self.include_system {
            out.extend(system_font_candidates(weight).iter().map(PathBuf::from));
        }
        out
    }

    /// First candidate that loads wins; missing and malformed files are both
    /// skipped. Falls back to the builtin bitmap font.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self, px: f32, weight: FontWeight) -> LoadedFont {
        for path in self.candidates(weight) {
            match load_font_file(&path, px) {
                Ok(font) => {
                    tracing::info!(source = %font.source, "resolved font");
                    return font;
                }
                Err(err) => tracing::debug!(path = %path.display(), %err, "font candidate skipped"),
            }
        }
        tracing::info!("no outline font available; using builtin bitmap font");
        LoadedFont::builtin(px)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
