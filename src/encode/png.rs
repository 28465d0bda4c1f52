use std::path::Path;

use anyhow::Context as _;
use image::{
    ExtendedColorType, ImageEncoder as _, RgbImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::foundation::error::OgResult;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// PNG bytes using the slowest, smallest compression setting.
pub fn encode_png(canvas: &RgbImage) -> OgResult<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgb8,
        )
        .context("encode png")?;
    Ok(buf)
}

pub fn ensure_parent_dir(path: &Path) -> OgResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Writes the canvas to `path` and returns the file size in bytes.
#[tracing::instrument(skip(canvas))]
pub fn save_png(canvas: &RgbImage, path: &Path) -> OgResult<u64> {
    let bytes = encode_png(canvas)?;
    ensure_parent_dir(path)?;
    std::fs::write(path, &bytes).with_context(|| format!("write png '{}'", path.display()))?;
    tracing::info!(bytes = bytes.len(), "png written");
    Ok(bytes.len() as u64)
}

/// `Saved <path>  (<KiB> KB)` with the size floored to whole kibibytes.
pub fn saved_report(path: &Path, bytes: u64) -> String {
    format!("Saved {}  ({} KB)", path.display(), bytes / 1024)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
