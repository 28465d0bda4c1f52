use crate::foundation::error::{OgError, OgResult};

pub use kurbo::Point;

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 16_384;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> OgResult<Self> {
        if width == 0 || height == 0 {
            return Err(OgError::validation("canvas width/height must be > 0"));
        }
        if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(OgError::validation(format!(
                "canvas {width}x{height} exceeds {MAX_CANVAS_SIDE} px per side"
            )));
        }
        // RGBA layers are the largest buffers allocated per canvas.
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| OgError::validation("canvas buffer size overflows usize"))?;
        Ok(Self { width, height })
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Straight (non-premultiplied) 8-bit RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear interpolation, truncated toward zero.
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            r: lerp_u8(self.r, to.r, t),
            g: lerp_u8(self.g, to.g, t),
            b: lerp_u8(self.b, to.b, t),
        }
    }

    /// `self * weight + other * (1 - weight)`, truncated per channel.
    pub fn mix(self, other: Self, weight: f64) -> Self {
        fn mix_u8(a: u8, b: u8, w: f64) -> u8 {
            (f64::from(a) * w + f64::from(b) * (1.0 - w)) as u8
        }

        Self {
            r: mix_u8(self.r, other.r, weight),
            g: mix_u8(self.g, other.g, weight),
            b: mix_u8(self.b, other.b, weight),
        }
    }

    pub fn with_alpha(self, a: u8) -> Rgba8 {
        Rgba8 {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(c: Rgb8) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl From<image::Rgb<u8>> for Rgb8 {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self { r, g, b }
    }
}

/// Straight (non-premultiplied) 8-bit RGBA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }
}

impl From<Rgba8> for image::Rgba<u8> {
    fn from(c: Rgba8) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<image::Rgba<u8>> for Rgba8 {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

/// Two-stop linear gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GradientStops {
    pub start: Rgb8,
    pub end: Rgb8,
}

impl GradientStops {
    pub const fn new(start: Rgb8, end: Rgb8) -> Self {
        Self { start, end }
    }

    pub fn at(self, t: f64) -> Rgb8 {
        self.start.lerp(self.end, t)
    }

    /// Color at index `i` of `len` evenly spaced samples (first = start, last = end).
    pub fn sample(self, i: u32, len: u32) -> Rgb8 {
        self.at(unit_fraction(i, len))
    }
}

pub fn lerp_u8(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    (from + (to - from) * t) as u8
}

/// `i / (len - 1)`; a single-sample axis maps to 0.
pub fn unit_fraction(i: u32, len: u32) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    f64::from(i) / f64::from(len - 1)
}

pub fn mul_div255(x: u8, y: u8) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
