use serde::{Deserialize, Serialize};

use crate::foundation::core::{Rgb8, Rgba8};

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Hex(String),
    Arr(Vec<u8>),
}

fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }
    match s.len() {
        6 => Ok(Rgba8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        )),
        8 => Ok(Rgba8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

fn from_repr(repr: Repr) -> Result<Rgba8, String> {
    match repr {
        Repr::Hex(s) => parse_hex(&s),
        Repr::Arr(v) => match v.as_slice() {
            [r, g, b] => Ok(Rgba8::new(*r, *g, *b, 255)),
            [r, g, b, a] => Ok(Rgba8::new(*r, *g, *b, *a)),
            _ => Err("color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])".to_owned()),
        },
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        from_repr(Repr::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let c = from_repr(Repr::deserialize(deserializer)?).map_err(serde::de::Error::custom)?;
        if c.a != 255 {
            return Err(serde::de::Error::custom(
                "opaque color expected; drop the alpha component",
            ));
        }
        Ok(c.rgb())
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        ))
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/color.rs"]
mod tests;
