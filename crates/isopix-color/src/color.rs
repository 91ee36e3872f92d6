use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "ColorDef")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_channels(c: [u8; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }

    /// Parses `#rrggbb`, `#rgb` or `rgb(r, g, b)`.
    pub fn parse(s: &str) -> Result<Color, ColorError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(s.to_string()));
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            return parse_rgb_fn(body).ok_or_else(|| ColorError::InvalidRgb(s.to_string()));
        }
        Err(ColorError::UnknownNotation(s.to_string()))
    }

    /// CSS functional notation, e.g. `rgb(12,34,56)`.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            Some(Color::rgb((v >> 16) as u8, (v >> 8 & 0xFF) as u8, (v & 0xFF) as u8))
        }
        3 => {
            let v = u16::from_str_radix(hex, 16).ok()?;
            let expand = |n: u16| (n as u8 & 0x0F) * 0x11;
            Some(Color::rgb(expand(v >> 8), expand(v >> 4), expand(v)))
        }
        _ => None,
    }
}

fn parse_rgb_fn(body: &str) -> Option<Color> {
    let mut parts = body.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Color::rgb(r, g, b))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

// Config files accept either a CSS string or a `[r, g, b]` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorDef {
    Css(String),
    Channels([u8; 3]),
}

impl TryFrom<ColorDef> for Color {
    type Error = ColorError;
    fn try_from(def: ColorDef) -> Result<Self, Self::Error> {
        match def {
            ColorDef::Css(s) => Color::parse(&s),
            ColorDef::Channels(c) => Ok(Color::from_channels(c)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    InvalidHex(String),
    InvalidRgb(String),
    UnknownNotation(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHex(s) => write!(f, "invalid hex color: {}", s),
            ColorError::InvalidRgb(s) => write!(f, "invalid rgb() color: {}", s),
            ColorError::UnknownNotation(s) => {
                write!(f, "unrecognized color notation (expected #rrggbb or rgb(r,g,b)): {}", s)
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_six_and_three_digits() {
        assert_eq!(Color::parse("#ff8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(Color::parse("#ABCDEF").unwrap(), Color::rgb(0xab, 0xcd, 0xef));
        assert_eq!(Color::parse("#f80").unwrap(), Color::rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn parses_rgb_function() {
        assert_eq!(Color::parse("rgb(1, 2, 3)").unwrap(), Color::rgb(1, 2, 3));
        assert_eq!(Color::parse(" rgb(255,0,10) ").unwrap(), Color::rgb(255, 0, 10));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(matches!(Color::parse("#12345"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Color::parse("#gggggg"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Color::parse("rgb(1,2)"), Err(ColorError::InvalidRgb(_))));
        assert!(matches!(Color::parse("rgb(1,2,300)"), Err(ColorError::InvalidRgb(_))));
        assert!(matches!(Color::parse("red"), Err(ColorError::UnknownNotation(_))));
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
        assert_eq!(Color::rgb(1, 2, 3).to_css_rgb(), "rgb(1,2,3)");
    }

    #[test]
    fn deserializes_string_or_array() {
        #[derive(Deserialize)]
        struct Holder {
            a: Color,
            b: Color,
        }
        let h: Holder = toml::from_str("a = \"#102030\"\nb = [4, 5, 6]\n").unwrap();
        assert_eq!(h.a, Color::rgb(0x10, 0x20, 0x30));
        assert_eq!(h.b, Color::rgb(4, 5, 6));
        assert!(toml::from_str::<Holder>("a = \"nope\"\nb = [1, 2, 3]\n").is_err());
    }
}
