// SPDX-License-Identifier: MIT
//
// swatch color type — a plain 24-bit sRGB triple.
//
// Every color that crosses the engine boundary is a hex string, so the
// canonical representation is the one hex can express exactly: three
// 8-bit channels. Parsing accepts the forms people actually type
// (`#abc`, `abc`, `#aabbcc`, `AABBCC`); formatting always produces
// lowercase `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::hsl::Hsl;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8 bits per channel.
///
/// # Examples
///
/// ```
/// use swatch_color::Color;
///
/// let blue = Color::from_hex("#3b82f6").unwrap();
/// assert_eq!(blue, Color::rgb(0x3b, 0x82, 0xf6));
///
/// // Shorthand is expanded, output is always six lowercase digits.
/// assert_eq!(Color::from_hex("F80").unwrap().to_hex(), "#ff8800");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit channel values.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from channel values in the 0.0–1.0 range.
    ///
    /// Each channel is scaled to 0–255 and rounded half away from zero.
    /// Out-of-range inputs are clamped.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
        }
    }

    /// Parse a hex color string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the `#`, in any case.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for any other length or for a
    /// non-hex digit.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidFormat(s.to_owned()))
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Channels as floats in the 0.0–1.0 range.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Convert to rounded HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_color(self)
    }

    /// Format as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as lowercase `rrggbb` without the leading `#`.
    ///
    /// This is the form carried in share links (`?color=3b82f6`).
    #[must_use]
    pub fn to_hex_digits(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

// Serialized as the `#rrggbb` string so palettes read naturally in JSON.
#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half away from zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::from_hex("#ff8000").unwrap();
        assert_eq!(color, Color::rgb(255, 128, 0));
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::from_hex("#f80").unwrap();
        assert_eq!(color, Color::rgb(255, 136, 0));
    }

    #[test]
    fn hex_parsing_no_hash() {
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hex("0f0").unwrap(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn hex_parsing_mixed_case() {
        assert_eq!(Color::from_hex("#3B82f6").unwrap(), Color::rgb(0x3b, 0x82, 0xf6));
    }

    #[test]
    fn hex_parsing_invalid() {
        for bad in ["", "#", "xyz", "#zzz", "#12345", "#1234567", "#ff00gg", "##fff"] {
            assert!(
                matches!(Color::from_hex(bad), Err(ColorError::InvalidFormat(ref s)) if s == bad),
                "expected InvalidFormat for {bad:?}"
            );
        }
    }

    #[test]
    fn hex_parsing_rejects_multibyte_input() {
        // Six bytes, but not six hex digits.
        assert!(Color::from_hex("#ééé").is_err());
    }

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn to_hex_is_lowercase_and_padded() {
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Color::rgb(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
    }

    #[test]
    fn shorthand_normalizes_to_six_digits() {
        assert_eq!(Color::from_hex("#ABC").unwrap().to_hex(), "#aabbcc");
    }

    #[test]
    fn hex_digits_drop_the_hash() {
        assert_eq!(Color::rgb(0x3b, 0x82, 0xf6).to_hex_digits(), "3b82f6");
    }

    #[test]
    fn display_and_from_str_agree() {
        let color: Color = "#3b82f6".parse().unwrap();
        assert_eq!(color.to_string(), "#3b82f6");
        assert_eq!(format!("{color:?}"), "Color(#3b82f6)");
    }

    // ── Unit conversion ──────────────────────────────────────────────────

    #[test]
    fn from_unit_rounds_and_clamps() {
        assert_eq!(Color::from_unit(0.5, 1.5, -0.2), Color::rgb(128, 255, 0));
        assert_eq!(Color::from_unit(0.0, 1.0, 0.25), Color::rgb(0, 255, 64));
    }

    #[test]
    fn unit_roundtrip_is_exact() {
        let color = Color::rgb(17, 200, 99);
        let (r, g, b) = color.to_unit();
        assert_eq!(Color::from_unit(r, g, b), color);
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0x3b, 0x82, 0xf6)).unwrap();
        assert_eq!(json, "\"#3b82f6\"");
        let back: Color = serde_json::from_str("\"#abc\"").unwrap();
        assert_eq!(back, Color::rgb(0xaa, 0xbb, 0xcc));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
