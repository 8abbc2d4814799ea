// SPDX-License-Identifier: MIT
//
// HSL — the editing space for palette derivation.
//
// Hue is an angle on the color wheel, saturation and lightness are
// percentages. All three are whole numbers: the conversion from RGB
// rounds, and the conversion back quantizes to 8-bit channels, so the
// pair is a near-inverse rather than an exact one.
//
// Single-character names (r, g, b, h, s, l, p, q, t) follow the usual
// notation for these formulas.
#![allow(clippy::many_single_char_names)]

use std::fmt;

use crate::color::Color;
use crate::error::ColorError;

/// A color in rounded HSL form.
///
/// - `h`: hue in degrees, `0..360`
/// - `s`: saturation in percent, `0..=100`
/// - `l`: lightness in percent, `0..=100`
///
/// # Examples
///
/// ```
/// use swatch_color::{Color, Hsl};
///
/// let hsl = Hsl::from_hex("#3b82f6").unwrap();
/// assert_eq!(hsl, Hsl::new(217, 91, 60));
///
/// let lighter = hsl.with_lightness(80);
/// assert_eq!(lighter.to_color().to_hex(), "#9ec1fa");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Create an HSL value, wrapping the hue into `0..360` and clamping
    /// saturation and lightness to 100.
    #[must_use]
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h % 360,
            s: s.min(100),
            l: l.min(100),
        }
    }

    /// Parse a hex string and convert it to HSL.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] when the string is not a
    /// 3- or 6-digit hex color.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        Color::from_hex(s).map(Self::from_color)
    }

    /// Convert an RGB color to rounded HSL.
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let (h, s, l) = rgb_to_hsl(color.to_unit());
        Self {
            h: round_hue(h * 360.0),
            s: round_percent(s * 100.0),
            l: round_percent(l * 100.0),
        }
    }

    /// Convert back to an 8-bit RGB color.
    #[must_use]
    pub fn to_color(self) -> Color {
        let (r, g, b) = hsl_to_rgb(
            f64::from(self.h) / 360.0,
            f64::from(self.s) / 100.0,
            f64::from(self.l) / 100.0,
        );
        Color::from_unit(r, g, b)
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_color().to_hex()
    }

    // ─── Field edits ─────────────────────────────────────────────────────

    /// Rotate the hue by `degrees`, wrapping at 360.
    #[must_use]
    pub fn shift_hue(self, degrees: u16) -> Self {
        let h = (u32::from(self.h) + u32::from(degrees)) % 360;
        Self {
            // h < 360, so the narrowing is lossless.
            h: u16::try_from(h).unwrap_or(0),
            ..self
        }
    }

    /// Replace the saturation (clamped to 100).
    #[must_use]
    pub fn with_saturation(self, s: u8) -> Self {
        Self {
            s: s.min(100),
            ..self
        }
    }

    /// Replace the lightness (clamped to 100).
    #[must_use]
    pub fn with_lightness(self, l: u8) -> Self {
        Self {
            l: l.min(100),
            ..self
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl.to_color()
    }
}

// ─── Conversion math ─────────────────────────────────────────────────────────
//
// Both directions work on unit floats: RGB channels, hue as a fraction of
// a turn, saturation and lightness as fractions.

/// RGB (0–1) → HSL (all components 0–1).
fn rgb_to_hsl((r, g, b): (f64, f64, f64)) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Sextant offset depends on which channel is the maximum.
    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// HSL (all components 0–1) → RGB (0–1).
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

/// Piecewise channel value for hue position `t` (taken mod 1).
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return (q - p).mul_add(6.0 * t, p);
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p);
    }
    p
}

/// Round a hue in degrees; 359.5 and above wrap to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_hue(degrees: f64) -> u16 {
    // Clamp keeps the cast in range; the modulo folds 360 back to 0.
    (degrees.round().clamp(0.0, 360.0) as u16) % 360
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(percent: f64) -> u8 {
    percent.round().clamp(0.0, 100.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
