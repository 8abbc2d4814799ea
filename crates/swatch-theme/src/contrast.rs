//! Contrast helpers for putting text on palette swatches.
//!
//! Two different luminance weightings are in play:
//!
//! - Text color choice uses perceived brightness
//!   (0.299 R + 0.587 G + 0.114 B), a quick approximation that picks black
//!   or white for a swatch label.
//! - The reported ratio uses the WCAG weights
//!   (0.2126 R + 0.7152 G + 0.0722 B) and the WCAG ratio formula, but on
//!   raw channel values with no sRGB linearization. The figure is for
//!   display next to a swatch, not for compliance checks.

use swatch_color::{Color, ColorError};
use tracing::warn;

/// Perceived brightness in `[0.0, 1.0]`.
#[must_use]
pub fn perceived_brightness(color: Color) -> f64 {
    let (r, g, b) = color.to_unit();
    0.299f64.mul_add(r, 0.587f64.mul_add(g, 0.114 * b))
}

/// Luminance with WCAG channel weights, applied to unlinearized channels.
///
/// Returns a value in `[0.0, 1.0]` where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_unit();
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Black or white, whichever reads better on `background`.
///
/// Black for backgrounds brighter than 0.5, white otherwise.
#[must_use]
pub fn contrast_color(background: Color) -> Color {
    if perceived_brightness(background) > 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// [`contrast_color`] for raw user input.
///
/// Anything shorter than `#rrggbb` or that fails to parse gets black;
/// this never fails. Input must be a whole color: trailing characters such
/// as an alpha pair (`#00000080`) are rejected rather than ignored, so they
/// get the black fallback instead of the color their first six digits name.
#[must_use]
pub fn contrast_color_for_hex(hex: &str) -> Color {
    if hex.len() < 7 {
        warn!(input = hex, "too short for a contrast color, using black");
        return Color::BLACK;
    }
    Color::from_hex(hex).map_or_else(
        |err| {
            warn!(%err, "unparseable contrast input, using black");
            Color::BLACK
        },
        contrast_color,
    )
}

/// Contrast ratio between two colors, in `[1.0, 21.0]`.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`, symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// The contrast ratio of two hex colors, formatted to one decimal place.
///
/// Produces the number only (`"4.5"`); callers add the `:1` suffix.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if either input is not a hex color.
pub fn contrast_ratio_label(a: &str, b: &str) -> Result<String, ColorError> {
    let ratio = contrast_ratio(Color::from_hex(a)?, Color::from_hex(b)?);
    Ok(format!("{ratio:.1}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
