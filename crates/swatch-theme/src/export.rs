//! Palette exports — the text a user copies out of the generator.
//!
//! | Export              | Shape                                              |
//! |---------------------|----------------------------------------------------|
//! | [`css_variables`]   | `:root { --primary-light: #…; … }`                 |
//! | [`tailwind_config`] | `module.exports = { theme: { extend: { colors } } }` |
//! | [`design_tokens`]   | `{ "color": { "<slot>": { "value", "type" } } }`   |
//! | [`share_url`]       | `<base>?color=rrggbb`                              |
//!
//! A share link carries only the seed; [`palette_from_query`] re-derives
//! the full palette from it.

use std::fmt::Write as _;

use serde_json::{Map, Value, json};
use swatch_color::Color;
use tracing::debug;

use crate::error::ExportError;
use crate::palette::{Palette, Slot};

/// Query parameter that carries the seed in share links.
pub const SHARE_PARAM: &str = "color";

// ---------------------------------------------------------------------------
// CSS
// ---------------------------------------------------------------------------

/// A `:root` block with one custom property per slot, kebab-cased.
#[must_use]
pub fn css_variables(palette: &Palette) -> String {
    let mut css = String::from(":root {\n");
    for (slot, color) in palette.iter() {
        // Writing to a String cannot fail.
        let _ = writeln!(css, "  --{}: {color};", slot.kebab_name());
    }
    css.push('}');
    css
}

// ---------------------------------------------------------------------------
// Tailwind
// ---------------------------------------------------------------------------

/// A `tailwind.config.js` module extending the theme with the palette.
#[must_use]
pub fn tailwind_config(palette: &Palette) -> String {
    format!(
        r#"/** @type {{import('tailwindcss').Config}} */
module.exports = {{
  content: [
    "./app/**/*.{{js,ts,jsx,tsx}}",
    "./components/**/*.{{js,ts,jsx,tsx}}",
  ],
  theme: {{
    extend: {{
      colors: {{
        primary: {{
          DEFAULT: '{primary}',
          light: '{primary_light}',
          dark: '{primary_dark}',
        }},
        secondary: '{secondary}',
        accent: '{accent}',
        neutral: {{
          DEFAULT: '{neutral}',
          light: '{neutral_light}',
          dark: '{neutral_dark}',
        }}
      }}
    }}
  }},
  plugins: [],
}}"#,
        primary = palette.primary,
        primary_light = palette.primary_light,
        primary_dark = palette.primary_dark,
        secondary = palette.secondary,
        accent = palette.accent,
        neutral = palette.neutral,
        neutral_light = palette.neutral_light,
        neutral_dark = palette.neutral_dark,
    )
}

// ---------------------------------------------------------------------------
// Design tokens
// ---------------------------------------------------------------------------

/// Which slots a token document covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenScope {
    /// All eight slots.
    #[default]
    Full,
    /// `primary`, `primary-light` and `primary-dark` only. Older exports
    /// used this shape.
    PrimaryOnly,
}

impl TokenScope {
    const fn slots(self) -> &'static [Slot] {
        match self {
            Self::Full => &Slot::ALL,
            Self::PrimaryOnly => &Slot::PRIMARY_FAMILY,
        }
    }
}

/// Figma-style token document for `palette`.
///
/// Keys keep palette order (`serde_json` is built with `preserve_order`).
#[must_use]
pub fn design_tokens(palette: &Palette, scope: TokenScope) -> Value {
    let colors: Map<String, Value> = scope
        .slots()
        .iter()
        .map(|&slot| {
            let token = json!({ "value": palette.get(slot), "type": "color" });
            (slot.kebab_name().to_owned(), token)
        })
        .collect();
    json!({ "color": colors })
}

/// [`design_tokens`] pretty-printed with two-space indentation.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] if JSON encoding fails.
pub fn design_tokens_json(palette: &Palette, scope: TokenScope) -> Result<String, ExportError> {
    let json = serde_json::to_string_pretty(&design_tokens(palette, scope))?;
    debug!(bytes = json.len(), ?scope, "rendered design tokens");
    Ok(json)
}

// ---------------------------------------------------------------------------
// Share links
// ---------------------------------------------------------------------------

/// A link that reopens `palette`: `<base>?color=rrggbb`.
///
/// A base that already carries a query gets the parameter appended with
/// `&`. Only the seed travels; the receiver re-derives the other slots.
#[must_use]
pub fn share_url(base: &str, palette: &Palette) -> String {
    let separator = if base.ends_with(['?', '&']) {
        ""
    } else if base.contains('?') {
        "&"
    } else {
        "?"
    };
    format!(
        "{base}{separator}{SHARE_PARAM}={}",
        palette.primary.to_hex_digits()
    )
}

/// The seed color in a share link, if the link carries one.
///
/// Accepts a full URL, a bare query string (`?color=…` or `color=…`), with
/// the value written as `rrggbb`, `#rrggbb` or `%23rrggbb`.
///
/// Returns `None` when there is no `color` parameter.
#[must_use]
pub fn color_from_query(input: &str) -> Option<Result<Color, swatch_color::ColorError>> {
    let query = input.split_once('?').map_or(input, |(_, q)| q);

    let value = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == SHARE_PARAM).then_some(value)
    })?;

    let value = value
        .strip_prefix("%23")
        .or_else(|| value.strip_prefix('#'))
        .unwrap_or(value);
    // Anything after a further `#` is the page fragment.
    let digits = value.split('#').next().unwrap_or(value);
    Some(Color::from_hex(digits))
}

/// Re-derive the palette a share link points at.
///
/// # Errors
///
/// Returns [`ExportError::Color`] when the `color` parameter is present
/// but is not a hex color.
pub fn palette_from_query(input: &str) -> Result<Option<Palette>, ExportError> {
    let seed = color_from_query(input).transpose()?;
    Ok(seed.map(Palette::generate))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
