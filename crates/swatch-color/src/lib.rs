// SPDX-License-Identifier: MIT
//
// swatch-color — color primitives for the swatch palette engine.
//
// Colors enter the system as hex strings typed by a person or picked from
// a swatch, and leave it as hex strings in CSS, Tailwind, and token files.
// In between, palette derivation works in HSL, where "lighter", "darker",
// "duller" and "rotate the hue" are single-field edits.
//
//   "#3b82f6" ─parse─▶ Color (u8 × 3) ─to_hsl─▶ Hsl (integer h/s/l)
//                          ▲                        │
//                          └─────────to_color───────┘
//
// HSL values are rounded to whole degrees and percents, so a round trip
// through HSL may move a channel by one unit. Callers that need the exact
// input keep the original `Color`.

pub mod color;
pub mod error;
pub mod hsl;

pub use color::Color;
pub use error::ColorError;
pub use hsl::Hsl;
