//! # swatch-theme — single-seed palette engine
//!
//! Derives a small design-system palette from one base color and renders
//! it into the formats front-end tooling consumes.
//!
//! # Architecture
//!
//! ```text
//! seed: hex string | rand::Rng | text prompt
//!     │
//!     ▼
//! prompt.rs:   prompt → keyword mood + hash-seeded hue/sat/lightness
//!     │
//!     ▼
//! palette.rs:  seed Color → 8 named slots via HSL edits (pure)
//!     │
//!     ├──▶ contrast.rs: readable text color + contrast ratio per swatch
//!     │
//!     ▼
//! export.rs:   CSS variables, Tailwind config, design tokens, share URL
//! ```
//!
//! Every function here is a pure transform. The only randomness is the
//! generator handed to [`Palette::random_with`].

pub mod contrast;
pub mod error;
pub mod export;
pub mod palette;
pub mod prompt;

pub use error::ExportError;
pub use palette::{Palette, Slot};
pub use prompt::Mood;
pub use swatch_color::{Color, ColorError, Hsl};
