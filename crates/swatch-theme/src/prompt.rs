//! Prompt-seeded themes — text in, reproducible palette out.
//!
//! A prompt picks a hue family from keywords ("ocean", "sunset", ...) and a
//! position inside that family from a hash of the whole text. The same
//! prompt always lands on the same seed, which is what lets a shared prompt
//! reproduce a shared palette.

use rand::Rng;
use swatch_color::Hsl;
use tracing::{debug, warn};

use crate::palette::Palette;

// ---------------------------------------------------------------------------
// PromptRng — sine-hash generator
// ---------------------------------------------------------------------------

/// The deterministic generator behind prompt seeding.
///
/// Takes the fractional part of `sin(seed) * 10000` once and scales it into
/// each requested range. Every draw reuses that fraction, so the generator
/// has no state to advance; this keeps seeds identical to the ones earlier
/// share links were built from.
#[derive(Debug, Clone, Copy)]
pub struct PromptRng {
    fraction: f64,
}

impl PromptRng {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(seed: i64) -> Self {
        // Prompt hashes stay far below 2^53, so the conversion is exact.
        let x = (seed as f64).sin() * 10_000.0;
        Self {
            fraction: x - x.floor(),
        }
    }

    /// Whole number in `[min, max]`, both ends inclusive.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn range(self, min: u16, max: u16) -> u16 {
        let span = f64::from(max - min + 1);
        // fraction < 1.0, so the offset is below `span` and fits in u16.
        min + (self.fraction * span).floor() as u16
    }
}

/// Fold a prompt into its seed: `(hash << 5) - hash + unit` per character.
///
/// Only the shift works on 32 bits and wraps; the subtraction and the
/// addition do not, so the running hash drifts outside the `i32` range on
/// longer prompts. Seeds depend on this exact value.
///
/// Each character contributes its first UTF-16 code unit, so characters
/// outside the Basic Multilingual Plane hash by their high surrogate.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn prompt_hash(text: &str) -> i64 {
    text.chars().fold(0i64, |hash, ch| {
        let mut units = [0u16; 2];
        let unit = ch.encode_utf16(&mut units)[0];
        // The cast keeps the low 32 bits, which is what the shift sees.
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        shifted - hash + i64::from(unit)
    })
}

// ---------------------------------------------------------------------------
// Mood — keyword hue buckets
// ---------------------------------------------------------------------------

/// Hue family selected by prompt keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// "warm", "sunset", "fire" — oranges and yellows.
    Warm,
    /// "cool", "ocean", "water" — cyans and blues.
    Cool,
    /// "earth", "nature", "green" — yellow-greens and greens.
    Earth,
    /// "vibrant", "rainbow", "colorful" — anywhere on the wheel.
    Vibrant,
    /// No keyword matched — anywhere on the wheel.
    Open,
}

impl Mood {
    /// Keyword moods in match priority order.
    const KEYWORD_MOODS: [Self; 4] = [Self::Warm, Self::Cool, Self::Earth, Self::Vibrant];

    /// The first mood whose keywords appear in `text` (case-insensitive).
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let lower = text.to_lowercase();
        Self::KEYWORD_MOODS
            .into_iter()
            .find(|mood| mood.keywords().iter().any(|kw| lower.contains(kw)))
            .unwrap_or(Self::Open)
    }

    /// Substrings that select this mood.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Warm => &["warm", "sunset", "fire"],
            Self::Cool => &["cool", "ocean", "water"],
            Self::Earth => &["earth", "nature", "green"],
            Self::Vibrant => &["vibrant", "rainbow", "colorful"],
            Self::Open => &[],
        }
    }

    /// `(start, span)` of this mood's hue range, in degrees.
    ///
    /// Hues are drawn from `start + [0, span]`.
    #[must_use]
    pub const fn hue_range(self) -> (u16, u16) {
        match self {
            Self::Warm => (20, 40),
            Self::Cool => (180, 60),
            Self::Earth => (90, 40),
            Self::Vibrant | Self::Open => (0, 360),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Earth => "earth",
            Self::Vibrant => "vibrant",
            Self::Open => "open",
        }
    }
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// The seed color a prompt maps to, or `None` for an empty prompt.
///
/// Saturation lands in `[70, 95]` and lightness in `[45, 65]`.
#[must_use]
pub fn prompt_seed(prompt: &str) -> Option<Hsl> {
    if prompt.is_empty() {
        return None;
    }

    let lower = prompt.to_lowercase();
    let mood = Mood::detect(&lower);
    let hash = prompt_hash(&lower);
    let rng = PromptRng::new(hash);

    let (start, span) = mood.hue_range();
    // Hsl::new folds a hue of 360 back to 0.
    let seed = Hsl::new(
        start + rng.range(0, span),
        70 + u8::try_from(rng.range(0, 25)).unwrap_or(0),
        45 + u8::try_from(rng.range(0, 20)).unwrap_or(0),
    );
    debug!(mood = mood.name(), hash, %seed, "prompt seed");
    Some(seed)
}

impl Palette {
    /// A palette seeded by a text prompt.
    ///
    /// The same prompt always yields the same palette. An empty prompt
    /// carries no signal and falls back to [`Palette::random`].
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        Self::from_prompt_with(prompt, &mut rand::rng())
    }

    /// Like [`from_prompt`](Self::from_prompt), drawing the empty-prompt
    /// fallback from `rng`.
    pub fn from_prompt_with<R: Rng + ?Sized>(prompt: &str, rng: &mut R) -> Self {
        prompt_seed(prompt).map_or_else(
            || {
                warn!("empty prompt, using a random theme");
                Self::random_with(rng)
            },
            |seed| Self::generate(seed.to_color()),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
