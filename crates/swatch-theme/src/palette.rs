//! Palette generation — one seed color to eight named swatches.
//!
//! The seed is converted to HSL once, and every derived slot is a small,
//! fixed edit of that HSL triple: lighter, darker, a rotated hue, or a
//! desaturated tone. Lightness is kept inside `[5, 95]` and the neutral
//! saturation never drops below 5, so no slot collapses to pure black,
//! pure white, or flat gray.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;
use swatch_color::{Color, ColorError, Hsl};
use tracing::debug;

// ---------------------------------------------------------------------------
// Derivation constants
// ---------------------------------------------------------------------------

/// Lightness floor and ceiling for every derived slot.
pub const LIGHTNESS_MIN: u8 = 5;
pub const LIGHTNESS_MAX: u8 = 95;

/// Saturation floor for the neutral family.
pub const NEUTRAL_SATURATION_MIN: u8 = 5;

const PRIMARY_STEP: u8 = 20;
const NEUTRAL_STEP: u8 = 30;
const NEUTRAL_DESATURATION: u8 = 70;
const SECONDARY_HUE_SHIFT: u16 = 30;
// Near-complementary without sitting exactly opposite the primary.
const ACCENT_HUE_SHIFT: u16 = 150;

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// One of the eight named positions in a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Primary,
    PrimaryLight,
    PrimaryDark,
    Secondary,
    Accent,
    Neutral,
    NeutralLight,
    NeutralDark,
}

impl Slot {
    /// Every slot, in palette order.
    pub const ALL: [Self; 8] = [
        Self::Primary,
        Self::PrimaryLight,
        Self::PrimaryDark,
        Self::Secondary,
        Self::Accent,
        Self::Neutral,
        Self::NeutralLight,
        Self::NeutralDark,
    ];

    /// The three slots of the primary family.
    pub const PRIMARY_FAMILY: [Self; 3] = [Self::Primary, Self::PrimaryLight, Self::PrimaryDark];

    /// camelCase name, as used by JavaScript callers (`primaryLight`).
    #[must_use]
    pub const fn camel_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryLight => "primaryLight",
            Self::PrimaryDark => "primaryDark",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::NeutralLight => "neutralLight",
            Self::NeutralDark => "neutralDark",
        }
    }

    /// kebab-case name, as used in CSS variables and tokens (`primary-light`).
    #[must_use]
    pub const fn kebab_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryLight => "primary-light",
            Self::PrimaryDark => "primary-dark",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
            Self::NeutralLight => "neutral-light",
            Self::NeutralDark => "neutral-dark",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.camel_name())
    }
}

/// Returned when a slot name matches neither spelling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown palette slot {0:?}")]
pub struct UnknownSlot(pub String);

impl FromStr for Slot {
    type Err = UnknownSlot;

    /// Accepts `primaryLight`, `primary-light` or `primary_light`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|slot| slot.camel_name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownSlot(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Per-slot HSL derivation
// ---------------------------------------------------------------------------

/// The HSL triple a slot takes for a given seed.
///
/// For [`Slot::Primary`] this is the seed itself; the palette stores the
/// seed color unchanged rather than this rounded value.
#[must_use]
pub fn slot_hsl(base: Hsl, slot: Slot) -> Hsl {
    let neutral = base.with_saturation(
        base.s
            .saturating_sub(NEUTRAL_DESATURATION)
            .max(NEUTRAL_SATURATION_MIN),
    );
    match slot {
        Slot::Primary => base,
        Slot::PrimaryLight => base.with_lightness(lighten(base.l, PRIMARY_STEP)),
        Slot::PrimaryDark => base.with_lightness(darken(base.l, PRIMARY_STEP)),
        Slot::Secondary => base.shift_hue(SECONDARY_HUE_SHIFT),
        Slot::Accent => base.shift_hue(ACCENT_HUE_SHIFT),
        Slot::Neutral => neutral,
        Slot::NeutralLight => neutral.with_lightness(lighten(base.l, NEUTRAL_STEP)),
        Slot::NeutralDark => neutral.with_lightness(darken(base.l, NEUTRAL_STEP)),
    }
}

fn lighten(l: u8, step: u8) -> u8 {
    l.saturating_add(step).min(LIGHTNESS_MAX)
}

fn darken(l: u8, step: u8) -> u8 {
    l.saturating_sub(step).max(LIGHTNESS_MIN)
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The eight-slot palette derived from one seed color.
///
/// A `Palette` is a plain value: it is recomputed whenever the seed
/// changes, and editing operations such as [`with_swapped`](Self::with_swapped)
/// return a new palette.
///
/// Serializes as a camelCase object of hex strings, the same shape the
/// browser front end renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub secondary: Color,
    pub accent: Color,
    pub neutral: Color,
    pub neutral_light: Color,
    pub neutral_dark: Color,
}

impl Palette {
    /// Derive a palette from a seed color.
    ///
    /// Deterministic: the same seed always produces the same eight colors,
    /// and `primary` is the seed itself, not an HSL round trip of it.
    #[must_use]
    pub fn generate(seed: Color) -> Self {
        let base = seed.to_hsl();
        debug!(%seed, %base, "deriving palette");
        let derive = |slot| slot_hsl(base, slot).to_color();

        Self {
            primary: seed,
            primary_light: derive(Slot::PrimaryLight),
            primary_dark: derive(Slot::PrimaryDark),
            secondary: derive(Slot::Secondary),
            accent: derive(Slot::Accent),
            neutral: derive(Slot::Neutral),
            neutral_light: derive(Slot::NeutralLight),
            neutral_dark: derive(Slot::NeutralDark),
        }
    }

    /// Parse a hex seed and derive its palette.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] when `hex` is not a 3- or
    /// 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Color::from_hex(hex).map(Self::generate)
    }

    /// A palette from a random vivid mid-tone seed, using the thread-local
    /// generator. Not reproducible; see [`random_with`](Self::random_with).
    #[must_use]
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    /// A palette from a random seed drawn from `rng`.
    ///
    /// Hue is uniform over `[0, 360)`, saturation over `[60, 95)` and
    /// lightness over `[40, 70)`, all whole numbers.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let seed = Hsl::new(
            rng.random_range(0..360),
            rng.random_range(60..95),
            rng.random_range(40..70),
        );
        debug!(%seed, "random seed");
        Self::generate(seed.to_color())
    }

    /// The color in `slot`.
    #[must_use]
    pub const fn get(&self, slot: Slot) -> Color {
        match slot {
            Slot::Primary => self.primary,
            Slot::PrimaryLight => self.primary_light,
            Slot::PrimaryDark => self.primary_dark,
            Slot::Secondary => self.secondary,
            Slot::Accent => self.accent,
            Slot::Neutral => self.neutral,
            Slot::NeutralLight => self.neutral_light,
            Slot::NeutralDark => self.neutral_dark,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Color {
        match slot {
            Slot::Primary => &mut self.primary,
            Slot::PrimaryLight => &mut self.primary_light,
            Slot::PrimaryDark => &mut self.primary_dark,
            Slot::Secondary => &mut self.secondary,
            Slot::Accent => &mut self.accent,
            Slot::Neutral => &mut self.neutral,
            Slot::NeutralLight => &mut self.neutral_light,
            Slot::NeutralDark => &mut self.neutral_dark,
        }
    }

    /// A copy of this palette with the colors in `a` and `b` exchanged.
    ///
    /// This is how a front end reassigns swatches (e.g. drag-and-drop)
    /// without touching the palette it was given.
    #[must_use]
    pub fn with_swapped(&self, a: Slot, b: Slot) -> Self {
        let mut next = *self;
        *next.slot_mut(a) = self.get(b);
        *next.slot_mut(b) = self.get(a);
        next
    }

    /// `(slot, color)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Color)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blue() -> Palette {
        Palette::from_hex("#3b82f6").unwrap()
    }

    // ── Slot names ──────────────────────────────────────────────────

    #[test]
    fn slot_names() {
        assert_eq!(Slot::PrimaryLight.camel_name(), "primaryLight");
        assert_eq!(Slot::NeutralDark.kebab_name(), "neutral-dark");
        assert_eq!(Slot::Accent.to_string(), "accent");
    }

    #[test]
    fn slot_parses_every_spelling() {
        for slot in Slot::ALL {
            assert_eq!(slot.camel_name().parse::<Slot>().unwrap(), slot);
            assert_eq!(slot.kebab_name().parse::<Slot>().unwrap(), slot);
        }
        assert_eq!("NEUTRAL_LIGHT".parse::<Slot>().unwrap(), Slot::NeutralLight);
        assert_eq!(
            "tertiary".parse::<Slot>(),
            Err(UnknownSlot("tertiary".to_owned()))
        );
    }

    // ── Derivation ──────────────────────────────────────────────────

    #[test]
    fn primary_is_seed_unchanged() {
        // #3b82f6 does not survive an HSL round trip exactly.
        assert_eq!(blue().primary.to_hex(), "#3b82f6");
    }

    #[test]
    fn tailwind_blue_palette() {
        let p = blue();
        assert_eq!(slot_hsl(p.primary.to_hsl(), Slot::PrimaryLight), Hsl::new(217, 91, 80));
        assert_eq!(p.primary_light.to_hex(), "#9ec1fa");
        assert_eq!(slot_hsl(p.primary.to_hsl(), Slot::PrimaryDark), Hsl::new(217, 91, 40));
        assert_eq!(slot_hsl(p.primary.to_hsl(), Slot::Secondary), Hsl::new(247, 91, 60));
        assert_eq!(slot_hsl(p.primary.to_hsl(), Slot::Accent), Hsl::new(7, 91, 60));
        assert_eq!(slot_hsl(p.primary.to_hsl(), Slot::Neutral), Hsl::new(217, 21, 60));
        assert_eq!(slot_hsl(p.primary.to_hsl(), Slot::NeutralLight), Hsl::new(217, 21, 90));
        assert_eq!(slot_hsl(p.primary.to_hsl(), Slot::NeutralDark), Hsl::new(217, 21, 30));
    }

    #[test]
    fn lightness_is_clamped() {
        let light = Hsl::new(10, 50, 90);
        assert_eq!(slot_hsl(light, Slot::PrimaryLight).l, 95);
        assert_eq!(slot_hsl(light, Slot::NeutralLight).l, 95);

        let dark = Hsl::new(10, 50, 12);
        assert_eq!(slot_hsl(dark, Slot::PrimaryDark).l, 5);
        assert_eq!(slot_hsl(dark, Slot::NeutralDark).l, 5);
    }

    #[test]
    fn neutral_saturation_has_a_floor() {
        assert_eq!(slot_hsl(Hsl::new(0, 40, 50), Slot::Neutral).s, 5);
        assert_eq!(slot_hsl(Hsl::new(0, 0, 50), Slot::NeutralDark).s, 5);
        assert_eq!(slot_hsl(Hsl::new(0, 100, 50), Slot::NeutralLight).s, 30);
    }

    #[test]
    fn hue_shifts_wrap() {
        let base = Hsl::new(340, 80, 50);
        assert_eq!(slot_hsl(base, Slot::Secondary).h, 10);
        assert_eq!(slot_hsl(base, Slot::Accent).h, 130);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(blue(), blue());
        assert_eq!(Palette::from_hex("#abc").unwrap(), Palette::from_hex("#aabbcc").unwrap());
    }

    #[test]
    fn invalid_seed_is_an_error() {
        assert!(matches!(Palette::from_hex("#zzz"), Err(ColorError::InvalidFormat(_))));
    }

    // ── Random seeds ────────────────────────────────────────────────

    #[test]
    fn random_with_seeded_rng_is_reproducible() {
        let a = Palette::random_with(&mut StdRng::seed_from_u64(7));
        let b = Palette::random_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn random_seeds_are_vivid_mid_tones() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let hsl = Palette::random_with(&mut rng).primary.to_hsl();
            assert!((58..=96).contains(&hsl.s), "saturation {}", hsl.s);
            assert!((39..=70).contains(&hsl.l), "lightness {}", hsl.l);
        }
    }

    #[test]
    fn random_hues_cover_the_wheel() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut sextants = [0u32; 6];
        for _ in 0..600 {
            let h = Palette::random_with(&mut rng).primary.to_hsl().h;
            sextants[usize::from(h / 60)] += 1;
        }
        assert!(sextants.iter().all(|&n| n > 50), "uneven hue spread: {sextants:?}");
    }

    #[test]
    fn thread_rng_palette_has_all_slots() {
        assert_eq!(Palette::random().iter().count(), 8);
    }

    // ── Swap and iteration ──────────────────────────────────────────

    #[test]
    fn swap_returns_new_palette() {
        let original = blue();
        let swapped = original.with_swapped(Slot::Primary, Slot::Accent);

        assert_eq!(swapped.primary, original.accent);
        assert_eq!(swapped.accent, original.primary);
        assert_eq!(swapped.secondary, original.secondary);
        // The original is untouched.
        assert_eq!(original, blue());
    }

    #[test]
    fn swap_with_self_is_identity() {
        assert_eq!(blue().with_swapped(Slot::Neutral, Slot::Neutral), blue());
    }

    #[test]
    fn iter_follows_slot_order() {
        let slots: Vec<Slot> = blue().iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, Slot::ALL.to_vec());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(blue()).unwrap();
        assert_eq!(json["primary"], "#3b82f6");
        assert_eq!(json["primaryLight"], "#9ec1fa");
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
