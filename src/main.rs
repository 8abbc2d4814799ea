// SPDX-License-Identifier: MIT
//
// swatch — design-system palettes from a single seed color.
//
// This is the command-line front end over the two library crates:
//
//   swatch-color → Color / Hsl, hex parsing, HSL conversion
//   swatch-theme → palette derivation, prompt seeding, contrast, exports
//
// Every command resolves to one Palette and prints it in one format:
//
//   palette <hex> ─┐
//   random         ├─▶ Palette ─▶ preview | json | css | tailwind | tokens | url
//   prompt <text>  │
//   share <link>   │
//   swap <hex> a b ┘
//
// Exports go to stdout; logs go to stderr so the output can be piped
// straight into a file.

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use swatch_theme::contrast::{
    contrast_color, contrast_color_for_hex, contrast_ratio, contrast_ratio_label,
};
use swatch_theme::export::{self, TokenScope};
use swatch_theme::{Palette, Slot};

/// Seed used when neither an argument nor `SWATCH_COLOR` is given.
const DEFAULT_COLOR: &str = "#3b82f6";

/// Origin share links point at when `SWATCH_BASE_URL` is unset.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// ─── Command line ───────────────────────────────────────────────────────────

/// Generate a design-system palette from a single color.
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a palette from a hex seed color.
    Palette {
        /// Seed color: #RGB or #RRGGBB, `#` optional.
        #[arg(env = "SWATCH_COLOR", default_value = DEFAULT_COLOR)]
        color: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Derive a palette from a random vivid seed.
    Random {
        /// Seed the generator for a reproducible result.
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Derive a palette from a text prompt ("ocean", "warm sunset", ...).
    Prompt {
        /// Prompt text. An empty prompt picks a random theme.
        text: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Re-derive the palette a share link points at.
    Share {
        /// Share URL or query string containing `color=rrggbb`.
        link: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Derive a palette, then exchange the colors of two slots.
    Swap {
        /// Seed color.
        color: String,
        /// First slot (e.g. `primary`, `neutral-light`).
        first: Slot,
        /// Second slot.
        second: Slot,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the readable text color for a background and the contrast ratio.
    Contrast {
        /// Background color.
        color: String,
        /// Color to compare against; defaults to the suggested text color.
        against: Option<String>,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Preview)]
    format: Format,

    /// Origin used for `--format url`.
    #[arg(long, env = "SWATCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// One line per slot: name, hex, text color, contrast ratio.
    Preview,
    /// Slot name → hex object.
    Json,
    /// CSS custom properties.
    Css,
    /// Tailwind config module.
    Tailwind,
    /// Design tokens, all eight slots.
    Tokens,
    /// Design tokens, primary family only.
    TokensPrimary,
    /// Share link.
    Url,
}

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Render `palette` in the requested format.
fn render(palette: &Palette, output: &OutputArgs) -> Result<String> {
    let text = match output.format {
        Format::Preview => preview(palette),
        Format::Json => serde_json::to_string_pretty(palette).context("encoding palette")?,
        Format::Css => export::css_variables(palette),
        Format::Tailwind => export::tailwind_config(palette),
        Format::Tokens => export::design_tokens_json(palette, TokenScope::Full)?,
        Format::TokensPrimary => export::design_tokens_json(palette, TokenScope::PrimaryOnly)?,
        Format::Url => export::share_url(&output.base_url, palette),
    };
    Ok(text)
}

/// Aligned swatch table with the text color each swatch should carry.
fn preview(palette: &Palette) -> String {
    palette
        .iter()
        .map(|(slot, color)| {
            let text = contrast_color(color);
            let ratio = contrast_ratio(color, text);
            format!("{:<13} {color}  text {text}  {ratio:.1}:1", slot.camel_name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(command: Command) -> Result<String> {
    let (palette, output) = match command {
        Command::Palette { color, output } => {
            let palette = Palette::from_hex(&color).context("reading seed color")?;
            (palette, output)
        }
        Command::Random { seed, output } => {
            let palette = match seed {
                Some(seed) => Palette::random_with(&mut StdRng::seed_from_u64(seed)),
                None => Palette::random(),
            };
            info!(seed = %palette.primary, "random theme");
            (palette, output)
        }
        Command::Prompt { text, output } => (Palette::from_prompt(&text), output),
        Command::Share { link, output } => {
            let Some(palette) =
                export::palette_from_query(&link).context("reading share link")?
            else {
                bail!("share link has no `{}` parameter", export::SHARE_PARAM);
            };
            (palette, output)
        }
        Command::Swap {
            color,
            first,
            second,
            output,
        } => {
            let palette = Palette::from_hex(&color).context("reading seed color")?;
            debug!(%first, %second, "swapping slots");
            (palette.with_swapped(first, second), output)
        }
        Command::Contrast { color, against } => {
            return contrast_report(&color, against.as_deref());
        }
    };
    render(&palette, &output)
}

fn contrast_report(color: &str, against: Option<&str>) -> Result<String> {
    let text = contrast_color_for_hex(color);
    let other = against.map_or_else(|| text.to_hex(), str::to_owned);
    let ratio = contrast_ratio_label(color, &other).context("computing contrast ratio")?;
    Ok(format!("text: {text}\nratio: {ratio}:1"))
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(text) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{text}") {
                eprintln!("swatch: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("swatch: {e:#}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
