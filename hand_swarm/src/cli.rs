//! Command-line options.

use clap::{ArgAction, Parser, ValueEnum};
use glyph_swarm::config::{DEFAULT_ALPHA_THRESHOLD, DEFAULT_GAP};
use glyph_swarm::{SwarmConfig, Variant};

use crate::app::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "hand_swarm")]
#[command(about = "Hand-gesture driven glyph swarm", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Which gesture → mode table to use
    #[arg(long, value_enum, default_value_t = CliVariant::Swarm)]
    pub variant: CliVariant,

    /// Hue-coloured particles with a soft halo
    #[arg(long)]
    pub glow: bool,

    /// Initial window width (px)
    #[arg(long, default_value_t = 1200)]
    pub width: usize,

    /// Initial window height (px)
    #[arg(long, default_value_t = 700)]
    pub height: usize,

    /// Glyph sampling grid pitch (px)
    #[arg(long, default_value_t = DEFAULT_GAP)]
    pub gap: usize,

    /// Raster alpha a grid cell must exceed to become a target
    #[arg(long, default_value_t = DEFAULT_ALPHA_THRESHOLD)]
    pub alpha_threshold: u8,

    /// Fixed RNG seed for particle spawns
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliVariant {
    /// Static glyphs and shapes that follow the hand
    Classic,
    /// Particles morphing between words
    Swarm,
}

impl From<CliVariant> for Variant {
    fn from(v: CliVariant) -> Self {
        match v {
            CliVariant::Classic => Variant::Classic,
            CliVariant::Swarm   => Variant::Swarm,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            swarm: SwarmConfig {
                gap:             self.gap,
                alpha_threshold: self.alpha_threshold,
                glow:            self.glow,
                seed:            self.seed,
                ..SwarmConfig::default()
            },
            variant: self.variant.into(),
            width:   self.width,
            height:  self.height,
        }
    }
}
