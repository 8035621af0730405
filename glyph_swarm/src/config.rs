//! Tuning constants for sampling, relaxation, gestures and drift.
//!
//! Everything is fixed at start-up; nothing here is reconfigured while a
//! session runs.

use std::ops::Range;

use crate::error::{Result, SwarmError};

// ════════════════════════════════════════════════════════════════════════════
// Defaults
// ════════════════════════════════════════════════════════════════════════════

pub const DEFAULT_GAP:             usize = 6;
pub const DEFAULT_ALPHA_THRESHOLD: u8    = 128;
pub const DEFAULT_RELAX_RATE:      f32   = 0.05;
pub const DEFAULT_WAVE_FREQ:       f32   = 0.05;
pub const DEFAULT_WAVE_MAX:        f32   = 15.0;
pub const DEFAULT_WAVE_SPEED:      f32   = 500.0;
pub const DEFAULT_PINCH_TOLERANCE: f32   = 0.05;
pub const DEFAULT_FLOAT_SCALE:     f32   = 300.0;
pub const DEFAULT_FLOAT_EASE:      f32   = 0.1;

// ════════════════════════════════════════════════════════════════════════════
// SwarmConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for a [`Session`](crate::session::Session).
#[derive(Clone, Debug, PartialEq)]
pub struct SwarmConfig {
    /// Grid pitch (px) used when scanning the glyph raster.
    pub gap:             usize,
    /// Raster alpha a grid cell must exceed to become a target point.
    pub alpha_threshold: u8,
    /// Fraction of the remaining distance covered per frame.
    pub relax_rate:      f32,
    /// Spatial frequency of the wave deformation.
    pub wave_freq:       f32,
    /// Upper bound on wave amplitude (px).
    pub wave_max:        f32,
    /// Normalized wrist delta per frame → wave amplitude (px).
    pub wave_speed_scale: f32,
    /// Thumb/index tip distance, per axis, that counts as a pinch.
    pub pinch_tolerance: f32,
    /// Normalized wrist x → float offset (px).
    pub float_scale:     f32,
    /// Per-frame easing of the float offset toward its target.
    pub float_ease:      f32,
    /// Particle radius range (px), drawn once per particle.
    pub particle_size:   Range<f32>,
    /// Hue-coloured particles with a soft halo.
    pub glow:            bool,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed:            Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        SwarmConfig {
            gap:              DEFAULT_GAP,
            alpha_threshold:  DEFAULT_ALPHA_THRESHOLD,
            relax_rate:       DEFAULT_RELAX_RATE,
            wave_freq:        DEFAULT_WAVE_FREQ,
            wave_max:         DEFAULT_WAVE_MAX,
            wave_speed_scale: DEFAULT_WAVE_SPEED,
            pinch_tolerance:  DEFAULT_PINCH_TOLERANCE,
            float_scale:      DEFAULT_FLOAT_SCALE,
            float_ease:       DEFAULT_FLOAT_EASE,
            particle_size:    1.0..3.0,
            glow:             false,
            seed:             None,
        }
    }
}

impl SwarmConfig {
    pub fn validate(&self) -> Result<()> {
        if self.gap == 0 {
            return Err(invalid("gap", "must be at least 1"));
        }
        if !(self.relax_rate > 0.0 && self.relax_rate <= 1.0) {
            return Err(invalid("relax_rate", format!("{} not in (0, 1]", self.relax_rate)));
        }
        if !(self.float_ease > 0.0 && self.float_ease <= 1.0) {
            return Err(invalid("float_ease", format!("{} not in (0, 1]", self.float_ease)));
        }
        let size = &self.particle_size;
        if !(size.start > 0.0 && size.start < size.end && size.end.is_finite()) {
            return Err(invalid(
                "particle_size",
                format!("{}..{} must be a non-empty positive range", size.start, size.end),
            ));
        }
        for (field, v) in [
            ("wave_freq",        self.wave_freq),
            ("wave_max",         self.wave_max),
            ("wave_speed_scale", self.wave_speed_scale),
            ("pinch_tolerance",  self.pinch_tolerance),
            ("float_scale",      self.float_scale),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(invalid(field, format!("{} must be finite and non-negative", v)));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SwarmError {
    SwarmError::InvalidConfig { field, reason: reason.into() }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
