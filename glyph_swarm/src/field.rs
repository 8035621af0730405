//! Per-frame particle motion and drawing.
//!
//! Motion is exponential relaxation, `p += (target − p) · relax_rate`, with no
//! velocity state.  When the wave modifier is on, a sine displacement is added
//! to y after relaxation; its amplitude follows recent lateral hand speed.
//! The float offset shifts x at draw time only, so it never fights the
//! relaxation target.
//!
//! Oscillation phase comes from an integer frame counter, not wall-clock time,
//! so wave speed scales with frame rate.

use crate::canvas::Canvas;
use crate::color::{hue_color, WHITE};
use crate::config::SwarmConfig;
use crate::particle::Particle;

// Glow halo radius as a multiple of particle size.
const GLOW_SPREAD: f32 = 3.0;

// ════════════════════════════════════════════════════════════════════════════
// FloatOffset
// ════════════════════════════════════════════════════════════════════════════

/// Smoothed horizontal drift easing toward a target each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatOffset {
    pub current: f32,
    pub target:  f32,
}

impl FloatOffset {
    pub fn tick(&mut self, ease: f32) {
        self.current += (self.target - self.current) * ease;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ParticleField
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct ParticleField {
    relax_rate:       f32,
    wave_freq:        f32,
    wave_max:         f32,
    wave_speed_scale: f32,
    float_scale:      f32,
    float_ease:       f32,
    glow:             bool,

    time:          u64,
    wave_strength: f32,
    float:         FloatOffset,
}

impl ParticleField {
    pub fn new(cfg: &SwarmConfig) -> Self {
        ParticleField {
            relax_rate:       cfg.relax_rate,
            wave_freq:        cfg.wave_freq,
            wave_max:         cfg.wave_max,
            wave_speed_scale: cfg.wave_speed_scale,
            float_scale:      cfg.float_scale,
            float_ease:       cfg.float_ease,
            glow:             cfg.glow,
            time:             0,
            wave_strength:    0.0,
            float:            FloatOffset::default(),
        }
    }

    pub fn time(&self)          -> u64         { self.time }
    pub fn wave_strength(&self) -> f32         { self.wave_strength }
    pub fn float_offset(&self)  -> FloatOffset { self.float }

    /// Wave amplitude from normalized wrist speed, clamped to `wave_max`.
    pub fn set_lateral_speed(&mut self, speed: f32) {
        self.wave_strength = (speed.abs() * self.wave_speed_scale).min(self.wave_max);
    }

    /// Point the float offset at a normalized wrist x (0.5 = no drift).
    pub fn track_wrist(&mut self, wrist_x: f32) {
        self.float.target = (wrist_x - 0.5) * self.float_scale;
    }

    /// Move every particle one frame toward its target.
    pub fn advance(&mut self, particles: &mut [Particle], wave: bool) {
        let t = self.time as f32;
        for p in particles.iter_mut() {
            p.x += (p.tx - p.x) * self.relax_rate;
            p.y += (p.ty - p.y) * self.relax_rate;
            if wave {
                // Added into the relaxed state, so successive kicks accumulate
                // against the pull back to target: `wave_max` caps the kick per
                // frame, not the on-screen displacement.
                p.y += ((p.x + t) * self.wave_freq).sin() * self.wave_strength;
            }
        }
        self.float.tick(self.float_ease);
        self.time += 1;
    }

    /// Draw every particle as a disc, shifted by the float offset.
    pub fn draw<C: Canvas + ?Sized>(&self, particles: &[Particle], canvas: &mut C) {
        let dx = self.float.current;
        for p in particles {
            if self.glow {
                let color = hue_color(p.hue);
                canvas.glow_circle(p.x + dx, p.y, p.size * GLOW_SPREAD, color);
                canvas.fill_circle(p.x + dx, p.y, p.size, color);
            } else {
                canvas.fill_circle(p.x + dx, p.y, p.size, WHITE);
            }
        }
    }

    /// One frame: [`advance`](Self::advance) then [`draw`](Self::draw).
    pub fn step<C: Canvas + ?Sized>(&mut self, particles: &mut [Particle], wave: bool, canvas: &mut C) {
        self.advance(particles, wave);
        self.draw(particles, canvas);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
