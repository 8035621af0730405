//! Particle pool — a growable set of particles reconciled against target sets.
//!
//! Retargeting is index-aligned: particle `i` always takes `targets[i]`.  Pool
//! order is persistent, so on a target change existing particles simply flow
//! to their new positions instead of being recreated.

use std::ops::Range;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::glyph::Point;

/// One swarm particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x:    f32,
    pub y:    f32,
    pub tx:   f32,
    pub ty:   f32,
    /// Disc radius (px); fixed for the particle's lifetime.
    pub size: f32,
    /// Hue in degrees, used by the glow variant.
    pub hue:  f32,
}

impl Particle {
    pub fn position(&self) -> Point { (self.x, self.y) }
    pub fn target(&self)   -> Point { (self.tx, self.ty) }

    /// Euclidean distance to the target.
    pub fn distance_to_target(&self) -> f32 {
        ((self.tx - self.x).powi(2) + (self.ty - self.y).powi(2)).sqrt()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ParticlePool
// ════════════════════════════════════════════════════════════════════════════

pub struct ParticlePool {
    particles: Vec<Particle>,
    width:     f32,
    height:    f32,
    size:      Range<f32>,
    rng:       StdRng,
}

impl ParticlePool {
    /// An empty pool spawning into a `width × height` viewport.
    pub fn new(width: usize, height: usize, size: Range<f32>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None    => StdRng::from_os_rng(),
        };
        ParticlePool {
            particles: Vec::new(),
            width:     width as f32,
            height:    height as f32,
            size,
            rng,
        }
    }

    /// Viewport used for future spawns.  Existing particles are untouched.
    pub fn set_bounds(&mut self, width: usize, height: usize) {
        self.width  = width as f32;
        self.height = height as f32;
    }

    /// Match the pool to `targets`: grow by spawning at random positions,
    /// shrink by dropping from the end, then retarget `pool[i] → targets[i]`.
    pub fn reconcile(&mut self, targets: &[Point]) {
        let before = self.particles.len();

        if targets.len() > before {
            self.particles.reserve(targets.len() - before);
            for &target in &targets[before..] {
                let p = self.spawn(target);
                self.particles.push(p);
            }
        } else {
            self.particles.truncate(targets.len());
        }

        for (p, &(tx, ty)) in self.particles.iter_mut().zip(targets) {
            p.tx = tx;
            p.ty = ty;
        }

        debug!("pool reconciled: {} → {} particles", before, self.particles.len());
    }

    fn spawn(&mut self, (tx, ty): Point) -> Particle {
        Particle {
            x:    self.rng.random_range(0.0..=self.width),
            y:    self.rng.random_range(0.0..=self.height),
            tx,
            ty,
            size: self.rng.random_range(self.size.clone()),
            hue:  self.rng.random_range(0.0..360.0),
        }
    }

    pub fn len(&self)      -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool  { self.particles.is_empty() }

    pub fn particles(&self) -> &[Particle] { &self.particles }
    pub fn particles_mut(&mut self) -> &mut [Particle] { &mut self.particles }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
