//! Session — the single owner of all mutable display state.
//!
//! Gesture samples arrive through [`Session::apply`] (or in bulk through
//! [`Session::drain`]); the render loop calls [`Session::frame`] once per
//! display refresh.  The two cadences are independent: any number of frames
//! may run between samples, and state holds its last value meanwhile.

use std::sync::mpsc::{Receiver, TryRecvError};

use log::{debug, info};

use crate::canvas::Canvas;
use crate::color::{BACKGROUND, WHITE};
use crate::config::SwarmConfig;
use crate::error::Result;
use crate::field::ParticleField;
use crate::gesture::GestureSample;
use crate::glyph::GlyphSampler;
use crate::mode::{DisplayMode, ModeController, ModeMap, Transition};
use crate::particle::ParticlePool;

/// Pixel height of static glyph text.
pub const STATIC_GLYPH_PX: f32 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width:  usize,
    pub height: usize,
}

/// Outcome of [`Session::drain`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drain {
    pub applied:   usize,
    /// False once every sender has hung up.
    pub connected: bool,
}

pub struct Session {
    viewport:   Viewport,
    sampler:    GlyphSampler,
    pool:       ParticlePool,
    field:      ParticleField,
    controller: ModeController,
    /// Hand position for static renders (px).
    cursor_x:   f32,
    resamples:  usize,
}

impl Session {
    pub fn new(config: SwarmConfig, map: ModeMap, width: usize, height: usize) -> Result<Self> {
        config.validate()?;

        let mut session = Session {
            viewport:   Viewport { width, height },
            sampler:    GlyphSampler::new(&config),
            pool:       ParticlePool::new(width, height, config.particle_size.clone(), config.seed),
            field:      ParticleField::new(&config),
            controller: ModeController::new(map),
            cursor_x:   width as f32 / 2.0,
            resamples:  0,
        };
        session.retarget();
        info!("session started in {} at {}×{}", session.mode().label(), width, height);
        Ok(session)
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Apply one classified tracking frame.
    pub fn apply(&mut self, sample: &GestureSample) {
        self.cursor_x = sample.wrist_x * self.viewport.width as f32;
        self.field.track_wrist(sample.wrist_x);
        self.field.set_lateral_speed(sample.lateral_speed);

        match self.controller.update(sample) {
            Some(Transition::Enter(_)) => self.retarget(),
            Some(Transition::WaveOn) | Some(Transition::WaveOff) | None => {}
        }
    }

    /// Apply every sample waiting on `rx` without blocking.
    pub fn drain(&mut self, rx: &Receiver<GestureSample>) -> Drain {
        let mut applied = 0;
        loop {
            match rx.try_recv() {
                Ok(sample) => {
                    self.apply(&sample);
                    applied += 1;
                }
                Err(TryRecvError::Empty)        => return Drain { applied, connected: true },
                Err(TryRecvError::Disconnected) => return Drain { applied, connected: false },
            }
        }
    }

    /// Adopt a new viewport size.  Targets are in absolute pixels, so the
    /// active text is resampled; in-flight motion simply continues toward
    /// the new targets.
    pub fn resize(&mut self, width: usize, height: usize) {
        let next = Viewport { width, height };
        if next == self.viewport { return; }

        let old_w = self.viewport.width.max(1) as f32;
        self.cursor_x = self.cursor_x / old_w * width as f32;
        self.viewport = next;
        self.pool.set_bounds(width, height);
        info!("viewport resized to {}×{}", width, height);
        self.retarget();
    }

    /// Recompute particle targets for the active mode.
    fn retarget(&mut self) {
        let Viewport { width, height } = self.viewport;
        match self.controller.mode() {
            DisplayMode::TextMorph(text) => {
                let targets = self.sampler.sample(text, width, height);
                self.resamples += 1;
                debug!("sampled \"{}\" at {}×{}: {} points", text, width, height, targets.len());
                self.pool.reconcile(&targets);
            }
            DisplayMode::Idle => self.pool.reconcile(&[]),
            DisplayMode::StaticGlyph(_) | DisplayMode::StaticShape(_) => {}
        }
    }

    // ── output ────────────────────────────────────────────────────────────

    /// Render one frame and advance time.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        canvas.clear(BACKGROUND);

        let wave = self.controller.wave();
        self.field.step(self.pool.particles_mut(), wave, canvas);

        let cy = self.viewport.height as f32 / 2.0;
        match self.controller.mode() {
            DisplayMode::TextMorph(_) | DisplayMode::Idle => {}
            DisplayMode::StaticGlyph(label) => {
                canvas.fill_text(label, self.cursor_x, cy, STATIC_GLYPH_PX, WHITE);
            }
            DisplayMode::StaticShape(shape) => shape.draw(canvas, self.cursor_x, cy),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    pub fn mode(&self)      -> &DisplayMode   { self.controller.mode() }
    pub fn wave(&self)      -> bool           { self.controller.wave() }
    pub fn pool(&self)      -> &ParticlePool  { &self.pool }
    pub fn field(&self)     -> &ParticleField { &self.field }
    pub fn viewport(&self)  -> Viewport       { self.viewport }
    pub fn cursor_x(&self)  -> f32            { self.cursor_x }
    /// Text samplings performed so far, including the initial one.
    pub fn resamples(&self) -> usize          { self.resamples }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use crate::canvas::recording::{Op, Recorder};
    use crate::gesture::{synthetic_hand, GestureClassifier};
    use crate::glyph::sample;
    use crate::shapes::Shape;

    fn cfg() -> SwarmConfig {
        SwarmConfig { seed: Some(42), ..SwarmConfig::default() }
    }

    fn swarm() -> Session {
        Session::new(cfg(), ModeMap::swarm(), 640, 480).unwrap()
    }

    fn classic() -> Session {
        Session::new(cfg(), ModeMap::classic(), 640, 480).unwrap()
    }

    fn gesture(finger_count: u8, pinch: bool) -> GestureSample {
        GestureSample { wrist_x: 0.5, finger_count, pinch, lateral_speed: 0.0 }
    }

    #[test]
    fn invalid_config_rejected() {
        let bad = SwarmConfig { gap: 0, ..cfg() };
        assert!(Session::new(bad, ModeMap::swarm(), 640, 480).is_err());
    }

    #[test]
    fn starts_with_hello_targets() {
        let s = swarm();
        assert_eq!(s.mode(), &DisplayMode::TextMorph("HELLO".into()));
        assert_eq!(s.resamples(), 1);
        let expected = sample("HELLO", 640, 480, 6, 128);
        assert_eq!(s.pool().len(), expected.len());
        for (p, t) in s.pool().particles().iter().zip(&expected) {
            assert_eq!(p.target(), *t);
        }
    }

    #[test]
    fn repeated_gesture_resamples_once() {
        let mut s = swarm();
        for _ in 0..30 { s.apply(&gesture(1, false)); }
        assert_eq!(s.resamples(), 2);
        for _ in 0..30 { s.apply(&gesture(0, true)); }
        assert_eq!(s.resamples(), 3);
        assert_eq!(s.mode(), &DisplayMode::TextMorph("LOVE".into()));
    }

    #[test]
    fn pinch_and_fist_goes_to_pinch_mode() {
        let mut s = classic();
        s.apply(&gesture(0, true));
        assert_eq!(s.mode(), &DisplayMode::StaticShape(Shape::Heart));
    }

    #[test]
    fn morph_keeps_particles_and_retargets() {
        let mut s = swarm();
        for _ in 0..5 { s.frame(&mut Recorder::new(640, 480)); }
        let before: Vec<_> = s.pool().particles().iter().map(|p| p.position()).collect();
        s.apply(&gesture(1, false));
        let hetsi = sample("HETSI", 640, 480, 6, 128);
        assert_eq!(s.pool().len(), hetsi.len());
        for (i, p) in s.pool().particles().iter().enumerate().take(before.len().min(hetsi.len())) {
            assert_eq!(p.position(), before[i]);
            assert_eq!(p.target(), hetsi[i]);
        }
    }

    #[test]
    fn fist_empties_swarm_and_frames_still_run() {
        let mut s = swarm();
        s.apply(&gesture(0, false));
        assert_eq!(s.mode(), &DisplayMode::Idle);
        assert!(s.pool().is_empty());
        let mut rec = Recorder::new(640, 480);
        s.frame(&mut rec);
        assert_eq!(rec.ops, vec![Op::Clear(BACKGROUND)]);
    }

    #[test]
    fn wave_modifier_does_not_resample() {
        let mut s = swarm();
        let mut sample = gesture(4, false);
        sample.lateral_speed = 0.02;
        s.apply(&sample);
        assert!(s.wave());
        assert_eq!(s.resamples(), 1);
        assert!((s.field().wave_strength() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn resize_resamples_within_new_bounds() {
        let mut s = swarm();
        for _ in 0..10 { s.frame(&mut Recorder::new(640, 480)); }
        s.resize(300, 200);
        assert_eq!(s.resamples(), 2);
        let expected = sample("HELLO", 300, 200, 6, 128);
        assert!(!expected.is_empty());
        assert_eq!(s.pool().len(), expected.len());
        for p in s.pool().particles() {
            let (tx, ty) = p.target();
            assert!(tx >= 0.0 && tx < 300.0 && ty >= 0.0 && ty < 200.0);
        }
    }

    #[test]
    fn resize_to_same_size_is_noop() {
        let mut s = swarm();
        s.resize(640, 480);
        assert_eq!(s.resamples(), 1);
    }

    #[test]
    fn resize_keeps_cursor_ratio() {
        let mut s = classic();
        s.apply(&GestureSample { wrist_x: 0.25, ..gesture(2, false) });
        assert_eq!(s.cursor_x(), 160.0);
        s.resize(1280, 480);
        assert_eq!(s.cursor_x(), 320.0);
    }

    #[test]
    fn resize_to_tiny_viewport_does_not_panic() {
        let mut s = swarm();
        s.resize(1, 1);
        s.resize(0, 0);
        s.frame(&mut Recorder::new(0, 0));
        assert!(s.pool().is_empty());
    }

    #[test]
    fn classic_draws_glyph_at_wrist() {
        let mut s = classic();
        s.apply(&GestureSample { wrist_x: 0.25, ..gesture(1, false) });
        let mut rec = Recorder::new(640, 480);
        s.frame(&mut rec);
        assert!(s.pool().is_empty());
        assert_eq!(rec.ops, vec![
            Op::Clear(BACKGROUND),
            Op::Text { text: "HETSI".into(), cx: 160.0, cy: 240.0 },
        ]);
    }

    #[test]
    fn classic_shape_modes_draw_paths() {
        let mut s = classic();
        s.apply(&gesture(0, false));
        let mut rec = Recorder::new(640, 480);
        s.frame(&mut rec);
        assert_eq!(rec.ops.iter().filter(|o| matches!(o, Op::Path { .. })).count(), 2);
    }

    #[test]
    fn frames_without_samples_hold_state() {
        let mut s = swarm();
        s.apply(&gesture(1, false));
        for _ in 0..50 { s.frame(&mut Recorder::new(640, 480)); }
        assert_eq!(s.mode(), &DisplayMode::TextMorph("HETSI".into()));
        assert_eq!(s.resamples(), 2);
        assert_eq!(s.field().time(), 50);
    }

    #[test]
    fn drain_applies_queued_samples_in_order() {
        let (tx, rx) = mpsc::channel();
        let mut classifier = GestureClassifier::new(0.05);
        for hand in [
            synthetic_hand(0.5, 1, false),
            synthetic_hand(0.5, 1, false),
            synthetic_hand(0.6, 0, true),
        ] {
            tx.send(classifier.classify(&hand)).unwrap();
        }

        let mut s = swarm();
        assert_eq!(s.drain(&rx), Drain { applied: 3, connected: true });
        assert_eq!(s.mode(), &DisplayMode::TextMorph("LOVE".into()));
        assert_eq!(s.resamples(), 3);
        // Nothing pending: draining again is a no-op.
        assert_eq!(s.drain(&rx), Drain { applied: 0, connected: true });
        drop(tx);
        assert_eq!(s.drain(&rx), Drain { applied: 0, connected: false });
    }

    #[test]
    fn particles_converge_on_targets() {
        let mut s = swarm();
        for _ in 0..300 { s.frame(&mut Recorder::new(640, 480)); }
        assert!(s.pool().particles().iter().all(|p| p.distance_to_target() < 0.5));
    }
}
