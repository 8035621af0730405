//! Application wiring and the render loop.
//!
//! One loop iteration per display refresh: poll window input, follow window
//! resizes, drain pending gesture samples into the session, render, present.
//! Tracking runs on its own thread and feeds the loop through a channel, so
//! any number of frames may pass between samples.

use std::sync::mpsc;

use glyph_swarm::gesture::GestureClassifier;
use glyph_swarm::{Canvas, Framebuffer, ModeMap, Session, SwarmConfig, SwarmError, Variant};
use log::{info, warn};
use thiserror::Error;

use crate::source::{spawn_tracking_source, SimInput, TrackingError};
use crate::window::SwarmWindow;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    #[error(transparent)]
    Config(#[from] SwarmError),

    #[error(transparent)]
    Tracking(#[from] TrackingError),
}

/// Configuration for the full application.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub swarm:   SwarmConfig,
    pub variant: Variant,
    pub width:   usize,
    pub height:  usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            swarm:   SwarmConfig::default(),
            variant: Variant::Swarm,
            width:   1200,
            height:  700,
        }
    }
}

/// Build the session for `cfg`, before any window exists.
pub fn build_session(cfg: &AppConfig) -> Result<Session, AppError> {
    let map = ModeMap::for_variant(cfg.variant);
    Ok(Session::new(cfg.swarm.clone(), map, cfg.width, cfg.height)?)
}

/// Run the full application.
///
/// Creates the window and the tracking source (simulation by default,
/// hardware with `--features leap`) and drives the loop at ~60 fps until the
/// window closes.
pub fn run(cfg: AppConfig) -> Result<(), AppError> {
    let mut session = build_session(&cfg)?;
    let classifier = GestureClassifier::from_config(&cfg.swarm);

    // ── Tracking source ───────────────────────────────────────────────────
    let (sim_tx, sim_rx) = mpsc::channel::<SimInput>();

    #[cfg(not(feature = "leap"))]
    let samples = spawn_tracking_source(crate::source::SimTrackingSource { rx: sim_rx, classifier })?;

    #[cfg(feature = "leap")]
    let samples = {
        drop(sim_rx);
        spawn_tracking_source(crate::source::LeapTrackingSource { classifier })?
    };

    // ── Window ────────────────────────────────────────────────────────────
    let mut win = SwarmWindow::new(sim_tx, cfg.width, cfg.height)?;
    let mut fb = Framebuffer::new(cfg.width, cfg.height);
    let mut tracking = true;

    info!("{:?} variant running at {}×{}", cfg.variant, cfg.width, cfg.height);

    // ── Main loop ─────────────────────────────────────────────────────────
    while win.is_open() {
        if !win.poll_input() { break; }

        let (w, h) = win.size();
        if (w, h) != fb.size() {
            fb.resize(w, h);
            session.resize(w, h);
        }

        let drained = session.drain(&samples);
        if tracking && !drained.connected {
            warn!("tracking source stopped; display holds its last state");
            tracking = false;
        }

        session.frame(&mut fb);
        win.draw_status(&mut fb, session.mode().label(), session.pool().len());
        win.present(&fb);
    }

    Ok(())
}
