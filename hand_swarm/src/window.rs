//! Software-rendered window using `minifb`.
//!
//! Presents the session's [`Framebuffer`] and, in simulation mode, turns
//! mouse and keyboard state into [`SimPose`]s for the tracking source.
//!
//! | Input | Simulated hand |
//! |---|---|
//! | mouse x | wrist position |
//! | `0`–`4` | raised fingers |
//! | `P` (hold) | pinch |
//! | `H` | hand in / out of frame |
//! | `Q` | quit |

use std::sync::mpsc::Sender;

use glyph_swarm::{Canvas, Framebuffer};
use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

use crate::source::{SimInput, SimPose};

const TITLE:        &str = "Hand Swarm";
const STATUS_PX:    f32  = 8.0;
const STATUS_COLOR: u32  = 0xFF888888;
const LEGEND:       &str = "mouse=wrist  0-4=fingers  P=pinch  H=hand  Q=quit";

const FINGER_KEYS: [(Key, usize); 5] = [
    (Key::Key0, 0),
    (Key::Key1, 1),
    (Key::Key2, 2),
    (Key::Key3, 3),
    (Key::Key4, 4),
];

pub struct SwarmWindow {
    window: Window,
    sim_tx: Sender<SimInput>,
    pose:   SimPose,
}

impl SwarmWindow {
    pub fn new(sim_tx: Sender<SimInput>, width: usize, height: usize) -> Result<Self, minifb::Error> {
        let mut window = Window::new(
            TITLE,
            width, height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(SwarmWindow { window, sim_tx, pose: SimPose::default() })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Current client-area size.
    pub fn size(&self) -> (usize, usize) { self.window.get_size() }

    /// Read keyboard/mouse state and forward the simulated pose.
    /// Returns false once the user asked to quit.
    pub fn poll_input(&mut self) -> bool {
        if !self.window.is_open() { return false; }

        if self.window.is_key_pressed(Key::Q, KeyRepeat::No) {
            let _ = self.sim_tx.send(SimInput::Quit);
            return false;
        }
        if self.window.is_key_pressed(Key::H, KeyRepeat::No) {
            self.pose.present = !self.pose.present;
        }
        for (key, n) in FINGER_KEYS {
            if self.window.is_key_pressed(key, KeyRepeat::No) {
                self.pose.extended = n;
            }
        }
        self.pose.pinch = self.window.is_key_down(Key::P);

        let (w, _) = self.window.get_size();
        if let Some((mx, _)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            self.pose.wrist_x = mx / w.max(1) as f32;
        }

        let _ = self.sim_tx.send(SimInput::Pose(self.pose));
        true
    }

    /// Overlay the status line: active mode plus the key legend.
    pub fn draw_status(&self, fb: &mut Framebuffer, mode: &str, particles: usize) {
        let (_, h) = fb.size();
        let hand = if self.pose.present { "" } else { "  (no hand)" };
        let status = format!("{}  {} particles{}", mode, particles, hand);
        draw_left(fb, &status, 10.0, h as f32 - 28.0);
        draw_left(fb, LEGEND, 10.0, h as f32 - 14.0);
    }

    pub fn present(&mut self, fb: &Framebuffer) {
        if let Err(e) = self.window.update_with_buffer(fb.pixels(), fb.width(), fb.height()) {
            log::warn!("frame dropped: {}", e);
        }
    }
}

/// Left-aligned status text starting at `x`, vertically centred on `cy`.
fn draw_left(fb: &mut Framebuffer, text: &str, x: f32, cy: f32) {
    let w = text.chars().count() as f32 * STATUS_PX;
    fb.fill_text(text, x + w / 2.0, cy, STATUS_PX, STATUS_COLOR);
}
