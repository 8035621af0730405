//! # glyph_swarm
//!
//! A swarm of point particles that morphs between text-glyph silhouettes,
//! steered by a debounced hand-gesture state machine.
//!
//! ## Pipeline
//!
//! ```text
//! text ──► glyph::sample ──► TargetPointSet ──► ParticlePool::reconcile
//!                                                      │
//! landmarks ──► GestureClassifier ──► GestureSample    ▼
//!                                         │      ParticleField::step ──► Canvas
//!                                         ▼            ▲
//!                                   ModeController ────┘   (via Session)
//! ```
//!
//! ## Gesture → mode mapping
//!
//! | Gesture | Classic | Swarm |
//! |---|---|---|
//! | Pinch | HEART shape | morph to "LOVE" |
//! | Fist | SATURN shape | idle (pool empties) |
//! | One finger | "HETSI" glyph | morph to "HETSI" |
//! | Two fingers | "HELLO" glyph *(initial)* | morph to "HELLO" *(initial)* |
//! | Three fingers | — | — |
//! | Open palm | SMILE shape | wave over current text |
//!
//! Pinch wins over every finger count.  Holding a gesture fires once.
//!
//! ## Quick start
//!
//! ```rust
//! use glyph_swarm::{Framebuffer, ModeMap, Session, SwarmConfig};
//! use glyph_swarm::gesture::{synthetic_hand, GestureClassifier};
//!
//! let mut session = Session::new(SwarmConfig::default(), ModeMap::swarm(), 640, 480).unwrap();
//! let mut classifier = GestureClassifier::new(0.05);
//! let mut fb = Framebuffer::new(640, 480);
//!
//! session.apply(&classifier.classify(&synthetic_hand(0.5, 1, false)));
//! for _ in 0..60 {
//!     session.frame(&mut fb);
//! }
//! assert_eq!(session.mode().label(), "HETSI");
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod font;
pub mod gesture;
pub mod glyph;
pub mod mode;
pub mod particle;
pub mod session;
pub mod shapes;

pub use canvas::{Canvas, Framebuffer};
pub use config::SwarmConfig;
pub use error::{Result, SwarmError};
pub use field::{FloatOffset, ParticleField};
pub use gesture::{GestureClassifier, GestureSample, HandLandmarks, Landmark};
pub use glyph::{sample, GlyphSampler, Point, TargetPointSet};
pub use mode::{DisplayMode, Gesture, ModeController, ModeMap, Transition, Variant};
pub use particle::{Particle, ParticlePool};
pub use session::{Drain, Session, Viewport};
pub use shapes::Shape;
