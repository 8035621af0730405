//! # hand_swarm
//!
//! Interactive front end for [`glyph_swarm`]: a tracking source thread that
//! turns hand landmarks into gesture samples, a `minifb` window the particle
//! field is rendered into, and the loop that ties them together.
//!
//! ## Variants
//!
//! | Gesture | `--variant classic` | `--variant swarm` (default) |
//! |---|---|---|
//! | Pinch | HEART shape | morph to "LOVE" |
//! | Fist | SATURN shape | idle |
//! | One finger | "HETSI" glyph | morph to "HETSI" |
//! | Two fingers | "HELLO" glyph | morph to "HELLO" |
//! | Open palm | SMILE shape | wave |
//!
//! Static glyphs and shapes follow the wrist horizontally; the particle
//! swarm drifts with it.
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: mouse and keyboard stand in for a hand.
//! * `leap` — **Hardware mode**: polls a real LeapMotion controller via LeapC.
//!
//! ### Simulation controls
//!
//! | Input | Hand |
//! |---|---|
//! | Mouse x | Wrist position |
//! | `0`–`4` | Raised fingers |
//! | `P` (hold) | Pinch |
//! | `H` | Hand in / out of frame |
//! | `Q` | Quit |

pub mod source;
pub mod window;
pub mod cli;
pub mod app;
