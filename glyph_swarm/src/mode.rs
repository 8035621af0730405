//! Gesture → display mode state machine.
//!
//! Each sample is reduced to a discrete [`Gesture`] in fixed priority order
//! (pinch, fist, one, two, open palm; three fingers is a don't-care).  The
//! controller is edge-triggered: a gesture identical to the previous one, or
//! one that maps to the mode already showing, changes nothing.

use log::info;

use crate::gesture::GestureSample;
use crate::shapes::Shape;

// ════════════════════════════════════════════════════════════════════════════
// Gesture
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    Pinch,
    Fist,
    OneFinger,
    TwoFingers,
    OpenPalm,
}

impl Gesture {
    /// Highest-priority gesture in `sample`; `None` for three fingers.
    pub fn of(sample: &GestureSample) -> Option<Self> {
        if sample.pinch {
            return Some(Gesture::Pinch);
        }
        match sample.finger_count {
            0 => Some(Gesture::Fist),
            1 => Some(Gesture::OneFinger),
            2 => Some(Gesture::TwoFingers),
            3 => None,
            _ => Some(Gesture::OpenPalm),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DisplayMode
// ════════════════════════════════════════════════════════════════════════════

/// What the display shows.
#[derive(Clone, Debug, PartialEq)]
pub enum DisplayMode {
    /// Particles morph into the text's silhouette.
    TextMorph(String),
    /// Text drawn directly at the hand position.
    StaticGlyph(String),
    /// Line-art shape drawn at the hand position.
    StaticShape(Shape),
    /// Nothing to show; the particle pool empties.
    Idle,
}

impl DisplayMode {
    pub fn label(&self) -> &str {
        match self {
            DisplayMode::TextMorph(t) | DisplayMode::StaticGlyph(t) => t.as_str(),
            DisplayMode::StaticShape(s) => s.name(),
            DisplayMode::Idle => "IDLE",
        }
    }
}

/// What a gesture selects: a mode, or the wave modifier on top of the
/// current mode.
#[derive(Clone, Debug, PartialEq)]
pub enum ModeTarget {
    Show(DisplayMode),
    Wave,
}

// ════════════════════════════════════════════════════════════════════════════
// ModeMap — product variants
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Static glyphs and shapes that follow the hand.
    Classic,
    /// Particle swarm morphing between words.
    Swarm,
}

/// Gesture → target table plus the start-up mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ModeMap {
    pub pinch:       Option<ModeTarget>,
    pub fist:        Option<ModeTarget>,
    pub one_finger:  Option<ModeTarget>,
    pub two_fingers: Option<ModeTarget>,
    pub open_palm:   Option<ModeTarget>,
    pub initial:     DisplayMode,
}

impl ModeMap {
    pub fn classic() -> Self {
        ModeMap {
            pinch:       Some(ModeTarget::Show(DisplayMode::StaticShape(Shape::Heart))),
            fist:        Some(ModeTarget::Show(DisplayMode::StaticShape(Shape::Saturn))),
            one_finger:  Some(ModeTarget::Show(DisplayMode::StaticGlyph("HETSI".into()))),
            two_fingers: Some(ModeTarget::Show(DisplayMode::StaticGlyph("HELLO".into()))),
            open_palm:   Some(ModeTarget::Show(DisplayMode::StaticShape(Shape::Smile))),
            initial:     DisplayMode::StaticGlyph("HELLO".into()),
        }
    }

    pub fn swarm() -> Self {
        ModeMap {
            pinch:       Some(ModeTarget::Show(DisplayMode::TextMorph("LOVE".into()))),
            fist:        Some(ModeTarget::Show(DisplayMode::Idle)),
            one_finger:  Some(ModeTarget::Show(DisplayMode::TextMorph("HETSI".into()))),
            two_fingers: Some(ModeTarget::Show(DisplayMode::TextMorph("HELLO".into()))),
            open_palm:   Some(ModeTarget::Wave),
            initial:     DisplayMode::TextMorph("HELLO".into()),
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Swarm   => Self::swarm(),
        }
    }

    pub fn target(&self, gesture: Gesture) -> Option<&ModeTarget> {
        match gesture {
            Gesture::Pinch      => self.pinch.as_ref(),
            Gesture::Fist       => self.fist.as_ref(),
            Gesture::OneFinger  => self.one_finger.as_ref(),
            Gesture::TwoFingers => self.two_fingers.as_ref(),
            Gesture::OpenPalm   => self.open_palm.as_ref(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ModeController
// ════════════════════════════════════════════════════════════════════════════

/// A state change the session must act on.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    /// A new discrete mode; text modes need resampling.
    Enter(DisplayMode),
    WaveOn,
    WaveOff,
}

#[derive(Clone, Debug)]
pub struct ModeController {
    map:          ModeMap,
    mode:         DisplayMode,
    wave:         bool,
    last_gesture: Option<Gesture>,
}

impl ModeController {
    pub fn new(map: ModeMap) -> Self {
        let mode = map.initial.clone();
        ModeController { map, mode, wave: false, last_gesture: None }
    }

    pub fn mode(&self) -> &DisplayMode { &self.mode }
    pub fn wave(&self) -> bool         { self.wave }
    pub fn last_gesture(&self) -> Option<Gesture> { self.last_gesture }

    /// Feed one sample.  Returns the transition it caused, if any.
    pub fn update(&mut self, sample: &GestureSample) -> Option<Transition> {
        let gesture = Gesture::of(sample)?;
        if self.last_gesture == Some(gesture) {
            return None;
        }
        self.last_gesture = Some(gesture);

        match self.map.target(gesture)? {
            ModeTarget::Wave => {
                if self.wave { return None; }
                self.wave = true;
                info!("{:?} → wave on over {}", gesture, self.mode.label());
                Some(Transition::WaveOn)
            }
            ModeTarget::Show(mode) if *mode == self.mode => {
                if !self.wave { return None; }
                self.wave = false;
                info!("{:?} → wave off, staying on {}", gesture, self.mode.label());
                Some(Transition::WaveOff)
            }
            ModeTarget::Show(mode) => {
                info!("{:?} → {} (was {})", gesture, mode.label(), self.mode.label());
                self.mode = mode.clone();
                self.wave = false;
                Some(Transition::Enter(self.mode.clone()))
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
