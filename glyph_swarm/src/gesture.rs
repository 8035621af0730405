//! Gesture classification from hand landmarks.
//!
//! Landmarks are normalized `[0, 1]` image coordinates with y growing
//! downward, indexed the way common 21-point hand trackers index them.  Only
//! the wrist, thumb tip and the PIP joint / tip of each of the four fingers
//! are read.

use crate::config::SwarmConfig;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST:      usize = 0;
pub const THUMB_TIP:  usize = 4;
pub const INDEX_PIP:  usize = 6;
pub const INDEX_TIP:  usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP:   usize = 14;
pub const RING_TIP:   usize = 16;
pub const PINKY_PIP:  usize = 18;
pub const PINKY_TIP:  usize = 20;

/// `(tip, lower joint)` for index, middle, ring, pinky.
pub const FINGERS: [(usize, usize); 4] = [
    (INDEX_TIP,  INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP,   RING_PIP),
    (PINKY_TIP,  PINKY_PIP),
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self { Landmark { x, y, z: 0.0 } }
}

/// One tracked hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks(pub [Landmark; LANDMARK_COUNT]);

impl HandLandmarks {
    pub fn get(&self, index: usize) -> Landmark { self.0[index] }
}

// ════════════════════════════════════════════════════════════════════════════
// GestureSample
// ════════════════════════════════════════════════════════════════════════════

/// Per-frame classification of one hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Normalized wrist x.
    pub wrist_x:       f32,
    /// Extended non-thumb fingers, 0–4.
    pub finger_count:  u8,
    pub pinch:         bool,
    /// |Δ wrist x| since the previous classified frame (normalized units).
    pub lateral_speed: f32,
}

/// Fingers whose tip is strictly above (smaller y than) its PIP joint.
pub fn finger_count(hand: &HandLandmarks) -> u8 {
    FINGERS.iter()
        .filter(|&&(tip, pip)| hand.get(tip).y < hand.get(pip).y)
        .count() as u8
}

/// Thumb tip and index tip within `tolerance` on both axes.
pub fn is_pinch(hand: &HandLandmarks, tolerance: f32) -> bool {
    let thumb = hand.get(THUMB_TIP);
    let index = hand.get(INDEX_TIP);
    (thumb.x - index.x).abs() < tolerance && (thumb.y - index.y).abs() < tolerance
}

// ════════════════════════════════════════════════════════════════════════════
// GestureClassifier
// ════════════════════════════════════════════════════════════════════════════

/// Turns landmark frames into [`GestureSample`]s, remembering the previous
/// wrist position for lateral speed.
#[derive(Clone, Debug)]
pub struct GestureClassifier {
    pinch_tolerance: f32,
    prev_wrist_x:    Option<f32>,
}

impl GestureClassifier {
    pub fn new(pinch_tolerance: f32) -> Self {
        GestureClassifier { pinch_tolerance, prev_wrist_x: None }
    }

    pub fn from_config(cfg: &SwarmConfig) -> Self {
        Self::new(cfg.pinch_tolerance)
    }

    /// Forget the previous wrist position.  Call on frames with no hand, so
    /// a hand re-entering elsewhere doesn't read as a fast swipe.
    pub fn reset(&mut self) {
        self.prev_wrist_x = None;
    }

    pub fn classify(&mut self, hand: &HandLandmarks) -> GestureSample {
        let wrist_x = hand.get(WRIST).x;
        let lateral_speed = self.prev_wrist_x.map_or(0.0, |prev| (wrist_x - prev).abs());
        self.prev_wrist_x = Some(wrist_x);

        GestureSample {
            wrist_x,
            finger_count: finger_count(hand),
            pinch:        is_pinch(hand, self.pinch_tolerance),
            lateral_speed,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Synthetic hands
// ════════════════════════════════════════════════════════════════════════════

/// A plausible upright hand at `wrist_x` with the first `extended` fingers
/// (index first) raised, optionally pinching thumb to index.
pub fn synthetic_hand(wrist_x: f32, extended: usize, pinch: bool) -> HandLandmarks {
    const WRIST_Y: f32 = 0.80;
    const PIP_Y:   f32 = 0.60;
    const UP_Y:    f32 = 0.45;
    const DOWN_Y:  f32 = 0.70;

    let mut lm = [Landmark::new(wrist_x, WRIST_Y); LANDMARK_COUNT];
    for (i, &(tip, pip)) in FINGERS.iter().enumerate() {
        let x = wrist_x - 0.06 + 0.04 * i as f32;
        lm[pip] = Landmark::new(x, PIP_Y);
        lm[tip] = Landmark::new(x, if i < extended { UP_Y } else { DOWN_Y });
    }
    lm[THUMB_TIP] = if pinch {
        lm[INDEX_TIP]
    } else {
        Landmark::new(wrist_x - 0.15, 0.65)
    };
    HandLandmarks(lm)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand with each finger's tip set relative to a PIP at y = 0.5.
    fn hand_with_tips(tip_ys: [f32; 4]) -> HandLandmarks {
        let mut lm = [Landmark::new(0.5, 0.9); LANDMARK_COUNT];
        for (i, &(tip, pip)) in FINGERS.iter().enumerate() {
            lm[pip] = Landmark::new(0.4 + 0.05 * i as f32, 0.5);
            lm[tip] = Landmark::new(0.4 + 0.05 * i as f32, tip_ys[i]);
        }
        lm[THUMB_TIP] = Landmark::new(0.1, 0.1);
        HandLandmarks(lm)
    }

    #[test]
    fn finger_count_every_k() {
        for k in 0..=4 {
            let mut ys = [0.6; 4];
            for y in ys.iter_mut().take(k) { *y = 0.3; }
            assert_eq!(finger_count(&hand_with_tips(ys)), k as u8);
        }
    }

    #[test]
    fn finger_count_any_subset() {
        for mask in 0u8..16 {
            let ys: [f32; 4] = std::array::from_fn(|i| if mask >> i & 1 == 1 { 0.3 } else { 0.7 });
            assert_eq!(finger_count(&hand_with_tips(ys)), mask.count_ones() as u8);
        }
    }

    #[test]
    fn tie_counts_as_not_extended() {
        assert_eq!(finger_count(&hand_with_tips([0.5; 4])), 0);
        assert_eq!(finger_count(&hand_with_tips([0.3, 0.5, 0.5, 0.3])), 2);
    }

    #[test]
    fn pinch_needs_both_axes() {
        let mut hand = hand_with_tips([0.3; 4]);
        let index = hand.get(INDEX_TIP);

        hand.0[THUMB_TIP] = Landmark::new(index.x + 0.01, index.y - 0.01);
        assert!(is_pinch(&hand, 0.05));

        hand.0[THUMB_TIP] = Landmark::new(index.x + 0.01, index.y + 0.2);
        assert!(!is_pinch(&hand, 0.05));

        hand.0[THUMB_TIP] = Landmark::new(index.x + 0.2, index.y);
        assert!(!is_pinch(&hand, 0.05));
    }

    #[test]
    fn lateral_speed_tracks_wrist_delta() {
        let mut c = GestureClassifier::new(0.05);
        assert_eq!(c.classify(&synthetic_hand(0.50, 2, false)).lateral_speed, 0.0);
        let s = c.classify(&synthetic_hand(0.40, 2, false));
        assert!((s.lateral_speed - 0.10).abs() < 1e-6);
        let s = c.classify(&synthetic_hand(0.45, 2, false));
        assert!((s.lateral_speed - 0.05).abs() < 1e-6);
    }

    #[test]
    fn synthetic_hand_round_trips_through_classifier() {
        let mut c = GestureClassifier::new(0.05);
        for k in 0..=4 {
            for pinch in [false, true] {
                let s = c.classify(&synthetic_hand(0.3, k, pinch));
                assert_eq!(s.finger_count, k as u8);
                assert_eq!(s.pinch, pinch, "k={} pinch={}", k, pinch);
                assert_eq!(s.wrist_x, 0.3);
            }
        }
    }

    #[test]
    fn reset_forgets_wrist_after_hand_leaves() {
        let mut c = GestureClassifier::new(0.05);
        c.classify(&synthetic_hand(0.1, 2, false));
        c.reset();
        let s = c.classify(&synthetic_hand(0.9, 2, false));
        assert_eq!(s.lateral_speed, 0.0);
        let s = c.classify(&synthetic_hand(0.8, 2, false));
        assert!((s.lateral_speed - 0.1).abs() < 1e-6);
    }
}
