//! Tracking sources — hand landmarks from hardware or simulation, classified
//! into [`GestureSample`]s and delivered over a `mpsc` channel.
//!
//! The render loop only ever sees the receiving end, so it doesn't need to
//! know whether samples came from a real tracker or the keyboard/mouse
//! simulator.  Frames with no hand produce no sample.

use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::thread;

use glyph_swarm::gesture::{synthetic_hand, GestureClassifier, GestureSample};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackingError {
    #[error("tracking device unavailable: {0}")]
    Connect(String),

    #[error("tracking source exited before it was ready")]
    Exited,
}

/// One-shot startup report from a source thread.
pub type Ready = SyncSender<Result<(), TrackingError>>;

// ════════════════════════════════════════════════════════════════════════════
// TrackingSource trait — unified interface for hw and sim
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`GestureSample`]s over a channel.
///
/// `run` must report on `ready` once, after acquiring its device and before
/// the first sample.
pub trait TrackingSource: Send + 'static {
    fn run(self: Box<Self>, ready: Ready, tx: Sender<GestureSample>);
}

/// Spawn a tracking source on its own thread and wait for it to come up.
/// Returns the receiving end, or the source's startup failure.
pub fn spawn_tracking_source<T: TrackingSource>(source: T) -> Result<Receiver<GestureSample>, TrackingError> {
    let (tx, rx) = mpsc::channel();
    let (ready_tx, ready_rx) = mpsc::sync_channel(1);
    thread::spawn(move || Box::new(source).run(ready_tx, tx));
    match ready_rx.recv() {
        Ok(Ok(()))  => Ok(rx),
        Ok(Err(e))  => Err(e),
        Err(_)      => Err(TrackingError::Exited),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LeapTrackingSource — real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Tracking source backed by a real LeapMotion controller.
///
/// Requires the `leap` feature flag and the LeapC shared library installed.
///
/// Only the first tracked hand is used.  Its palm stands in for the wrist;
/// thumb tip, finger tips and PIP joints are projected onto the device's
/// x/y plane and normalized to `[0, 1]` with y growing downward.
#[cfg(feature = "leap")]
pub struct LeapTrackingSource {
    pub classifier: GestureClassifier,
}

#[cfg(feature = "leap")]
impl TrackingSource for LeapTrackingSource {
    fn run(mut self: Box<Self>, ready: Ready, tx: Sender<GestureSample>) {
        use leaprs::*;

        let mut connection = match Connection::create(ConnectionConfig::default()) {
            Ok(c)  => c,
            Err(e) => {
                let _ = ready.send(Err(TrackingError::Connect(format!("LeapC connection: {:?}", e))));
                return;
            }
        };
        if let Err(e) = connection.open() {
            let _ = ready.send(Err(TrackingError::Connect(format!("LeapMotion device: {:?}", e))));
            return;
        }
        let _ = ready.send(Ok(()));

        loop {
            let msg = match connection.poll(100) {
                Ok(m)  => m,
                Err(_) => continue,
            };

            if let Event::Tracking(frame) = msg.event() {
                let hands: Vec<_> = frame.hands().collect();
                let Some(hand) = hands.first() else {
                    self.classifier.reset();
                    continue;
                };
                let Some(landmarks) = leap_landmarks(hand) else { continue };
                let sample = self.classifier.classify(&landmarks);
                if tx.send(sample).is_err() { return; }
            }
        }
    }
}

/// Project a Leap hand onto the 21-point landmark layout.
#[cfg(feature = "leap")]
fn leap_landmarks(hand: &leaprs::Hand) -> Option<glyph_swarm::HandLandmarks> {
    use glyph_swarm::gesture::{
        Landmark, FINGERS, LANDMARK_COUNT, THUMB_TIP, WRIST,
    };

    // Interaction box (mm): x ∈ [-200, 200], height ∈ [50, 450] above the device.
    const HALF_WIDTH: f32 = 200.0;
    const FLOOR:      f32 = 50.0;
    const SPAN:       f32 = 400.0;

    let norm = |x: f32, y: f32| Landmark::new(
        ((x + HALF_WIDTH) / (2.0 * HALF_WIDTH)).clamp(0.0, 1.0),
        (1.0 - (y - FLOOR) / SPAN).clamp(0.0, 1.0),
    );

    let digits: Vec<_> = hand.digits().collect();
    if digits.len() < 5 { return None; }

    let palm = hand.palm().position();
    let mut lm = [norm(palm.x, palm.y); LANDMARK_COUNT];
    lm[WRIST] = norm(palm.x, palm.y);

    let thumb = digits[0].distal().next_joint();
    lm[THUMB_TIP] = norm(thumb.x, thumb.y);

    for (digit, &(tip, pip)) in digits[1..5].iter().zip(FINGERS.iter()) {
        let t = digit.distal().next_joint();
        let p = digit.proximal().next_joint();
        lm[tip] = norm(t.x, t.y);
        lm[pip] = norm(p.x, p.y);
    }
    Some(glyph_swarm::HandLandmarks(lm))
}

// ════════════════════════════════════════════════════════════════════════════
// SimTrackingSource — keyboard/mouse simulation (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Simulated hand pose read from the window each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimPose {
    /// Pointer x, normalized to the window width.
    pub wrist_x:  f32,
    /// Raised fingers, 0–4.
    pub extended: usize,
    pub pinch:    bool,
    /// False while the simulated hand is "out of frame".
    pub present:  bool,
}

impl Default for SimPose {
    fn default() -> Self {
        SimPose { wrist_x: 0.5, extended: 2, pinch: false, present: true }
    }
}

/// Raw input event from the simulation window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimInput {
    Pose(SimPose),
    Quit,
}

/// Tracking source driven by [`SimInput`] events from the visualizer window.
///
/// Each pose is turned into a synthetic landmark set and run through the same
/// [`GestureClassifier`] a real tracker's frames go through.
pub struct SimTrackingSource {
    pub rx:         Receiver<SimInput>,
    pub classifier: GestureClassifier,
}

impl TrackingSource for SimTrackingSource {
    fn run(mut self: Box<Self>, ready: Ready, tx: Sender<GestureSample>) {
        let _ = ready.send(Ok(()));
        while let Ok(input) = self.rx.recv() {
            let pose = match input {
                SimInput::Pose(p) => p,
                SimInput::Quit    => return,
            };
            if !pose.present {
                self.classifier.reset();
                continue;
            }

            let hand = synthetic_hand(pose.wrist_x, pose.extended, pose.pinch);
            if tx.send(self.classifier.classify(&hand)).is_err() { return; }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> (Sender<SimInput>, Receiver<GestureSample>) {
        let (tx, rx) = mpsc::channel();
        let samples = spawn_tracking_source(SimTrackingSource {
            rx,
            classifier: GestureClassifier::new(0.05),
        })
        .unwrap();
        (tx, samples)
    }

    #[test]
    fn pose_becomes_sample() {
        let (tx, samples) = sim();
        tx.send(SimInput::Pose(SimPose { wrist_x: 0.3, extended: 1, pinch: false, present: true })).unwrap();
        let s = samples.recv().unwrap();
        assert_eq!(s.finger_count, 1);
        assert!(!s.pinch);
        assert_eq!(s.wrist_x, 0.3);
        assert_eq!(s.lateral_speed, 0.0);
    }

    #[test]
    fn absent_hand_is_dropped() {
        let (tx, samples) = sim();
        tx.send(SimInput::Pose(SimPose { present: false, ..SimPose::default() })).unwrap();
        tx.send(SimInput::Pose(SimPose { pinch: true, ..SimPose::default() })).unwrap();
        // The first sample through is the pinch; the absent frame produced nothing.
        assert!(samples.recv().unwrap().pinch);
    }

    #[test]
    fn lateral_speed_across_poses() {
        let (tx, samples) = sim();
        tx.send(SimInput::Pose(SimPose { wrist_x: 0.2, ..SimPose::default() })).unwrap();
        tx.send(SimInput::Pose(SimPose { wrist_x: 0.5, ..SimPose::default() })).unwrap();
        samples.recv().unwrap();
        let s = samples.recv().unwrap();
        assert!((s.lateral_speed - 0.3).abs() < 1e-6);
    }

    #[test]
    fn hand_reentering_elsewhere_is_not_a_swipe() {
        let (tx, samples) = sim();
        tx.send(SimInput::Pose(SimPose { wrist_x: 0.1, ..SimPose::default() })).unwrap();
        tx.send(SimInput::Pose(SimPose { present: false, ..SimPose::default() })).unwrap();
        tx.send(SimInput::Pose(SimPose { wrist_x: 0.9, ..SimPose::default() })).unwrap();
        samples.recv().unwrap();
        assert_eq!(samples.recv().unwrap().lateral_speed, 0.0);
    }

    struct NoDevice;

    impl TrackingSource for NoDevice {
        fn run(self: Box<Self>, ready: Ready, _tx: Sender<GestureSample>) {
            let _ = ready.send(Err(TrackingError::Connect("no controller attached".into())));
        }
    }

    struct Vanishes;

    impl TrackingSource for Vanishes {
        fn run(self: Box<Self>, _ready: Ready, _tx: Sender<GestureSample>) {}
    }

    #[test]
    fn startup_failure_is_reported_to_caller() {
        assert_eq!(
            spawn_tracking_source(NoDevice).err(),
            Some(TrackingError::Connect("no controller attached".into()))
        );
    }

    #[test]
    fn source_exiting_silently_is_an_error() {
        assert_eq!(spawn_tracking_source(Vanishes).err(), Some(TrackingError::Exited));
    }

    #[test]
    fn quit_closes_channel() {
        let (tx, samples) = sim();
        tx.send(SimInput::Quit).unwrap();
        assert!(samples.recv().is_err());
    }
}
