//! Static line-art shapes: heart, Saturn and smiley.

use std::f32::consts::{PI, TAU};

use crate::canvas::Canvas;
use crate::color::WHITE;

pub const LINE_WIDTH: f32 = 4.0;

const HEART_STEP:  f32 = 0.02;
const HEART_SCALE: f32 = 10.0;
// Points per full turn when flattening arcs.
const ARC_SEGMENTS: usize = 96;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Heart,
    Saturn,
    Smile,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Heart  => "HEART",
            Shape::Saturn => "SATURN",
            Shape::Smile  => "SMILE",
        }
    }

    /// Draw centred on `(cx, cy)`.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, cx: f32, cy: f32) {
        match self {
            Shape::Heart => {
                canvas.stroke_path(&heart_points(cx, cy), false, LINE_WIDTH, WHITE);
            }
            Shape::Saturn => {
                canvas.stroke_path(&arc_points(cx, cy, 60.0, 60.0, 0.0, TAU), true, LINE_WIDTH, WHITE);
                canvas.stroke_path(&arc_points(cx, cy, 110.0, 35.0, 0.0, TAU), true, LINE_WIDTH, WHITE);
            }
            Shape::Smile => {
                canvas.stroke_path(&arc_points(cx, cy, 120.0, 120.0, 0.0, TAU), true, LINE_WIDTH, WHITE);
                canvas.fill_circle(cx - 40.0, cy - 40.0, 10.0, WHITE);
                canvas.fill_circle(cx + 40.0, cy - 40.0, 10.0, WHITE);
                // Lower half only: y grows downward.
                canvas.stroke_path(&arc_points(cx, cy + 20.0, 60.0, 60.0, 0.0, PI), false, LINE_WIDTH, WHITE);
            }
        }
    }
}

/// The classic parametric heart, scaled ×10 and flipped so it points down.
pub fn heart_points(cx: f32, cy: f32) -> Vec<(f32, f32)> {
    let steps = (TAU / HEART_STEP).ceil() as usize;
    (0..steps)
        .map(|i| {
            let t = i as f32 * HEART_STEP;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos();
            (cx + x * HEART_SCALE, cy - y * HEART_SCALE)
        })
        .collect()
}

/// Points along an axis-aligned elliptical arc from `start` to `end` radians.
pub fn arc_points(cx: f32, cy: f32, rx: f32, ry: f32, start: f32, end: f32) -> Vec<(f32, f32)> {
    let span = end - start;
    let n = ((span.abs() / TAU) * ARC_SEGMENTS as f32).ceil().max(1.0) as usize;
    (0..=n)
        .map(|i| {
            let a = start + span * i as f32 / n as f32;
            (cx + rx * a.cos(), cy + ry * a.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::{Op, Recorder};

    #[test]
    fn heart_spans_expected_extent() {
        let pts = heart_points(0.0, 0.0);
        let max_x = pts.iter().map(|p| p.0).fold(f32::MIN, f32::max);
        let min_y = pts.iter().map(|p| p.1).fold(f32::MAX, f32::min);
        assert!((max_x - 160.0).abs() < 1.0, "max_x {}", max_x);
        // Top lobes reach about 12 units above centre before the ×10 scale.
        assert!(min_y < -100.0 && min_y > -130.0, "min_y {}", min_y);
        // Cusp at t = 0 sits 5 units above centre.
        assert_eq!(pts[0], (0.0, -50.0));
    }

    #[test]
    fn arc_endpoints() {
        let pts = arc_points(10.0, 20.0, 60.0, 60.0, 0.0, PI);
        let first = pts[0];
        let last = *pts.last().unwrap();
        assert!((first.0 - 70.0).abs() < 1e-3 && (first.1 - 20.0).abs() < 1e-3);
        assert!((last.0 + 50.0).abs() < 1e-3 && (last.1 - 20.0).abs() < 1e-3);
        // Half-arc bulges downward.
        assert!(pts.iter().all(|p| p.1 >= 20.0 - 1e-3));
    }

    #[test]
    fn smile_draws_face_eyes_mouth() {
        let mut rec = Recorder::new(800, 600);
        Shape::Smile.draw(&mut rec, 400.0, 300.0);
        let paths = rec.ops.iter().filter(|o| matches!(o, Op::Path { .. })).count();
        assert_eq!(paths, 2);
        assert_eq!(rec.circles(), vec![(360.0, 260.0), (440.0, 260.0)]);
    }

    #[test]
    fn saturn_draws_two_closed_loops() {
        let mut rec = Recorder::new(800, 600);
        Shape::Saturn.draw(&mut rec, 400.0, 300.0);
        assert_eq!(
            rec.ops.iter().filter(|o| matches!(o, Op::Path { closed: true, .. })).count(),
            2
        );
    }
}
