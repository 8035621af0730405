//! Glyph sampling — text → sparse grid of particle target points.
//!
//! The text is rendered centred into an offscreen alpha raster the size of the
//! viewport, then scanned on a `gap`-pitch grid.  A grid cell becomes a target
//! iff its alpha exceeds the threshold.  Output is in row-major scan order
//! (top-to-bottom, left-to-right), so identical inputs give identical output.

use crate::config::SwarmConfig;
use crate::font::TextLayout;

/// A target position in viewport pixels.
pub type Point = (f32, f32);

/// Ordered target points for one text at one viewport size.
pub type TargetPointSet = Vec<Point>;

// 2×2 supersampling offsets inside each pixel.
const SUBSAMPLES: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

/// Glyph pixel height for `text` in a `width × height` viewport: a quarter of
/// the width, capped so the whole string fits in 90% of the width and the
/// glyphs stay under 60% of the height.
pub fn font_px(text: &str, width: usize, height: usize) -> f32 {
    let chars = text.chars().count().max(1) as f32;
    let w = width as f32;
    (w / 4.0).min(height as f32 * 0.6).min(w * 0.9 / chars)
}

// ════════════════════════════════════════════════════════════════════════════
// GlyphRaster
// ════════════════════════════════════════════════════════════════════════════

/// Offscreen 8-bit alpha coverage of a rendered string.
#[derive(Clone, Debug)]
pub struct GlyphRaster {
    width:  usize,
    height: usize,
    alpha:  Vec<u8>,
}

impl GlyphRaster {
    pub fn render(text: &str, width: usize, height: usize) -> Self {
        let mut alpha = vec![0u8; width * height];
        let layout = TextLayout::centered(
            text,
            width as f32 / 2.0,
            height as f32 / 2.0,
            font_px(text, width, height),
        );

        if width > 0 && height > 0 && !layout.is_blank() {
            let (x0, y0, x1, y1) = layout.bounds();
            let xs = x0.floor().max(0.0) as usize..(x1.ceil().max(0.0) as usize).min(width);
            let ys = y0.floor().max(0.0) as usize..(y1.ceil().max(0.0) as usize).min(height);
            for y in ys {
                for x in xs.clone() {
                    let hits = SUBSAMPLES.iter()
                        .filter(|(sx, sy)| layout.covers(x as f32 + sx, y as f32 + sy))
                        .count();
                    alpha[y * width + x] = (hits * 255 / SUBSAMPLES.len()) as u8;
                }
            }
        }

        GlyphRaster { width, height, alpha }
    }

    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height { self.alpha[y * self.width + x] } else { 0 }
    }

    /// Scan the raster on a `gap` grid, keeping cells whose alpha exceeds
    /// `threshold`.
    pub fn points(&self, gap: usize, threshold: u8) -> TargetPointSet {
        let gap = gap.max(1);
        let mut out = Vec::new();
        for y in (0..self.height).step_by(gap) {
            for x in (0..self.width).step_by(gap) {
                if self.alpha[y * self.width + x] > threshold {
                    out.push((x as f32, y as f32));
                }
            }
        }
        out
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GlyphSampler
// ════════════════════════════════════════════════════════════════════════════

/// Sample `text` into target points for a `width × height` viewport.
pub fn sample(text: &str, width: usize, height: usize, gap: usize, alpha_threshold: u8) -> TargetPointSet {
    GlyphRaster::render(text, width, height).points(gap, alpha_threshold)
}

/// [`sample`] with the grid pitch and threshold fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSampler {
    pub gap:             usize,
    pub alpha_threshold: u8,
}

impl GlyphSampler {
    pub fn new(cfg: &SwarmConfig) -> Self {
        GlyphSampler { gap: cfg.gap, alpha_threshold: cfg.alpha_threshold }
    }

    pub fn sample(&self, text: &str, width: usize, height: usize) -> TargetPointSet {
        sample(text, width, height, self.gap, self.alpha_threshold)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_points() {
        assert!(sample("", 800, 600, 6, 128).is_empty());
    }

    #[test]
    fn unrenderable_text_yields_no_points() {
        assert!(sample("♥♥", 800, 600, 6, 128).is_empty());
        assert!(sample("   ", 800, 600, 6, 128).is_empty());
    }

    #[test]
    fn zero_viewport_yields_no_points() {
        assert!(sample("HELLO", 0, 0, 6, 128).is_empty());
        assert!(sample("HELLO", 800, 0, 6, 128).is_empty());
    }

    #[test]
    fn hello_has_points_on_grid_inside_viewport() {
        let pts = sample("HELLO", 800, 600, 6, 128);
        assert!(pts.len() > 100, "only {} points", pts.len());
        for &(x, y) in &pts {
            assert!(x >= 0.0 && x < 800.0 && y >= 0.0 && y < 600.0);
            assert_eq!(x as usize % 6, 0);
            assert_eq!(y as usize % 6, 0);
        }
    }

    #[test]
    fn every_point_passes_threshold() {
        let raster = GlyphRaster::render("LOVE", 640, 480);
        for (x, y) in raster.points(4, 128) {
            assert!(raster.alpha(x as usize, y as usize) > 128);
        }
    }

    #[test]
    fn deterministic_row_major_order() {
        let a = sample("HETSI", 640, 480, 5, 128);
        let b = sample("HETSI", 640, 480, 5, 128);
        assert_eq!(a, b);
        for w in a.windows(2) {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            assert!(y0 < y1 || (y0 == y1 && x0 < x1));
        }
    }

    #[test]
    fn text_is_centred() {
        let pts = sample("O", 400, 400, 2, 128);
        let n = pts.len() as f32;
        let cx = pts.iter().map(|p| p.0).sum::<f32>() / n;
        let cy = pts.iter().map(|p| p.1).sum::<f32>() / n;
        assert!((cx - 200.0).abs() < 20.0, "cx = {}", cx);
        assert!((cy - 200.0).abs() < 20.0, "cy = {}", cy);
    }

    #[test]
    fn finer_gap_gives_more_points() {
        let coarse = sample("HI", 600, 400, 8, 128).len();
        let fine   = sample("HI", 600, 400, 4, 128).len();
        assert!(fine > coarse);
    }

    #[test]
    fn max_threshold_rejects_everything() {
        assert!(sample("HELLO", 800, 600, 6, 255).is_empty());
    }

    #[test]
    fn font_fits_long_text() {
        let px = font_px("HELLO WORLD", 800, 600);
        assert!(px * 11.0 <= 800.0 * 0.9 + 0.01);
        assert!(font_px("A", 800, 100) <= 60.0 + 1e-3);
    }
}
