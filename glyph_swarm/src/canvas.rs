//! Drawing sink.
//!
//! The swarm issues immediate-mode draw calls through [`Canvas`] and owns no
//! pixels itself.  [`Framebuffer`] is the software implementation the window
//! presents.

use crate::color::blend;
use crate::font::TextLayout;

/// Immediate-mode 2D drawing surface.  Coordinates are pixels, y down.
pub trait Canvas {
    fn size(&self) -> (usize, usize);
    fn clear(&mut self, color: u32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: u32);
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: u32);
    /// Soft halo fading from `color` at the centre to nothing at `r`.
    fn glow_circle(&mut self, cx: f32, cy: f32, r: f32, color: u32);
    /// Polyline through `points`, `width` px wide; `closed` joins last to first.
    fn stroke_path(&mut self, points: &[(f32, f32)], closed: bool, width: f32, color: u32);
    /// Text centred on `(cx, cy)` with glyphs `px` tall.
    fn fill_text(&mut self, text: &str, cx: f32, cy: f32, px: f32, color: u32);
}

// ════════════════════════════════════════════════════════════════════════════
// Framebuffer
// ════════════════════════════════════════════════════════════════════════════

// Peak opacity of a glow halo.
const GLOW_ALPHA: f32 = 0.35;

/// Row-major ARGB pixel buffer.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    width:  usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Framebuffer { width, height, pixels: vec![0xFF000000; width * height] }
    }

    /// Resize, discarding contents.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width  = width;
        self.height = height;
        self.pixels = vec![0xFF000000; width * height];
    }

    pub fn width(&self)  -> usize  { self.width }
    pub fn height(&self) -> usize  { self.height }
    pub fn pixels(&self) -> &[u32] { &self.pixels }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height { Some(self.pixels[y * self.width + x]) } else { None }
    }

    fn set_pixel(&mut self, x: isize, y: isize, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    fn blend_pixel(&mut self, x: isize, y: isize, color: u32, alpha: f32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            let i = y as usize * self.width + x as usize;
            self.pixels[i] = blend(self.pixels[i], color, alpha);
        }
    }

    /// Pixel rows/cols whose centres may fall within `r` of `(cx, cy)`.
    fn disc_span(c: f32, r: f32) -> std::ops::RangeInclusive<isize> {
        (c - r).floor() as isize..=(c + r).ceil() as isize
    }
}

impl Canvas for Framebuffer {
    fn size(&self) -> (usize, usize) { (self.width, self.height) }

    fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: u32) {
        let x0 = x.round().max(0.0) as usize;
        let y0 = y.round().max(0.0) as usize;
        let x1 = ((x + w).round().max(0.0) as usize).min(self.width);
        let y1 = ((y + h).round().max(0.0) as usize).min(self.height);
        for row in y0..y1 {
            self.pixels[row * self.width + x0.min(x1)..row * self.width + x1].fill(color);
        }
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: u32) {
        if !(r > 0.0) { return; }
        let r2 = r * r;
        for py in Self::disc_span(cy, r) {
            for px in Self::disc_span(cx, r) {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(px, py, color);
                }
            }
        }
    }

    fn glow_circle(&mut self, cx: f32, cy: f32, r: f32, color: u32) {
        if !(r > 0.0) { return; }
        for py in Self::disc_span(cy, r) {
            for px in Self::disc_span(cx, r) {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                if d < r {
                    let falloff = 1.0 - d / r;
                    self.blend_pixel(px, py, color, GLOW_ALPHA * falloff * falloff);
                }
            }
        }
    }

    fn stroke_path(&mut self, points: &[(f32, f32)], closed: bool, width: f32, color: u32) {
        let r = (width / 2.0).max(0.5);
        let segments = points.windows(2)
            .map(|w| (w[0], w[1]))
            .chain((closed && points.len() > 2).then(|| (points[points.len() - 1], points[0])));

        for ((x0, y0), (x1, y1)) in segments {
            let len = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
            let steps = len.ceil().max(1.0) as usize;
            for i in 0..=steps {
                let t = i as f32 / steps as f32;
                self.fill_circle(x0 + (x1 - x0) * t, y0 + (y1 - y0) * t, r, color);
            }
        }
        if let [(x, y)] = points {
            self.fill_circle(*x, *y, r, color);
        }
    }

    fn fill_text(&mut self, text: &str, cx: f32, cy: f32, px: f32, color: u32) {
        let layout = TextLayout::centered(text, cx, cy, px);
        if layout.is_blank() { return; }
        let (x0, y0, x1, y1) = layout.bounds();
        for y in y0.floor() as isize..y1.ceil() as isize {
            for x in x0.floor() as isize..x1.ceil() as isize {
                if layout.covers(x as f32 + 0.5, y as f32 + 0.5) {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Recording canvas (tests)
// ════════════════════════════════════════════════════════════════════════════


// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
