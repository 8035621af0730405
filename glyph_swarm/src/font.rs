//! Bitmap text layout over the `font8x8` basic glyph set.
//!
//! Shared by the glyph sampler (coverage raster) and the framebuffer's text
//! drawing, so on-screen labels and particle targets use identical shapes.

use font8x8::legacy::BASIC_LEGACY;

/// Glyph cells per side.
pub const CELLS: usize = 8;

/// Bitmap rows for `ch`; bit 0 of each row is the leftmost cell.
/// Characters outside the basic set have no glyph.
pub fn glyph(ch: char) -> Option<[u8; 8]> {
    BASIC_LEGACY.get(ch as usize).copied()
}

/// A run of glyphs scaled to a pixel height and positioned in pixel space.
#[derive(Clone, Debug)]
pub struct TextLayout {
    rows:   Vec<[u8; 8]>,
    origin: (f32, f32),
    scale:  f32,
}

impl TextLayout {
    /// Lay out `text` centred on `(cx, cy)` with glyphs `px` pixels tall.
    /// Unknown characters take up space but draw nothing.
    pub fn centered(text: &str, cx: f32, cy: f32, px: f32) -> Self {
        let rows: Vec<[u8; 8]> = text.chars()
            .map(|c| glyph(c).unwrap_or([0; 8]))
            .collect();
        let scale = (px / CELLS as f32).max(f32::EPSILON);
        let w = rows.len() as f32 * CELLS as f32 * scale;
        let h = CELLS as f32 * scale;
        TextLayout { rows, origin: (cx - w / 2.0, cy - h / 2.0), scale }
    }

    pub fn width(&self)  -> f32 { self.rows.len() as f32 * CELLS as f32 * self.scale }
    pub fn height(&self) -> f32 { CELLS as f32 * self.scale }

    /// `(x0, y0, x1, y1)` in pixels.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let (x0, y0) = self.origin;
        (x0, y0, x0 + self.width(), y0 + self.height())
    }

    /// True when nothing in the run would be drawn.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|g| g.iter().all(|&r| r == 0))
    }

    /// Whether the point `(x, y)` falls inside a lit glyph cell.
    pub fn covers(&self, x: f32, y: f32) -> bool {
        let u = (x - self.origin.0) / self.scale;
        let v = (y - self.origin.1) / self.scale;
        if u < 0.0 || v < 0.0 { return false; }
        let (col, row) = (u as usize, v as usize);
        if row >= CELLS { return false; }
        match self.rows.get(col / CELLS) {
            Some(bits) => (bits[row] >> (col % CELLS)) & 1 == 1,
            None       => false,
        }
    }
}
