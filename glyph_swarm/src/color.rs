//! Packed ARGB (`0xAARRGGBB`) colours.

pub const BACKGROUND: u32 = 0xFF000000;
pub const WHITE:      u32 = 0xFFFFFFFF;

/// Particle colour for a hue in degrees: saturated and bright, so glow halos
/// read well against the black background.
pub fn hue_color(hue: f32) -> u32 {
    hsv_to_argb(hue, 0.8, 1.0)
}

/// Convert HSV → packed ARGB (0xAARRGGBB, A=0xFF).
pub fn hsv_to_argb(h: f32, s: f32, v: f32) -> u32 {
    let h  = h.rem_euclid(360.0);
    let hi = (h / 60.0) as u32;
    let f  = h / 60.0 - hi as f32;
    let p  = v * (1.0 - s);
    let q  = v * (1.0 - s * f);
    let t  = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match hi {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    let ri = (r * 255.0) as u32;
    let gi = (g * 255.0) as u32;
    let bi = (b * 255.0) as u32;
    0xFF000000 | (ri << 16) | (gi << 8) | bi
}

/// Alpha-blend two ARGB colors. `t` = 0.0 → all `a`, `t` = 1.0 → all `b`.
pub fn blend(a: u32, b: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |ca: u32, cb: u32| (ca as f32 * (1.0-t) + cb as f32 * t) as u32;
    let ar = (a >> 16) & 0xFF; let br = (b >> 16) & 0xFF;
    let ag = (a >>  8) & 0xFF; let bg = (b >>  8) & 0xFF;
    let ab =  a        & 0xFF; let bb =  b        & 0xFF;
    0xFF000000 | (lerp(ar,br) << 16) | (lerp(ag,bg) << 8) | lerp(ab,bb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsv_to_argb(0.0,   1.0, 1.0), 0xFFFF0000);
        assert_eq!(hsv_to_argb(120.0, 1.0, 1.0), 0xFF00FF00);
        assert_eq!(hsv_to_argb(240.0, 1.0, 1.0), 0xFF0000FF);
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(hue_color(-60.0), hue_color(300.0));
        assert_eq!(hue_color(360.0), hue_color(0.0));
    }

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend(BACKGROUND, WHITE, 0.0), BACKGROUND);
        assert_eq!(blend(BACKGROUND, WHITE, 1.0), WHITE);
        assert_eq!(blend(BACKGROUND, WHITE, 0.5), 0xFF7F7F7F);
    }
}
