//! RGB ↔ HSV (hue, saturation, value).
//!
//! ```text
//! v      = max(r, g, b)
//! chroma = v − min(r, g, b)
//! s      = chroma / v            (0 when chroma is 0)
//!
//! c = v × s
//! x = c × (1 − |(6h mod 2) − 1|)
//! m = v − c
//! ```

use super::{hue, sector_to_rgb};

/// Convert normalized RGB to normalized HSV.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let v = r.max(g.max(b));
    let chroma = v - r.min(g.min(b));

    if chroma == 0.0 {
        return (0.0, 0.0, v);
    }

    (hue(r, g, b, v, chroma), chroma / v, v)
}

/// Convert normalized HSV to normalized RGB.
///
/// `h == 1.0` is the same angle as `h == 0.0` and yields red-sector output.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h6 = h * 6.0;
    let c = v * s;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = v - c;

    sector_to_rgb(h6, c, x, m)
}
