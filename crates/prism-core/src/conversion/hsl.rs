//! RGB ↔ HSL (hue, saturation, lightness).
//!
//! ```text
//! l      = (max + min) / 2
//! chroma = max − min
//! s      = chroma / (1 − |2l − 1|)    (0 when l is 0 or 1)
//!
//! c = (1 − |2l − 1|) × s
//! x = c × (1 − |mod2(6h) − 1|)
//! m = l − c / 2
//! ```

use super::{hue, sector_to_rgb};

/// Convert normalized RGB to normalized HSL.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let chroma = max - min;
    let lightness = (max + min) / 2.0;

    let h = hue(r, g, b, max, chroma);

    // Pure black and white have no defined saturation.
    let s = if lightness > 0.0 && lightness < 1.0 {
        chroma / (1.0 - (2.0 * lightness - 1.0).abs())
    } else {
        0.0
    };

    (h, s, lightness)
}

/// Convert normalized HSL to normalized RGB.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h6 = h * 6.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (mod2(h6) - 1.0).abs());
    let m = l - c / 2.0;

    sector_to_rgb(h6, c, x, m)
}

/// Remainder by repeated subtraction; leaves `2.0` itself untouched.
fn mod2(mut v: f64) -> f64 {
    while v > 2.0 {
        v -= 2.0;
    }
    v
}
