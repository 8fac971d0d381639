//! Pairwise conversions between RGB and the cylindrical models.
//!
//! All functions take and return normalized `f64` channels in `[0, 1]`,
//! hue included (`1.0` is a full turn). Inputs are not validated.

pub mod hsl;
pub mod hsv;

pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};

/// Hue shared by HSV and HSL, from the channel holding the maximum.
///
/// ```text
/// red max:   ((g − b) / chroma) mod 6
/// green max: (b − r) / chroma + 2
/// blue max:  (r − g) / chroma + 4
/// ```
///
/// Ties are broken red, then green, then blue, using exact comparisons.
/// The result is divided by 6 and wrapped into `[0, 1)`.
pub(crate) fn hue(r: f64, g: f64, b: f64, max: f64, chroma: f64) -> f64 {
    if chroma == 0.0 {
        return 0.0;
    }

    let sector = if r == max {
        ((g - b) / chroma) % 6.0
    } else if g == max {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    let h = sector / 6.0;
    if h < 0.0 { h + 1.0 } else { h }
}

/// Place chroma `c`, second-largest component `x` and offset `m` by sector.
///
/// `h6` is the hue scaled to `[0, 6)`. A full turn (`6.0`) wraps to red;
/// anything else outside `[0, 6)`, NaN included, yields black.
pub(crate) fn sector_to_rgb(mut h6: f64, c: f64, x: f64, m: f64) -> (f64, f64, f64) {
    if h6 >= 6.0 {
        h6 -= 6.0;
    }

    if !(0.0..6.0).contains(&h6) {
        return (0.0, 0.0, 0.0);
    }

    match h6 as u8 {
        0 => (c + m, x + m, m),
        1 => (x + m, c + m, m),
        2 => (m, c + m, x + m),
        3 => (m, x + m, c + m),
        4 => (x + m, m, c + m),
        _ => (c + m, m, x + m),
    }
}
