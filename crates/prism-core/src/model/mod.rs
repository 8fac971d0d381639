//! RGB, HSV and HSL facade types over arbitrary channel ranges.
//!
//! Every cross-model conversion normalizes the source channels, runs the
//! matching pairwise function from [`crate::conversion`], and denormalizes
//! into the destination's ranges. Nothing is cached between conversions.
//!
//! ```text
//!   Rgb<Byte> ──normalize──→ (f64, f64, f64) ──rgb_to_hsv──→ (f64, f64, f64) ──denormalize──→ Hsv<Degrees, Percent>
//! ```

pub mod hsl;
pub mod hsv;
pub mod rgb;

pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::Rgb;

use crate::channel::{Byte, ChannelRange, Degrees, Percent, Unit, Word};
use crate::error::ColorError;

/// RGB with continuous `f64` channels.
pub type RgbF64 = Rgb<Unit>;
/// 8-bit RGB.
pub type Rgb256 = Rgb<Byte>;
/// 16-bit RGB.
pub type Rgb48 = Rgb<Word>;
/// HSV with continuous `f64` channels.
pub type HsvF64 = Hsv<Unit, Unit>;
/// HSV with hue in degrees and saturation/value in percent.
pub type Hsv360 = Hsv<Degrees, Percent>;
/// HSL with continuous `f64` channels.
pub type HslF64 = Hsl<Unit, Unit>;
/// HSL with hue in degrees and saturation/lightness in percent.
pub type Hsl360 = Hsl<Degrees, Percent>;

fn checked<R: ChannelRange>(channel: &'static str, raw: R::Raw) -> Result<R::Raw, ColorError> {
    if R::contains(raw) {
        Ok(raw)
    } else {
        Err(ColorError::ChannelOutOfRange {
            channel,
            value: R::raw_to_f64(raw),
            max: R::MAX,
        })
    }
}

fn from_code<R: ChannelRange>(channel: &'static str, code: u32) -> Result<R::Raw, ColorError> {
    R::from_code(code).ok_or(ColorError::ChannelOutOfRange {
        channel,
        value: f64::from(code),
        max: R::MAX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};

    #[test]
    fn test_facade_matches_pairwise_functions() {
        for (r, g, b) in [(255u8, 0u8, 0u8), (12, 200, 99), (128, 128, 128), (1, 2, 254)] {
            let rgb = Rgb256::new(r, g, b);
            let [nr, ng, nb] = rgb.to_normalized();

            let (h, s, v) = rgb_to_hsv(nr, ng, nb);
            let hsv = Hsv360::from_rgb(&rgb);
            assert_eq!(hsv.hue(), Degrees::denormalize(h));
            assert_eq!(hsv.saturation(), Percent::denormalize(s));
            assert_eq!(hsv.value(), Percent::denormalize(v));

            let (h, s, l) = rgb_to_hsl(nr, ng, nb);
            let hsl = Hsl360::from_rgb(&rgb);
            assert_eq!(hsl.hue(), Degrees::denormalize(h));
            assert_eq!(hsl.saturation(), Percent::denormalize(s));
            assert_eq!(hsl.lightness(), Percent::denormalize(l));

            let [h, s, v] = hsv.to_normalized();
            let (r2, g2, b2) = hsv_to_rgb(h, s, v);
            assert_eq!(
                Rgb256::from_hsv(&hsv),
                Rgb256::new(Byte::denormalize(r2), Byte::denormalize(g2), Byte::denormalize(b2))
            );

            let [h, s, l] = hsl.to_normalized();
            let (r2, g2, b2) = hsl_to_rgb(h, s, l);
            assert_eq!(
                Rgb256::from_hsl(&hsl),
                Rgb256::new(Byte::denormalize(r2), Byte::denormalize(g2), Byte::denormalize(b2))
            );
        }
    }

    #[test]
    fn test_documented_examples() {
        let red = Rgb256::new(255, 0, 0);
        assert_eq!(Hsv360::from_rgb(&red), Hsv360::new(0, 100, 100));

        let green = Rgb256::new(0, 255, 0);
        assert_eq!(Hsl360::from_rgb(&green), Hsl360::new(120, 100, 50));

        let black = Rgb256::default();
        assert_eq!(Hsv360::from_rgb(&black), Hsv360::new(0, 0, 0));
        assert_eq!(Hsl360::from_rgb(&black), Hsl360::new(0, 0, 0));
    }

    #[test]
    fn test_continuous_round_trip_is_exact_enough() {
        let rgb = RgbF64::new(0.8, 0.4, 0.2);
        let back = RgbF64::from_hsv(&HsvF64::from_rgb(&rgb));
        assert!((back.red() - 0.8).abs() < 1e-15);
        assert!((back.green() - 0.4).abs() < 1e-15);
        assert!((back.blue() - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_hsv_hsl_direct_conversion_skips_quantization() {
        let hsv = HsvF64::new(0.25, 0.5, 0.75);
        let hsl = HslF64::from_hsv(&hsv);
        let back = HsvF64::from_hsl(&hsl);
        assert!((back.hue() - 0.25).abs() < 1e-12);
        assert!((back.saturation() - 0.5).abs() < 1e-12);
        assert!((back.value() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_checked_reports_channel() {
        let err = checked::<Percent>("saturation", 120).unwrap_err();
        assert!(matches!(
            err,
            ColorError::ChannelOutOfRange { channel: "saturation", .. }
        ));
        assert_eq!(err.to_string(), "saturation value 120 is out of range 0..=100");
    }
}
