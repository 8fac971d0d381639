use std::fmt;

use super::{Hsv, Rgb, checked, from_code};
use crate::channel::{ChannelRange, Unit};
use crate::conversion::{hsv_to_rgb, rgb_to_hsl};
use crate::error::ColorError;
use crate::parse::parse_triple;

/// Hue in range `H`, saturation and lightness in range `S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl<H: ChannelRange = Unit, S: ChannelRange = Unit> {
    hue: H::Raw,
    saturation: S::Raw,
    lightness: S::Raw,
}

impl<H: ChannelRange, S: ChannelRange> Default for Hsl<H, S> {
    fn default() -> Self {
        Self::new(H::min(), S::min(), S::min())
    }
}

impl<H: ChannelRange, S: ChannelRange> Hsl<H, S> {
    pub fn new(hue: H::Raw, saturation: S::Raw, lightness: S::Raw) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn try_new(hue: H::Raw, saturation: S::Raw, lightness: S::Raw) -> Result<Self, ColorError> {
        Ok(Self::new(
            checked::<H>("hue", hue)?,
            checked::<S>("saturation", saturation)?,
            checked::<S>("lightness", lightness)?,
        ))
    }

    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let [h, sat, l] = parse_triple(s)?;
        Ok(Self::new(
            from_code::<H>("hue", h)?,
            from_code::<S>("saturation", sat)?,
            from_code::<S>("lightness", l)?,
        ))
    }

    pub fn hue(&self) -> H::Raw {
        self.hue
    }

    pub fn saturation(&self) -> S::Raw {
        self.saturation
    }

    pub fn lightness(&self) -> S::Raw {
        self.lightness
    }

    pub fn set_hue(&mut self, hue: H::Raw) {
        self.hue = hue;
    }

    pub fn set_saturation(&mut self, saturation: S::Raw) {
        self.saturation = saturation;
    }

    pub fn set_lightness(&mut self, lightness: S::Raw) {
        self.lightness = lightness;
    }

    pub fn to_normalized(&self) -> [f64; 3] {
        [
            H::normalize(self.hue),
            S::normalize(self.saturation),
            S::normalize(self.lightness),
        ]
    }

    pub fn from_normalized([h, s, l]: [f64; 3]) -> Self {
        Self::new(H::denormalize(h), S::denormalize(s), S::denormalize(l))
    }

    pub fn from_rgb<T: ChannelRange>(rgb: &Rgb<T>) -> Self {
        let [r, g, b] = rgb.to_normalized();
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Self::from_normalized([h, s, l])
    }

    /// Convert from HSV through normalized RGB.
    pub fn from_hsv<H2: ChannelRange, S2: ChannelRange>(hsv: &Hsv<H2, S2>) -> Self {
        let [h, s, v] = hsv.to_normalized();
        let (r, g, b) = hsv_to_rgb(h, s, v);
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Self::from_normalized([h, s, l])
    }

    pub fn set_rgb<T: ChannelRange>(&mut self, rgb: &Rgb<T>) {
        *self = Self::from_rgb(rgb);
    }

    pub fn set_hsv<H2: ChannelRange, S2: ChannelRange>(&mut self, hsv: &Hsv<H2, S2>) {
        *self = Self::from_hsv(hsv);
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<H: ChannelRange, S: ChannelRange> fmt::Display for Hsl<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.hue, self.saturation, self.lightness)
    }
}

impl<H: ChannelRange, S: ChannelRange, T: ChannelRange> From<Rgb<T>> for Hsl<H, S> {
    fn from(rgb: Rgb<T>) -> Self {
        Self::from_rgb(&rgb)
    }
}

impl<H: ChannelRange, S: ChannelRange, H2: ChannelRange, S2: ChannelRange> From<Hsv<H2, S2>>
    for Hsl<H, S>
{
    fn from(hsv: Hsv<H2, S2>) -> Self {
        Self::from_hsv(&hsv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hsl360, HslF64, Hsv360, HsvF64, Rgb256, RgbF64};

    #[test]
    fn test_pure_green() {
        assert_eq!(Hsl360::from_rgb(&Rgb256::new(0, 255, 0)), Hsl360::new(120, 100, 50));
    }

    #[test]
    fn test_black_and_white_have_no_saturation() {
        assert_eq!(Hsl360::from(Rgb256::new(0, 0, 0)), Hsl360::new(0, 0, 0));
        let white = HslF64::from_rgb(&RgbF64::new(1.0, 1.0, 1.0));
        assert_eq!(white, HslF64::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_try_new_names_lightness() {
        assert!(matches!(
            Hsl360::try_new(0, 0, 200),
            Err(ColorError::ChannelOutOfRange { channel: "lightness", .. })
        ));
    }

    #[test]
    fn test_parse_and_display() {
        let hsl = Hsl360::parse("30,60,90").unwrap();
        assert_eq!(hsl.to_string(), "30,60,90");
        assert!(Hsl360::parse("361,0,0").is_err());
    }

    #[test]
    fn test_setters() {
        let mut hsl = Hsl360::default();
        hsl.set_hue(10);
        hsl.set_saturation(20);
        hsl.set_lightness(30);
        assert_eq!(hsl, Hsl360::new(10, 20, 30));

        hsl.set_rgb(&Rgb256::new(0, 0, 0));
        assert_eq!(hsl, Hsl360::default());
    }

    #[test]
    fn test_from_hsv() {
        let hsv = HsvF64::new(0.5, 1.0, 1.0);
        let hsl = HslF64::from(hsv);
        assert!((hsl.hue() - 0.5).abs() < 1e-12);
        assert!((hsl.saturation() - 1.0).abs() < 1e-12);
        assert!((hsl.lightness() - 0.5).abs() < 1e-12);

        let mut quantized = Hsl360::default();
        quantized.set_hsv(&Hsv360::new(0, 0, 0));
        assert_eq!(quantized, Hsl360::new(0, 0, 0));
    }
}
