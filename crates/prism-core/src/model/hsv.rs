use std::fmt;

use super::{Hsl, Rgb, checked, from_code};
use crate::channel::{ChannelRange, Unit};
use crate::conversion::{hsl_to_rgb, rgb_to_hsv};
use crate::error::ColorError;
use crate::parse::parse_triple;

/// Hue in range `H`, saturation and value in range `S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv<H: ChannelRange = Unit, S: ChannelRange = Unit> {
    hue: H::Raw,
    saturation: S::Raw,
    value: S::Raw,
}

impl<H: ChannelRange, S: ChannelRange> Default for Hsv<H, S> {
    fn default() -> Self {
        Self::new(H::min(), S::min(), S::min())
    }
}

impl<H: ChannelRange, S: ChannelRange> Hsv<H, S> {
    pub fn new(hue: H::Raw, saturation: S::Raw, value: S::Raw) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    pub fn try_new(hue: H::Raw, saturation: S::Raw, value: S::Raw) -> Result<Self, ColorError> {
        Ok(Self::new(
            checked::<H>("hue", hue)?,
            checked::<S>("saturation", saturation)?,
            checked::<S>("value", value)?,
        ))
    }

    /// Parse `"h,s,v"` integer codes, validating each against its range.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let [h, sat, v] = parse_triple(s)?;
        Ok(Self::new(
            from_code::<H>("hue", h)?,
            from_code::<S>("saturation", sat)?,
            from_code::<S>("value", v)?,
        ))
    }

    pub fn hue(&self) -> H::Raw {
        self.hue
    }

    pub fn saturation(&self) -> S::Raw {
        self.saturation
    }

    pub fn value(&self) -> S::Raw {
        self.value
    }

    pub fn set_hue(&mut self, hue: H::Raw) {
        self.hue = hue;
    }

    pub fn set_saturation(&mut self, saturation: S::Raw) {
        self.saturation = saturation;
    }

    pub fn set_value(&mut self, value: S::Raw) {
        self.value = value;
    }

    pub fn to_normalized(&self) -> [f64; 3] {
        [
            H::normalize(self.hue),
            S::normalize(self.saturation),
            S::normalize(self.value),
        ]
    }

    pub fn from_normalized([h, s, v]: [f64; 3]) -> Self {
        Self::new(H::denormalize(h), S::denormalize(s), S::denormalize(v))
    }

    pub fn from_rgb<T: ChannelRange>(rgb: &Rgb<T>) -> Self {
        let [r, g, b] = rgb.to_normalized();
        let (h, s, v) = rgb_to_hsv(r, g, b);
        Self::from_normalized([h, s, v])
    }

    /// Convert from HSL through normalized RGB, without quantizing the
    /// intermediate.
    pub fn from_hsl<H2: ChannelRange, S2: ChannelRange>(hsl: &Hsl<H2, S2>) -> Self {
        let [h, s, l] = hsl.to_normalized();
        let (r, g, b) = hsl_to_rgb(h, s, l);
        let (h, s, v) = rgb_to_hsv(r, g, b);
        Self::from_normalized([h, s, v])
    }

    pub fn set_rgb<T: ChannelRange>(&mut self, rgb: &Rgb<T>) {
        *self = Self::from_rgb(rgb);
    }

    pub fn set_hsl<H2: ChannelRange, S2: ChannelRange>(&mut self, hsl: &Hsl<H2, S2>) {
        *self = Self::from_hsl(hsl);
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<H: ChannelRange, S: ChannelRange> fmt::Display for Hsv<H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.hue, self.saturation, self.value)
    }
}

impl<H: ChannelRange, S: ChannelRange, T: ChannelRange> From<Rgb<T>> for Hsv<H, S> {
    fn from(rgb: Rgb<T>) -> Self {
        Self::from_rgb(&rgb)
    }
}

impl<H: ChannelRange, S: ChannelRange, H2: ChannelRange, S2: ChannelRange> From<Hsl<H2, S2>>
    for Hsv<H, S>
{
    fn from(hsl: Hsl<H2, S2>) -> Self {
        Self::from_hsl(&hsl)
    }
}
