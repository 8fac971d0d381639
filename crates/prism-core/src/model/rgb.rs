use std::fmt;

use super::{Hsl, Hsv, checked, from_code};
use crate::channel::{ChannelRange, Unit};
use crate::color_management::{RgbProfile, Vec3};
use crate::conversion::{hsl_to_rgb, hsv_to_rgb};
use crate::error::ColorError;
use crate::parse::parse_triple;

/// Red, green and blue channels sharing one range `T`.
///
/// Setters store values as given. Use [`Rgb::try_new`] when the input comes
/// from outside and must be range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb<T: ChannelRange = Unit> {
    red: T::Raw,
    green: T::Raw,
    blue: T::Raw,
}

impl<T: ChannelRange> Default for Rgb<T> {
    fn default() -> Self {
        Self::new(T::min(), T::min(), T::min())
    }
}

impl<T: ChannelRange> Rgb<T> {
    pub fn new(red: T::Raw, green: T::Raw, blue: T::Raw) -> Self {
        Self { red, green, blue }
    }

    /// Like [`Rgb::new`], but rejects channels outside `T`'s range.
    pub fn try_new(red: T::Raw, green: T::Raw, blue: T::Raw) -> Result<Self, ColorError> {
        Ok(Self::new(
            checked::<T>("red", red)?,
            checked::<T>("green", green)?,
            checked::<T>("blue", blue)?,
        ))
    }

    /// Parse `"r,g,b"` integer codes, validating each against `T`.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let [r, g, b] = parse_triple(s)?;
        Ok(Self::new(
            from_code::<T>("red", r)?,
            from_code::<T>("green", g)?,
            from_code::<T>("blue", b)?,
        ))
    }

    pub fn red(&self) -> T::Raw {
        self.red
    }

    pub fn green(&self) -> T::Raw {
        self.green
    }

    pub fn blue(&self) -> T::Raw {
        self.blue
    }

    pub fn set_red(&mut self, red: T::Raw) {
        self.red = red;
    }

    pub fn set_green(&mut self, green: T::Raw) {
        self.green = green;
    }

    pub fn set_blue(&mut self, blue: T::Raw) {
        self.blue = blue;
    }

    /// Channels mapped onto `[0, 1]`.
    pub fn to_normalized(&self) -> [f64; 3] {
        [
            T::normalize(self.red),
            T::normalize(self.green),
            T::normalize(self.blue),
        ]
    }

    pub fn from_normalized([r, g, b]: [f64; 3]) -> Self {
        Self::new(T::denormalize(r), T::denormalize(g), T::denormalize(b))
    }

    /// Re-express an RGB color stored in another range.
    pub fn from_rgb<U: ChannelRange>(rgb: &Rgb<U>) -> Self {
        Self::from_normalized(rgb.to_normalized())
    }

    pub fn from_hsv<H: ChannelRange, S: ChannelRange>(hsv: &Hsv<H, S>) -> Self {
        let [h, s, v] = hsv.to_normalized();
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self::from_normalized([r, g, b])
    }

    pub fn from_hsl<H: ChannelRange, S: ChannelRange>(hsl: &Hsl<H, S>) -> Self {
        let [h, s, l] = hsl.to_normalized();
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self::from_normalized([r, g, b])
    }

    pub fn set_hsv<H: ChannelRange, S: ChannelRange>(&mut self, hsv: &Hsv<H, S>) {
        *self = Self::from_hsv(hsv);
    }

    pub fn set_hsl<H: ChannelRange, S: ChannelRange>(&mut self, hsl: &Hsl<H, S>) {
        *self = Self::from_hsl(hsl);
    }

    /// XYZ of this color, treating the channels as encoded values of
    /// `profile`'s RGB space.
    pub fn to_xyz(&self, profile: &RgbProfile) -> Vec3 {
        profile.rgb_to_xyz(Vec3(self.to_normalized()))
    }

    /// Color in `profile`'s RGB space for an XYZ triple.
    ///
    /// Out-of-gamut input is not clipped; see [`ChannelRange::denormalize`].
    pub fn from_xyz(xyz: Vec3, profile: &RgbProfile) -> Self {
        Self::from_normalized(profile.xyz_to_rgb(xyz).0)
    }

    /// `"r,g,b"` in raw channel values.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<T: ChannelRange> fmt::Display for Rgb<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

impl<T: ChannelRange, H: ChannelRange, S: ChannelRange> From<Hsv<H, S>> for Rgb<T> {
    fn from(hsv: Hsv<H, S>) -> Self {
        Self::from_hsv(&hsv)
    }
}

impl<T: ChannelRange, H: ChannelRange, S: ChannelRange> From<Hsl<H, S>> for Rgb<T> {
    fn from(hsl: Hsl<H, S>) -> Self {
        Self::from_hsl(&hsl)
    }
}
