//! Named RGB working spaces: primaries, reference white and gamma.
//!
//! # Reference
//! Lindbloom, Bruce J. — RGB Working Space Information

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::illuminant::Illuminant;
use crate::error::ColorError;

/// CIE xy chromaticities of the red, green and blue primaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primaries {
    pub red: [f64; 2],
    pub green: [f64; 2],
    pub blue: [f64; 2],
}

/// Identifies one of the built-in RGB working spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RgbSpace {
    /// Adobe RGB (1998).
    AdobeRgb,
    AppleRgb,
    BestRgb,
    BetaRgb,
    BruceRgb,
    CieRgb,
    ColorMatchRgb,
    DonRgb4,
    /// ECI RGB v2, the only space with the L* curve.
    EciRgb2,
    EktaSpacePs5,
    NtscRgb,
    PalSecamRgb,
    ProPhotoRgb,
    SmpteCRgb,
    /// sRGB (IEC 61966-2-1). Default.
    #[default]
    Srgb,
    WideGamutRgb,
}

impl RgbSpace {
    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AdobeRgb => "Adobe RGB (1998)",
            Self::AppleRgb => "Apple RGB",
            Self::BestRgb => "Best RGB",
            Self::BetaRgb => "Beta RGB",
            Self::BruceRgb => "Bruce RGB",
            Self::CieRgb => "CIE RGB",
            Self::ColorMatchRgb => "ColorMatch RGB",
            Self::DonRgb4 => "Don RGB 4",
            Self::EciRgb2 => "ECI RGB v2",
            Self::EktaSpacePs5 => "Ekta Space PS5",
            Self::NtscRgb => "NTSC RGB",
            Self::PalSecamRgb => "PAL/SECAM RGB",
            Self::ProPhotoRgb => "ProPhoto RGB",
            Self::SmpteCRgb => "SMPTE-C RGB",
            Self::Srgb => "sRGB",
            Self::WideGamutRgb => "Wide Gamut RGB",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [RgbSpace; 16] = [
            RgbSpace::AdobeRgb,
            RgbSpace::AppleRgb,
            RgbSpace::BestRgb,
            RgbSpace::BetaRgb,
            RgbSpace::BruceRgb,
            RgbSpace::CieRgb,
            RgbSpace::ColorMatchRgb,
            RgbSpace::DonRgb4,
            RgbSpace::EciRgb2,
            RgbSpace::EktaSpacePs5,
            RgbSpace::NtscRgb,
            RgbSpace::PalSecamRgb,
            RgbSpace::ProPhotoRgb,
            RgbSpace::SmpteCRgb,
            RgbSpace::Srgb,
            RgbSpace::WideGamutRgb,
        ];
        &ALL
    }

    pub const fn primaries(&self) -> Primaries {
        let (red, green, blue) = match self {
            Self::AdobeRgb => ([0.64, 0.33], [0.21, 0.71], [0.15, 0.06]),
            Self::AppleRgb => ([0.625, 0.340], [0.280, 0.595], [0.155, 0.070]),
            Self::BestRgb => ([0.7347, 0.2653], [0.2150, 0.7750], [0.1300, 0.0350]),
            Self::BetaRgb => ([0.6888, 0.3112], [0.1986, 0.7551], [0.1265, 0.0352]),
            Self::BruceRgb => ([0.64, 0.33], [0.28, 0.65], [0.15, 0.06]),
            Self::CieRgb => ([0.735, 0.265], [0.274, 0.717], [0.167, 0.009]),
            Self::ColorMatchRgb => ([0.630, 0.340], [0.295, 0.605], [0.150, 0.075]),
            Self::DonRgb4 => ([0.696, 0.300], [0.215, 0.765], [0.130, 0.035]),
            Self::EciRgb2 | Self::NtscRgb => ([0.67, 0.33], [0.21, 0.71], [0.14, 0.08]),
            Self::EktaSpacePs5 => ([0.695, 0.305], [0.260, 0.700], [0.110, 0.005]),
            Self::PalSecamRgb => ([0.64, 0.33], [0.29, 0.60], [0.15, 0.06]),
            Self::ProPhotoRgb => ([0.7347, 0.2653], [0.1596, 0.8404], [0.0366, 0.0001]),
            Self::SmpteCRgb => ([0.630, 0.340], [0.310, 0.595], [0.155, 0.070]),
            Self::Srgb => ([0.64, 0.33], [0.30, 0.60], [0.15, 0.06]),
            Self::WideGamutRgb => ([0.735, 0.265], [0.115, 0.826], [0.157, 0.018]),
        };
        Primaries { red, green, blue }
    }

    /// The illuminant the space is defined against.
    pub const fn native_white(&self) -> Illuminant {
        match self {
            Self::AdobeRgb
            | Self::AppleRgb
            | Self::BruceRgb
            | Self::PalSecamRgb
            | Self::SmpteCRgb
            | Self::Srgb => Illuminant::D65,
            Self::BestRgb
            | Self::BetaRgb
            | Self::ColorMatchRgb
            | Self::DonRgb4
            | Self::EciRgb2
            | Self::EktaSpacePs5
            | Self::ProPhotoRgb
            | Self::WideGamutRgb => Illuminant::D50,
            Self::CieRgb => Illuminant::E,
            Self::NtscRgb => Illuminant::C,
        }
    }

    /// Gamma selector: positive is a power law, negative is the sRGB curve,
    /// zero is the L* curve.
    pub const fn gamma(&self) -> f64 {
        match self {
            Self::AppleRgb | Self::ColorMatchRgb | Self::ProPhotoRgb => 1.8,
            Self::EciRgb2 => 0.0,
            Self::Srgb => -2.2,
            _ => 2.2,
        }
    }
}

impl fmt::Display for RgbSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RgbSpace {
    type Err = ColorError;

    /// Accepts the label or the variant name, ignoring case, spaces and
    /// punctuation (`"prophoto"`, `"ProPhoto RGB"`, `"pal-secam-rgb"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        fn key(s: &str) -> String {
            s.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        }

        let wanted = key(s);
        Self::all()
            .iter()
            .copied()
            .find(|space| {
                let label = key(space.label());
                wanted == label
                    || wanted == key(&format!("{space:?}"))
                    || label.strip_suffix("rgb").is_some_and(|short| wanted == short)
            })
            .ok_or_else(|| ColorError::UnknownColorSpace(s.to_string()))
    }
}
