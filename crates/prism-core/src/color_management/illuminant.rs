//! Standard illuminants and their reference whites.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::matrix::Vec3;
use crate::error::ColorError;

/// CIE standard illuminant, used as a reference white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Illuminant {
    /// Incandescent / tungsten.
    A,
    /// Direct sunlight at noon (obsolete).
    B,
    /// Average daylight (obsolete).
    C,
    /// Horizon light, ICC profile connection space. Default.
    #[default]
    D50,
    /// Mid-morning daylight.
    D55,
    /// Noon daylight, sRGB and Adobe RGB white.
    D65,
    /// North sky daylight.
    D75,
    /// Equal energy.
    E,
    /// Cool white fluorescent.
    F2,
    /// Broadband daylight fluorescent.
    F7,
    /// Narrowband white fluorescent.
    F11,
}

impl Illuminant {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D50 => "D50",
            Self::D55 => "D55",
            Self::D65 => "D65",
            Self::D75 => "D75",
            Self::E => "E",
            Self::F2 => "F2",
            Self::F7 => "F7",
            Self::F11 => "F11",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [Illuminant; 11] = [
            Illuminant::A,
            Illuminant::B,
            Illuminant::C,
            Illuminant::D50,
            Illuminant::D55,
            Illuminant::D65,
            Illuminant::D75,
            Illuminant::E,
            Illuminant::F2,
            Illuminant::F7,
            Illuminant::F11,
        ];
        &ALL
    }

    /// XYZ of the white point, normalized to `Y = 1`.
    ///
    /// Values from ASTM E308-01, except B (Wyszecki & Stiles, p. 769).
    pub const fn white_point(&self) -> Vec3 {
        let (x, z) = match self {
            Self::A => (1.09850, 0.35585),
            Self::B => (0.99072, 0.85223),
            Self::C => (0.98074, 1.18232),
            Self::D50 => (0.96422, 0.82521),
            Self::D55 => (0.95682, 0.92149),
            Self::D65 => (0.95047, 1.08883),
            Self::D75 => (0.94972, 1.22638),
            Self::E => (1.00000, 1.00000),
            Self::F2 => (0.99186, 0.67393),
            Self::F7 => (0.95041, 1.08747),
            Self::F11 => (1.00962, 0.64350),
        };
        Vec3::new(x, 1.0, z)
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Illuminant {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|ill| ill.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownIlluminant(s.to_string()))
    }
}
