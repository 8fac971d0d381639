//! Chromatic adaptation between reference whites.
//!
//! XYZ is taken into a cone-response domain, each response is scaled by the
//! ratio of destination-white to source-white response, and the result is
//! taken back to XYZ:
//!
//! ```text
//!   XYZ ──→ ×Ma ──→ ×(ρd/ρs, γd/γs, βd/βs) ──→ ×Ma⁻¹ ──→ XYZ'
//! ```
//!
//! # Reference
//! Lindbloom, Bruce J. — Chromatic Adaptation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::matrix::{Matrix3, Vec3};
use crate::error::ColorError;

/// Bradford cone response matrix (row-vector convention).
const BRADFORD: Matrix3 = Matrix3([
    [0.8951, -0.7502, 0.0389],
    [0.2664, 1.7135, -0.0685],
    [-0.1614, 0.0367, 1.0296],
]);
const BRADFORD_INV: Matrix3 = Matrix3([
    [0.9869929, 0.4323053, -0.0085287],
    [-0.1470543, 0.5183603, 0.0400428],
    [0.1599627, 0.0492912, 0.9684867],
]);

/// Von Kries cone response matrix (row-vector convention).
const VON_KRIES: Matrix3 = Matrix3([
    [0.40024, -0.2263, 0.0],
    [0.7076, 1.16532, 0.0],
    [-0.08081, 0.0457, 0.91822],
]);
const VON_KRIES_INV: Matrix3 = Matrix3([
    [1.8599364, 0.3611914, 0.0],
    [-1.1293816, 0.6388125, 0.0],
    [0.2198974, -0.0000064, 1.0890636],
]);

/// Chromatic adaptation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Adaptation {
    /// Bradford transform. Default.
    #[default]
    Bradford,
    /// Von Kries transform.
    VonKries,
    /// No adaptation; XYZ passes through.
    None,
}

impl Adaptation {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bradford => "Bradford",
            Self::VonKries => "Von Kries",
            Self::None => "None",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [Adaptation; 3] = [Adaptation::Bradford, Adaptation::VonKries, Adaptation::None];
        &ALL
    }

    /// Forward cone response matrix and its inverse, `None` for no adaptation.
    pub const fn cone_matrices(&self) -> Option<(Matrix3, Matrix3)> {
        match self {
            Self::Bradford => Some((BRADFORD, BRADFORD_INV)),
            Self::VonKries => Some((VON_KRIES, VON_KRIES_INV)),
            Self::None => None,
        }
    }

    /// Adapt `xyz` seen under `source` white to appear under `dest` white.
    pub fn adapt(&self, xyz: Vec3, source: Vec3, dest: Vec3) -> Vec3 {
        let Some((ma, ma_inv)) = self.cone_matrices() else {
            return xyz;
        };

        let source_cone = source * ma;
        let dest_cone = dest * ma;
        let cone = (xyz * ma).scale(dest_cone.ratio(source_cone));

        cone * ma_inv
    }
}

impl fmt::Display for Adaptation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Adaptation {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "bradford" => Ok(Self::Bradford),
            "vonkries" => Ok(Self::VonKries),
            "none" => Ok(Self::None),
            _ => Err(ColorError::UnknownAdaptation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_management::illuminant::Illuminant;

    const EPSILON: f64 = 1e-5;

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f64) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < eps, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_inverse_matrices_match_forward() {
        for method in [Adaptation::Bradford, Adaptation::VonKries] {
            let (ma, ma_inv) = method.cone_matrices().unwrap();
            let product = ma * ma_inv;
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert!((product[(i, j)] - expected).abs() < 1e-5, "{method}");
                }
            }
        }
    }

    #[test]
    fn test_none_is_identity() {
        let xyz = Vec3::new(0.3, 0.4, 0.5);
        let out = Adaptation::None.adapt(
            xyz,
            Illuminant::D65.white_point(),
            Illuminant::D50.white_point(),
        );
        assert_eq!(out, xyz);
    }

    #[test]
    fn test_source_white_maps_to_dest_white() {
        let d65 = Illuminant::D65.white_point();
        let d50 = Illuminant::D50.white_point();
        for method in [Adaptation::Bradford, Adaptation::VonKries] {
            assert_vec_close(method.adapt(d65, d65, d50), d50, EPSILON);
        }
    }

    #[test]
    fn test_same_white_is_identity() {
        let d65 = Illuminant::D65.white_point();
        let xyz = Vec3::new(0.2, 0.3, 0.1);
        assert_vec_close(Adaptation::Bradford.adapt(xyz, d65, d65), xyz, EPSILON);
    }

    #[test]
    fn test_adaptation_round_trip() {
        let d65 = Illuminant::D65.white_point();
        let a = Illuminant::A.white_point();
        let xyz = Vec3::new(0.41, 0.21, 0.02);
        let there = Adaptation::Bradford.adapt(xyz, d65, a);
        let back = Adaptation::Bradford.adapt(there, a, d65);
        assert_vec_close(back, xyz, EPSILON);
    }

    #[test]
    fn test_parse_accepts_labels() {
        assert_eq!("Von Kries".parse::<Adaptation>().unwrap(), Adaptation::VonKries);
        assert_eq!("von-kries".parse::<Adaptation>().unwrap(), Adaptation::VonKries);
        assert_eq!("BRADFORD".parse::<Adaptation>().unwrap(), Adaptation::Bradford);
        assert!("cat02".parse::<Adaptation>().is_err());
    }
}
