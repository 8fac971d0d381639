//! RGB color-space profiles and the RGB ↔ XYZ pipeline.
//!
//! A profile bundles everything needed to move between one RGB space and
//! XYZ under a chosen illuminant:
//!
//! ```text
//!   rgb ──→ to_linear ──→ ×RGB→XYZ ──→ adapt(native → illuminant) ──→ xyz
//!   xyz ──→ adapt(illuminant → native) ──→ ×XYZ→RGB ──→ to_encoded ──→ rgb
//! ```
//!
//! Matrices follow the row-vector convention (`v × M`).
//!
//! # Reference
//! Lindbloom, Bruce J. — RGB/XYZ Matrices

use serde::{Deserialize, Serialize};

use super::adaptation::Adaptation;
use super::color_space::RgbSpace;
use super::illuminant::Illuminant;
use super::matrix::{Matrix3, Vec3};
use super::transfer::{Companding, TransferFunction};

/// Immutable parameters of one RGB space under one adaptation and illuminant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbProfile {
    /// The RGB space this profile was derived from.
    pub space: RgbSpace,
    /// XYZ of the space's own reference white.
    pub native_white: Vec3,
    /// Gamma selector, see [`Companding::from_gamma`].
    pub gamma: f64,
    /// Linear RGB → XYZ.
    pub rgb_to_xyz_matrix: Matrix3,
    /// XYZ → linear RGB.
    pub xyz_to_rgb_matrix: Matrix3,
    /// Adaptation between `native_white` and `adapted_white`.
    pub adaptation: Adaptation,
    /// XYZ of the illuminant results are expressed under.
    pub adapted_white: Vec3,
}

impl RgbProfile {
    /// Derive the profile for `space`, adapting to `illuminant` with `adaptation`.
    ///
    /// The primaries matrix is built from the xy chromaticities, inverted,
    /// and used to find the per-primary scale that makes RGB white land on
    /// the native white:
    ///
    /// ```text
    ///       ┌ xr/yr          xg/yg          xb/yb          ┐
    ///   P = │ 1              1              1              │
    ///       └ (1−xr−yr)/yr   (1−xg−yg)/yg   (1−xb−yb)/yb   ┘
    ///
    ///   S = P⁻¹ · W
    ///   RGB→XYZ = (P · diag(S))ᵀ
    ///   XYZ→RGB = (RGB→XYZ)⁻¹
    /// ```
    pub fn new(space: RgbSpace, adaptation: Adaptation, illuminant: Illuminant) -> Self {
        let p = space.primaries();
        let native_white = space.native_white().white_point();

        let column = |[x, y]: [f64; 2]| [x / y, 1.0, (1.0 - x - y) / y];
        let (r, g, b) = (column(p.red), column(p.green), column(p.blue));
        let primaries = Matrix3([[r[0], g[0], b[0]], [r[1], g[1], b[1]], [r[2], g[2], b[2]]]);

        let s = primaries.inverse().mul_column(native_white);

        let mut scaled = primaries;
        for row in scaled.0.iter_mut() {
            for (cell, factor) in row.iter_mut().zip(s.0) {
                *cell *= factor;
            }
        }

        let rgb_to_xyz_matrix = scaled.transpose();
        let xyz_to_rgb_matrix = rgb_to_xyz_matrix.inverse();

        tracing::debug!(
            "derived RGB profile: {space}, adaptation={adaptation}, illuminant={illuminant}"
        );

        Self {
            space,
            native_white,
            gamma: space.gamma(),
            rgb_to_xyz_matrix,
            xyz_to_rgb_matrix,
            adaptation,
            adapted_white: illuminant.white_point(),
        }
    }

    /// The companding regime selected by this profile's gamma.
    pub fn companding(&self) -> Companding {
        Companding::from_gamma(self.gamma)
    }

    /// Convert encoded RGB in `[0, 1]` to XYZ under the adapted white.
    pub fn rgb_to_xyz(&self, rgb: Vec3) -> Vec3 {
        let tf = self.companding();
        let linear = Vec3::new(tf.to_linear(rgb[0]), tf.to_linear(rgb[1]), tf.to_linear(rgb[2]));
        let xyz = linear * self.rgb_to_xyz_matrix;

        self.adaptation
            .adapt(xyz, self.native_white, self.adapted_white)
    }

    /// Convert XYZ under the adapted white to encoded RGB.
    ///
    /// Out-of-gamut colors produce values outside `[0, 1]`; nothing is clipped.
    pub fn xyz_to_rgb(&self, xyz: Vec3) -> Vec3 {
        let xyz = self
            .adaptation
            .adapt(xyz, self.adapted_white, self.native_white);
        let linear = xyz * self.xyz_to_rgb_matrix;

        let tf = self.companding();
        Vec3::new(
            tf.to_encoded(linear[0]),
            tf.to_encoded(linear[1]),
            tf.to_encoded(linear[2]),
        )
    }
}

impl Default for RgbProfile {
    /// sRGB, Bradford adaptation, D50.
    fn default() -> Self {
        Self::new(RgbSpace::default(), Adaptation::default(), Illuminant::default())
    }
}

/// Build the profile for a space, adaptation method and illuminant.
pub fn get_rgb_params(space: RgbSpace, adaptation: Adaptation, illuminant: Illuminant) -> RgbProfile {
    RgbProfile::new(space, adaptation, illuminant)
}

/// Convert normalized RGB to XYZ using `profile`.
pub fn rgb_to_xyz(r: f64, g: f64, b: f64, profile: &RgbProfile) -> (f64, f64, f64) {
    let [x, y, z] = profile.rgb_to_xyz(Vec3::new(r, g, b)).0;
    (x, y, z)
}

/// Convert XYZ to normalized RGB using `profile`.
pub fn xyz_to_rgb(x: f64, y: f64, z: f64, profile: &RgbProfile) -> (f64, f64, f64) {
    let [r, g, b] = profile.xyz_to_rgb(Vec3::new(x, y, z)).0;
    (r, g, b)
}
