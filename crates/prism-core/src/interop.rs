//! Conversions to and from `glam` and `palette` types.
//!
//! [`Matrix3`] is applied to row vectors. `glam` matrices are column-major
//! and multiply column vectors, so loading our rows as glam columns yields a
//! `DMat3` with `m * v` equal to our `v * m`.

use glam::{DMat3, DVec3};

use crate::color_management::{Matrix3, Vec3};
use crate::model::RgbF64;

impl From<Vec3> for DVec3 {
    fn from(v: Vec3) -> Self {
        DVec3::from_array(v.0)
    }
}

impl From<DVec3> for Vec3 {
    fn from(v: DVec3) -> Self {
        Vec3(v.to_array())
    }
}

impl From<Matrix3> for DMat3 {
    fn from(m: Matrix3) -> Self {
        DMat3::from_cols_array_2d(&m.0)
    }
}

impl From<DMat3> for Matrix3 {
    fn from(m: DMat3) -> Self {
        Matrix3(m.to_cols_array_2d())
    }
}

impl From<RgbF64> for palette::Srgb<f64> {
    fn from(rgb: RgbF64) -> Self {
        palette::Srgb::new(rgb.red(), rgb.green(), rgb.blue())
    }
}

impl From<palette::Srgb<f64>> for RgbF64 {
    fn from(rgb: palette::Srgb<f64>) -> Self {
        RgbF64::new(rgb.red, rgb.green, rgb.blue)
    }
}
