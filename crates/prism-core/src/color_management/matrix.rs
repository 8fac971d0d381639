//! Fixed-size 3-vector and 3×3 matrix used by the XYZ pipeline.
//!
//! Matrices follow the row-vector convention of Lindbloom's tables: a color
//! is transformed as `v × M`, i.e. `out[j] = Σ v[i] × M[i][j]`.

use std::ops::{Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};

/// A color triple (XYZ, linear RGB or cone response).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3(pub [f64; 3]);

impl Vec3 {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self([a, b, c])
    }

    /// Component-wise product.
    pub fn scale(self, by: Vec3) -> Self {
        Self([self[0] * by[0], self[1] * by[1], self[2] * by[2]])
    }

    /// Component-wise quotient.
    pub fn ratio(self, by: Vec3) -> Self {
        Self([self[0] / by[0], self[1] / by[1], self[2] / by[2]])
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self(v)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.0
    }
}

/// A 3×3 matrix stored row-major as `m[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix3(pub [[f64; 3]; 3]);

impl Matrix3 {
    /// Returns the identity matrix (no-op transform).
    pub const fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0][0] * (m[2][2] * m[1][1] - m[2][1] * m[1][2])
            - m[1][0] * (m[2][2] * m[0][1] - m[2][1] * m[0][2])
            + m[2][0] * (m[1][2] * m[0][1] - m[1][1] * m[0][2])
    }

    /// Cofactor inverse.
    ///
    /// A singular matrix divides by zero and yields non-finite entries.
    pub fn inverse(&self) -> Self {
        let m = &self.0;
        let scale = 1.0 / self.determinant();

        Self([
            [
                scale * (m[2][2] * m[1][1] - m[2][1] * m[1][2]),
                -scale * (m[2][2] * m[0][1] - m[2][1] * m[0][2]),
                scale * (m[1][2] * m[0][1] - m[1][1] * m[0][2]),
            ],
            [
                -scale * (m[2][2] * m[1][0] - m[2][0] * m[1][2]),
                scale * (m[2][2] * m[0][0] - m[2][0] * m[0][2]),
                -scale * (m[1][2] * m[0][0] - m[1][0] * m[0][2]),
            ],
            [
                scale * (m[2][1] * m[1][0] - m[2][0] * m[1][1]),
                -scale * (m[2][1] * m[0][0] - m[2][0] * m[0][1]),
                scale * (m[1][1] * m[0][0] - m[1][0] * m[0][1]),
            ],
        ])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Column-vector product `M × v`.
    pub fn mul_column(&self, v: Vec3) -> Vec3 {
        let m = &self.0;
        Vec3([
            v[0] * m[0][0] + v[1] * m[0][1] + v[2] * m[0][2],
            v[0] * m[1][0] + v[1] * m[1][1] + v[2] * m[1][2],
            v[0] * m[2][0] + v[1] * m[2][1] + v[2] * m[2][2],
        ])
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.0[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.0[row][col]
    }
}

/// Row-vector product `v × M`.
impl Mul<Matrix3> for Vec3 {
    type Output = Vec3;

    fn mul(self, m: Matrix3) -> Vec3 {
        let m = &m.0;
        Vec3([
            self[0] * m[0][0] + self[1] * m[1][0] + self[2] * m[2][0],
            self[0] * m[0][1] + self[1] * m[1][1] + self[2] * m[2][1],
            self[0] * m[0][2] + self[1] * m[1][2] + self[2] * m[2][2],
        ])
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.0[i][0] * rhs.0[0][j]
                    + self.0[i][1] * rhs.0[1][j]
                    + self.0[i][2] * rhs.0[2][j];
            }
        }
        Matrix3(out)
    }
}
