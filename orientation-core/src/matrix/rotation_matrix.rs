//! 3×3 rotation matrices with a translation row.
//!
//! A [`RotationMatrix`] is the upper 3×4 part of an affine transform: nine
//! rotation entries plus a translation `t`. Vectors are **row vectors** and are
//! transformed as
//!
//! ```text
//!                       | m11 m12 m13 |
//! v' = [x y z] ·        | m21 m22 m23 |  + w · [tx ty tz]
//!                       | m31 m32 m33 |
//! ```
//!
//! so row `i` is the image of basis vector `i`, and `w` (1 for points, 0 for
//! directions) decides whether the translation applies.
//!
//! # Composition
//!
//! Products read left to right: `a * b` applies `a` first, then `b`. The
//! in-place mutators follow the same rule and compose *after* the current
//! contents, e.g. [`rotate_about`](RotationMatrix::rotate_about) sets
//! `M ← M · R`.
//!
//! ```
//! use orientation_core::{RotationMatrix, Vector3};
//!
//! let mut m = RotationMatrix::identity();
//! m.rotate_about_z(90.0);
//! m.translate(0.0, 0.0, 5.0);
//!
//! let p = m.transform(Vector3::x_axis());
//! assert!((p.y - 1.0).abs() < 1e-15);
//! assert_eq!(p.z, 5.0);
//!
//! // Directions ignore the translation.
//! let d = m.transform(Vector3::direction(1.0, 0.0, 0.0));
//! assert_eq!(d.z, 0.0);
//! ```
//!
//! # Elementary Rotations
//!
//! Angles of the public rotation methods are in degrees. For angle θ:
//!
//! ```text
//! Rx(θ) = | 1    0     0  |   Ry(θ) = | cos 0 -sin |   Rz(θ) = |  cos sin 0 |
//!         | 0   cos   sin |           |  0  1   0  |           | -sin cos 0 |
//!         | 0  -sin   cos |           | sin 0  cos |           |   0   0  1 |
//! ```
//!
//! [`rotate_about_x`](RotationMatrix::rotate_about_x) and its siblings write
//! these entries into the sub-block of the named axis and leave everything
//! else alone. On the identity that is exactly `Rx(θ)`; on any other matrix
//! it replaces that block rather than composing.
//!
//! # Determinant
//!
//! The determinant is recomputed from the current entries on every call. A
//! proper rotation has determinant +1, and so keeps it under
//! [`rotate_about`](RotationMatrix::rotate_about) and
//! [`orthogonalize`](RotationMatrix::orthogonalize).

use crate::constants::{DEG_TO_RAD, ORTHOGONAL_TOLERANCE, UNIT_AXIS_TOLERANCE};
use crate::errors::{MathErrorKind, OrientationError, OrientationResult};
use crate::math::sincos;
use approx::{AbsDiffEq, RelativeEq};
use log::debug;
use std::fmt;

use super::Vector3;

/// A 3×3 rotation block plus a translation row.
///
/// Row-major storage: `get(i, j)` and `m[(i, j)]` address row `i`, column `j`,
/// both 0-based. Construction does not validate orthogonality; use
/// [`is_rotation`](Self::is_rotation) when a caller needs that guarantee.
///
/// ```
/// use orientation_core::RotationMatrix;
///
/// let m = RotationMatrix::new(3.0, -2.0, 0.0, 1.0, 4.0, 0.0, 0.0, 0.0, 2.0);
/// assert_eq!(m.determinant(), 28.0);
/// assert_eq!(m[(1, 0)], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix {
    elements: [[f64; 3]; 3],
    translation: [f64; 3],
}

impl RotationMatrix {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0; 3],
        }
    }

    /// Creates a matrix from its nine rotation entries, row by row, with zero
    /// translation.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m11: f64,
        m12: f64,
        m13: f64,
        m21: f64,
        m22: f64,
        m23: f64,
        m31: f64,
        m32: f64,
        m33: f64,
    ) -> Self {
        Self::from_rows([[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]])
    }

    /// Creates a matrix from a row-major 3×3 array with zero translation.
    pub fn from_rows(elements: [[f64; 3]; 3]) -> Self {
        Self {
            elements,
            translation: [0.0; 3],
        }
    }

    /// Returns a copy with the translation replaced.
    pub fn with_translation(mut self, translation: [f64; 3]) -> Self {
        self.translation = translation;
        self
    }

    /// Resets the matrix to the identity, clearing the translation.
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Returns the entry at `row`, `col`. Panics if either index is above 2.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Sets the entry at `row`, `col`. Panics if either index is above 2.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Row `index` as a direction vector. Panics if `index` is above 2.
    pub fn row(&self, index: usize) -> Vector3 {
        let [x, y, z] = self.elements[index];
        Vector3::direction(x, y, z)
    }

    fn set_row(&mut self, index: usize, row: &Vector3) {
        self.elements[index] = row.to_array();
    }

    pub fn translation(&self) -> [f64; 3] {
        self.translation
    }

    pub fn set_translation(&mut self, dx: f64, dy: f64, dz: f64) {
        self.translation = [dx, dy, dz];
    }

    /// Adds to the translation; repeated calls accumulate.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.translation[0] += dx;
        self.translation[1] += dy;
        self.translation[2] += dz;
    }

    /// Cofactor expansion of the 3×3 block along the first row.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose of the rotation block; the translation is kept.
    ///
    /// For a proper rotation the transpose is the inverse rotation, which is
    /// how object-space matrices are derived from upright ones.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self {
            elements: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
            translation: self.translation,
        }
    }

    /// Affine product `self · other`: `self` applies first.
    ///
    /// The rotation blocks multiply and the translation becomes
    /// `t_self · R_other + t_other`.
    ///
    /// ```
    /// use orientation_core::RotationMatrix;
    ///
    /// let mut doubled = RotationMatrix::identity();
    /// doubled.multiply_by_scalar(2.0);
    ///
    /// let m = RotationMatrix::identity().with_translation([1.0, 2.0, 3.0]);
    /// let product = m.multiply(&doubled);
    /// assert_eq!(product.get(1, 1), 2.0);
    /// assert_eq!(product.translation(), [2.0, 4.0, 6.0]);
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let mut elements = [[0.0; 3]; 3];

        for (i, row) in elements.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        let mut translation = other.translation;
        for (j, cell) in translation.iter_mut().enumerate() {
            for k in 0..3 {
                *cell += self.translation[k] * other.elements[k][j];
            }
        }

        Self {
            elements,
            translation,
        }
    }

    /// Multiplies every entry of the rotation block by `k`.
    pub fn multiply_by_scalar(&mut self, k: f64) {
        for row in self.elements.iter_mut() {
            for cell in row.iter_mut() {
                *cell *= k;
            }
        }
    }

    /// Scales row 1 by `sx`, row 2 by `sy` and row 3 by `sz`.
    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        for (row, k) in self.elements.iter_mut().zip([sx, sy, sz]) {
            for cell in row.iter_mut() {
                *cell *= k;
            }
        }
    }

    /// Transforms `vector` as `v · M + w · t`. `w` is carried through.
    pub fn transform(&self, vector: Vector3) -> Vector3 {
        let m = &self.elements;
        let t = &self.translation;
        let Vector3 { x, y, z, w } = vector;

        Vector3 {
            x: x * m[0][0] + y * m[1][0] + z * m[2][0] + w * t[0],
            y: x * m[0][1] + y * m[1][1] + z * m[2][1] + w * t[1],
            z: x * m[0][2] + y * m[1][2] + z * m[2][2] + w * t[2],
            w,
        }
    }

    /// Inverts the matrix in place.
    ///
    /// The rotation block becomes `adj(M) / det(M)` and the translation
    /// `-t · M⁻¹`, so the result undoes the full affine transform. Fails with
    /// [`MathErrorKind::SingularMatrix`] when `|det| < f64::EPSILON`, leaving
    /// the matrix untouched.
    ///
    /// ```
    /// use orientation_core::RotationMatrix;
    ///
    /// let mut m = RotationMatrix::new(-4.0, -3.0, 3.0, 0.0, 2.0, -2.0, 1.0, 4.0, -1.0);
    /// m.inverse().unwrap();
    /// assert!((m.get(2, 1) - 13.0 / -24.0).abs() < 1e-15);
    ///
    /// let mut singular = RotationMatrix::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0);
    /// assert!(singular.inverse().is_err());
    /// ```
    pub fn inverse(&mut self) -> OrientationResult<()> {
        *self = self.inverted()?;
        Ok(())
    }

    /// Returns the inverse as a new matrix. See [`inverse`](Self::inverse).
    pub fn inverted(&self) -> OrientationResult<Self> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return Err(OrientationError::math_error(
                "RotationMatrix::inverse",
                MathErrorKind::SingularMatrix,
                &format!("determinant {} is zero", det),
            ));
        }

        let m = &self.elements;
        let inv_det = 1.0 / det;
        let elements = [
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ];

        let t = &self.translation;
        let mut translation = [0.0; 3];
        for (j, cell) in translation.iter_mut().enumerate() {
            *cell = -(t[0] * elements[0][j] + t[1] * elements[1][j] + t[2] * elements[2][j]);
        }

        Ok(Self {
            elements,
            translation,
        })
    }

    /// Returns true if every row and every column has unit length and each
    /// pair of rows and of columns is perpendicular, within `tolerance`.
    pub fn is_orthogonal(&self, tolerance: f64) -> bool {
        let transposed = self.transpose();
        [self, &transposed].iter().all(|m| {
            let rows = [m.row(0), m.row(1), m.row(2)];
            rows.iter().all(|r| (r.length_squared() - 1.0).abs() <= tolerance)
                && rows[0].dot(&rows[1]).abs() <= tolerance
                && rows[0].dot(&rows[2]).abs() <= tolerance
                && rows[1].dot(&rows[2]).abs() <= tolerance
        })
    }

    /// Orthogonal with determinant +1 (no reflection), within `tolerance`.
    ///
    /// ```
    /// use orientation_core::RotationMatrix;
    ///
    /// let mut m = RotationMatrix::identity();
    /// m.rotate_about_z(30.0);
    /// assert!(m.is_rotation(1e-12));
    ///
    /// let mirror = RotationMatrix::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    /// assert!(mirror.is_orthogonal(1e-12));
    /// assert!(!mirror.is_rotation(1e-12));
    /// ```
    pub fn is_rotation(&self, tolerance: f64) -> bool {
        self.is_orthogonal(tolerance) && (self.determinant() - 1.0).abs() <= tolerance
    }

    /// Re-orthonormalizes the rows with Gram-Schmidt.
    ///
    /// Row 1 keeps its direction, row 2 loses its component along row 1, and
    /// row 3 is rebuilt as `row1 × row2`. The result is orthonormal with
    /// determinant +1 whatever the scale of the input rows. The translation is
    /// not touched.
    ///
    /// Fails with [`MathErrorKind::Degenerate`] if row 1 is zero or row 2 is
    /// parallel to it; the matrix is left unchanged in that case.
    ///
    /// ```
    /// use orientation_core::RotationMatrix;
    ///
    /// let mut drifted = RotationMatrix::new(1.05, 0.0, 0.0, 0.0, 0.95, 0.0, 0.0, 0.0, 0.8);
    /// drifted.orthogonalize().unwrap();
    /// assert!(drifted.is_rotation(1e-12));
    /// ```
    pub fn orthogonalize(&mut self) -> OrientationResult<()> {
        let degenerate = |reason: &str| {
            OrientationError::math_error(
                "RotationMatrix::orthogonalize",
                MathErrorKind::Degenerate,
                reason,
            )
        };

        let r1 = self.row(0);
        let r2 = self.row(1);

        let u1 = r1.normalize().map_err(|_| degenerate("row 1 is zero"))?;
        let projected = r2 - u1 * r2.dot(&u1);
        if projected.length() <= 1e-12 * r2.length() {
            return Err(degenerate("row 2 is parallel to row 1"));
        }
        let u2 = projected
            .normalize()
            .map_err(|_| degenerate("row 2 is zero"))?;
        let u3 = u1.cross(&u2);

        if !self.is_rotation(ORTHOGONAL_TOLERANCE) {
            debug!(
                "orthogonalize corrected a drifted matrix (det = {:.9})",
                self.determinant()
            );
        }

        self.set_row(0, &u1);
        self.set_row(1, &u2);
        self.set_row(2, &u3);
        Ok(())
    }

    /// Composes a rotation of `angle` degrees about `axis` after the current
    /// matrix (`M ← M · R`).
    ///
    /// `axis` must be unit length within
    /// [`UNIT_AXIS_TOLERANCE`](crate::constants::UNIT_AXIS_TOLERANCE); other
    /// axes are rejected with [`MathErrorKind::NotUnitAxis`] and the matrix is
    /// not modified. An accepted axis is rescaled to exactly unit length
    /// before use, so the composed factor is always a proper rotation.
    ///
    /// ```
    /// use orientation_core::{RotationMatrix, Vector3};
    ///
    /// let mut m = RotationMatrix::identity();
    /// m.rotate_about(&Vector3::z_axis(), 30.0).unwrap();
    ///
    /// let mut z = RotationMatrix::identity();
    /// z.rotate_about_z(30.0);
    /// assert!(m.max_difference(&z) < 1e-15);
    ///
    /// assert!(m.rotate_about(&Vector3::new(0.0, 0.0, 2.0), 30.0).is_err());
    /// ```
    pub fn rotate_about(&mut self, axis: &Vector3, angle: f64) -> OrientationResult<()> {
        let n = validate_unit_axis("RotationMatrix::rotate_about", axis)?;

        let (s, c) = sincos(angle * DEG_TO_RAD);
        let k = 1.0 - c;
        let (nx, ny, nz) = (n.x, n.y, n.z);

        let r = Self::from_rows([
            [nx * nx * k + c, nx * ny * k + nz * s, nx * nz * k - ny * s],
            [nx * ny * k - nz * s, ny * ny * k + c, ny * nz * k + nx * s],
            [nx * nz * k + ny * s, ny * nz * k - nx * s, nz * nz * k + c],
        ]);
        *self = self.multiply(&r);
        Ok(())
    }

    /// Composes a scale by `factor` along `axis` after the current matrix.
    ///
    /// The scale is `S = I + (factor - 1) n nᵀ`: lengths along `n` are
    /// multiplied by `factor`, lengths perpendicular to it are kept. Same
    /// unit-axis precondition as [`rotate_about`](Self::rotate_about).
    pub fn scale_along(&mut self, axis: &Vector3, factor: f64) -> OrientationResult<()> {
        let n = validate_unit_axis("RotationMatrix::scale_along", axis)?.to_array();

        let k = factor - 1.0;
        let mut s = [[0.0; 3]; 3];
        for (i, row) in s.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = k * n[i] * n[j] + if i == j { 1.0 } else { 0.0 };
            }
        }
        *self = self.multiply(&Self::from_rows(s));
        Ok(())
    }

    /// Writes `Rx(angle)` (degrees) into rows/columns 2 and 3.
    pub fn rotate_about_x(&mut self, angle: f64) {
        let (s, c) = sincos(angle * DEG_TO_RAD);
        self.elements[1][1] = c;
        self.elements[1][2] = s;
        self.elements[2][1] = -s;
        self.elements[2][2] = c;
    }

    /// Writes `Ry(angle)` (degrees) into rows/columns 1 and 3.
    pub fn rotate_about_y(&mut self, angle: f64) {
        let (s, c) = sincos(angle * DEG_TO_RAD);
        self.elements[0][0] = c;
        self.elements[0][2] = -s;
        self.elements[2][0] = s;
        self.elements[2][2] = c;
    }

    /// Writes `Rz(angle)` (degrees) into rows/columns 1 and 2.
    pub fn rotate_about_z(&mut self, angle: f64) {
        let (s, c) = sincos(angle * DEG_TO_RAD);
        self.elements[0][0] = c;
        self.elements[0][1] = s;
        self.elements[1][0] = -s;
        self.elements[1][1] = c;
    }

    /// Sets `self` to `Rx(phi) · self`, `phi` in radians.
    pub(crate) fn prepend_rotation_x(&mut self, phi: f64) {
        let (s, c) = sincos(phi);

        let a10 = c * self.elements[1][0] + s * self.elements[2][0];
        let a11 = c * self.elements[1][1] + s * self.elements[2][1];
        let a12 = c * self.elements[1][2] + s * self.elements[2][2];
        let a20 = -s * self.elements[1][0] + c * self.elements[2][0];
        let a21 = -s * self.elements[1][1] + c * self.elements[2][1];
        let a22 = -s * self.elements[1][2] + c * self.elements[2][2];

        self.elements[1] = [a10, a11, a12];
        self.elements[2] = [a20, a21, a22];
    }

    /// Sets `self` to `Ry(theta) · self`, `theta` in radians.
    pub(crate) fn prepend_rotation_y(&mut self, theta: f64) {
        let (s, c) = sincos(theta);

        let a00 = c * self.elements[0][0] - s * self.elements[2][0];
        let a01 = c * self.elements[0][1] - s * self.elements[2][1];
        let a02 = c * self.elements[0][2] - s * self.elements[2][2];
        let a20 = s * self.elements[0][0] + c * self.elements[2][0];
        let a21 = s * self.elements[0][1] + c * self.elements[2][1];
        let a22 = s * self.elements[0][2] + c * self.elements[2][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[2] = [a20, a21, a22];
    }

    /// Sets `self` to `Rz(psi) · self`, `psi` in radians.
    pub(crate) fn prepend_rotation_z(&mut self, psi: f64) {
        let (s, c) = sincos(psi);

        let a00 = c * self.elements[0][0] + s * self.elements[1][0];
        let a01 = c * self.elements[0][1] + s * self.elements[1][1];
        let a02 = c * self.elements[0][2] + s * self.elements[1][2];
        let a10 = -s * self.elements[0][0] + c * self.elements[1][0];
        let a11 = -s * self.elements[0][1] + c * self.elements[1][1];
        let a12 = -s * self.elements[0][2] + c * self.elements[1][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[1] = [a10, a11, a12];
    }

    /// Largest absolute difference over all twelve entries.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                max_diff = max_diff.max((self.elements[i][j] - other.elements[i][j]).abs());
            }
            max_diff = max_diff.max((self.translation[i] - other.translation[i]).abs());
        }

        max_diff
    }

    /// True when all twelve entries agree to `decimals` decimal places, i.e.
    /// differ by less than `10^-decimals`.
    ///
    /// ```
    /// use orientation_core::RotationMatrix;
    ///
    /// let m = RotationMatrix::new(3.0, 2.0, 1.0, 1.0, 3.0, 2.0, 2.0, 1.0, 3.0);
    /// let mut nudged = m;
    /// nudged.multiply_by_scalar(1.000001);
    ///
    /// assert!(nudged.is_close(&m, 5));
    /// assert!(!nudged.is_close(&m, 7));
    /// ```
    pub fn is_close(&self, other: &Self, decimals: i32) -> bool {
        self.max_difference(other) < 10f64.powi(-decimals)
    }
}

/// Checks that `axis` is finite and unit length within tolerance, and returns
/// it rescaled to exactly unit length.
fn validate_unit_axis(operation: &str, axis: &Vector3) -> OrientationResult<Vector3> {
    let length = axis.length();
    if !length.is_finite() {
        return Err(OrientationError::math_error(
            operation,
            MathErrorKind::NotFinite,
            "axis has a NaN or infinite component",
        ));
    }
    if (length - 1.0).abs() > UNIT_AXIS_TOLERANCE {
        return Err(OrientationError::math_error(
            operation,
            MathErrorKind::NotUnitAxis,
            &format!("axis length {} is not 1", length),
        ));
    }
    Ok(Vector3::direction(
        axis.x / length,
        axis.y / length,
        axis.z / length,
    ))
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for RotationMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix> for &RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: &RotationMatrix) -> RotationMatrix {
        self.multiply(rhs)
    }
}

impl std::ops::MulAssign for RotationMatrix {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

/// Row vector times matrix: `v * m` is `m.transform(v)`.
impl std::ops::Mul<RotationMatrix> for Vector3 {
    type Output = Vector3;

    fn mul(self, m: RotationMatrix) -> Vector3 {
        m.transform(self)
    }
}

impl std::ops::Mul<&RotationMatrix> for Vector3 {
    type Output = Vector3;

    fn mul(self, m: &RotationMatrix) -> Vector3 {
        m.transform(self)
    }
}

impl std::ops::MulAssign<&RotationMatrix> for Vector3 {
    fn mul_assign(&mut self, m: &RotationMatrix) {
        *self = m.transform(*self);
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for RotationMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl AbsDiffEq for RotationMatrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.max_difference(other) <= epsilon
    }
}

impl RelativeEq for RotationMatrix {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        let rows = self.elements.iter().zip(other.elements.iter());
        rows.flat_map(|(a, b)| a.iter().zip(b.iter()))
            .chain(self.translation.iter().zip(other.translation.iter()))
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        let t = &self.translation;
        writeln!(f, "  t[{:12.9} {:12.9} {:12.9}]", t[0], t[1], t[2])
    }
}
