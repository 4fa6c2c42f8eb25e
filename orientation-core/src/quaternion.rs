//! Unit quaternions.
//!
//! A [`Quaternion`] `(w, x, y, z)` encodes a rotation of angle θ about a unit
//! axis `n` as `w = cos(θ/2)`, `(x, y, z) = n·sin(θ/2)`. `q` and `-q` encode
//! the same rotation.
//!
//! # Composition Order
//!
//! The product is the Hamilton product. Under the row-vector convention of
//! [`RotationMatrix`], `p * q` applies `q` first and then `p`:
//!
//! ```text
//! (p * q).to_matrix() == q.to_matrix() * p.to_matrix()
//! ```
//!
//! # Numerical Edge Cases
//!
//! | Operation | Edge case | Handling |
//! |-----------|-----------|----------|
//! | [`slerp`](Quaternion::slerp) | inputs nearly parallel | normalized linear interpolation |
//! | [`slerp`](Quaternion::slerp) | inputs in opposite hemispheres | negate one to take the short arc |
//! | [`exp`](Quaternion::exp) | zero vector part (identity or full turn) | returned unchanged |
//! | [`exp`](Quaternion::exp) | small rotation | half angle from `atan2`, not `acos` |
//! | [`from_matrix`](Quaternion::from_matrix) | small trace | pivot on the largest diagonal term |
//! | Euler conversion | arcsine argument past ±1 | clamped |
//!
//! None of these produce an error.
//!
//! ```
//! use orientation_core::{Quaternion, Vector3};
//! use std::f64::consts::FRAC_PI_6;
//!
//! let q = Quaternion::from_axis_angle(FRAC_PI_6, &Vector3::x_axis());
//! assert!((q.w - 0.966).abs() < 1e-3);
//! assert!((q.x - 0.259).abs() < 1e-3);
//!
//! let half = Quaternion::identity().slerp(&q, 0.5);
//! assert!((half.angle() - FRAC_PI_6 / 2.0).abs() < 1e-12);
//! ```

use crate::constants::SLERP_LINEAR_THRESHOLD;
use crate::errors::{MathErrorKind, OrientationError, OrientationResult};
use crate::euler::{EulerAngles, Frame};
use crate::math::{atan2, clamped_acos, sincos, sqrt};
use crate::matrix::{RotationMatrix, Vector3};
use approx::{AbsDiffEq, RelativeEq};
use log::trace;
use std::fmt;

/// A quaternion `w + xi + yj + zk`.
///
/// Components are stored as given: constructors never normalize, so a
/// slightly non-unit quaternion stays slightly non-unit until
/// [`normalize`](Self::normalize) is called.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The zero rotation `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` is used as given; pass a unit vector to get a unit quaternion.
    pub fn from_axis_angle(angle: f64, axis: &Vector3) -> Self {
        let (s, c) = sincos(angle * 0.5);
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    pub fn magnitude(&self) -> f64 {
        sqrt(self.dot(self))
    }

    /// Scales to unit magnitude. Fails with [`MathErrorKind::ZeroLength`] for
    /// the zero quaternion.
    pub fn normalize(&self) -> OrientationResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(OrientationError::math_error(
                "Quaternion::normalize",
                MathErrorKind::ZeroLength,
                "cannot normalize a zero quaternion",
            ));
        }
        Ok(*self * (1.0 / mag))
    }

    /// Four-component dot product.
    ///
    /// For unit quaternions this is `cos(φ/2)`, φ being the angle between
    /// the two orientations; a negative value means they lie in opposite
    /// hemispheres.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Hamilton product `self * other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }

    /// The rotation `d` with `d * a == b`: applying `a` and then `d` has the
    /// same effect as applying `b`.
    ///
    /// Computed as `b * conj(a)`, which equals `b * a⁻¹` for unit `a`.
    ///
    /// ```
    /// use orientation_core::Quaternion;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let a = Quaternion::new(0.233, 0.06, -0.257, -0.935);
    /// let b = Quaternion::new(-0.752, 0.286, 0.374, 0.459);
    /// let d = Quaternion::difference(&a, &b);
    ///
    /// assert_abs_diff_eq!(d * a, b, epsilon = 1e-3);
    /// ```
    pub fn difference(a: &Self, b: &Self) -> Self {
        b.multiply(&a.conjugate())
    }

    /// Rotation angle in radians, in [0, 2π].
    pub fn angle(&self) -> f64 {
        2.0 * clamped_acos(self.w)
    }

    /// Unit rotation axis.
    ///
    /// The identity rotation has no axis; asking for one is a
    /// [`CalculationError`](OrientationError::CalculationError).
    pub fn axis(&self) -> OrientationResult<Vector3> {
        let sin_sq = 1.0 - self.w * self.w;
        if sin_sq <= 0.0 {
            return Err(OrientationError::calculation_error(
                "Quaternion::axis",
                "identity rotation has no axis",
            ));
        }
        let inv = 1.0 / sqrt(sin_sq);
        Ok(Vector3::direction(self.x * inv, self.y * inv, self.z * inv))
    }

    /// Raises a unit quaternion to the power `t`, scaling its rotation angle.
    ///
    /// `q.exp(0.5)` is half of the rotation `q`. The half angle α is taken as
    /// `atan2(|v|, w)` of the vector part `v`, which stays accurate for small
    /// rotations, and `v` is rescaled by `sin(α·t) / |v|`. Only a zero vector
    /// part (the identity, or a full turn with `w = -1`) has no axis to scale
    /// along; it is returned unchanged.
    ///
    /// ```
    /// use orientation_core::{Quaternion, Vector3};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let quarter = Quaternion::from_axis_angle(FRAC_PI_2, &Vector3::x_axis());
    /// let third = quarter.exp(1.0 / 3.0);
    /// assert!((third.w - 0.9659).abs() < 1e-4);
    /// assert!((third.x - 0.2588).abs() < 1e-4);
    /// ```
    pub fn exp(&self, t: f64) -> Self {
        let vector_len = sqrt(self.x * self.x + self.y * self.y + self.z * self.z);
        if vector_len == 0.0 {
            trace!("exp: zero vector part (w = {}), returning input", self.w);
            return *self;
        }

        let alpha = atan2(vector_len, self.w);
        let (sin_new, cos_new) = sincos(alpha * t);
        let mult = sin_new / vector_len;

        Self::new(cos_new, self.x * mult, self.y * mult, self.z * mult)
    }

    /// Spherical linear interpolation from `self` (`t = 0`) to `other`
    /// (`t = 1`) along the shorter arc. The result has unit magnitude.
    ///
    /// ```
    /// use orientation_core::{Quaternion, Vector3};
    ///
    /// let x = Vector3::x_axis();
    /// let a = Quaternion::from_axis_angle(20f64.to_radians(), &x);
    /// let b = Quaternion::from_axis_angle(40f64.to_radians(), &x);
    ///
    /// let mid = a.slerp(&b, 0.5);
    /// let expected = Quaternion::from_axis_angle(30f64.to_radians(), &x);
    /// assert!(mid.dot(&expected) > 1.0 - 1e-12);
    /// ```
    pub fn slerp(&self, other: &Self, t: f64) -> Self {
        let mut cos_theta = self.dot(other);
        let mut end = *other;
        if cos_theta < 0.0 {
            end = -end;
            cos_theta = -cos_theta;
        }

        let (k0, k1) = if cos_theta > SLERP_LINEAR_THRESHOLD {
            trace!("slerp: cos(theta) = {} is near 1, using linear interpolation", cos_theta);
            (1.0 - t, t)
        } else {
            let sin_theta = sqrt(1.0 - cos_theta * cos_theta);
            let theta = atan2(sin_theta, cos_theta);
            let inv = 1.0 / sin_theta;
            (
                libm::sin((1.0 - t) * theta) * inv,
                libm::sin(t * theta) * inv,
            )
        };

        let blended = *self * k0 + end * k1;
        let mag = blended.magnitude();
        if mag > 0.0 {
            blended * (1.0 / mag)
        } else {
            blended
        }
    }

    /// Rotation matrix with zero translation.
    pub fn to_matrix(&self) -> RotationMatrix {
        let Self { w, x, y, z } = *self;

        RotationMatrix::from_rows([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y + w * z),
                2.0 * (x * z - w * y),
            ],
            [
                2.0 * (x * y - w * z),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z + w * x),
            ],
            [
                2.0 * (x * z + w * y),
                2.0 * (y * z - w * x),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }

    /// Extracts the rotation of `matrix` (its translation is ignored).
    ///
    /// The component with the largest magnitude is recovered first from the
    /// trace or a diagonal entry, and the others are divided by it, so no
    /// branch divides by a value near zero.
    pub fn from_matrix(matrix: &RotationMatrix) -> Self {
        let m = matrix.elements();
        let (m11, m12, m13) = (m[0][0], m[0][1], m[0][2]);
        let (m21, m22, m23) = (m[1][0], m[1][1], m[1][2]);
        let (m31, m32, m33) = (m[2][0], m[2][1], m[2][2]);

        let four_w = m11 + m22 + m33;
        let four_x = m11 - m22 - m33;
        let four_y = m22 - m11 - m33;
        let four_z = m33 - m11 - m22;

        let mut pivot = 0;
        let mut biggest = four_w;
        for (index, value) in [four_x, four_y, four_z].into_iter().enumerate() {
            if value > biggest {
                biggest = value;
                pivot = index + 1;
            }
        }

        let big = sqrt(biggest + 1.0) * 0.5;
        let mult = 0.25 / big;

        match pivot {
            0 => Self::new(big, (m23 - m32) * mult, (m31 - m13) * mult, (m12 - m21) * mult),
            1 => Self::new((m23 - m32) * mult, big, (m12 + m21) * mult, (m31 + m13) * mult),
            2 => Self::new((m31 - m13) * mult, (m12 + m21) * mult, big, (m23 + m32) * mult),
            _ => Self::new((m12 - m21) * mult, (m31 + m13) * mult, (m23 + m32) * mult, big),
        }
    }

    /// Rotates `vector` by this quaternion (translation-free).
    pub fn rotate_vector(&self, vector: Vector3) -> Vector3 {
        self.to_matrix().transform(vector)
    }

    /// Heading, pitch and bank of `self` read as an upright (world-to-object) rotation.
    pub fn upright_to_euler_angles(&self) -> EulerAngles {
        EulerAngles::from_quaternion(self, Frame::Upright)
    }

    /// Heading, pitch and bank of `self` read as an object (object-to-world) rotation.
    pub fn object_to_euler_angles(&self) -> EulerAngles {
        EulerAngles::from_quaternion(self, Frame::Object)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.w * k, self.x * k, self.y * k, self.z * k)
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

/// -q encodes the same rotation as q.
impl std::ops::Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(w={:.9}, x={:.9}, y={:.9}, z={:.9})",
            self.w, self.x, self.y, self.z
        )
    }
}
