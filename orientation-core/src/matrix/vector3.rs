//! Homogeneous 3D vectors.
//!
//! A [`Vector3`] carries a fourth component `w` that decides whether the
//! translation part of a [`RotationMatrix`](super::RotationMatrix) applies:
//!
//! | `w` | Meaning | Constructor | Translated? |
//! |-----|---------|-------------|-------------|
//! | 1 | point | [`new`](Vector3::new), [`point`](Vector3::point) | yes |
//! | 0 | direction | [`direction`](Vector3::direction) | no |
//!
//! `w` takes no part in length, dot or cross products. Arithmetic keeps the
//! `w` of the left operand.
//!
//! ```
//! use orientation_core::Vector3;
//!
//! let a = Vector3::x_axis();
//! let b = Vector3::y_axis();
//!
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Vector3::z_axis());
//! assert_eq!(a.angle_between(&b).unwrap(), 90.0);
//! ```
//!
//! Length is computed from the components on every call, so mutating a field
//! directly never leaves a stale length behind.

use crate::constants::RAD_TO_DEG;
use crate::errors::{MathErrorKind, OrientationError, OrientationResult};
use crate::math::{clamped_acos, sqrt};
use approx::AbsDiffEq;
use std::fmt;

/// A 3D vector with a homogeneous `w` component.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Vector3 {
    /// Creates a point (`w = 1`).
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    #[inline]
    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z)
    }

    /// Creates a direction (`w = 0`); translation does not move it.
    #[inline]
    pub fn direction(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns a copy with the given `w`.
    #[inline]
    pub fn with_w(self, w: f64) -> Self {
        Self { w, ..self }
    }

    /// Euclidean length of `(x, y, z)`.
    #[inline]
    pub fn length(&self) -> f64 {
        sqrt(self.length_squared())
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Rescales `(x, y, z)` so that the length becomes `length`.
    ///
    /// The direction of a zero vector is undefined, so it cannot be rescaled:
    ///
    /// ```
    /// use orientation_core::{MathErrorKind, Vector3};
    ///
    /// let mut v = Vector3::new(2.0, 3.0, 4.0);
    /// v.set_length(2.0).unwrap();
    /// assert!((v.length() - 2.0).abs() < 1e-15);
    ///
    /// let err = Vector3::zeros().set_length(2.0).unwrap_err();
    /// assert_eq!(err.kind(), Some(&MathErrorKind::ZeroLength));
    /// ```
    pub fn set_length(&mut self, length: f64) -> OrientationResult<()> {
        let current = self.length();
        if current == 0.0 {
            return Err(OrientationError::math_error(
                "Vector3::set_length",
                MathErrorKind::ZeroLength,
                "cannot rescale a zero-length vector",
            ));
        }
        let ratio = length / current;
        self.x *= ratio;
        self.y *= ratio;
        self.z *= ratio;
        Ok(())
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// Fails with [`MathErrorKind::ZeroLength`] for the zero vector instead of
    /// producing NaN components.
    pub fn normalize(&self) -> OrientationResult<Self> {
        let len = self.length();
        if len == 0.0 {
            return Err(OrientationError::math_error(
                "Vector3::normalize",
                MathErrorKind::ZeroLength,
                "cannot normalize a zero-length vector",
            ));
        }
        Ok(Self {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
            w: self.w,
        })
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product following the right-hand rule.
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
            w: self.w,
        }
    }

    /// Distance between the points `self` and `other`.
    pub fn distance_between(&self, other: &Self) -> f64 {
        (*other - *self).length()
    }

    /// Angle between two vectors in degrees, in [0, 180].
    ///
    /// Fails if either vector has zero length.
    pub fn angle_between(&self, other: &Self) -> OrientationResult<f64> {
        let a = self.normalize()?;
        let b = other.normalize()?;
        Ok(clamped_acos(a.dot(&b)) * RAD_TO_DEG)
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w,
        }
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w,
        }
    }
}

impl std::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w,
        }
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

impl std::ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        self * (1.0 / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }
}

/// v[i] indexing over x, y, z, w (panics if i > 3)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector3({:.9}, {:.9}, {:.9}; w={})",
            self.x, self.y, self.z, self.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn v1() -> Vector3 {
        Vector3::new(2.0, 3.0, 4.0)
    }

    fn v2() -> Vector3 {
        Vector3::new(10.0, -20.0, 6.5)
    }

    #[test]
    fn test_construction_sets_w() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!((p.x, p.y, p.z, p.w), (1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vector3::point(1.0, 2.0, 3.0), p);

        let d = Vector3::direction(1.0, 2.0, 3.0);
        assert_eq!(d.w, 0.0);
        assert_eq!(d.with_w(1.0), p);
    }

    #[test]
    fn test_length_follows_components() {
        let mut v = v1();
        assert_eq!(v.length(), libm::sqrt(29.0));

        let before = v.length();
        v.x += 1.0;
        assert_ne!(v.length(), before);

        let before = v.length();
        v.w = 0.0;
        assert_eq!(v.length(), before);
    }

    #[test]
    fn test_set_length_scales_proportionally() {
        let mut v = v1();
        let current = v.length();
        let target = current + 2.0;
        v.set_length(target).unwrap();

        let ratio = target / current;
        assert_abs_diff_eq!(v.x, 2.0 * ratio, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 3.0 * ratio, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 4.0 * ratio, epsilon = 1e-12);
        assert_abs_diff_eq!(v.length(), target, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize() {
        assert_abs_diff_eq!(v1().normalize().unwrap().length(), 1.0, epsilon = 1e-15);
        assert_eq!(Vector3::new(5.0, 0.0, 0.0).normalize().unwrap().x, 1.0);
        assert_eq!(Vector3::new(0.0, 5.0, 0.0).normalize().unwrap().y, 1.0);
        assert_eq!(Vector3::new(0.0, 0.0, 5.0).normalize().unwrap().z, 1.0);
    }

    #[test]
    fn test_zero_vector_errors() {
        let err = Vector3::zeros().normalize().unwrap_err();
        assert_eq!(err.kind(), Some(&MathErrorKind::ZeroLength));

        let mut zero = Vector3::zeros();
        assert!(zero.set_length(2.0).is_err());
        assert_eq!(zero, Vector3::zeros());

        assert!(Vector3::zeros().angle_between(&v1()).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let mut a = v1();
        let b = v2();

        assert_eq!(a + b, Vector3::new(12.0, -17.0, 10.5));
        assert_eq!(a - b, Vector3::new(-8.0, 23.0, -2.5));
        assert_eq!(a * 2.0, Vector3::new(4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, Vector3::new(4.0, 6.0, 8.0));
        assert_eq!(a / 2.0, Vector3::new(1.0, 1.5, 2.0));
        assert_eq!(-a, Vector3::new(-2.0, -3.0, -4.0));

        a += b;
        assert_eq!(a, Vector3::new(12.0, -17.0, 10.5));
        a -= b;
        assert_eq!(a, v1());
        a *= 3.0;
        assert_eq!(a, Vector3::new(6.0, 9.0, 12.0));
    }

    #[test]
    fn test_arithmetic_keeps_left_w() {
        let d = Vector3::direction(1.0, 0.0, 0.0);
        assert_eq!((d + Vector3::new(1.0, 1.0, 1.0)).w, 0.0);
        assert_eq!((d * 4.0).w, 0.0);
    }

    #[test]
    fn test_distance_between() {
        let a = v1();
        let b = v2();
        assert_eq!(a.distance_between(&b), (b - a).length());
    }

    #[test]
    fn test_dot_and_cross() {
        let a = v1();
        let b = v2();
        assert_eq!(a.dot(&b), 2.0 * 10.0 + 3.0 * -20.0 + 4.0 * 6.5);

        let c = a.cross(&b);
        assert_eq!(c.x, 3.0 * 6.5 - 4.0 * -20.0);
        assert_eq!(c.y, 4.0 * 10.0 - 2.0 * 6.5);
        assert_eq!(c.z, 2.0 * -20.0 - 3.0 * 10.0);
    }

    #[test]
    fn test_cross_of_two_axes_gives_third() {
        let (x, y, z) = (Vector3::x_axis(), Vector3::y_axis(), Vector3::z_axis());
        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), -z);
        assert_eq!(z.cross(&y), -x);
        assert_eq!(x.cross(&z), -y);
    }

    #[test]
    fn test_angle_between_in_degrees() {
        let a = v1();
        let b = v2();
        let expected =
            libm::acos(a.normalize().unwrap().dot(&b.normalize().unwrap())) * RAD_TO_DEG;
        assert_abs_diff_eq!(a.angle_between(&b).unwrap(), expected, epsilon = 1e-12);

        assert_eq!(Vector3::x_axis().angle_between(&Vector3::y_axis()).unwrap(), 90.0);
        assert_eq!(Vector3::x_axis().angle_between(&Vector3::x_axis()).unwrap(), 0.0);
    }

    #[test]
    fn test_indexing_includes_w() {
        let mut v = Vector3::direction(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 0.0);
        v[3] = 1.0;
        assert_eq!(v.w, 1.0);
    }

    #[test]
    #[should_panic(expected = "Vector3 index out of bounds: 4")]
    fn test_index_panic() {
        let v = v1();
        let _ = v[4];
    }

    #[test]
    fn test_display_formatting() {
        let s = format!("{}", Vector3::new(1.234567890, -2.345678901, 3.0));
        assert!(s.starts_with("Vector3("));
        assert!(s.contains("1.234567890"));
        assert!(s.contains("-2.345678901"));
        assert!(s.ends_with("w=1)"));
    }
}
