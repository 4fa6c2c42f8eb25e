//! Heading, pitch and bank.
//!
//! [`EulerAngles`] stores three angles in **degrees**:
//!
//! | Angle | Axis | Canonical range |
//! |-------|------|-----------------|
//! | heading | vertical (y) | (-180, 180] |
//! | pitch | lateral (x) | [-90, 90] |
//! | bank | forward (z) | (-180, 180], and 0 when pitch is ±90 |
//!
//! Any triple is a legal value. [`canonize`](EulerAngles::canonize) maps it
//! to the canonical representative of the same orientation; nothing else in
//! the crate canonizes implicitly except the decompositions
//! ([`from_matrix`](EulerAngles::from_matrix),
//! [`from_quaternion`](EulerAngles::from_quaternion)), whose results are
//! always canonical.
//!
//! # Frames
//!
//! The same three angles describe two mutually inverse transforms, selected
//! by [`Frame`]. The [`Frame::Object`] matrix is the transpose of the
//! [`Frame::Upright`] matrix, and its quaternion is the conjugate.
//!
//! The upright matrix is `Rz(bank) · Rx(pitch) · Ry(heading)` in the
//! row-vector convention of [`RotationMatrix`].
//!
//! # Poles
//!
//! At pitch ±90° heading and bank rotate about the same axis, so only one of
//! them is observable. Two predicates decide when that applies:
//!
//! - [`is_exact_pole`]: exact comparison, used by `canonize`, whose input is
//!   whatever the caller wrote.
//! - [`is_near_pole`]: tolerance comparison, used by the decompositions, whose
//!   pitch comes out of `asin` with rounding error. The tolerance is
//!   [`POLE_EPSILON_DEG`].
//!
//! ```
//! use orientation_core::EulerAngles;
//!
//! let mut e = EulerAngles::new(0.0, 135.0, 0.0);
//! e.canonize();
//! assert_eq!(e, EulerAngles::new(180.0, 45.0, 180.0));
//!
//! let m = e.to_upright_matrix();
//! let back = EulerAngles::from_upright_matrix(&m);
//! assert!((back.pitch - 45.0).abs() < 1e-9);
//! ```

use crate::angle::{deg_to_rad, rad_to_deg, reduce_to_canonical_range};
use crate::constants::{HALF_TURN_DEG, POLE_EPSILON_DEG, POLE_PITCH_DEG};
use crate::math::{atan2, clamped_asin, sincos};
use crate::matrix::RotationMatrix;
use crate::quaternion::Quaternion;
use approx::{AbsDiffEq, RelativeEq};
use log::trace;
use std::fmt;

/// Which of the two inverse transforms a set of angles describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frame {
    /// World to object.
    Upright,
    /// Object to world.
    Object,
}

/// True when `pitch` (degrees) is exactly +90 or -90.
#[inline]
pub fn is_exact_pole(pitch: f64) -> bool {
    pitch == POLE_PITCH_DEG || pitch == -POLE_PITCH_DEG
}

/// True when `pitch` (degrees) is within `epsilon` degrees of ±90.
#[inline]
pub fn is_near_pole(pitch: f64, epsilon: f64) -> bool {
    (pitch.abs() - POLE_PITCH_DEG).abs() <= epsilon
}

/// Heading, pitch and bank in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    pub heading: f64,
    pub pitch: f64,
    pub bank: f64,
}

impl EulerAngles {
    #[inline]
    pub fn new(heading: f64, pitch: f64, bank: f64) -> Self {
        Self {
            heading,
            pitch,
            bank,
        }
    }

    /// True when all three angles are inside their canonical ranges and bank
    /// is zero at the poles.
    pub fn is_canonical(&self) -> bool {
        let in_half_open = |angle: f64| angle > -HALF_TURN_DEG && angle <= HALF_TURN_DEG;

        in_half_open(self.heading)
            && in_half_open(self.bank)
            && (-POLE_PITCH_DEG..=POLE_PITCH_DEG).contains(&self.pitch)
            && (!is_exact_pole(self.pitch) || self.bank == 0.0)
    }

    /// Rewrites the angles as the canonical representative of the same
    /// orientation. Idempotent.
    ///
    /// 1. pitch is reduced to (-180, 180].
    /// 2. A pitch beyond a pole is reflected back through it, and heading and
    ///    bank each gain a half turn.
    /// 3. At pitch +90 bank is folded into heading (`heading += bank`), at -90
    ///    it is folded with the opposite sign (`heading -= bank`), and bank
    ///    becomes 0.
    /// 4. heading and bank are reduced to (-180, 180].
    ///
    /// ```
    /// use orientation_core::EulerAngles;
    ///
    /// let mut e = EulerAngles::new(90.0, 90.0, 90.0);
    /// e.canonize();
    /// assert_eq!(e, EulerAngles::new(180.0, 90.0, 0.0));
    ///
    /// let mut e = EulerAngles::new(-30.0, -90.0, 10.0);
    /// e.canonize();
    /// assert_eq!(e, EulerAngles::new(-40.0, -90.0, 0.0));
    /// ```
    pub fn canonize(&mut self) {
        self.pitch = reduce_to_canonical_range(self.pitch);

        if self.pitch > POLE_PITCH_DEG {
            self.pitch = HALF_TURN_DEG - self.pitch;
            self.heading += HALF_TURN_DEG;
            self.bank += HALF_TURN_DEG;
        } else if self.pitch < -POLE_PITCH_DEG {
            self.pitch = -HALF_TURN_DEG - self.pitch;
            self.heading += HALF_TURN_DEG;
            self.bank += HALF_TURN_DEG;
        }

        if is_exact_pole(self.pitch) {
            if self.pitch > 0.0 {
                self.heading += self.bank;
            } else {
                self.heading -= self.bank;
            }
            self.bank = 0.0;
        }

        self.heading = reduce_to_canonical_range(self.heading);
        self.bank = reduce_to_canonical_range(self.bank);
    }

    /// Canonical copy; `self` is left unchanged.
    pub fn canonized(&self) -> Self {
        let mut e = *self;
        e.canonize();
        e
    }

    /// The rotation matrix these angles describe in `frame`. Translation is
    /// zero.
    pub fn to_matrix(&self, frame: Frame) -> RotationMatrix {
        let mut m = RotationMatrix::identity();
        m.prepend_rotation_y(deg_to_rad(self.heading));
        m.prepend_rotation_x(deg_to_rad(self.pitch));
        m.prepend_rotation_z(deg_to_rad(self.bank));

        match frame {
            Frame::Upright => m,
            Frame::Object => m.transpose(),
        }
    }

    /// Decomposes the rotation block of `matrix`, read as a `frame`
    /// transform, into canonical angles.
    ///
    /// The pitch comes from a single entry through a clamped `asin`. Within
    /// [`POLE_EPSILON_DEG`] of a pole, pitch is set to exactly ±90, bank to 0,
    /// and heading is taken from the first row.
    pub fn from_matrix(matrix: &RotationMatrix, frame: Frame) -> Self {
        let m = match frame {
            Frame::Upright => *matrix.elements(),
            Frame::Object => *matrix.transpose().elements(),
        };

        let pitch = rad_to_deg(clamped_asin(-m[2][1]));

        let raw = if is_near_pole(pitch, POLE_EPSILON_DEG) {
            trace!("from_matrix: pitch {} is at a pole, bank forced to 0", pitch);
            Self::new(
                rad_to_deg(atan2(-m[0][2], m[0][0])),
                POLE_PITCH_DEG.copysign(pitch),
                0.0,
            )
        } else {
            Self::new(
                rad_to_deg(atan2(m[2][0], m[2][2])),
                pitch,
                rad_to_deg(atan2(m[0][1], m[1][1])),
            )
        };

        raw.canonized()
    }

    /// The quaternion these angles describe in `frame`, built from the half
    /// angles without an intermediate matrix.
    ///
    /// The upright quaternion equals `Qh * Qp * Qb`, the product of the
    /// axis-angle rotations about y, x and z.
    pub fn to_quaternion(&self, frame: Frame) -> Quaternion {
        let (sh, ch) = sincos(deg_to_rad(self.heading) * 0.5);
        let (sp, cp) = sincos(deg_to_rad(self.pitch) * 0.5);
        let (sb, cb) = sincos(deg_to_rad(self.bank) * 0.5);

        let upright = Quaternion::new(
            ch * cp * cb + sh * sp * sb,
            ch * sp * cb + sh * cp * sb,
            -ch * sp * sb + sh * cp * cb,
            -sh * sp * cb + ch * cp * sb,
        );

        match frame {
            Frame::Upright => upright,
            Frame::Object => upright.conjugate(),
        }
    }

    /// Decomposes `q`, read as a `frame` rotation, into canonical angles.
    ///
    /// Uses the same branches as [`from_matrix`](Self::from_matrix), written
    /// in quaternion components.
    pub fn from_quaternion(q: &Quaternion, frame: Frame) -> Self {
        let Quaternion { w, x, y, z } = match frame {
            Frame::Upright => *q,
            Frame::Object => q.conjugate(),
        };

        let pitch = rad_to_deg(clamped_asin(-2.0 * (y * z - w * x)));

        let raw = if is_near_pole(pitch, POLE_EPSILON_DEG) {
            trace!("from_quaternion: pitch {} is at a pole, bank forced to 0", pitch);
            Self::new(
                rad_to_deg(atan2(-x * z + w * y, 0.5 - y * y - z * z)),
                POLE_PITCH_DEG.copysign(pitch),
                0.0,
            )
        } else {
            Self::new(
                rad_to_deg(atan2(x * z + w * y, 0.5 - x * x - y * y)),
                pitch,
                rad_to_deg(atan2(x * y + w * z, 0.5 - x * x - z * z)),
            )
        };

        raw.canonized()
    }

    pub fn to_upright_matrix(&self) -> RotationMatrix {
        self.to_matrix(Frame::Upright)
    }

    pub fn to_object_matrix(&self) -> RotationMatrix {
        self.to_matrix(Frame::Object)
    }

    pub fn from_upright_matrix(matrix: &RotationMatrix) -> Self {
        Self::from_matrix(matrix, Frame::Upright)
    }

    pub fn from_object_matrix(matrix: &RotationMatrix) -> Self {
        Self::from_matrix(matrix, Frame::Object)
    }

    pub fn to_upright_quaternion(&self) -> Quaternion {
        self.to_quaternion(Frame::Upright)
    }

    pub fn to_object_quaternion(&self) -> Quaternion {
        self.to_quaternion(Frame::Object)
    }

    pub fn from_upright_quaternion(q: &Quaternion) -> Self {
        Self::from_quaternion(q, Frame::Upright)
    }

    pub fn from_object_quaternion(q: &Quaternion) -> Self {
        Self::from_quaternion(q, Frame::Object)
    }
}

/// Component-wise comparison; angles a full turn apart are *not* equal.
impl AbsDiffEq for EulerAngles {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.heading.abs_diff_eq(&other.heading, epsilon)
            && self.pitch.abs_diff_eq(&other.pitch, epsilon)
            && self.bank.abs_diff_eq(&other.bank, epsilon)
    }
}

impl RelativeEq for EulerAngles {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.heading.relative_eq(&other.heading, epsilon, max_relative)
            && self.pitch.relative_eq(&other.pitch, epsilon, max_relative)
            && self.bank.relative_eq(&other.bank, epsilon, max_relative)
    }
}

impl fmt::Display for EulerAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EulerAngles(heading={:.6}°, pitch={:.6}°, bank={:.6}°)",
            self.heading, self.pitch, self.bank
        )
    }
}
