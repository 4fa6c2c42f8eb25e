//! Rigid-body orientation math.
//!
//! `orientation-core` provides three interchangeable encodings of a 3D
//! rotation and the conversions between them: Euler angles
//! (heading/pitch/bank), a rotation matrix with a translation row, and a unit
//! quaternion. The conversions handle gimbal lock, angle-range ambiguity and
//! numerical drift.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Range reduction, shortest angular difference, degree/radian conversion |
//! | [`matrix`] | [`RotationMatrix`] and the homogeneous [`Vector3`] |
//! | [`quaternion`] | [`Quaternion`]: products, slerp, exponentiation, matrix conversion |
//! | [`euler`] | [`EulerAngles`]: canonicalization and the [`Frame`]-parameterized conversions |
//! | [`constants`] | Unit conversions and the named tolerances |
//! | [`errors`] | [`OrientationError`] and [`OrientationResult`] |
//!
//! # Conversions
//!
//! ```text
//!                 to_matrix(frame)
//!   EulerAngles ─────────────────────▶ RotationMatrix
//!        ▲  │     from_matrix(m, frame)        │  ▲
//!        │  │                                  │  │
//!        │  │ to_quaternion(frame)  from_matrix│  │ to_matrix
//!        │  ▼                                  ▼  │
//!        └─────────── Quaternion ◀────────────────┘
//!          from_quaternion(q, frame)
//! ```
//!
//! Going around the triangle returns the starting rotation. Starting from
//! Euler angles it returns the canonical form of the starting angles, except
//! at the poles where heading and bank cannot be told apart.
//!
//! ```
//! use orientation_core::{EulerAngles, Frame, Quaternion};
//!
//! let e = EulerAngles::new(123.0, 33.5, -32.7);
//! let m = e.to_matrix(Frame::Upright);
//! let q = Quaternion::from_matrix(&m);
//! let back = EulerAngles::from_quaternion(&q, Frame::Upright);
//!
//! assert!((back.heading - 123.0).abs() < 1e-9);
//! assert!((back.bank + 32.7).abs() < 1e-9);
//! ```
//!
//! # Re-exports
//!
//! ```
//! use orientation_core::{EulerAngles, Frame, Quaternion, RotationMatrix, Vector3};
//! use orientation_core::{MathErrorKind, OrientationError, OrientationResult};
//! ```
//!
//! # Design Notes
//!
//! - **Degrees at the surface**: Euler angles and the public matrix rotation
//!   methods take degrees. [`Quaternion::from_axis_angle`], `exp` and `slerp`
//!   work in radians or fractions.
//!
//! - **Row vectors**: vectors multiply matrices from the left, `v' = v · M`.
//!
//! - **Plain values**: every type is `Copy` and holds no cached state.
//!   Derived quantities such as a determinant or a length are recomputed on
//!   each call.
//!
//! - **Logging**: the crate emits `log` records for numerically special
//!   branches and never installs a logger.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod euler;
pub mod math;
pub mod matrix;
pub mod quaternion;

pub use errors::{MathErrorKind, OrientationError, OrientationResult};
pub use euler::{EulerAngles, Frame};
pub use matrix::{RotationMatrix, Vector3};
pub use quaternion::Quaternion;

pub mod test_helpers;
