//! Numeric constants and the named tolerances used by the conversions.
//!
//! Each tolerance controls exactly one kind of decision:
//!
//! | Constant | Decision |
//! |----------|----------|
//! | [`POLE_EPSILON_DEG`] | matrix/quaternion → Euler treats pitch as ±90° |
//! | [`UNIT_AXIS_TOLERANCE`] | `rotate_about` / `scale_along` accept the axis |
//! | [`SLERP_LINEAR_THRESHOLD`] | slerp falls back to normalized lerp |
//! | [`ORTHOGONAL_TOLERANCE`] | default for `is_orthogonal` checks |

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Degrees in a half turn; the inclusive upper bound of heading and bank.
pub const HALF_TURN_DEG: f64 = 180.0;

/// Pitch of the poles in degrees.
pub const POLE_PITCH_DEG: f64 = 90.0;

/// Pitch within this many degrees of ±90° is decomposed as gimbal lock.
///
/// Only used by matrix and quaternion decompositions; `canonize` tests the
/// pole exactly. 0.01° sits at the low end of the 0.01°–0.03° error the
/// conversions are checked against.
pub const POLE_EPSILON_DEG: f64 = 0.01;

/// Largest accepted deviation of an axis length from 1.
///
/// Axes typed with three decimals, e.g. `(0.089, -0.506, 0.857)`, are about
/// 1e-3 away from unit length and must still be accepted.
pub const UNIT_AXIS_TOLERANCE: f64 = 1e-3;

/// Cosine of the arc above which slerp switches to normalized lerp.
pub const SLERP_LINEAR_THRESHOLD: f64 = 0.9999;

/// Default tolerance for orthogonality checks.
pub const ORTHOGONAL_TOLERANCE: f64 = 1e-6;
