//! Angle range reduction and shortest signed differences.
//!
//! Heading and bank live on a circle, so every value has infinitely many
//! equivalent representations. This crate reduces them into the half-open
//! interval (-180°, +180°]: the upper boundary is inclusive, so a half turn is
//! always reported as `+180`, never `-180`.
//!
//! | Function | Unit | Output Range |
//! |----------|------|--------------|
//! | [`reduce_to_canonical_range`] | degrees | (-180, 180] |
//! | [`wrap_pm_pi_inclusive`] | radians | (-pi, pi] |
//! | [`shortest_difference`] | degrees | (-180, 180] |
//! | [`shortest_difference_rad`] | radians | (-pi, pi] |
//!
//! # Algorithm Notes
//!
//! The reductions use `libm::fmod` (via [`crate::math::fmod`]). `fmod` keeps
//! the sign of the dividend and is exact, so integral degree values stay
//! integral and results like `380 -> 20` compare equal without tolerance.
//! After `fmod` the value lies in (-360, 360) and at most one correction by a
//! full turn is needed.
//!
//! ```
//! use orientation_core::angle::{reduce_to_canonical_range, shortest_difference};
//!
//! assert_eq!(reduce_to_canonical_range(380.0), 20.0);
//! assert_eq!(reduce_to_canonical_range(-180.0), 180.0);
//!
//! // Turning from -170 to 170 is 20 degrees clockwise, not 340 counter-clockwise.
//! assert_eq!(shortest_difference(-170.0, 170.0), -20.0);
//! ```

use crate::constants::{DEG_TO_RAD, FULL_TURN_DEG, HALF_TURN_DEG, PI, RAD_TO_DEG, TWOPI};
use crate::math::fmod;

/// Reduces an angle in degrees to (-180, 180].
///
/// Equivalent to `angle - 360 * round(angle / 360)` with the boundary case
/// mapped onto `+180`.
///
/// ```
/// use orientation_core::angle::reduce_to_canonical_range;
///
/// assert_eq!(reduce_to_canonical_range(750.0), 30.0);
/// assert_eq!(reduce_to_canonical_range(-200.0), 160.0);
/// assert_eq!(reduce_to_canonical_range(-540.0), 180.0);
/// ```
#[inline]
pub fn reduce_to_canonical_range(angle: f64) -> f64 {
    let w = fmod(angle, FULL_TURN_DEG);
    if w > HALF_TURN_DEG {
        w - FULL_TURN_DEG
    } else if w <= -HALF_TURN_DEG {
        w + FULL_TURN_DEG
    } else {
        w
    }
}

/// Reduces an angle in radians to (-pi, pi].
#[inline]
pub fn wrap_pm_pi_inclusive(angle: f64) -> f64 {
    let w = fmod(angle, TWOPI);
    if w > PI {
        w - TWOPI
    } else if w <= -PI {
        w + TWOPI
    } else {
        w
    }
}

/// Shortest signed rotation in degrees that takes angle `a` to angle `b`.
///
/// Positive results turn in the direction of increasing angle. Opposite
/// angles are a half turn apart and report `+180`.
#[inline]
pub fn shortest_difference(a: f64, b: f64) -> f64 {
    reduce_to_canonical_range(b - a)
}

/// Shortest signed rotation in radians that takes angle `a` to angle `b`.
#[inline]
pub fn shortest_difference_rad(a: f64, b: f64) -> f64 {
    wrap_pm_pi_inclusive(b - a)
}

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reduce_to_canonical_range() {
        let cases = [
            (10.0, 10.0),
            (380.0, 20.0),
            (-10.0, -10.0),
            (-200.0, 160.0),
            (200.0, -160.0),
            (-170.0, -170.0),
            (170.0, 170.0),
            (-380.0, -20.0),
            (750.0, 30.0),
            (-750.0, -30.0),
            (180.0, 180.0),
            (-180.0, 180.0),
            (-540.0, 180.0),
            (540.0, 180.0),
            (360.0, 0.0),
        ];
        for (input, expected) in cases {
            assert_eq!(reduce_to_canonical_range(input), expected, "input {}", input);
        }
    }

    #[test]
    fn test_reduce_is_identity_inside_range() {
        for angle in [-179.9, -90.0, 0.0, 45.5, 179.999, 180.0] {
            assert_eq!(reduce_to_canonical_range(angle), angle);
        }
    }

    #[test]
    fn test_wrap_pm_pi_inclusive() {
        assert_eq!(wrap_pm_pi_inclusive(1.0), 1.0);
        assert_abs_diff_eq!(wrap_pm_pi_inclusive(-PI), PI);
        assert_abs_diff_eq!(wrap_pm_pi_inclusive(PI), PI);
        assert_abs_diff_eq!(wrap_pm_pi_inclusive(3.0 * PI / 2.0), -PI / 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(wrap_pm_pi_inclusive(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_shortest_difference_degrees() {
        assert_eq!(shortest_difference(-170.0, 170.0), -20.0);
        assert_eq!(shortest_difference(-90.0, 45.0), 135.0);
        assert_eq!(shortest_difference(0.0, 90.0), 90.0);
        assert_eq!(shortest_difference(-90.0, -150.0), -60.0);
        assert_eq!(shortest_difference(0.0, 180.0), 180.0);
        assert_eq!(shortest_difference(180.0, 0.0), 180.0);
    }

    #[test]
    fn test_shortest_difference_radians() {
        let cases = [
            (-170.0, 170.0, -20.0),
            (-90.0, 45.0, 135.0),
            (0.0, 90.0, 90.0),
            (-90.0, -150.0, -60.0),
        ];
        for (a, b, expected) in cases {
            let result = shortest_difference_rad(deg_to_rad(a), deg_to_rad(b));
            assert_abs_diff_eq!(result, deg_to_rad(expected), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_degree_radian_conversion() {
        assert_abs_diff_eq!(deg_to_rad(180.0), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(rad_to_deg(PI / 2.0), 90.0, epsilon = 1e-12);
    }
}
