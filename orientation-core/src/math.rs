#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

#[inline]
pub fn sincos(x: f64) -> (f64, f64) {
    libm::sincos(x)
}

/// Arcsine with the argument clamped to [-1, 1].
///
/// Entries of a rotation matrix built from floats can overshoot ±1 by a few
/// ULP; plain `asin` would return NaN for those.
#[inline]
pub fn clamped_asin(x: f64) -> f64 {
    libm::asin(x.clamp(-1.0, 1.0))
}

/// Arccosine with the argument clamped to [-1, 1].
#[inline]
pub fn clamped_acos(x: f64) -> f64 {
    libm::acos(x.clamp(-1.0, 1.0))
}

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}
