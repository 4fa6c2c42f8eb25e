//! Angles on the circle: range reduction, shortest differences and
//! degree/radian conversion.

mod normalize;

pub use normalize::{
    deg_to_rad, rad_to_deg, reduce_to_canonical_range, shortest_difference,
    shortest_difference_rad, wrap_pm_pi_inclusive,
};
