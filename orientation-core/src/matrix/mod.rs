//! Affine rotation matrices and homogeneous vectors.
//!
//! - [`RotationMatrix`]: 3×3 rotation block plus translation, row-vector convention
//! - [`Vector3`]: `(x, y, z, w)` vector; `w` selects point or direction

mod rotation_matrix;
mod vector3;

pub use rotation_matrix::RotationMatrix;
pub use vector3::Vector3;
