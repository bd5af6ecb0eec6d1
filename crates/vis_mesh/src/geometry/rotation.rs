//! Rotation utilities
//!
//! Builds the rotation that carries a mesh's intrinsic forward axis onto a
//! requested orientation.

use crate::foundation::math::{any_orthogonal, Mat3, Rotation3, Unit, Vec3, LENGTH_EPSILON};

/// Below this cross-product length two unit vectors are treated as collinear
const COLLINEAR_EPSILON: f32 = 1e-6;

/// Errors from rotation construction
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    /// One of the input directions has zero length
    #[error("Cannot build a rotation from a zero-length direction")]
    ZeroVector,
}

/// Rotation matrix mapping the direction of `base` onto the direction of `target`
///
/// Neither input needs to be normalized. Parallel inputs give the identity;
/// antiparallel inputs give a half turn about an axis orthogonal to `base`.
///
/// # Errors
/// [`RotationError::ZeroVector`] if either vector has (near) zero length.
pub fn rotation_matrix(base: &Vec3, target: &Vec3) -> Result<Mat3, RotationError> {
    let base_norm = base.norm();
    let target_norm = target.norm();
    if base_norm < LENGTH_EPSILON || target_norm < LENGTH_EPSILON {
        return Err(RotationError::ZeroVector);
    }

    let a = base / base_norm;
    let b = target / target_norm;
    let cos = a.dot(&b);
    let axis = a.cross(&b);
    let sin = axis.norm();

    if sin < COLLINEAR_EPSILON {
        if cos > 0.0 {
            return Ok(Mat3::identity());
        }
        // Half turn: R = 2uu^T - I
        let u = any_orthogonal(&a);
        return Ok(2.0 * u * u.transpose() - Mat3::identity());
    }

    let rotation = Rotation3::from_axis_angle(&Unit::new_unchecked(axis / sin), sin.atan2(cos));
    Ok(rotation.into_inner())
}
