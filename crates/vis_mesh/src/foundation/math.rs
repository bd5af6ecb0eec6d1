//! Math utilities and types
//!
//! Provides the fundamental math types used by meshes, materials and rotations.

pub use nalgebra::{
    Vector3,
    Matrix3,
    Rotation3,
    Unit,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Tolerance below which a vector length is treated as zero
pub const LENGTH_EPSILON: f32 = 1e-8;

/// Any unit vector orthogonal to `v`
///
/// Picks the world axis least aligned with `v` and crosses against it, so the
/// result is well conditioned for every non-zero input.
pub fn any_orthogonal(v: &Vec3) -> Vec3 {
    let abs = v.abs();
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::x()
    } else if abs.y <= abs.z {
        Vec3::y()
    } else {
        Vec3::z()
    };
    v.cross(&axis).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_any_orthogonal_is_unit_and_perpendicular() {
        for v in [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -3.0),
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.2, 5.0, 0.1),
        ] {
            let o = any_orthogonal(&v);
            assert_relative_eq!(o.norm(), 1.0, epsilon = 1e-6);
            assert_relative_eq!(o.dot(&v), 0.0, epsilon = 1e-5);
        }
    }
}
