//! Concrete mesh shapes
//!
//! Every shape generates its geometry centred at the origin. Round shapes are
//! built from rings of vertices around the z axis; the helpers below stitch
//! those rings into outward-facing triangles.

pub mod arrow;
pub mod custom;
pub mod cylinder;
pub mod sphere;
pub mod torus;

pub use arrow::Arrow;
pub use custom::CustomMesh;
pub use cylinder::Cylinder;
pub use sphere::Sphere;
pub use torus::Torus;

use std::f32::consts::TAU;

use crate::error::{MeshError, MeshResult};
use crate::foundation::math::Point3;

/// Reject non-positive or non-finite lengths
pub(crate) fn require_positive(name: &'static str, value: f32) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidParameter {
            name,
            reason: format!("must be a positive finite number, got {value}"),
        })
    }
}

/// Upper bound on any resolution or split count
///
/// Keeps every vertex index of the largest shape (two such counts multiplied,
/// times the sphere's factor of four) inside `u32`.
pub const MAX_RESOLUTION: u32 = 4096;

/// Reject counts outside `min..=MAX_RESOLUTION`
pub(crate) fn require_resolution(name: &'static str, value: u32, min: u32) -> MeshResult<()> {
    if (min..=MAX_RESOLUTION).contains(&value) {
        Ok(())
    } else {
        Err(MeshError::InvalidParameter {
            name,
            reason: format!("must be between {min} and {MAX_RESOLUTION}, got {value}"),
        })
    }
}

/// Push a ring of `segments` vertices at height `z`; returns the index of its first vertex
fn push_ring(vertices: &mut Vec<Point3>, radius: f32, z: f32, segments: u32) -> u32 {
    #[allow(clippy::cast_possible_truncation)]
    let start = vertices.len() as u32;
    for j in 0..segments {
        let theta = TAU * j as f32 / segments as f32;
        vertices.push(Point3::new(radius * theta.cos(), radius * theta.sin(), z));
    }
    start
}

/// Fan from `apex` down to a ring below it
fn fan_above(triangles: &mut Vec<[u32; 3]>, apex: u32, ring: u32, segments: u32) {
    for j in 0..segments {
        triangles.push([apex, ring + j, ring + (j + 1) % segments]);
    }
}

/// Fan from `apex` to a ring above it
fn fan_below(triangles: &mut Vec<[u32; 3]>, apex: u32, ring: u32, segments: u32) {
    for j in 0..segments {
        triangles.push([apex, ring + (j + 1) % segments, ring + j]);
    }
}

/// Quad strip between an upper and a lower ring of equal size
fn stitch_rings(triangles: &mut Vec<[u32; 3]>, upper: u32, lower: u32, segments: u32) {
    for j in 0..segments {
        let next = (j + 1) % segments;
        triangles.push([upper + j, lower + j, lower + next]);
        triangles.push([upper + j, lower + next, upper + next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_checks() {
        assert!(require_positive("radius", 1.0).is_ok());
        assert!(require_positive("radius", 0.0).is_err());
        assert!(require_positive("radius", f32::NAN).is_err());
        assert!(require_resolution("resolution", 3, 3).is_ok());
        assert!(require_resolution("resolution", MAX_RESOLUTION, 3).is_ok());
        assert!(matches!(
            require_resolution("resolution", 2, 3),
            Err(MeshError::InvalidParameter { name: "resolution", .. })
        ));
        assert!(matches!(
            require_resolution("split", MAX_RESOLUTION + 1, 1),
            Err(MeshError::InvalidParameter { name: "split", .. })
        ));
    }

    #[test]
    fn test_stitched_ring_indices_wrap() {
        let mut triangles = Vec::new();
        stitch_rings(&mut triangles, 0, 4, 4);
        assert_eq!(triangles.len(), 8);
        assert_eq!(triangles[6], [3, 7, 4]);
        assert_eq!(triangles[7], [3, 4, 0]);
    }
}
