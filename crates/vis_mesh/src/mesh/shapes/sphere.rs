//! UV sphere

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::{fan_above, fan_below, push_ring, require_resolution, require_positive, stitch_rings};
use crate::error::MeshResult;
use crate::foundation::math::Point3;
use crate::geometry::TriangleMesh;
use crate::mesh::MeshGeometry;

/// Sphere made of `2 * resolution - 1` latitude rings of `2 * resolution` vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sphere {
    /// Sphere radius
    pub radius: f32,
    /// Subdivision level; the pole-to-pole arc is cut into `2 * resolution` bands
    pub resolution: u32,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            radius: 1.0,
            resolution: 10,
        }
    }
}

impl Sphere {
    /// Create a sphere
    pub fn new(radius: f32, resolution: u32) -> Self {
        Self { radius, resolution }
    }
}

impl MeshGeometry for Sphere {
    fn create_mesh_object(&self) -> MeshResult<TriangleMesh> {
        require_positive("radius", self.radius)?;
        require_resolution("resolution", self.resolution, 1)?;

        let segments = 2 * self.resolution;
        let mut vertices = vec![
            Point3::new(0.0, 0.0, self.radius),
            Point3::new(0.0, 0.0, -self.radius),
        ];
        let mut triangles = Vec::new();

        let mut rings = Vec::with_capacity(segments as usize - 1);
        for i in 1..segments {
            let phi = PI * i as f32 / segments as f32;
            rings.push(push_ring(
                &mut vertices,
                self.radius * phi.sin(),
                self.radius * phi.cos(),
                segments,
            ));
        }

        fan_above(&mut triangles, 0, rings[0], segments);
        for pair in rings.windows(2) {
            stitch_rings(&mut triangles, pair[0], pair[1], segments);
        }
        fan_below(&mut triangles, 1, rings[rings.len() - 1], segments);

        TriangleMesh::new(vertices, triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_counts() {
        let mesh = Sphere::default().create_mesh_object().unwrap();
        assert_eq!(mesh.vertex_count(), 2 + 19 * 20);
        assert_eq!(mesh.triangle_count(), 4 * 10 * 19);
    }

    #[test]
    fn test_sphere_vertices_on_surface_and_centred() {
        let sphere = Sphere::new(2.5, 6);
        let mesh = sphere.create_mesh_object().unwrap();
        for vertex in &mesh.vertices {
            assert_relative_eq!(vertex.coords.norm(), 2.5, epsilon = 1e-5);
        }
        assert_relative_eq!(mesh.center(), Point3::origin(), epsilon = 1e-5);
    }

    #[test]
    fn test_sphere_normals_point_outward() {
        let mut mesh = Sphere::new(1.0, 8).create_mesh_object().unwrap();
        mesh.compute_vertex_normals();
        for (vertex, normal) in mesh.vertices.iter().zip(&mesh.vertex_normals) {
            assert!(normal.dot(&vertex.coords) > 0.9);
        }
    }

    #[test]
    fn test_sphere_rejects_bad_parameters() {
        assert!(matches!(
            Sphere::new(0.0, 10).create_mesh_object(),
            Err(MeshError::InvalidParameter { name: "radius", .. })
        ));
        assert!(matches!(
            Sphere::new(1.0, 0).create_mesh_object(),
            Err(MeshError::InvalidParameter { name: "resolution", .. })
        ));
    }

    #[test]
    fn test_sphere_rejects_oversized_resolution() {
        assert!(matches!(
            Sphere::new(1.0, u32::MAX / 2 + 1).create_mesh_object(),
            Err(MeshError::InvalidParameter { name: "resolution", .. })
        ));
    }
}
