//! Torus around the z axis

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::{require_resolution, require_positive};
use crate::error::MeshResult;
use crate::foundation::math::Point3;
use crate::geometry::TriangleMesh;
use crate::mesh::MeshGeometry;

/// Torus lying in the xy plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Torus {
    /// Distance from the centre of the torus to the centre of the tube
    pub torus_radius: f32,
    /// Radius of the tube
    pub tube_radius: f32,
    /// Segments around the tube
    pub tubular_resolution: u32,
    /// Segments around the main ring
    pub radial_resolution: u32,
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            torus_radius: 1.0,
            tube_radius: 0.3,
            tubular_resolution: 20,
            radial_resolution: 30,
        }
    }
}

impl Torus {
    /// Create a torus with default resolutions
    pub fn new(torus_radius: f32, tube_radius: f32) -> Self {
        Self {
            torus_radius,
            tube_radius,
            ..Default::default()
        }
    }
}

impl MeshGeometry for Torus {
    fn create_mesh_object(&self) -> MeshResult<TriangleMesh> {
        require_positive("torus_radius", self.torus_radius)?;
        require_positive("tube_radius", self.tube_radius)?;
        require_resolution("tubular_resolution", self.tubular_resolution, 3)?;
        require_resolution("radial_resolution", self.radial_resolution, 3)?;

        let radial = self.radial_resolution;
        let tubular = self.tubular_resolution;

        let mut vertices = Vec::with_capacity((radial * tubular) as usize);
        for i in 0..radial {
            let u = TAU * i as f32 / radial as f32;
            for j in 0..tubular {
                let v = TAU * j as f32 / tubular as f32;
                let ring = self.torus_radius + self.tube_radius * v.cos();
                vertices.push(Point3::new(ring * u.cos(), ring * u.sin(), self.tube_radius * v.sin()));
            }
        }

        let mut triangles = Vec::with_capacity(2 * vertices.len());
        for i in 0..radial {
            let next_i = (i + 1) % radial;
            for j in 0..tubular {
                let next_j = (j + 1) % tubular;
                let a = i * tubular + j;
                let b = next_i * tubular + j;
                let c = next_i * tubular + next_j;
                let d = i * tubular + next_j;
                triangles.push([a, b, c]);
                triangles.push([a, c, d]);
            }
        }

        TriangleMesh::new(vertices, triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use approx::assert_relative_eq;

    #[test]
    fn test_torus_counts() {
        let mesh = Torus::default().create_mesh_object().unwrap();
        assert_eq!(mesh.vertex_count(), 600);
        assert_eq!(mesh.triangle_count(), 1200);
    }

    #[test]
    fn test_torus_vertices_on_tube() {
        let torus = Torus::new(2.0, 0.5);
        let mesh = torus.create_mesh_object().unwrap();
        for vertex in &mesh.vertices {
            let radial = (vertex.x * vertex.x + vertex.y * vertex.y).sqrt();
            let tube_distance = ((radial - 2.0).powi(2) + vertex.z * vertex.z).sqrt();
            assert_relative_eq!(tube_distance, 0.5, epsilon = 1e-5);
        }
        assert_relative_eq!(mesh.center(), Point3::origin(), epsilon = 1e-5);
    }

    #[test]
    fn test_torus_normals_point_away_from_tube_centre() {
        let torus = Torus::new(1.0, 0.25);
        let mut mesh = torus.create_mesh_object().unwrap();
        mesh.compute_vertex_normals();
        for (vertex, normal) in mesh.vertices.iter().zip(&mesh.vertex_normals) {
            let radial = (vertex.x * vertex.x + vertex.y * vertex.y).sqrt();
            let tube_centre = Point3::new(vertex.x / radial, vertex.y / radial, 0.0);
            assert!(normal.dot(&(vertex - tube_centre)) > 0.0);
        }
    }

    #[test]
    fn test_torus_rejects_bad_parameters() {
        assert!(Torus::new(1.0, -0.1).create_mesh_object().is_err());
        let torus = Torus {
            radial_resolution: 2,
            ..Default::default()
        };
        assert!(torus.create_mesh_object().is_err());
    }

    #[test]
    fn test_torus_rejects_oversized_resolution() {
        let torus = Torus {
            radial_resolution: 70_000,
            tubular_resolution: 70_000,
            ..Default::default()
        };
        assert!(matches!(
            torus.create_mesh_object(),
            Err(MeshError::InvalidParameter { name: "tubular_resolution", .. })
        ));
    }
}
