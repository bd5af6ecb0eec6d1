//! Arrow: cylindrical shaft with a conical head pointing along +z

use serde::{Deserialize, Serialize};

use super::cylinder::build_cylinder;
use super::{fan_above, fan_below, push_ring, require_resolution, require_positive, stitch_rings};
use crate::error::MeshResult;
use crate::foundation::math::Point3;
use crate::geometry::TriangleMesh;
use crate::mesh::MeshGeometry;

/// Arrow whose shaft and head lie along +z, recentred on its vertex centroid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arrow {
    /// Shaft radius
    pub cylinder_radius: f32,
    /// Radius of the head's base
    pub cone_radius: f32,
    /// Shaft length
    pub cylinder_height: f32,
    /// Head length
    pub cone_height: f32,
    /// Vertices per ring
    pub resolution: u32,
    /// Bands along the shaft
    pub cylinder_split: u32,
    /// Bands along the head
    pub cone_split: u32,
}

impl Default for Arrow {
    fn default() -> Self {
        Self {
            cylinder_radius: 1.0,
            cone_radius: 1.5,
            cylinder_height: 5.0,
            cone_height: 4.0,
            resolution: 20,
            cylinder_split: 4,
            cone_split: 1,
        }
    }
}

impl Arrow {
    /// Create an arrow with default resolution and splits
    pub fn new(cylinder_radius: f32, cone_radius: f32, cylinder_height: f32, cone_height: f32) -> Self {
        Self {
            cylinder_radius,
            cone_radius,
            cylinder_height,
            cone_height,
            ..Default::default()
        }
    }
}

/// Cone with its base ring at `base` and apex at `base + height`
fn build_cone(
    vertices: &mut Vec<Point3>,
    triangles: &mut Vec<[u32; 3]>,
    radius: f32,
    height: f32,
    base: f32,
    resolution: u32,
    split: u32,
) {
    #[allow(clippy::cast_possible_truncation)]
    let base_centre = vertices.len() as u32;
    vertices.push(Point3::new(0.0, 0.0, base));
    vertices.push(Point3::new(0.0, 0.0, base + height));
    let apex = base_centre + 1;

    let rings: Vec<u32> = (0..split)
        .map(|i| {
            let t = i as f32 / split as f32;
            push_ring(vertices, radius * (1.0 - t), base + height * t, resolution)
        })
        .collect();

    fan_below(triangles, base_centre, rings[0], resolution);
    for pair in rings.windows(2) {
        stitch_rings(triangles, pair[1], pair[0], resolution);
    }
    fan_above(triangles, apex, rings[rings.len() - 1], resolution);
}

impl MeshGeometry for Arrow {
    fn create_mesh_object(&self) -> MeshResult<TriangleMesh> {
        require_positive("cylinder_radius", self.cylinder_radius)?;
        require_positive("cone_radius", self.cone_radius)?;
        require_positive("cylinder_height", self.cylinder_height)?;
        require_positive("cone_height", self.cone_height)?;
        require_resolution("resolution", self.resolution, 3)?;
        require_resolution("cylinder_split", self.cylinder_split, 1)?;
        require_resolution("cone_split", self.cone_split, 1)?;

        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        build_cylinder(
            &mut vertices,
            &mut triangles,
            self.cylinder_radius,
            self.cylinder_height,
            self.cylinder_height,
            self.resolution,
            self.cylinder_split,
        );
        let mut mesh = TriangleMesh::new(vertices, triangles)?;

        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        build_cone(
            &mut vertices,
            &mut triangles,
            self.cone_radius,
            self.cone_height,
            self.cylinder_height,
            self.resolution,
            self.cone_split,
        );
        mesh.merge(&TriangleMesh::new(vertices, triangles)?);

        let offset = -mesh.center().coords;
        mesh.translate(&offset);
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_head_indices_follow_shaft_vertices() {
        let arrow = Arrow::default();
        let mesh = arrow.create_mesh_object().unwrap();
        let shaft_vertices = 2 + 20 * 5;
        let shaft_triangles = 2 * 20 + 2 * 20 * 4;
        assert!(mesh.triangles[shaft_triangles..]
            .iter()
            .flatten()
            .all(|&i| i as usize >= shaft_vertices && (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_arrow_counts() {
        let mesh = Arrow::default().create_mesh_object().unwrap();
        let cylinder_vertices = 2 + 20 * 5;
        let cone_vertices = 2 + 20;
        assert_eq!(mesh.vertex_count(), cylinder_vertices + cone_vertices);
        assert_eq!(mesh.triangle_count(), (2 * 20 + 2 * 20 * 4) + 2 * 20);
    }

    #[test]
    fn test_arrow_is_centred_and_points_up() {
        let mut mesh = Arrow::new(0.1, 0.2, 1.0, 0.5).create_mesh_object().unwrap();
        assert_relative_eq!(mesh.center(), Point3::origin(), epsilon = 1e-5);

        let tip = mesh
            .vertices
            .iter()
            .copied()
            .fold(Point3::new(0.0, 0.0, f32::MIN), |best, v| if v.z > best.z { v } else { best });
        assert_relative_eq!(tip.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(tip.y, 0.0, epsilon = 1e-6);

        mesh.compute_vertex_normals();
        assert!(mesh.has_vertex_normals());
    }

    #[test]
    fn test_multi_band_cone() {
        let arrow = Arrow {
            cone_split: 3,
            resolution: 8,
            ..Default::default()
        };
        let mesh = arrow.create_mesh_object().unwrap();
        assert_eq!(mesh.vertex_count(), (2 + 8 * 5) + (2 + 8 * 3));
    }

    #[test]
    fn test_arrow_rejects_bad_parameters() {
        assert!(Arrow::new(0.0, 1.0, 1.0, 1.0).create_mesh_object().is_err());
        let arrow = Arrow {
            cone_split: 0,
            ..Default::default()
        };
        assert!(arrow.create_mesh_object().is_err());
    }
}
