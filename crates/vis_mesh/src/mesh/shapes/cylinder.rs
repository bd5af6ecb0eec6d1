//! Capped cylinder along the z axis

use serde::{Deserialize, Serialize};

use super::{fan_above, fan_below, push_ring, require_resolution, require_positive, stitch_rings};
use crate::error::MeshResult;
use crate::foundation::math::Point3;
use crate::geometry::TriangleMesh;
use crate::mesh::MeshGeometry;

/// Cylinder spanning `-height / 2 ..= height / 2` along z
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cylinder {
    /// Radius of the circular cross section
    pub radius: f32,
    /// Length along z
    pub height: f32,
    /// Vertices per ring
    pub resolution: u32,
    /// Number of bands along the height
    pub split: u32,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            radius: 1.0,
            height: 2.0,
            resolution: 20,
            split: 4,
        }
    }
}

impl Cylinder {
    /// Create a cylinder with the default band split
    pub fn new(radius: f32, height: f32, resolution: u32) -> Self {
        Self {
            radius,
            height,
            resolution,
            ..Default::default()
        }
    }

    /// Builder pattern: set the band split
    pub fn with_split(mut self, split: u32) -> Self {
        self.split = split;
        self
    }
}

/// Side wall and both caps of a cylinder whose top sits at `top` and bottom at `top - height`
pub(super) fn build_cylinder(
    vertices: &mut Vec<Point3>,
    triangles: &mut Vec<[u32; 3]>,
    radius: f32,
    height: f32,
    top: f32,
    resolution: u32,
    split: u32,
) {
    #[allow(clippy::cast_possible_truncation)]
    let top_centre = vertices.len() as u32;
    vertices.push(Point3::new(0.0, 0.0, top));
    vertices.push(Point3::new(0.0, 0.0, top - height));
    let bottom_centre = top_centre + 1;

    let rings: Vec<u32> = (0..=split)
        .map(|i| {
            let z = top - height * i as f32 / split as f32;
            push_ring(vertices, radius, z, resolution)
        })
        .collect();

    fan_above(triangles, top_centre, rings[0], resolution);
    for pair in rings.windows(2) {
        stitch_rings(triangles, pair[0], pair[1], resolution);
    }
    fan_below(triangles, bottom_centre, rings[rings.len() - 1], resolution);
}

impl MeshGeometry for Cylinder {
    fn create_mesh_object(&self) -> MeshResult<TriangleMesh> {
        require_positive("radius", self.radius)?;
        require_positive("height", self.height)?;
        require_resolution("resolution", self.resolution, 3)?;
        require_resolution("split", self.split, 1)?;

        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        build_cylinder(
            &mut vertices,
            &mut triangles,
            self.radius,
            self.height,
            self.height / 2.0,
            self.resolution,
            self.split,
        );

        TriangleMesh::new(vertices, triangles)
    }
}
