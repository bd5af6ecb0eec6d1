//! Caller-supplied geometry

use crate::error::{MeshError, MeshResult};
use crate::foundation::math::Point3;
use crate::geometry::TriangleMesh;
use crate::mesh::MeshGeometry;

/// Wraps an existing triangle mesh
///
/// Each instantiation works on a clone, recentred on the origin and scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomMesh {
    /// Source geometry in any pose
    pub mesh: TriangleMesh,
    /// Uniform scale applied after recentring
    pub scale: f32,
}

impl CustomMesh {
    /// Wrap `mesh` at unit scale
    pub fn new(mesh: TriangleMesh) -> Self {
        Self { mesh, scale: 1.0 }
    }

    /// Builder pattern: set the scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl MeshGeometry for CustomMesh {
    fn create_mesh_object(&self) -> MeshResult<TriangleMesh> {
        if self.mesh.vertices.is_empty() {
            return Err(MeshError::Geometry("custom mesh has no vertices".to_string()));
        }
        super::require_positive("scale", self.scale)?;

        // Fields are public, so the source may never have been index-checked.
        // Rebuilding also drops normals that would not match the rescaled geometry.
        let mut mesh = TriangleMesh::new(self.mesh.vertices.clone(), self.mesh.triangles.clone())?;
        let offset = -mesh.center().coords;
        mesh.translate(&offset);
        mesh.scale(self.scale, &Point3::origin());
        Ok(mesh)
    }
}
