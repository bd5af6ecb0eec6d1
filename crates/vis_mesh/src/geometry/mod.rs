//! Geometry primitives: triangle meshes and rotation construction

pub mod triangle_mesh;
pub mod rotation;

pub use triangle_mesh::TriangleMesh;
pub use rotation::{rotation_matrix, RotationError};
