//! Triangle mesh geometry
//!
//! Backend-agnostic container of vertex positions, triangle indices and
//! per-vertex normals. Every transform works in place on owned data, so two
//! meshes never share vertex storage.

use crate::error::{MeshError, MeshResult};
use crate::foundation::math::{Mat3, Point3, Vec3, LENGTH_EPSILON};

/// Triangle mesh with optional per-vertex normals
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TriangleMesh {
    /// Vertex positions
    pub vertices: Vec<Point3>,

    /// Triangles as counter-clockwise vertex index triples
    pub triangles: Vec<[u32; 3]>,

    /// Per-vertex normals; empty until [`TriangleMesh::compute_vertex_normals`] runs
    pub vertex_normals: Vec<Vec3>,
}

impl TriangleMesh {
    /// Create a mesh, validating that every triangle index refers to a vertex
    ///
    /// # Errors
    /// [`MeshError::Geometry`] if a triangle references a missing vertex.
    pub fn new(vertices: Vec<Point3>, triangles: Vec<[u32; 3]>) -> MeshResult<Self> {
        let vertex_count = vertices.len();
        if let Some(bad) = triangles
            .iter()
            .find(|tri| tri.iter().any(|&i| i as usize >= vertex_count))
        {
            return Err(MeshError::Geometry(format!(
                "triangle {bad:?} references a vertex outside 0..{vertex_count}"
            )));
        }

        Ok(Self {
            vertices,
            triangles,
            vertex_normals: Vec::new(),
        })
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether normals have been computed for every vertex
    pub fn has_vertex_normals(&self) -> bool {
        !self.vertices.is_empty() && self.vertex_normals.len() == self.vertices.len()
    }

    /// Mean of the vertex positions; the origin for an empty mesh
    pub fn center(&self) -> Point3 {
        if self.vertices.is_empty() {
            return Point3::origin();
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::zeros(), |acc, v| acc + v.coords);
        Point3::from(sum / self.vertices.len() as f32)
    }

    /// Compute area-weighted vertex normals from the triangle topology
    ///
    /// Degenerate triangles contribute nothing. Vertices that belong to no
    /// usable triangle keep a zero normal.
    pub fn compute_vertex_normals(&mut self) -> &mut Self {
        let mut normals = vec![Vec3::zeros(); self.vertices.len()];
        let mut degenerate = 0usize;

        for tri in &self.triangles {
            let [a, b, c] = tri.map(|i| i as usize);
            let edge1 = self.vertices[b] - self.vertices[a];
            let edge2 = self.vertices[c] - self.vertices[a];
            // Cross product length is twice the area, which gives the weighting
            let face_normal = edge1.cross(&edge2);
            if face_normal.norm() < LENGTH_EPSILON {
                degenerate += 1;
                continue;
            }
            normals[a] += face_normal;
            normals[b] += face_normal;
            normals[c] += face_normal;
        }

        if degenerate > 0 {
            log::warn!("Skipped {degenerate} degenerate triangles while computing normals");
        }

        for normal in &mut normals {
            let len = normal.norm();
            if len > LENGTH_EPSILON {
                *normal /= len;
            }
        }

        self.vertex_normals = normals;
        self
    }

    /// Translate every vertex by `offset`
    pub fn translate(&mut self, offset: &Vec3) -> &mut Self {
        for vertex in &mut self.vertices {
            *vertex += *offset;
        }
        self
    }

    /// Rotate about `center` by `rotation`; normals are rotated with the vertices
    pub fn rotate(&mut self, rotation: &Mat3, center: &Point3) -> &mut Self {
        for vertex in &mut self.vertices {
            *vertex = center + rotation * (*vertex - center);
        }
        for normal in &mut self.vertex_normals {
            *normal = rotation * *normal;
        }
        self
    }

    /// Uniformly scale about `center`
    pub fn scale(&mut self, factor: f32, center: &Point3) -> &mut Self {
        for vertex in &mut self.vertices {
            *vertex = center + (*vertex - center) * factor;
        }
        if factor < 0.0 {
            for normal in &mut self.vertex_normals {
                *normal = -*normal;
            }
        }
        self
    }

    /// Append another mesh, offsetting its triangle indices
    ///
    /// Normals are kept only if both meshes carry them.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        let keep_normals = self.has_vertex_normals() && other.has_vertex_normals();
        // Vertex counts of generated shapes stay far below u32::MAX
        #[allow(clippy::cast_possible_truncation)]
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| tri.map(|i| i + offset)),
        );

        if keep_normals {
            self.vertex_normals.extend_from_slice(&other.vertex_normals);
        } else {
            self.vertex_normals.clear();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Rotation3;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    /// Unit tetrahedron with outward-facing winding
    fn tetrahedron() -> TriangleMesh {
        TriangleMesh::new(
            vec![
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(1.0, -1.0, -1.0),
                Point3::new(-1.0, 1.0, -1.0),
                Point3::new(-1.0, -1.0, 1.0),
            ],
            vec![[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range_index() {
        let result = TriangleMesh::new(vec![Point3::origin(); 2], vec![[0, 1, 2]]);
        assert!(matches!(result, Err(MeshError::Geometry(_))));
    }

    #[test]
    fn test_vertex_normals_point_outward() {
        let mut mesh = tetrahedron();
        assert!(!mesh.has_vertex_normals());
        mesh.compute_vertex_normals();
        assert!(mesh.has_vertex_normals());

        for (vertex, normal) in mesh.vertices.iter().zip(&mesh.vertex_normals) {
            assert_relative_eq!(normal.norm(), 1.0, epsilon = EPSILON);
            assert_relative_eq!(*normal, vertex.coords.normalize(), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_degenerate_triangle_skipped() {
        let mut mesh = TriangleMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap();
        mesh.compute_vertex_normals();
        assert!(mesh.vertex_normals.iter().all(|n| *n == Vec3::zeros()));
    }

    #[test]
    fn test_translate_moves_center() {
        let mut mesh = tetrahedron();
        let offset = Vec3::new(3.0, -2.0, 0.5);
        mesh.translate(&offset);
        assert_relative_eq!(mesh.center(), Point3::from(offset), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_about_center_keeps_center_and_rotates_normals() {
        let mut mesh = tetrahedron();
        mesh.compute_vertex_normals();
        mesh.translate(&Vec3::new(1.0, 2.0, 3.0));
        let center = mesh.center();

        let rotation = Rotation3::from_axis_angle(&Vec3::z_axis(), FRAC_PI_2).into_inner();
        let normal_before = mesh.vertex_normals[0];
        mesh.rotate(&rotation, &center);

        assert_relative_eq!(mesh.center(), center, epsilon = EPSILON);
        assert_relative_eq!(
            mesh.vertex_normals[0],
            Vec3::new(-normal_before.y, normal_before.x, normal_before.z),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_scale_about_center() {
        let mut mesh = tetrahedron();
        mesh.scale(2.0, &Point3::origin());
        assert_relative_eq!(mesh.vertices[0], Point3::new(2.0, 2.0, 2.0), epsilon = EPSILON);
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut mesh = tetrahedron();
        let other = tetrahedron();
        mesh.merge(&other);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.triangles[4], [4, 5, 6]);
    }

    #[test]
    fn test_empty_mesh_center_is_origin() {
        assert_eq!(TriangleMesh::default().center(), Point3::origin());
    }
}
