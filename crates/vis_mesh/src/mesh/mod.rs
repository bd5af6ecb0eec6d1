//! Procedurally instantiated meshes
//!
//! A [`Mesh`] pairs a material with a geometry factory. Construction derives
//! the renderer materials once; [`Mesh::instantiate_mesh`] then produces a
//! fresh, independently owned [`TriangleMesh`] at a requested pose as often as
//! the caller needs.
//!
//! Shapes plug in through [`MeshGeometry`]:
//!
//! ```rust
//! use vis_mesh::prelude::*;
//!
//! let mesh = Mesh::builder(Sphere::new(0.5, 12))
//!     .material(Material::with_colour([1.0, 0.0, 0.0]).alpha(0.5))
//!     .build()?;
//!
//! let instance = mesh.instantiate_mesh(&Vec3::new(1.0, 2.0, 3.0), None, 0, 0)?;
//! assert!(instance.has_vertex_normals());
//! # Ok::<(), vis_mesh::MeshError>(())
//! ```

pub mod shapes;


use std::fmt::Debug;

use crate::error::{MeshError, MeshResult};
use crate::foundation::logging::{debug, trace};
use crate::foundation::math::Vec3;
use crate::geometry::{rotation_matrix, TriangleMesh};
use crate::material::{Material, RenderingMaterial};

/// Geometry factory hook implemented by every concrete shape
pub trait MeshGeometry: Debug + Send + Sync {
    /// Produce a fresh mesh in canonical pose, centred at the origin
    ///
    /// The provided implementation has no geometry to offer and fails.
    ///
    /// # Errors
    /// [`MeshError::NotImplemented`] unless a shape overrides this method;
    /// shapes report invalid parameters as [`MeshError::InvalidParameter`].
    fn create_mesh_object(&self) -> MeshResult<TriangleMesh> {
        Err(MeshError::NotImplemented)
    }
}

impl<G: MeshGeometry + ?Sized> MeshGeometry for Box<G> {
    fn create_mesh_object(&self) -> MeshResult<TriangleMesh> {
        (**self).create_mesh_object()
    }
}

/// Placeholder geometry for a mesh without a shape
///
/// Relies on the default hook, so instantiating it always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseGeometry;

impl MeshGeometry for BaseGeometry {}

/// Intrinsic forward axis used when none is given
pub fn default_base_direction() -> Vec3 {
    Vec3::new(1.0, 0.0, 0.0)
}

/// Material-bearing mesh that can be instantiated at arbitrary poses
#[derive(Debug, Clone)]
pub struct Mesh<G: MeshGeometry> {
    geometry: G,
    material: Material,
    base_direction: Vec3,
    dynamic_material: bool,
    rendering_material: RenderingMaterial,
}

impl<G: MeshGeometry> Mesh<G> {
    /// Create a mesh and derive its rendering material
    ///
    /// # Errors
    /// [`MeshError::ShapeMismatch`] if the colour field does not fit
    /// `dynamic_material`.
    pub fn new(
        geometry: G,
        material: Material,
        base_direction: Vec3,
        dynamic_material: bool,
    ) -> MeshResult<Self> {
        let rendering_material = RenderingMaterial::from_material(&material, dynamic_material)?;
        debug!(
            "Created {} mesh with {} material record(s), grid shape {:?}",
            std::any::type_name::<G>(),
            rendering_material.record_count(),
            rendering_material.shape()
        );

        Ok(Self {
            geometry,
            material,
            base_direction,
            dynamic_material,
            rendering_material,
        })
    }

    /// Start a builder with default material and base direction
    pub fn builder(geometry: G) -> MeshBuilder<G> {
        MeshBuilder::new(geometry)
    }

    /// Shape that generates this mesh's geometry
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Material the mesh was built from
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intrinsic forward axis in the mesh's local frame
    pub fn base_direction(&self) -> &Vec3 {
        &self.base_direction
    }

    /// Whether per-cell materials are in use
    pub fn dynamic_material(&self) -> bool {
        self.dynamic_material
    }

    /// Renderer materials derived at construction
    pub fn rendering_material(&self) -> &RenderingMaterial {
        &self.rendering_material
    }

    /// Generate the canonical geometry
    ///
    /// # Errors
    /// Whatever the shape's hook returns.
    pub fn create_mesh_object(&self) -> MeshResult<TriangleMesh> {
        self.geometry.create_mesh_object()
    }

    /// Produce a positioned, oriented triangle mesh
    ///
    /// Normals are computed on the canonical geometry, the mesh is translated
    /// to `starting_position`, and if `starting_orientation` is given it is
    /// rotated about its centre so `base_direction` points along it.
    /// `step` and `particle_id` are reserved for shapes and drivers that vary
    /// geometry over time or per object.
    ///
    /// # Errors
    /// Errors from the geometry hook and from the rotation utility are
    /// returned unchanged.
    pub fn instantiate_mesh(
        &self,
        starting_position: &Vec3,
        starting_orientation: Option<&Vec3>,
        step: usize,
        particle_id: usize,
    ) -> MeshResult<TriangleMesh> {
        trace!("Instantiating mesh for particle {particle_id} at step {step}");

        let mut mesh = self.create_mesh_object()?;
        mesh.compute_vertex_normals();
        mesh.translate(starting_position);

        if let Some(orientation) = starting_orientation {
            let matrix = rotation_matrix(&self.base_direction, orientation)?;
            let center = mesh.center();
            mesh.rotate(&matrix, &center);
        }

        Ok(mesh)
    }
}

/// Builder for [`Mesh`] with the usual defaults
#[derive(Debug, Clone)]
pub struct MeshBuilder<G: MeshGeometry> {
    geometry: G,
    material: Material,
    base_direction: Vec3,
    dynamic_material: bool,
}

impl<G: MeshGeometry> MeshBuilder<G> {
    /// Builder with default material, `(1, 0, 0)` base direction and a static material
    pub fn new(geometry: G) -> Self {
        Self {
            geometry,
            material: Material::default(),
            base_direction: default_base_direction(),
            dynamic_material: false,
        }
    }

    /// Set the material
    pub fn material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Set the intrinsic forward axis
    pub fn base_direction(mut self, base_direction: Vec3) -> Self {
        self.base_direction = base_direction;
        self
    }

    /// Select per-cell materials
    pub fn dynamic_material(mut self, dynamic_material: bool) -> Self {
        self.dynamic_material = dynamic_material;
        self
    }

    /// Build the mesh
    ///
    /// # Errors
    /// See [`Mesh::new`].
    pub fn build(self) -> MeshResult<Mesh<G>> {
        Mesh::new(
            self.geometry,
            self.material,
            self.base_direction,
            self.dynamic_material,
        )
    }
}
