//! # Vis Mesh
//!
//! Material-aware, procedurally generated triangle meshes for particle and
//! trajectory visualization.
//!
//! ## Features
//!
//! - **Mesh base type**: derive renderer materials once, instantiate posed meshes on demand
//! - **Dynamic materials**: per-cell material records from a colour grid
//! - **Shapes**: sphere, cylinder, torus, arrow and caller-supplied geometry
//! - **Scene configs**: TOML / RON scene descriptions via serde
//!
//! ## Quick Start
//!
//! ```rust
//! use vis_mesh::prelude::*;
//!
//! fn main() -> Result<(), MeshError> {
//!     let mesh = Mesh::builder(Torus::default())
//!         .material(Material::with_colour([0.2, 0.7, 0.3]).alpha(0.9))
//!         .base_direction(Vec3::z())
//!         .build()?;
//!
//!     let positioned = mesh.instantiate_mesh(
//!         &Vec3::new(0.0, 1.0, 0.0),
//!         Some(&Vec3::new(1.0, 0.0, 0.0)),
//!         0,
//!         0,
//!     )?;
//!     assert_eq!(positioned.vertex_count(), 600);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod config;

mod error;

pub use error::{MeshError, MeshResult};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        MeshError, MeshResult,
        foundation::math::{Vec3, Mat3, Point3},
        geometry::{TriangleMesh, rotation_matrix, RotationError},
        material::{Material, ColourField, MaterialRecord, RenderingMaterial, MaterialGrid},
        mesh::{Mesh, MeshBuilder, MeshGeometry, BaseGeometry},
        mesh::shapes::{Sphere, Cylinder, Torus, Arrow, CustomMesh},
        config::{Config, ConfigError, SceneConfig, MeshConfig, ParticleConfig, ShapeConfig},
    };
}
