//! Scene configuration: which meshes exist and where their particles go

use serde::{Deserialize, Serialize};

use super::Config;
use crate::error::MeshResult;
use crate::foundation::math::Vec3;
use crate::material::Material;
use crate::mesh::shapes::{Arrow, Cylinder, Sphere, Torus};
use crate::mesh::{default_base_direction, Mesh, MeshGeometry};

/// Shape selection with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeConfig {
    /// UV sphere
    Sphere(Sphere),
    /// Capped cylinder
    Cylinder(Cylinder),
    /// Torus
    Torus(Torus),
    /// Arrow
    Arrow(Arrow),
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self::Sphere(Sphere::default())
    }
}

impl ShapeConfig {
    /// Boxed geometry for this shape
    pub fn to_geometry(&self) -> Box<dyn MeshGeometry> {
        match *self {
            Self::Sphere(sphere) => Box::new(sphere),
            Self::Cylinder(cylinder) => Box::new(cylinder),
            Self::Torus(torus) => Box::new(torus),
            Self::Arrow(arrow) => Box::new(arrow),
        }
    }
}

/// One mesh type in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    /// Name used in logs and to bind particles
    pub name: String,
    /// Shape and its parameters
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Surface material
    #[serde(default)]
    pub material: Material,
    /// Intrinsic forward axis of the shape
    #[serde(default = "default_base_direction")]
    pub base_direction: Vec3,
    /// Per-cell materials from a colour grid
    #[serde(default)]
    pub dynamic_material: bool,
}

impl MeshConfig {
    /// Build the configured mesh
    ///
    /// # Errors
    /// See [`Mesh::new`].
    pub fn build(&self) -> MeshResult<Mesh<Box<dyn MeshGeometry>>> {
        Mesh::new(
            self.shape.to_geometry(),
            self.material.clone(),
            self.base_direction,
            self.dynamic_material,
        )
    }
}

/// A particle drawn with one of the scene's meshes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Name of the [`MeshConfig`] to draw with
    pub mesh: String,
    /// Position at step 0
    pub position: Vec3,
    /// Displacement applied per step
    #[serde(default = "Vec3::zeros")]
    pub velocity: Vec3,
    /// Orientation; `None` keeps the canonical pose
    #[serde(default)]
    pub orientation: Option<Vec3>,
}

impl ParticleConfig {
    /// Position after `step` steps
    pub fn position_at(&self, step: usize) -> Vec3 {
        self.position + self.velocity * step as f32
    }
}

/// Complete scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Number of time steps to instantiate
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Mesh types
    #[serde(default)]
    pub meshes: Vec<MeshConfig>,
    /// Particles to place
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
}

const fn default_steps() -> usize {
    1
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            steps: 3,
            meshes: vec![
                MeshConfig {
                    name: "sphere".to_string(),
                    shape: ShapeConfig::Sphere(Sphere::new(0.5, 10)),
                    material: Material::with_colour([0.9, 0.2, 0.2]).alpha(0.8),
                    base_direction: default_base_direction(),
                    dynamic_material: false,
                },
                MeshConfig {
                    name: "arrow".to_string(),
                    shape: ShapeConfig::Arrow(Arrow::new(0.05, 0.1, 0.6, 0.3)),
                    material: Material::with_colour([0.2, 0.4, 0.9]).metallic(0.5),
                    base_direction: Vec3::z(),
                    dynamic_material: false,
                },
            ],
            particles: vec![
                ParticleConfig {
                    mesh: "sphere".to_string(),
                    position: Vec3::zeros(),
                    velocity: Vec3::new(0.1, 0.0, 0.0),
                    orientation: None,
                },
                ParticleConfig {
                    mesh: "arrow".to_string(),
                    position: Vec3::new(1.0, 1.0, 0.0),
                    velocity: Vec3::zeros(),
                    orientation: Some(Vec3::new(1.0, 0.0, 0.0)),
                },
            ],
        }
    }
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Mesh configuration by name
    pub fn mesh(&self, name: &str) -> Option<&MeshConfig> {
        self.meshes.iter().find(|mesh| mesh.name == name)
    }
}
