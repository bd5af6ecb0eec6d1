//! Renderer-facing material record

use serde::{Deserialize, Serialize};

use super::Material;

/// Shader for lit surfaces with alpha blending
pub const DEFAULT_LIT_TRANSPARENCY_SHADER: &str = "defaultLitTransparency";

/// Shader of a record nobody has configured yet
pub const DEFAULT_UNLIT_SHADER: &str = "defaultUnlit";

/// Shading parameters handed to the renderer for one surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// RGBA base colour
    pub base_color: [f32; 4],
    /// Shader identifier
    pub shader: String,
    /// Metallic factor
    pub base_metallic: f32,
    /// Roughness factor
    pub base_roughness: f32,
    /// Reflectance factor
    pub base_reflectance: f32,
    /// Anisotropy factor
    pub base_anisotropy: f32,
}

impl Default for MaterialRecord {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0, 1.0],
            shader: DEFAULT_UNLIT_SHADER.to_string(),
            base_metallic: 0.0,
            base_roughness: 1.0,
            base_reflectance: 0.5,
            base_anisotropy: 0.0,
        }
    }
}

impl MaterialRecord {
    /// Lit, alpha-blended record for `rgb` using the scalar properties of `material`
    pub fn lit_transparent(rgb: [f32; 3], material: &Material) -> Self {
        let [r, g, b] = rgb;
        Self {
            base_color: [r, g, b, material.alpha],
            shader: DEFAULT_LIT_TRANSPARENCY_SHADER.to_string(),
            base_metallic: material.metallic,
            base_roughness: material.roughness,
            base_reflectance: material.reflectance,
            base_anisotropy: material.anisotropy,
        }
    }

    /// RGB part of the base colour
    pub fn rgb(&self) -> [f32; 3] {
        let [r, g, b, _] = self.base_color;
        [r, g, b]
    }

    /// Alpha part of the base colour
    pub fn alpha(&self) -> f32 {
        self.base_color[3]
    }
}
