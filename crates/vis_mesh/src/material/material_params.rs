//! Material description consumed by meshes

use serde::{Deserialize, Serialize};

/// Surface colour: one RGB triple, or a row-major grid of them
///
/// The grid form drives per-cell materials; each inner vector is one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColourField {
    /// Single RGB colour for the whole mesh
    Uniform([f32; 3]),
    /// Grid of RGB colours indexed `[row][col]`
    Grid(Vec<Vec<[f32; 3]>>),
}

impl ColourField {
    /// Human readable shape, used in error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Uniform(_) => "single RGB colour".to_string(),
            Self::Grid(rows) => {
                let cols: Vec<usize> = rows.iter().map(Vec::len).collect();
                format!("colour grid with row lengths {cols:?}")
            }
        }
    }
}

impl Default for ColourField {
    fn default() -> Self {
        Self::Uniform([0.59, 0.63, 0.67])
    }
}

impl From<[f32; 3]> for ColourField {
    fn from(rgb: [f32; 3]) -> Self {
        Self::Uniform(rgb)
    }
}

impl From<Vec<Vec<[f32; 3]>>> for ColourField {
    fn from(grid: Vec<Vec<[f32; 3]>>) -> Self {
        Self::Grid(grid)
    }
}

/// Physically based surface description shared by every cell of a mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base colour field
    pub colour: ColourField,
    /// Opacity (0.0 = invisible, 1.0 = opaque)
    pub alpha: f32,
    /// Metallic factor (0.0 = dielectric, 1.0 = metallic)
    pub metallic: f32,
    /// Roughness factor (0.0 = mirror, 1.0 = completely rough)
    pub roughness: f32,
    /// Specular reflectance at normal incidence
    pub reflectance: f32,
    /// Anisotropy of the specular lobe
    pub anisotropy: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            colour: ColourField::default(),
            alpha: 1.0,
            metallic: 0.0,
            roughness: 0.5,
            reflectance: 0.4,
            anisotropy: 0.0,
        }
    }
}

impl Material {
    /// Material with the given colour and default surface properties
    pub fn with_colour(colour: impl Into<ColourField>) -> Self {
        Self {
            colour: colour.into(),
            ..Default::default()
        }
    }

    /// Builder pattern: set alpha
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Builder pattern: set metallic
    pub fn metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    /// Builder pattern: set roughness
    pub fn roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    /// Builder pattern: set reflectance
    pub fn reflectance(mut self, reflectance: f32) -> Self {
        self.reflectance = reflectance;
        self
    }

    /// Builder pattern: set anisotropy
    pub fn anisotropy(mut self, anisotropy: f32) -> Self {
        self.anisotropy = anisotropy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_field_parses_both_forms() {
        let uniform: Material = toml::from_str("colour = [1.0, 0.0, 0.0]\nalpha = 0.5").unwrap();
        assert_eq!(uniform.colour, ColourField::Uniform([1.0, 0.0, 0.0]));
        assert_eq!(uniform.alpha, 0.5);
        assert_eq!(uniform.roughness, Material::default().roughness);

        let grid: Material =
            toml::from_str("colour = [[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]]").unwrap();
        match grid.colour {
            ColourField::Grid(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].len(), 2);
            }
            ColourField::Uniform(_) => panic!("expected a grid"),
        }
    }

    #[test]
    fn test_builder_sets_fields() {
        let material = Material::with_colour([0.1, 0.2, 0.3])
            .alpha(0.7)
            .metallic(0.9)
            .roughness(0.2)
            .reflectance(0.6)
            .anisotropy(0.3);
        assert_eq!(material.colour, ColourField::Uniform([0.1, 0.2, 0.3]));
        assert_eq!(material.alpha, 0.7);
        assert_eq!(material.metallic, 0.9);
        assert_eq!(material.roughness, 0.2);
        assert_eq!(material.reflectance, 0.6);
        assert_eq!(material.anisotropy, 0.3);
    }

    #[test]
    fn test_describe_reports_row_lengths() {
        let ragged = ColourField::Grid(vec![vec![[0.0; 3]; 2], vec![[0.0; 3]; 1]]);
        assert!(ragged.describe().contains("[2, 1]"));
    }
}
