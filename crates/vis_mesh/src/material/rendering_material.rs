//! Derived rendering materials: one record, or a grid of per-cell records

use serde::{Deserialize, Serialize};

use super::{ColourField, Material, MaterialRecord};
use crate::error::{MeshError, MeshResult};

/// Row-major grid of material records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialGrid {
    rows: usize,
    cols: usize,
    records: Vec<MaterialRecord>,
}

impl MaterialGrid {
    /// Build one record per colour cell
    ///
    /// # Errors
    /// [`MeshError::ShapeMismatch`] if the rows have differing lengths.
    pub fn from_colours(colours: &[Vec<[f32; 3]>], material: &Material) -> MeshResult<Self> {
        let rows = colours.len();
        let cols = colours.first().map_or(0, Vec::len);

        if let Some(row) = colours.iter().position(|row| row.len() != cols) {
            return Err(MeshError::ShapeMismatch {
                expected: format!("{cols} colours in every row"),
                found: format!("{} colours in row {row}", colours[row].len()),
            });
        }

        let records = colours
            .iter()
            .flatten()
            .map(|&rgb| MaterialRecord::lit_transparent(rgb, material))
            .collect();

        Ok(Self { rows, cols, records })
    }

    /// Grid dimensions as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Record at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<&MaterialRecord> {
        if row < self.rows && col < self.cols {
            self.records.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Records in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &MaterialRecord> {
        self.records.iter()
    }

    /// One row of records
    pub fn row(&self, row: usize) -> Option<&[MaterialRecord]> {
        (row < self.rows).then(|| &self.records[row * self.cols..(row + 1) * self.cols])
    }
}

/// Materials derived from a [`Material`] at mesh construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderingMaterial {
    /// Whole mesh shares one record
    Single(MaterialRecord),
    /// Per-cell records for a spatially varying colour field
    Grid(MaterialGrid),
}

impl RenderingMaterial {
    /// Derive the rendering material for the requested mode
    ///
    /// # Errors
    /// [`MeshError::ShapeMismatch`] if the colour field does not fit the mode:
    /// dynamic materials need a rectangular grid, static ones a single colour.
    pub fn from_material(material: &Material, dynamic_material: bool) -> MeshResult<Self> {
        match (&material.colour, dynamic_material) {
            (ColourField::Uniform(rgb), false) => {
                Ok(Self::Single(MaterialRecord::lit_transparent(*rgb, material)))
            }
            (ColourField::Grid(colours), true) => {
                Ok(Self::Grid(MaterialGrid::from_colours(colours, material)?))
            }
            (colour, true) => Err(MeshError::ShapeMismatch {
                expected: "colour grid for a dynamic material".to_string(),
                found: colour.describe(),
            }),
            (colour, false) => Err(MeshError::ShapeMismatch {
                expected: "single RGB colour".to_string(),
                found: colour.describe(),
            }),
        }
    }

    /// Grid shape, or `None` for a single record
    pub fn shape(&self) -> Option<(usize, usize)> {
        match self {
            Self::Single(_) => None,
            Self::Grid(grid) => Some(grid.shape()),
        }
    }

    /// The single record, if this is not a grid
    pub fn as_single(&self) -> Option<&MaterialRecord> {
        match self {
            Self::Single(record) => Some(record),
            Self::Grid(_) => None,
        }
    }

    /// The grid, if per-cell materials are in use
    pub fn as_grid(&self) -> Option<&MaterialGrid> {
        match self {
            Self::Single(_) => None,
            Self::Grid(grid) => Some(grid),
        }
    }

    /// Number of records held
    pub fn record_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Grid(grid) => grid.records.len(),
        }
    }
}
