//! Material system
//!
//! [`Material`] is the user-facing description of a surface. The mesh base
//! type turns it into one [`MaterialRecord`] or a grid of them, packaged as a
//! [`RenderingMaterial`], which is what a renderer consumes.

pub mod material_params;
pub mod material_record;
pub mod rendering_material;

pub use material_params::{ColourField, Material};
pub use material_record::{MaterialRecord, DEFAULT_LIT_TRANSPARENCY_SHADER, DEFAULT_UNLIT_SHADER};
pub use rendering_material::{MaterialGrid, RenderingMaterial};
