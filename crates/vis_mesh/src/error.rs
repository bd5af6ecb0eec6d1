//! Error types for mesh construction and instantiation

use crate::geometry::rotation::RotationError;

/// Errors produced while building or instantiating meshes
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The geometry hook was called on a type that has no geometry
    #[error("Method not implemented: use a concrete mesh shape")]
    NotImplemented,

    /// The colour field does not have the shape the material mode requires
    #[error("Shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Shape the operation required
        expected: String,
        /// Shape that was supplied
        found: String,
    },

    /// A shape parameter is outside its valid range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Malformed triangle mesh data
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// Failure from the rotation utility
    #[error(transparent)]
    Rotation(#[from] RotationError),
}

/// Result type alias for mesh operations
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::ShapeMismatch {
            expected: "colour grid".to_string(),
            found: "single RGB colour".to_string(),
        };
        assert!(err.to_string().contains("colour grid"));
        assert!(MeshError::NotImplemented.to_string().contains("not implemented"));

        let rotation: MeshError = RotationError::ZeroVector.into();
        assert_eq!(rotation.to_string(), RotationError::ZeroVector.to_string());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
