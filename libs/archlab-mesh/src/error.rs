//! # Mesh Errors
//!
//! Error types for mesh generation and post-processing.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
///
/// Degenerate-but-valid requests (a room without walls, thickening an empty
/// mesh) are not errors; they produce an empty [`crate::Mesh`].
#[derive(Debug, Error)]
pub enum MeshError {
    /// A shape parameter is out of range.
    #[error("Invalid parameter `{field}`: {message}")]
    InvalidParameter { field: String, message: String },

    /// The mesh library has no shape with the requested name.
    #[error("Unknown library shape: {name}")]
    UnknownLibraryShape { name: String },

    /// Invalid mesh topology in raw vertex/face data
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Mesh library document could not be parsed
    #[error("Library format error: {0}")]
    LibraryFormat(#[from] serde_json::Error),

    /// Post-processing configuration rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid parameter error naming the offending field.
    pub fn invalid_parameter(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an unknown library shape error.
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        Self::UnknownLibraryShape { name: name.into() }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Returns the offending field for parameter errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}
