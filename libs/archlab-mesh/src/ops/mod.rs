//! # Mesh Operations
//!
//! Post-processing passes applied after generation: vertex welding, face
//! orientation and solidify. Every pass takes `&Mesh` and returns a new mesh.

pub mod adjacency;
pub mod normals;
pub mod solidify;
pub mod weld;

pub use adjacency::{EdgeUse, MeshAdjacency};
pub use normals::{orient_normals, Orientation};
pub use solidify::thicken;
pub use weld::weld;
