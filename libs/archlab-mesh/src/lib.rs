//! # ArchLab Mesh
//!
//! Parametric mesh generation for architectural primitives: planes, cubes,
//! walls, rooms, shelves, plates, spheres and circles.
//! Every parameter change rebuilds the mesh from scratch.
//!
//! ## Architecture
//!
//! ```text
//! ShapeParameters → primitives (raw Mesh) → weld → orient → thicken → Mesh
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust and deterministic:
//! - **Weld**: Spatial hash over threshold-sized cells
//! - **Orient**: Flood fill over shared edges plus signed volume test
//! - **Solidify**: Mitered vertex-normal offset with rim stitching
//! - **Spheres**: Latitude/longitude grid or subdivided icosahedron
//!
//! ## Usage
//!
//! ```rust
//! use archlab_mesh::{regenerate, MeshConfig, MeshLibrary, ShapeParameters};
//! use archlab_mesh::params::PlaneParams;
//!
//! let params = ShapeParameters::Plane(PlaneParams { width: 2.0, height: 1.0, thickness: 0.05 });
//! let mesh = regenerate(&params, &MeshLibrary::builtin(), &MeshConfig::default())?;
//! assert_eq!(mesh.face_count(), 6);
//! # Ok::<(), archlab_mesh::MeshError>(())
//! ```

pub mod error;
pub mod library;
pub mod math;
pub mod mesh;
pub mod ops;
pub mod params;
pub mod pipeline;
pub mod primitives;

pub use config::constants::MeshConfig;
pub use error::MeshError;
pub use library::{LibraryShape, MeshLibrary, ShapeLibrary};
pub use mesh::Mesh;
pub use ops::{orient_normals, thicken, weld, Orientation};
pub use params::{ShapeParameters, ThickenSpec, WallSegment};
pub use pipeline::{generate, regenerate, regenerate_all};
