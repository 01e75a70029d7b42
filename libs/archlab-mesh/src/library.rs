//! # Mesh Library
//!
//! Named, pre-modelled shapes that generators instantiate by name. The plate
//! primitive is the only consumer today.
//!
//! A library document is a JSON object keyed by shape name:
//!
//! ```json
//! {
//!   "Plate02": {
//!     "reference_size": [1.0, 1.0, 1.0],
//!     "vertices": [[0.0, 0.0, 0.0], ...],
//!     "edges": [],
//!     "faces": [[0, 2, 1], ...]
//!   }
//! }
//! ```

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{DEFAULT_PLATE_SEGMENTS, DEFAULT_PLATE_SHAPE};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source of named library shapes.
pub trait ShapeLibrary {
    /// Looks up a shape by name.
    fn shape(&self, name: &str) -> Option<&LibraryShape>;

    /// Looks up a shape by name, failing with
    /// [`MeshError::UnknownLibraryShape`] on a miss.
    fn require(&self, name: &str) -> Result<&LibraryShape, MeshError> {
        self.shape(name).ok_or_else(|| MeshError::unknown_shape(name))
    }
}

/// Raw geometry of one library shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryShape {
    /// Size the geometry was modelled at, as (radius, radius, height) for
    /// round shapes. Instances are scaled relative to it.
    pub reference_size: DVec3,
    pub vertices: Vec<DVec3>,
    #[serde(default)]
    pub edges: Vec<[u32; 2]>,
    pub faces: Vec<Vec<u32>>,
}

impl LibraryShape {
    /// Checks the reference size and the index invariant.
    pub fn validate(&self) -> Result<(), MeshError> {
        let size = self.reference_size;
        if !size.is_finite() || size.min_element() <= 0.0 {
            return Err(MeshError::invalid_parameter(
                "reference_size",
                format!("every component must be positive, got {size}"),
            ));
        }
        Mesh::from_parts(self.vertices.clone(), self.edges.clone(), self.faces.clone())?;
        Ok(())
    }

    /// Instantiates the shape scaled so that its reference size maps to
    /// `size`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use archlab_mesh::library::LibraryShape;
    /// use glam::DVec3;
    ///
    /// let shape = LibraryShape {
    ///     reference_size: DVec3::new(2.0, 2.0, 1.0),
    ///     vertices: vec![DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 1.0)],
    ///     edges: vec![],
    ///     faces: vec![vec![0, 1, 2]],
    /// };
    /// let mesh = shape.to_mesh(DVec3::new(1.0, 1.0, 3.0)).unwrap();
    /// assert_eq!(mesh.vertex(2), DVec3::new(0.0, 1.0, 3.0));
    /// ```
    pub fn to_mesh(&self, size: DVec3) -> Result<Mesh, MeshError> {
        let factor = size / self.reference_size;
        let vertices = self.vertices.iter().map(|&v| v * factor).collect();
        Mesh::from_parts(vertices, self.edges.clone(), self.faces.clone())
    }
}

/// In-memory shape library with deterministic (sorted) name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshLibrary {
    shapes: BTreeMap<String, LibraryShape>,
}

impl MeshLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library holding the built-in shapes (`Plate02`).
    pub fn builtin() -> Self {
        let mut library = Self::new();
        library
            .shapes
            .insert(DEFAULT_PLATE_SHAPE.to_string(), plate_shape(DEFAULT_PLATE_SEGMENTS));
        library
    }

    /// Parses a library document.
    pub fn from_json(json: &str) -> Result<Self, MeshError> {
        let shapes: BTreeMap<String, LibraryShape> = serde_json::from_str(json)?;
        let mut library = Self::new();
        for (name, shape) in shapes {
            library.insert(name, shape)?;
        }
        log::debug!("Loaded mesh library with {} shapes", library.len());
        Ok(library)
    }

    /// Adds or replaces a shape after validating it.
    pub fn insert(&mut self, name: impl Into<String>, shape: LibraryShape) -> Result<(), MeshError> {
        let name = name.into();
        shape.validate().map_err(|err| match err {
            MeshError::InvalidParameter { field, message } => {
                MeshError::invalid_parameter(format!("{name}.{field}"), message)
            }
            MeshError::InvalidTopology { message } => {
                MeshError::invalid_topology(format!("library shape {name}: {message}"))
            }
            other => other,
        })?;
        self.shapes.insert(name, shape);
        Ok(())
    }

    /// Shape names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl ShapeLibrary for MeshLibrary {
    fn shape(&self, name: &str) -> Option<&LibraryShape> {
        self.shapes.get(name)
    }
}

/// Half cross-section of the built-in plate as (radius, height) pairs,
/// walked from the bottom centre over the rim to the top centre.
const PLATE_PROFILE: [(f64, f64); 6] = [
    (0.0, 0.0),
    (0.6, 0.0),
    (1.0, 1.0),
    (0.9, 1.0),
    (0.55, 0.25),
    (0.0, 0.25),
];

/// Revolves [`PLATE_PROFILE`] around Z into a closed, outward-wound plate of
/// unit reference size.
fn plate_shape(segments: u32) -> LibraryShape {
    let rings = &PLATE_PROFILE[1..PLATE_PROFILE.len() - 1];
    let (_, bottom_z) = PLATE_PROFILE[0];
    let (_, top_z) = PLATE_PROFILE[PLATE_PROFILE.len() - 1];
    let n = segments;

    let mut vertices = Vec::with_capacity(rings.len() * n as usize + 2);
    vertices.push(DVec3::new(0.0, 0.0, bottom_z));
    for &(radius, z) in rings {
        for s in 0..n {
            let angle = std::f64::consts::TAU * f64::from(s) / f64::from(n);
            vertices.push(DVec3::new(radius * angle.cos(), radius * angle.sin(), z));
        }
    }
    let top = vertices.len() as u32;
    vertices.push(DVec3::new(0.0, 0.0, top_z));

    let ring = |r: u32, s: u32| 1 + r * n + s % n;
    let last = rings.len() as u32 - 1;
    let mut faces = Vec::new();
    for s in 0..n {
        faces.push(vec![0, ring(0, s + 1), ring(0, s)]);
    }
    for r in 0..last {
        for s in 0..n {
            faces.push(vec![ring(r, s), ring(r, s + 1), ring(r + 1, s + 1), ring(r + 1, s)]);
        }
    }
    for s in 0..n {
        faces.push(vec![top, ring(last, s), ring(last, s + 1)]);
    }

    LibraryShape {
        reference_size: DVec3::ONE,
        vertices,
        edges: Vec::new(),
        faces,
    }
}
