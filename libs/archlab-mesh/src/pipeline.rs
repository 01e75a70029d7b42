//! # Regeneration Pipeline
//!
//! Rebuilds a shape's mesh from scratch: generate, weld, orient and, for
//! shapes with a board or wall thickness, solidify.

use crate::error::MeshError;
use crate::library::ShapeLibrary;
use crate::mesh::Mesh;
use crate::ops::{orient_normals, thicken, weld, Orientation};
use crate::params::ShapeParameters;
use crate::primitives::{
    create_circle, create_cube, create_plane, create_plate, create_room, create_shelf,
    create_sphere, create_wall,
};
use config::constants::MeshConfig;
use rayon::prelude::*;

/// Generates the raw mesh for a shape, without post-processing.
///
/// # Errors
///
/// Parameter validation errors, and library misses for plates.
pub fn generate<L: ShapeLibrary + ?Sized>(
    params: &ShapeParameters,
    library: &L,
) -> Result<Mesh, MeshError> {
    match params {
        ShapeParameters::Plane(p) => create_plane(p),
        ShapeParameters::Cube(p) => create_cube(p),
        ShapeParameters::Wall(p) => create_wall(p),
        ShapeParameters::Room(p) => create_room(p),
        ShapeParameters::Shelf(p) => create_shelf(p),
        ShapeParameters::Plate(p) => create_plate(p, library),
        ShapeParameters::Sphere(p) => create_sphere(p),
        ShapeParameters::Circle(p) => create_circle(p),
    }
}

/// Runs the full pipeline for one shape.
///
/// Identical inputs always produce identical meshes.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::{regenerate, MeshLibrary, MeshConfig, ShapeParameters};
/// use archlab_mesh::params::SphereParams;
///
/// let params = ShapeParameters::Sphere(SphereParams::uv(1.0, 4, 2));
/// let mesh = regenerate(&params, &MeshLibrary::builtin(), &MeshConfig::default()).unwrap();
/// // The pole rows weld down to single vertices.
/// assert_eq!(mesh.vertex_count(), 6);
/// ```
pub fn regenerate<L: ShapeLibrary + ?Sized>(
    params: &ShapeParameters,
    library: &L,
    config: &MeshConfig,
) -> Result<Mesh, MeshError> {
    let raw = generate(params, library)?;
    let welded = weld(&raw, config.weld_distance);

    let orientation = if config.orient_inside {
        Orientation::Inside
    } else {
        Orientation::Outside
    };
    let oriented = orient_normals(&welded, orientation);

    let mesh = match params.thicken_spec() {
        Some(spec) => thicken(&oriented, &spec.with_miter_limit(config.miter_limit))?,
        None => oriented,
    };

    log::debug!(
        "Regenerated {}: {} vertices, {} faces",
        params.kind_name(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

/// Regenerates many shapes in parallel.
///
/// Results come back in input order; one failing shape does not affect the
/// others.
pub fn regenerate_all<L: ShapeLibrary + Sync + ?Sized>(
    shapes: &[ShapeParameters],
    library: &L,
    config: &MeshConfig,
) -> Vec<Result<Mesh, MeshError>> {
    shapes
        .par_iter()
        .map(|params| regenerate(params, library, config))
        .collect()
}
