//! # Plate Primitive

use crate::error::MeshError;
use crate::library::ShapeLibrary;
use crate::mesh::Mesh;
use crate::params::PlateParams;
use glam::DVec3;

/// Instantiates a plate from the mesh library.
///
/// The library geometry is scaled by `(radius, radius, height)` relative to
/// the shape's reference size. `segments` is validated but the library
/// topology is used as stored.
///
/// # Errors
///
/// Fails with [`MeshError::UnknownLibraryShape`] when `params.shape` is not
/// in the library.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::library::MeshLibrary;
/// use archlab_mesh::params::PlateParams;
/// use archlab_mesh::primitives::create_plate;
///
/// let library = MeshLibrary::builtin();
/// let mesh = create_plate(&PlateParams::default(), &library).unwrap();
/// let (_, max) = mesh.bounding_box();
/// assert!((max.z - 0.03).abs() < 1e-12);
/// ```
pub fn create_plate<L: ShapeLibrary + ?Sized>(
    params: &PlateParams,
    library: &L,
) -> Result<Mesh, MeshError> {
    params.validate()?;

    let shape = library.require(&params.shape)?;
    let size = DVec3::new(params.radius, params.radius, params.height);
    let mesh = shape.to_mesh(size)?;

    log::debug!(
        "Generated plate from {}: {} vertices, {} faces",
        params.shape,
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}
