//! # Plane Primitive

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::PlaneParams;
use glam::DVec3;

/// Creates a single quad in the XY plane, centred on the origin and facing
/// +Z.
///
/// The `thickness` parameter is applied later by the solidify pass.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::primitives::create_plane;
/// use archlab_mesh::params::PlaneParams;
///
/// let mesh = create_plane(&PlaneParams::default()).unwrap();
/// assert_eq!(mesh.face(0), &[0, 1, 3, 2]);
/// ```
pub fn create_plane(params: &PlaneParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let (x, y) = (params.width * 0.5, params.height * 0.5);
    let mut mesh = Mesh::with_capacity(4, 1);
    mesh.add_vertex(DVec3::new(-x, -y, 0.0));
    mesh.add_vertex(DVec3::new(x, -y, 0.0));
    mesh.add_vertex(DVec3::new(-x, y, 0.0));
    mesh.add_vertex(DVec3::new(x, y, 0.0));
    mesh.add_face(&[0, 1, 3, 2]);

    log::debug!("Generated plane {}x{}", params.width, params.height);
    Ok(mesh)
}
