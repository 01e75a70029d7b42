//! # Wall Primitive

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::WallParams;
use glam::DVec3;

/// Creates a single upright wall panel.
///
/// The panel starts at the origin, runs `width` along +X and rises `height`
/// along +Z. Its face points towards +Y.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::primitives::create_wall;
/// use archlab_mesh::params::WallParams;
///
/// let mesh = create_wall(&WallParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 1);
/// ```
pub fn create_wall(params: &WallParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let (w, h) = (params.width, params.height);
    let mut mesh = Mesh::with_capacity(4, 1);
    mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(0.0, 0.0, h));
    mesh.add_vertex(DVec3::new(w, 0.0, 0.0));
    mesh.add_vertex(DVec3::new(w, 0.0, h));
    mesh.add_face(&[0, 1, 3, 2]);

    log::debug!("Generated wall {w}x{h}");
    Ok(mesh)
}
