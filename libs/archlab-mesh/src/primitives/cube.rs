//! # Cube Primitive
//!
//! Generates an axis-aligned box centred on the origin.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::CubeParams;
use glam::DVec3;

/// Outward-wound quads over the corner order produced by [`create_cube`].
const CUBE_FACES: [[u32; 4]; 6] = [
    [0, 2, 3, 1], // bottom (-Z)
    [4, 5, 7, 6], // top (+Z)
    [0, 1, 5, 4], // front (-Y)
    [2, 6, 7, 3], // back (+Y)
    [0, 4, 6, 2], // left (-X)
    [1, 3, 7, 5], // right (+X)
];

/// Creates a box mesh.
///
/// `width` spans X, `depth` spans Y and `height` spans Z. Corners are
/// emitted with X varying fastest, then Y, then Z, so vertex 0 is the
/// `(-,-,-)` corner and vertex 7 the `(+,+,+)` corner.
///
/// # Returns
///
/// A mesh with 8 vertices and 6 quads.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::primitives::create_cube;
/// use archlab_mesh::params::CubeParams;
///
/// let mesh = create_cube(&CubeParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_cube(params: &CubeParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let half = DVec3::new(params.width, params.depth, params.height) * 0.5;
    let mut mesh = Mesh::with_capacity(8, 6);

    for z in [-half.z, half.z] {
        for y in [-half.y, half.y] {
            for x in [-half.x, half.x] {
                mesh.add_vertex(DVec3::new(x, y, z));
            }
        }
    }

    for face in &CUBE_FACES {
        mesh.add_face(face);
    }

    log::debug!(
        "Generated cube: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}
