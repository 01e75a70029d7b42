//! # Shelf Primitive
//!
//! An open-fronted box resting on `z = thickness / 2`, plus an interior
//! panel inset from the open side. Board thickness comes from the solidify
//! pass; the surfaces sit on the boards' mid planes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::params::ShelfParams;
use config::constants::SHELF_INSET_EPSILON;
use glam::DVec3;

/// Box sides in cube corner order, without the front (-Y) side.
const SHELF_FACES: [[u32; 4]; 5] = [
    [0, 2, 3, 1], // bottom
    [0, 4, 6, 2], // left
    [1, 3, 7, 5], // right
    [2, 6, 7, 3], // back
    [4, 5, 7, 6], // top
];

/// Interior panel, facing the open side.
const PANEL_FACE: [u32; 4] = [8, 9, 11, 10];

/// Creates a shelf mesh with 12 vertices and 6 faces.
///
/// The panel corners are inset by half the board thickness plus
/// [`SHELF_INSET_EPSILON`] so the panel never touches the box once both
/// are thickened.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::primitives::create_shelf;
/// use archlab_mesh::params::ShelfParams;
///
/// let mesh = create_shelf(&ShelfParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.face_count(), 6);
/// ```
pub fn create_shelf(params: &ShelfParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let base = params.thickness * 0.5;
    let x = params.width * 0.5;
    let y = params.depth * 0.5;
    let top = params.height + base;
    let inset = base + SHELF_INSET_EPSILON;

    let mut mesh = Mesh::with_capacity(12, 6);
    for z in [base, top] {
        for py in [-y, y] {
            for px in [-x, x] {
                mesh.add_vertex(DVec3::new(px, py, z));
            }
        }
    }
    for z in [base + inset, top - inset] {
        mesh.add_vertex(DVec3::new(-x + inset, -y + inset, z));
        mesh.add_vertex(DVec3::new(x - inset, -y + inset, z));
    }

    for face in &SHELF_FACES {
        mesh.add_face(face);
    }
    mesh.add_face(&PANEL_FACE);

    log::debug!(
        "Generated shelf {}x{}x{} (board {})",
        params.width,
        params.height,
        params.depth,
        params.thickness
    );
    Ok(mesh)
}
