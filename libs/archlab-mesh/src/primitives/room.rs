//! # Room Primitive
//!
//! Builds a room outline from a chain of wall segments. Each segment first
//! turns the walking direction by its `turn_angle`, then walks its `width`,
//! leaving a floor and a ceiling vertex behind at every joint.

use crate::error::MeshError;
use crate::math::rotate_2d;
use crate::mesh::Mesh;
use crate::params::{RoomParams, WallSegment};
use glam::{DVec2, DVec3};

/// Walks the chain and returns the floor position of every joint, starting
/// with the origin.
fn joints(segments: &[WallSegment]) -> Vec<DVec2> {
    let mut points = Vec::with_capacity(segments.len() + 1);
    let mut position = DVec2::ZERO;
    let mut heading = 0.0;
    points.push(position);
    for segment in segments {
        heading += segment.turn_angle;
        position += rotate_2d(1.0, 0.0, heading) * segment.width;
        points.push(position);
    }
    points
}

/// Returns where the chain ends on the floor plane.
///
/// A closed room ends back at the origin.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::params::WallSegment;
/// use archlab_mesh::primitives::chain_end;
///
/// let square = [WallSegment::new(2.0, 90.0); 4];
/// assert!(chain_end(&square).length() < 1e-12);
/// ```
pub fn chain_end(segments: &[WallSegment]) -> DVec2 {
    joints(segments).last().copied().unwrap_or(DVec2::ZERO)
}

/// Creates the room walls as one quad per segment.
///
/// A chain of `N` segments yields `2 * (N + 1)` vertices and `N` faces. The
/// faces of a chain turning counter-clockwise point into the room; the
/// orientation pass fixes them up afterwards. Zero segments produce an empty
/// mesh.
pub fn create_room(params: &RoomParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    if params.walls.is_empty() {
        log::debug!("Room has no walls, producing an empty mesh");
        return Ok(Mesh::new());
    }

    let points = joints(&params.walls);
    let mut mesh = Mesh::with_capacity(points.len() * 2, params.walls.len());
    for p in &points {
        mesh.add_vertex(DVec3::new(p.x, p.y, 0.0));
        mesh.add_vertex(DVec3::new(p.x, p.y, params.height));
    }
    for k in 0..params.walls.len() as u32 {
        let base = 2 * k;
        mesh.add_face(&[base, base + 1, base + 3, base + 2]);
    }

    log::debug!(
        "Generated room: {} walls, {} vertices",
        params.walls.len(),
        mesh.vertex_count()
    );
    Ok(mesh)
}
