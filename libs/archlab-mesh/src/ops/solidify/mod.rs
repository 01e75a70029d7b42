//! # Solidify
//!
//! Turns a surface into a shell of uniform thickness by offsetting two
//! copies of it along the normals and stitching their open borders.
//!
//! ## Algorithm Overview
//!
//! 1. Offset a front layer by `thickness * (offset + 1) / 2` and a back layer
//!    by `thickness * (offset - 1) / 2`
//! 2. Reverse the back layer's winding so the shell faces outward
//! 3. Close every boundary edge with a rim quad joining the two layers
//!
//! With even offset the layers share vertices between faces and move along
//! mitered vertex normals, so walls meeting at an angle keep their
//! thickness. Without it every face moves along its own normal and keeps
//! its own corners.
//!
//! Wire edges of the surface ride along on the front layer.

#[cfg(test)]
mod tests;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::adjacency::MeshAdjacency;
use crate::ops::normals::reverse_face;
use crate::params::ThickenSpec;
use config::constants::{approx_zero, EPSILON};
use glam::DVec3;
use std::collections::BTreeMap;

/// Corner loops of one offset layer, parallel to the source faces.
type Layer = Vec<Vec<u32>>;

/// Thickens a surface into a closed shell.
///
/// Thickening a mesh that is itself a thickened shell re-thickens its
/// source surface, so repeated calls replace the shell instead of
/// compounding it. A zero `thickness` returns the source surface, and a
/// mesh without faces is returned unchanged.
///
/// # Errors
///
/// Fails with [`MeshError::InvalidParameter`] when the [`ThickenSpec`] is out of range.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::ops::thicken;
/// use archlab_mesh::params::PlaneParams;
/// use archlab_mesh::primitives::create_plane;
/// use archlab_mesh::ThickenSpec;
///
/// let plane = create_plane(&PlaneParams::default()).unwrap();
/// let shell = thicken(&plane, &ThickenSpec::new(0.1)).unwrap();
/// assert_eq!(shell.vertex_count(), 8);
/// assert_eq!(shell.face_count(), 6);
/// assert_eq!(shell.shell_source(), Some(&plane));
/// ```
pub fn thicken(mesh: &Mesh, spec: &ThickenSpec) -> Result<Mesh, MeshError> {
    spec.validate()?;

    let source = mesh.shell_source().unwrap_or(mesh);
    if approx_zero(spec.thickness) {
        return Ok(source.clone());
    }
    if source.face_count() == 0 {
        log::debug!("Nothing to thicken: mesh has no faces");
        return Ok(source.clone());
    }

    let face_normals: Vec<DVec3> = (0..source.face_count())
        .map(|i| source.face_normal(i))
        .collect();

    let mut vertices = Vec::new();
    let front = offset_layer(source, &face_normals, spec, spec.front_distance(), &mut vertices);
    let back = offset_layer(source, &face_normals, spec, spec.back_distance(), &mut vertices);

    let mut faces: Vec<Vec<u32>> = Vec::with_capacity(front.len() * 2);
    faces.extend(front.iter().cloned());
    faces.extend(back.iter().cloned().map(|mut face| {
        reverse_face(&mut face);
        face
    }));

    let adjacency = MeshAdjacency::build(source.faces());
    let mut rims = 0usize;
    for (f, face) in source.faces().iter().enumerate() {
        let n = face.len();
        for i in 0..n {
            let j = (i + 1) % n;
            if face[i] == face[j] || !adjacency.is_boundary_edge(face[i], face[j]) {
                continue;
            }
            faces.push(vec![front[f][j], front[f][i], back[f][i], back[f][j]]);
            rims += 1;
        }
    }

    log::debug!(
        "Thickened {} faces by {} (offset {}, even {}): {} rim faces",
        source.face_count(),
        spec.thickness,
        spec.offset,
        spec.even_offset,
        rims
    );

    let front_shared = approx_zero(spec.front_distance()) || spec.even_offset;
    let edges = carry_wire_edges(source, front_shared, &mut vertices);

    let mut shell = Mesh::from_parts_unchecked(vertices, edges, faces);
    shell.set_shell_source(source.clone());
    Ok(shell)
}

/// Appends one offset copy of the surface to `vertices` and returns its
/// face loops.
fn offset_layer(
    source: &Mesh,
    face_normals: &[DVec3],
    spec: &ThickenSpec,
    distance: f64,
    vertices: &mut Vec<DVec3>,
) -> Layer {
    let base = vertices.len() as u32;

    if approx_zero(distance) {
        vertices.extend_from_slice(source.vertices());
        return shared_loops(source, base);
    }

    if spec.even_offset {
        let normals = mitered_vertex_normals(source, face_normals, spec.miter_limit);
        vertices.extend(
            source
                .vertices()
                .iter()
                .zip(&normals)
                .map(|(&v, &n)| v + n * distance),
        );
        return shared_loops(source, base);
    }

    source
        .faces()
        .iter()
        .zip(face_normals)
        .map(|(face, &normal)| {
            face.iter()
                .map(|&v| {
                    vertices.push(source.vertex(v) + normal * distance);
                    (vertices.len() - 1) as u32
                })
                .collect()
        })
        .collect()
}

/// Re-indexes the source's wire edges onto the shell.
///
/// The front layer is built first, so when it keeps the source numbering the
/// edges reuse its vertices as they are. Otherwise the endpoints are copied
/// once each at their source positions.
fn carry_wire_edges(
    source: &Mesh,
    front_shared: bool,
    vertices: &mut Vec<DVec3>,
) -> Vec<[u32; 2]> {
    if front_shared {
        return source.edges().to_vec();
    }

    let mut copies: BTreeMap<u32, u32> = BTreeMap::new();
    let mut edges = Vec::with_capacity(source.edge_count());
    for edge in source.edges() {
        let mut carried = [0u32; 2];
        for (slot, &v) in carried.iter_mut().zip(edge) {
            *slot = *copies.entry(v).or_insert_with(|| {
                vertices.push(source.vertex(v));
                (vertices.len() - 1) as u32
            });
        }
        edges.push(carried);
    }
    edges
}

/// Face loops of a layer that keeps the source vertex numbering.
fn shared_loops(source: &Mesh, base: u32) -> Layer {
    source
        .faces()
        .iter()
        .map(|face| face.iter().map(|&v| base + v).collect())
        .collect()
}

/// Per-vertex offset directions for even thickness.
///
/// Each direction is the normalized sum of the adjacent face normals,
/// scaled by `1 / min(dot(direction, face_normal))` so the offset surface
/// stays `distance` away from every adjacent face plane. The scale is
/// clamped to `[1, miter_limit]`. Vertices without faces do not move.
pub(crate) fn mitered_vertex_normals(
    source: &Mesh,
    face_normals: &[DVec3],
    miter_limit: f64,
) -> Vec<DVec3> {
    let mut sums = vec![DVec3::ZERO; source.vertex_count()];
    for (face, &normal) in source.faces().iter().zip(face_normals) {
        for &v in face {
            sums[v as usize] += normal;
        }
    }

    let mut min_dots = vec![f64::INFINITY; source.vertex_count()];
    let directions: Vec<DVec3> = sums.iter().map(|s| s.normalize_or_zero()).collect();
    for (face, &normal) in source.faces().iter().zip(face_normals) {
        for &v in face {
            let dot = directions[v as usize].dot(normal);
            let slot = &mut min_dots[v as usize];
            *slot = slot.min(dot);
        }
    }

    directions
        .iter()
        .zip(&min_dots)
        .map(|(&direction, &min_dot)| {
            let scale = if min_dot > EPSILON {
                (1.0 / min_dot).clamp(1.0, miter_limit)
            } else {
                miter_limit
            };
            direction * scale
        })
        .collect()
}
