//! Vertex welding ("remove doubles").
//!
//! Merges vertices closer than a distance threshold using a spatial hash
//! with one cell per threshold length, so only the 3x3x3 neighbourhood of a
//! vertex has to be searched.

use crate::mesh::Mesh;
use config::constants::EPSILON;
use glam::DVec3;
use std::collections::{BTreeSet, HashMap};

type Cell = (i64, i64, i64);

/// Convert position to spatial hash cell.
fn pos_to_cell(pos: DVec3, cell_size: f64) -> Cell {
    (
        (pos.x / cell_size).floor() as i64,
        (pos.y / cell_size).floor() as i64,
        (pos.z / cell_size).floor() as i64,
    )
}

/// Merges vertices closer than `epsilon` and cleans up the topology.
///
/// - Surviving vertices keep their first-occurrence order. A vertex merges
///   into the earliest survivor within `epsilon` of it.
/// - Faces are remapped, consecutive duplicate corners collapse (including
///   the wrap-around), and faces left with fewer than three distinct corners
///   are dropped.
/// - Edges are remapped; collapsed and repeated undirected edges are dropped.
/// - Vertices no face or edge references are kept.
///
/// `epsilon` is clamped to at least [`EPSILON`]. Welding a welded mesh with
/// the same `epsilon` changes nothing.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::{ops::weld, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::new(1.0, 1e-6, 0.0));
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_face(&[0, 1, 2, 3]);
///
/// let welded = weld(&mesh, 1e-4);
/// assert_eq!(welded.vertex_count(), 3);
/// assert_eq!(welded.face(0), &[0, 1, 2]);
/// ```
pub fn weld(mesh: &Mesh, epsilon: f64) -> Mesh {
    let epsilon = epsilon.max(EPSILON);
    let (vertices, remap) = merge_vertices(mesh.vertices(), epsilon);

    let mut faces = Vec::with_capacity(mesh.face_count());
    for face in mesh.faces() {
        let mut corners: Vec<u32> = face.iter().map(|&v| remap[v as usize]).collect();
        corners.dedup();
        while corners.len() > 1 && corners.first() == corners.last() {
            corners.pop();
        }
        let distinct: BTreeSet<u32> = corners.iter().copied().collect();
        if distinct.len() >= 3 {
            faces.push(corners);
        }
    }

    let mut seen = BTreeSet::new();
    let mut edges = Vec::with_capacity(mesh.edge_count());
    for &[a, b] in mesh.edges() {
        let (a, b) = (remap[a as usize], remap[b as usize]);
        if a != b && seen.insert((a.min(b), a.max(b))) {
            edges.push([a, b]);
        }
    }

    log::debug!(
        "Weld merged {} vertices, dropped {} faces and {} edges",
        mesh.vertex_count() - vertices.len(),
        mesh.face_count() - faces.len(),
        mesh.edge_count() - edges.len()
    );

    Mesh::from_parts_unchecked(vertices, edges, faces)
}

/// Returns the surviving positions and the old-to-new index map.
fn merge_vertices(positions: &[DVec3], epsilon: f64) -> (Vec<DVec3>, Vec<u32>) {
    let mut survivors: Vec<DVec3> = Vec::with_capacity(positions.len());
    let mut remap = Vec::with_capacity(positions.len());
    let mut spatial_hash: HashMap<Cell, Vec<u32>> = HashMap::new();

    for &position in positions {
        let cell = pos_to_cell(position, epsilon);
        let mut target: Option<u32> = None;

        // Check 3x3x3 neighborhood
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let neighbor_cell = (cell.0 + dx, cell.1 + dy, cell.2 + dz);
                    let Some(candidates) = spatial_hash.get(&neighbor_cell) else {
                        continue;
                    };
                    for &candidate in candidates {
                        let close = position.distance(survivors[candidate as usize]) < epsilon;
                        if close && target.map_or(true, |t| candidate < t) {
                            target = Some(candidate);
                        }
                    }
                }
            }
        }

        let index = target.unwrap_or_else(|| {
            let index = survivors.len() as u32;
            survivors.push(position);
            spatial_hash.entry(cell).or_default().push(index);
            index
        });
        remap.push(index);
    }

    (survivors, remap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_strip_with_duplicates() -> Mesh {
        // Two quads sharing an edge, each with its own copy of the shared vertices.
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(2.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 1e-7),
        ];
        let faces = vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]];
        Mesh::from_parts(vertices, vec![], faces).unwrap()
    }

    #[test]
    fn test_weld_merges_shared_vertices() {
        let welded = weld(&quad_strip_with_duplicates(), 1e-4);
        assert_eq!(welded.vertex_count(), 6);
        assert_eq!(welded.faces(), &[vec![0, 1, 2, 3], vec![1, 4, 5, 2]]);
    }

    #[test]
    fn test_weld_keeps_first_occurrence_position() {
        let welded = weld(&quad_strip_with_duplicates(), 1e-4);
        assert_eq!(welded.vertex(2), DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_weld_is_idempotent() {
        let once = weld(&quad_strip_with_duplicates(), 1e-4);
        let twice = weld(&once, 1e-4);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_weld_collapses_pole_quad_to_triangle() {
        let vertices = vec![
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let mesh = Mesh::from_parts(vertices, vec![], vec![vec![2, 0, 1, 3]]).unwrap();
        let welded = weld(&mesh, 1e-4);
        assert_eq!(welded.faces(), &[vec![1, 0, 2]]);
    }

    #[test]
    fn test_weld_collapses_wrap_around_duplicate() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::ZERO];
        let mesh = Mesh::from_parts(vertices, vec![], vec![vec![0, 1, 2, 3]]).unwrap();
        let welded = weld(&mesh, 1e-4);
        assert_eq!(welded.faces(), &[vec![0, 1, 2]]);
    }

    #[test]
    fn test_weld_drops_degenerate_faces() {
        let vertices = vec![DVec3::ZERO, DVec3::new(1e-6, 0.0, 0.0), DVec3::Y];
        let mesh = Mesh::from_parts(vertices, vec![], vec![vec![0, 1, 2]]).unwrap();
        let welded = weld(&mesh, 1e-4);
        assert_eq!(welded.face_count(), 0);
        assert_eq!(welded.vertex_count(), 2);
    }

    #[test]
    fn test_weld_dedupes_edges() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::X, DVec3::Y];
        let edges = vec![[0, 1], [2, 0], [1, 2], [1, 3]];
        let mesh = Mesh::from_parts(vertices, edges, vec![]).unwrap();
        let welded = weld(&mesh, 1e-4);
        assert_eq!(welded.edges(), &[[0, 1], [1, 2]]);
    }

    #[test]
    fn test_weld_keeps_unreferenced_vertices() {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::splat(5.0)];
        let mesh = Mesh::from_parts(vertices, vec![], vec![vec![0, 1, 2]]).unwrap();
        assert_eq!(weld(&mesh, 1e-4).vertex_count(), 4);
    }

    #[test]
    fn test_weld_respects_threshold() {
        let vertices = vec![DVec3::ZERO, DVec3::new(0.01, 0.0, 0.0)];
        let mesh = Mesh::from_parts(vertices, vec![], vec![]).unwrap();
        assert_eq!(weld(&mesh, 1e-4).vertex_count(), 2);
        assert_eq!(weld(&mesh, 0.1).vertex_count(), 1);
    }

    #[test]
    fn test_weld_clamps_tiny_epsilon() {
        let vertices = vec![DVec3::ZERO, DVec3::ZERO];
        let mesh = Mesh::from_parts(vertices, vec![], vec![]).unwrap();
        assert_eq!(weld(&mesh, 0.0).vertex_count(), 1);
        assert_eq!(weld(&mesh, f64::NAN).vertex_count(), 1);
    }

    #[test]
    fn test_weld_empty_mesh() {
        assert!(weld(&Mesh::new(), 1e-4).is_empty());
    }
}
