//! Edge adjacency for polygon meshes.
//!
//! Records, for every undirected edge, which faces use it and in which
//! direction. Keys are kept in a `BTreeMap` so that every iteration order is
//! deterministic.

use std::collections::BTreeMap;

/// One face's use of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeUse {
    /// Face index.
    pub face: usize,
    /// True when the face walks the edge from its lower to its higher vertex.
    pub forward: bool,
}

/// Edge-to-face adjacency of a polygon mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshAdjacency {
    /// Maps edge (v0, v1) with v0 < v1 to the faces using it.
    edge_to_faces: BTreeMap<(u32, u32), Vec<EdgeUse>>,
}

/// Iterates the directed edges of a face loop, including the closing edge.
pub fn face_edges(face: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
    face.iter()
        .zip(face.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
}

fn normalize_edge(v0: u32, v1: u32) -> (u32, u32) {
    if v0 < v1 {
        (v0, v1)
    } else {
        (v1, v0)
    }
}

impl MeshAdjacency {
    /// Builds adjacency from polygon faces.
    ///
    /// Degenerate edges (both ends on the same vertex) are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use archlab_mesh::ops::MeshAdjacency;
    ///
    /// let faces = vec![vec![0, 1, 2], vec![1, 3, 2]];
    /// let adj = MeshAdjacency::build(&faces);
    ///
    /// assert_eq!(adj.boundary_edge_count(), 4);
    /// ```
    pub fn build(faces: &[Vec<u32>]) -> Self {
        let mut edge_to_faces: BTreeMap<(u32, u32), Vec<EdgeUse>> = BTreeMap::new();

        for (face_idx, face) in faces.iter().enumerate() {
            for (a, b) in face_edges(face) {
                if a == b {
                    continue;
                }
                edge_to_faces
                    .entry(normalize_edge(a, b))
                    .or_default()
                    .push(EdgeUse {
                        face: face_idx,
                        forward: a < b,
                    });
            }
        }

        Self { edge_to_faces }
    }

    /// Returns the faces using an edge, in either direction.
    pub fn faces_for_edge(&self, v0: u32, v1: u32) -> &[EdgeUse] {
        self.edge_to_faces
            .get(&normalize_edge(v0, v1))
            .map_or(&[], Vec::as_slice)
    }

    /// True when exactly one face uses the edge.
    pub fn is_boundary_edge(&self, v0: u32, v1: u32) -> bool {
        self.faces_for_edge(v0, v1).len() == 1
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_to_faces.len()
    }

    /// Count the number of boundary edges.
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_to_faces
            .values()
            .filter(|uses| uses.len() == 1)
            .count()
    }

    /// Iterate over all non-manifold edges (edges with more than two adjacent faces).
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edge_to_faces
            .iter()
            .filter(|(_, uses)| uses.len() > 2)
            .map(|(&edge, _)| edge)
    }

    /// Count the number of non-manifold edges.
    pub fn non_manifold_edge_count(&self) -> usize {
        self.non_manifold_edges().count()
    }
}
