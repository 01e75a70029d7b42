//! Consistent face orientation ("recalculate normals").

use crate::mesh::Mesh;
use crate::ops::adjacency::{face_edges, MeshAdjacency};
use config::constants::EPSILON;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Which side of the surface face normals should point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Outside,
    Inside,
}

/// Reverses a face loop while keeping its first corner in place.
pub(crate) fn reverse_face(face: &mut [u32]) {
    if face.len() > 1 {
        face[1..].reverse();
    }
}

/// Makes face windings consistent and points them outward (or inward).
///
/// # Algorithm
///
/// 1. Flood fill each connected component over shared edges, flipping any
///    neighbour that walks the shared edge in the same direction as the
///    face it was reached from.
/// 2. Flip the whole component if its signed volume, measured from the
///    component's mean corner position, is negative.
/// 3. With [`Orientation::Inside`], flip everything.
///
/// Non-orientable or non-manifold input is tolerated: the fill takes the
/// first direction it reaches a face with, and non-manifold edges are
/// reported at warn level. Open surfaces with no enclosed volume keep the
/// winding of their first face.
pub fn orient_normals(mesh: &Mesh, orientation: Orientation) -> Mesh {
    let faces = mesh.faces();
    let adjacency = MeshAdjacency::build(faces);

    let non_manifold = adjacency.non_manifold_edge_count();
    if non_manifold > 0 {
        log::warn!("Orienting mesh with {non_manifold} non-manifold edges");
    }

    let mut flipped = vec![false; faces.len()];
    let mut visited = vec![false; faces.len()];
    let mut queue = VecDeque::new();
    let mut components = 0usize;

    for seed in 0..faces.len() {
        if visited[seed] {
            continue;
        }
        components += 1;
        visited[seed] = true;
        queue.push_back(seed);
        let mut component = Vec::new();

        while let Some(face) = queue.pop_front() {
            component.push(face);
            for (a, b) in face_edges(&faces[face]) {
                if a == b {
                    continue;
                }
                let direction = (a < b) ^ flipped[face];
                for edge_use in adjacency.faces_for_edge(a, b) {
                    let neighbor = edge_use.face;
                    if visited[neighbor] {
                        continue;
                    }
                    visited[neighbor] = true;
                    flipped[neighbor] = edge_use.forward == direction;
                    queue.push_back(neighbor);
                }
            }
        }

        if component_volume(mesh, &component, &flipped) < -EPSILON {
            for &face in &component {
                flipped[face] = !flipped[face];
            }
        }
    }

    let inside = orientation == Orientation::Inside;
    let mut flip_count = 0usize;
    let oriented: Vec<Vec<u32>> = faces
        .iter()
        .zip(&flipped)
        .map(|(face, &flip)| {
            let mut face = face.clone();
            if flip {
                flip_count += 1;
            }
            if flip ^ inside {
                reverse_face(&mut face);
            }
            face
        })
        .collect();

    log::debug!(
        "Oriented {} faces in {} components, {} flipped",
        faces.len(),
        components,
        flip_count
    );

    Mesh::from_parts_unchecked(mesh.vertices().to_vec(), mesh.edges().to_vec(), oriented)
}

/// Signed volume of a component's faces, with the given flips applied,
/// measured from the mean of their corners.
fn component_volume(mesh: &Mesh, component: &[usize], flipped: &[bool]) -> f64 {
    let corners: usize = component.iter().map(|&f| mesh.face(f).len()).sum();
    if corners == 0 {
        return 0.0;
    }
    let centre = component
        .iter()
        .flat_map(|&f| mesh.face(f).iter())
        .map(|&v| mesh.vertex(v))
        .sum::<DVec3>()
        / corners as f64;

    let mut volume = 0.0;
    for &f in component {
        let face = mesh.face(f);
        let origin = mesh.vertex(face[0]) - centre;
        for pair in face[1..].windows(2) {
            let b = mesh.vertex(pair[0]) - centre;
            let c = mesh.vertex(pair[1]) - centre;
            let contribution = origin.dot(b.cross(c));
            volume += if flipped[f] { -contribution } else { contribution };
        }
    }
    volume / 6.0
}
