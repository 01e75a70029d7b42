//! # Circle Primitive
//!
//! Flat circles in the XY plane with three fill modes.

use crate::error::MeshError;
use crate::math::rotate_2d;
use crate::mesh::Mesh;
use crate::params::{CircleFill, CircleParams};
use glam::DVec3;

/// Creates a circle facing +Z.
///
/// Rim vertex `i` sits at `360 * i / vertices` degrees, starting on +X.
///
/// - [`CircleFill::Ngon`]: one face over all rim vertices.
/// - [`CircleFill::TriangleFan`]: vertex 0 is the centre, followed by the rim,
///   with one triangle per rim edge.
/// - [`CircleFill::Wire`]: rim vertices joined by edges, no faces.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::params::{CircleFill, CircleParams};
/// use archlab_mesh::primitives::create_circle;
///
/// let params = CircleParams { radius: 1.0, vertices: 8, fill: CircleFill::TriangleFan };
/// let mesh = create_circle(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.face_count(), 8);
/// ```
pub fn create_circle(params: &CircleParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let n = params.vertices;
    let mut mesh = Mesh::with_capacity(n as usize + 1, n as usize);

    if params.fill == CircleFill::TriangleFan {
        mesh.add_vertex(DVec3::ZERO);
    }
    for i in 0..n {
        let p = rotate_2d(params.radius, 0.0, 360.0 * f64::from(i) / f64::from(n));
        mesh.add_vertex(p.extend(0.0));
    }

    match params.fill {
        CircleFill::Ngon => {
            let face: Vec<u32> = (0..n).collect();
            mesh.add_face(&face);
        }
        CircleFill::TriangleFan => {
            for t in 0..n {
                mesh.add_face(&[0, t + 1, (t + 1) % n + 1]);
            }
        }
        CircleFill::Wire => {
            for i in 0..n {
                mesh.add_edge(i, (i + 1) % n);
            }
        }
    }

    log::debug!(
        "Generated circle ({:?}): {} vertices, {} faces, {} edges",
        params.fill,
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.edge_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn circle(fill: CircleFill, vertices: u32) -> Mesh {
        create_circle(&CircleParams {
            radius: 2.0,
            vertices,
            fill,
        })
        .unwrap()
    }

    #[test]
    fn test_ngon_single_face() {
        let mesh = circle(CircleFill::Ngon, 6);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.faces(), &[vec![0, 1, 2, 3, 4, 5]]);
        assert!(mesh.face_normal(0).z > 0.99);
    }

    #[test]
    fn test_fan_wraps_to_first_rim_vertex() {
        let mesh = circle(CircleFill::TriangleFan, 4);
        assert_eq!(mesh.vertex(0), DVec3::ZERO);
        assert_eq!(mesh.face(0), &[0, 1, 2]);
        assert_eq!(mesh.face(3), &[0, 4, 1]);
        for i in 0..mesh.face_count() {
            assert!(mesh.face_normal(i).z > 0.99);
        }
    }

    #[test]
    fn test_wire_has_edges_only() {
        let mesh = circle(CircleFill::Wire, 5);
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.edge_count(), 5);
        assert_eq!(mesh.edges()[4], [4, 0]);
    }

    #[test]
    fn test_rim_on_radius() {
        let mesh = circle(CircleFill::Ngon, 32);
        assert_relative_eq!(mesh.vertex(0).x, 2.0);
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), 2.0, epsilon = 1e-12);
            assert_eq!(v.z, 0.0);
        }
    }

    #[test]
    fn test_circle_minimum_vertices() {
        let err = create_circle(&CircleParams {
            radius: 1.0,
            vertices: 2,
            fill: CircleFill::Ngon,
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("vertices"));
    }
}
