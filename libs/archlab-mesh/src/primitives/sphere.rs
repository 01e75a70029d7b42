//! # Sphere Primitive
//!
//! Generates spheres either as a latitude/longitude grid (UV) or as a
//! subdivided icosahedron (ICO).

use crate::error::MeshError;
use crate::math::{midpoint, normalize_to_sphere, rotate_3d};
use crate::mesh::Mesh;
use crate::params::{SphereKind, SphereParams};
use glam::DVec3;

/// Creates a sphere mesh centred on the origin.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::params::SphereParams;
/// use archlab_mesh::primitives::create_sphere;
///
/// let mesh = create_sphere(&SphereParams::ico(1.0, 2)).unwrap();
/// assert_eq!(mesh.face_count(), 80);
/// ```
pub fn create_sphere(params: &SphereParams) -> Result<Mesh, MeshError> {
    params.validate()?;

    let mesh = match params.kind {
        SphereKind::Uv => uv_sphere(params.radius, params.segments, params.rings),
        SphereKind::Ico => ico_sphere(params.radius, params.subdivisions),
    };

    log::debug!(
        "Generated {:?} sphere: {} vertices, {} faces",
        params.kind,
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}

/// Latitude/longitude grid.
///
/// # Algorithm
///
/// - `rings + 1` latitude steps from the north pole (ring 0) to the south
///   pole, each with `segments` vertices
/// - vertex `(ring, seg)` is the pole point tipped by `ring * 180 / rings`
///   degrees about X, then spun by `seg * 360 / segments` degrees about Z
/// - one quad per grid cell below ring 0, wrapping in longitude
///
/// The pole rows are kept as coincident vertices, so the pole quads are
/// degenerate until welded into triangles.
fn uv_sphere(radius: f64, segments: u32, rings: u32) -> Mesh {
    let pole = DVec3::new(0.0, 0.0, radius);
    let mut mesh = Mesh::with_capacity(
        ((rings + 1) * segments) as usize,
        (rings * segments) as usize,
    );

    for ring in 0..=rings {
        let latitude = f64::from(ring) * 180.0 / f64::from(rings);
        for seg in 0..segments {
            let longitude = f64::from(seg) * 360.0 / f64::from(segments);
            mesh.add_vertex(rotate_3d(pole, latitude, longitude));
        }
    }

    for ring in 1..=rings {
        let row = ring * segments;
        let above = (ring - 1) * segments;
        for seg in 0..segments {
            let prev = (seg + segments - 1) % segments;
            mesh.add_face(&[row + seg, above + seg, above + prev, row + prev]);
        }
    }

    mesh
}

/// Subdivided icosahedron.
///
/// Level 1 is the bare icosahedron; every further level splits each
/// triangle into four. New midpoints are pushed per face and never shared,
/// leaving coincident vertices along the old edges for the weld pass.
fn ico_sphere(radius: f64, subdivisions: u32) -> Mesh {
    let mut mesh = icosahedron(radius);

    for _ in 1..subdivisions {
        let (mut vertices, _, faces) = mesh.into_parts();
        let mut subdivided = Vec::with_capacity(faces.len() * 4);

        for face in &faces {
            let [a, b, c] = [face[0], face[1], face[2]];
            let mut split = |p: u32, q: u32| {
                let m = midpoint(vertices[p as usize], vertices[q as usize]);
                vertices.push(normalize_to_sphere(m, radius));
                (vertices.len() - 1) as u32
            };
            let ab = split(a, b);
            let bc = split(b, c);
            let ca = split(c, a);

            subdivided.push(vec![a, ab, ca]);
            subdivided.push(vec![ab, b, bc]);
            subdivided.push(vec![ca, bc, c]);
            subdivided.push(vec![ab, bc, ca]);
        }

        mesh = Mesh::from_parts_unchecked(vertices, Vec::new(), subdivided);
    }

    mesh
}

/// Regular icosahedron with vertices on the sphere of `radius`.
///
/// Vertex 0 is the north pole, 1..=5 the upper ring at 72 degree steps,
/// 6..=10 the lower ring offset by 36 degrees, and 11 the south pole.
fn icosahedron(radius: f64) -> Mesh {
    let inv_sqrt5 = 1.0 / 5f64.sqrt();
    let upper = DVec3::new(2.0 * inv_sqrt5, 0.0, inv_sqrt5) * radius;
    let lower = DVec3::new(2.0 * inv_sqrt5, 0.0, -inv_sqrt5) * radius;

    let mut mesh = Mesh::with_capacity(12, 20);
    mesh.add_vertex(DVec3::new(0.0, 0.0, radius));
    for k in 0..5 {
        mesh.add_vertex(rotate_3d(upper, 0.0, 72.0 * f64::from(k)));
    }
    for k in 0..5 {
        mesh.add_vertex(rotate_3d(lower, 0.0, 36.0 + 72.0 * f64::from(k)));
    }
    mesh.add_vertex(DVec3::new(0.0, 0.0, -radius));

    for k in 0..5u32 {
        let n = (k + 1) % 5;
        mesh.add_face(&[0, 1 + k, 1 + n]);
        mesh.add_face(&[1 + k, 6 + k, 1 + n]);
        mesh.add_face(&[6 + k, 6 + n, 1 + n]);
        mesh.add_face(&[11, 6 + n, 6 + k]);
    }

    mesh
}
