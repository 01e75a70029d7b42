//! # Solidify Tests
//!
//! Tests for surface thickening.

use super::*;
use crate::params::{CubeParams, PlaneParams, WallParams};
use crate::primitives::{create_cube, create_plane, create_wall};
use approx::assert_relative_eq;

fn plane(width: f64, height: f64) -> Mesh {
    create_plane(&PlaneParams {
        width,
        height,
        thickness: 0.0,
    })
    .unwrap()
}

#[test]
fn test_thicken_plane_counts() {
    let shell = thicken(&plane(1.0, 1.0), &ThickenSpec::new(0.1)).unwrap();
    assert_eq!(shell.vertex_count(), 8);
    assert_eq!(shell.face_count(), 6);
    assert!(shell.validate());
}

#[test]
fn test_thicken_plane_grows_behind_surface() {
    let shell = thicken(&plane(2.0, 3.0), &ThickenSpec::new(0.1)).unwrap();
    let (min, max) = shell.bounding_box();
    assert_relative_eq!(min.z, -0.1, epsilon = 1e-12);
    assert_relative_eq!(max.z, 0.0, epsilon = 1e-12);
    assert_relative_eq!(shell.signed_volume(), 0.6, epsilon = 1e-12);
}

#[test]
fn test_thicken_plane_faces_outward() {
    let shell = thicken(&plane(1.0, 1.0), &ThickenSpec::new(0.2)).unwrap();
    let centre = DVec3::new(0.0, 0.0, -0.1);
    for i in 0..shell.face_count() {
        let outward = shell.face_centroid(i) - centre;
        assert!(shell.face_normal(i).dot(outward) > 0.0, "face {i} points inward");
    }
}

#[test]
fn test_thicken_centred_offset() {
    let spec = ThickenSpec::new(0.2).with_offset(0.0);
    let shell = thicken(&plane(1.0, 1.0), &spec).unwrap();
    let (min, max) = shell.bounding_box();
    assert_relative_eq!(min.z, -0.1, epsilon = 1e-12);
    assert_relative_eq!(max.z, 0.1, epsilon = 1e-12);
    // Neither layer coincides with the surface, so both get fresh vertices.
    assert_eq!(shell.vertex_count(), 8);
}

#[test]
fn test_thicken_front_offset() {
    let spec = ThickenSpec::new(0.2).with_offset(1.0);
    let shell = thicken(&plane(1.0, 1.0), &spec).unwrap();
    let (min, max) = shell.bounding_box();
    assert_relative_eq!(min.z, 0.0, epsilon = 1e-12);
    assert_relative_eq!(max.z, 0.2, epsilon = 1e-12);
    assert!(shell.signed_volume() > 0.0);
}

#[test]
fn test_zero_thickness_is_identity() {
    let surface = plane(1.0, 1.0);
    let result = thicken(&surface, &ThickenSpec::new(0.0)).unwrap();
    assert_eq!(result, surface);
}

#[test]
fn test_thicken_replaces_previous_shell() {
    let surface = plane(1.0, 2.0);
    let once = thicken(&surface, &ThickenSpec::new(0.3)).unwrap();
    let again = thicken(&once, &ThickenSpec::new(0.1)).unwrap();
    let direct = thicken(&surface, &ThickenSpec::new(0.1)).unwrap();
    assert_eq!(again, direct);

    let cleared = thicken(&once, &ThickenSpec::new(0.0)).unwrap();
    assert_eq!(cleared, surface);
}

#[test]
fn test_closed_cube_has_no_rim() {
    let cube = create_cube(&CubeParams::default()).unwrap();
    let shell = thicken(&cube, &ThickenSpec::new(0.1)).unwrap();
    assert_eq!(shell.face_count(), 12);
    assert_eq!(shell.vertex_count(), 16);
    // Even offset keeps the inner cube square: 1 - 0.8^3.
    assert_relative_eq!(shell.signed_volume(), 0.488, epsilon = 1e-9);
}

#[test]
fn test_cube_inner_corner_mitered() {
    let cube = create_cube(&CubeParams::default()).unwrap();
    let shell = thicken(&cube, &ThickenSpec::new(0.1)).unwrap();
    let inner = shell.vertex(8);
    assert_relative_eq!(inner.x, -0.4, epsilon = 1e-12);
    assert_relative_eq!(inner.y, -0.4, epsilon = 1e-12);
    assert_relative_eq!(inner.z, -0.4, epsilon = 1e-12);
}

#[test]
fn test_uneven_offset_splits_corners() {
    let cube = create_cube(&CubeParams::default()).unwrap();
    let spec = ThickenSpec::new(0.1).with_even_offset(false);
    let shell = thicken(&cube, &spec).unwrap();
    // Front layer reuses the 8 corners, back layer has 4 per face.
    assert_eq!(shell.vertex_count(), 8 + 24);
    assert_eq!(shell.face_count(), 12);
}

#[test]
fn test_uneven_wall_thickness_uniform() {
    let wall = create_wall(&WallParams {
        width: 2.0,
        height: 2.0,
        thickness: 0.0,
    })
    .unwrap();
    let spec = ThickenSpec::new(0.05).with_even_offset(false);
    let shell = thicken(&wall, &spec).unwrap();
    let (min, max) = shell.bounding_box();
    assert_relative_eq!(max.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(min.y, -0.05, epsilon = 1e-12);
    assert_eq!(shell.face_count(), 6);
}

#[test]
fn test_miter_scale_clamped() {
    let cube = create_cube(&CubeParams::default()).unwrap();
    let normals: Vec<DVec3> = (0..cube.face_count()).map(|i| cube.face_normal(i)).collect();

    let free = mitered_vertex_normals(&cube, &normals, 4.0);
    assert_relative_eq!(free[0].length(), 3f64.sqrt(), epsilon = 1e-12);

    let clamped = mitered_vertex_normals(&cube, &normals, 1.5);
    assert_relative_eq!(clamped[0].length(), 1.5, epsilon = 1e-12);
}

#[test]
fn test_unreferenced_vertex_stays_put() {
    let mut surface = plane(1.0, 1.0);
    surface.add_vertex(DVec3::new(9.0, 9.0, 9.0));
    let normals = vec![surface.face_normal(0)];
    let directions = mitered_vertex_normals(&surface, &normals, 4.0);
    assert_eq!(directions[4], DVec3::ZERO);
}

#[test]
fn test_wire_edges_kept_on_front_layer() {
    let mut surface = plane(1.0, 1.0);
    surface.add_edge(0, 3);
    let shell = thicken(&surface, &ThickenSpec::new(0.1)).unwrap();
    assert_eq!(shell.edges(), &[[0, 3]]);
    assert_eq!(shell.vertex(0), surface.vertex(0));
    assert_eq!(shell.vertex(3), surface.vertex(3));
    assert!(shell.validate());
}

#[test]
fn test_wire_edges_copied_when_front_layer_moves() {
    let mut surface = plane(1.0, 1.0);
    surface.add_edge(0, 3);
    surface.add_edge(3, 1);
    let spec = ThickenSpec::new(0.1)
        .with_offset(1.0)
        .with_even_offset(false);
    let shell = thicken(&surface, &spec).unwrap();
    // Two layers of 4 face corners, plus one copy per wire endpoint.
    assert_eq!(shell.vertex_count(), 8 + 3);
    assert_eq!(shell.edges(), &[[8, 9], [9, 10]]);
    assert_eq!(shell.vertex(8), surface.vertex(0));
    assert_eq!(shell.vertex(9), surface.vertex(3));
    assert_eq!(shell.vertex(10), surface.vertex(1));
}

#[test]
fn test_thicken_empty_mesh() {
    let result = thicken(&Mesh::new(), &ThickenSpec::new(0.1)).unwrap();
    assert!(result.is_empty());
    assert!(result.shell_source().is_none());
}

#[test]
fn test_thicken_rejects_bad_offset() {
    let err = thicken(&plane(1.0, 1.0), &ThickenSpec::new(0.1).with_offset(-2.0)).unwrap_err();
    assert_eq!(err.field(), Some("offset"));
}
