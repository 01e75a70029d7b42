//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_shelf_inset_exceeds_merge_distance() {
    // The ledge inset must survive a default weld pass.
    assert!(SHELF_INSET_EPSILON > VERTEX_MERGE_EPSILON);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_limits_are_ordered() {
    assert!(MIN_SEGMENTS <= MAX_SEGMENTS);
    assert!(MIN_RINGS <= MAX_RINGS);
    assert!(MIN_SUBDIVISIONS <= MAX_SUBDIVISIONS);
}

#[test]
fn test_defaults_within_limits() {
    assert!((MIN_SEGMENTS..=MAX_SEGMENTS).contains(&DEFAULT_SPHERE_SEGMENTS));
    assert!((MIN_RINGS..=MAX_RINGS).contains(&DEFAULT_SPHERE_RINGS));
    assert!((MIN_SUBDIVISIONS..=MAX_SUBDIVISIONS).contains(&DEFAULT_ICO_SUBDIVISIONS));
    assert!((MIN_SEGMENTS..=MAX_SEGMENTS).contains(&DEFAULT_PLATE_SEGMENTS));
    assert!(DEFAULT_CIRCLE_VERTICES >= MIN_CIRCLE_VERTICES);
}

#[test]
fn test_default_offset_is_one_sided() {
    assert_eq!(DEFAULT_THICKEN_OFFSET.abs(), 1.0);
}

// =============================================================================
// HELPER FUNCTION TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-9));
}
