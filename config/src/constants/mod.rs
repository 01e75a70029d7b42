//! Centralized configuration values shared across the ArchLab mesh engine.
//!
//! Each public item in this module documents its purpose so that generator
//! code can stay declarative and avoid scattering literals. Defaults mirror
//! the property defaults the host editor exposes for each primitive.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Default merge distance for the weld pass.
///
/// Vertices closer than this are collapsed into one. Matches the host
/// editor's "remove doubles" default.
///
/// ```rust
/// use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
/// assert!(VERTEX_MERGE_EPSILON > EPSILON);
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-4;

/// Extra inset applied to the shelf's interior ledge so it never shares a
/// plane with the outer shell.
pub const SHELF_INSET_EPSILON: f64 = 0.001;

// =============================================================================
// PARAMETER LIMITS
// =============================================================================

/// Minimum longitudinal segments for spheres and plates.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum longitudinal segments for spheres and plates.
pub const MAX_SEGMENTS: u32 = 1000;

/// Minimum latitude rings for UV spheres.
pub const MIN_RINGS: u32 = 2;

/// Maximum latitude rings for UV spheres.
pub const MAX_RINGS: u32 = 1000;

/// Minimum ICO sphere subdivision level (1 = bare icosahedron).
pub const MIN_SUBDIVISIONS: u32 = 1;

/// Maximum ICO sphere subdivision level.
///
/// Level 10 already yields `20 * 4^9` (about 5.2 million) faces.
pub const MAX_SUBDIVISIONS: u32 = 10;

/// Minimum vertex count for circles.
pub const MIN_CIRCLE_VERTICES: u32 = 3;

// =============================================================================
// GENERATOR DEFAULTS
// =============================================================================

/// Default edge length for cubes and planes.
pub const DEFAULT_CUBE_SIZE: f64 = 1.0;

/// Default sphere radius.
pub const DEFAULT_SPHERE_RADIUS: f64 = 1.0;

/// Default UV sphere segment count.
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 32;

/// Default UV sphere ring count.
pub const DEFAULT_SPHERE_RINGS: u32 = 16;

/// Default ICO sphere subdivision level.
pub const DEFAULT_ICO_SUBDIVISIONS: u32 = 2;

/// Default circle vertex count.
pub const DEFAULT_CIRCLE_VERTICES: u32 = 32;

/// Default wall segment width.
pub const DEFAULT_WALL_WIDTH: f64 = 1.0;

/// Default wall and room height.
pub const DEFAULT_WALL_HEIGHT: f64 = 2.5;

/// Default wall and room thickness.
pub const DEFAULT_WALL_THICKNESS: f64 = 0.025;

/// Default shelf dimensions as (width, height, depth).
pub const DEFAULT_SHELF_SIZE: (f64, f64, f64) = (0.60, 0.65, 0.40);

/// Default shelf board thickness.
pub const DEFAULT_SHELF_THICKNESS: f64 = 0.015;

/// Library shape used by the plate generator.
pub const DEFAULT_PLATE_SHAPE: &str = "Plate02";

/// Default plate radius.
pub const DEFAULT_PLATE_RADIUS: f64 = 0.21;

/// Default plate height.
pub const DEFAULT_PLATE_HEIGHT: f64 = 0.03;

/// Default plate segment count.
pub const DEFAULT_PLATE_SEGMENTS: u32 = 16;

// =============================================================================
// SOLIDIFY CONSTANTS
// =============================================================================

/// Default solidify offset.
///
/// `-1.0` keeps the source surface in place and grows the shell entirely
/// behind it, opposite the face normals.
pub const DEFAULT_THICKEN_OFFSET: f64 = -1.0;

/// Upper bound on the miter scale applied to even-offset vertex normals.
///
/// Very sharp corners would otherwise push vertices arbitrarily far.
///
/// ```rust
/// use config::constants::DEFAULT_MITER_LIMIT;
/// assert!(DEFAULT_MITER_LIMIT >= 1.0);
/// ```
pub const DEFAULT_MITER_LIMIT: f64 = 4.0;

/// Immutable snapshot of the post-processing settings shared by the
/// regeneration pipeline.
///
/// # Examples
/// ```
/// use config::constants::MeshConfig;
/// let config = MeshConfig::default();
/// assert!(config.weld_distance > 0.0);
/// assert!(!config.orient_inside);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    /// Merge distance used by the weld pass.
    pub weld_distance: f64,
    /// Maximum miter scale for even-offset solidify.
    pub miter_limit: f64,
    /// Orient faces towards the inside instead of the outside.
    pub orient_inside: bool,
}

impl MeshConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MeshConfig;
    /// let cfg = MeshConfig::new(1.0e-3, 2.0, false).expect("valid config");
    /// assert_eq!(cfg.miter_limit, 2.0);
    /// ```
    pub fn new(weld_distance: f64, miter_limit: f64, orient_inside: bool) -> Result<Self, ConfigError> {
        if weld_distance.is_nan() || weld_distance <= 0.0 {
            return Err(ConfigError::InvalidWeldDistance(weld_distance));
        }
        if miter_limit.is_nan() || miter_limit < 1.0 {
            return Err(ConfigError::InvalidMiterLimit(miter_limit));
        }
        Ok(Self {
            weld_distance,
            miter_limit,
            orient_inside,
        })
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            weld_distance: VERTEX_MERGE_EPSILON,
            miter_limit: DEFAULT_MITER_LIMIT,
            orient_inside: false,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the weld distance is zero, negative or NaN.
    InvalidWeldDistance(f64),
    /// Raised when the miter limit is below 1 or NaN.
    InvalidMiterLimit(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeldDistance(value) => {
                write!(f, "weld_distance must be positive: {value}")
            }
            ConfigError::InvalidMiterLimit(value) => {
                write!(f, "miter_limit must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
