//! # Shape Parameters
//!
//! Value objects describing each primitive, as handed over by the host.
//! Parameters are immutable for the duration of one generation call and are
//! validated before any geometry is computed.

use crate::error::MeshError;
use config::constants::{
    DEFAULT_CIRCLE_VERTICES, DEFAULT_CUBE_SIZE, DEFAULT_ICO_SUBDIVISIONS, DEFAULT_MITER_LIMIT,
    DEFAULT_PLATE_HEIGHT, DEFAULT_PLATE_RADIUS, DEFAULT_PLATE_SEGMENTS, DEFAULT_PLATE_SHAPE,
    DEFAULT_SHELF_SIZE, DEFAULT_SHELF_THICKNESS, DEFAULT_SPHERE_RADIUS, DEFAULT_SPHERE_RINGS,
    DEFAULT_SPHERE_SEGMENTS, DEFAULT_THICKEN_OFFSET, DEFAULT_WALL_HEIGHT, DEFAULT_WALL_THICKNESS,
    DEFAULT_WALL_WIDTH, MAX_RINGS, MAX_SEGMENTS, MAX_SUBDIVISIONS, MIN_CIRCLE_VERTICES, MIN_RINGS,
    MIN_SEGMENTS, MIN_SUBDIVISIONS,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// VALIDATION HELPERS
// =============================================================================

/// Fails unless `value` is a finite, strictly positive length.
pub(crate) fn require_positive(field: &str, value: f64) -> Result<(), MeshError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            field,
            format!("must be positive, got {value}"),
        ))
    }
}

/// Fails unless `value` is finite and not negative.
pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<(), MeshError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            field,
            format!("must not be negative, got {value}"),
        ))
    }
}

/// Fails unless `value` is finite.
pub(crate) fn require_finite(field: &str, value: f64) -> Result<(), MeshError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(
            field,
            format!("must be finite, got {value}"),
        ))
    }
}

/// Fails unless `min <= value <= max`.
pub(crate) fn require_count(field: &str, value: u32, min: u32, max: u32) -> Result<(), MeshError> {
    if value < min {
        return Err(MeshError::invalid_parameter(
            field,
            format!("must be at least {min}, got {value}"),
        ));
    }
    if value > max {
        return Err(MeshError::invalid_parameter(
            field,
            format!("must be at most {max}, got {value}"),
        ));
    }
    Ok(())
}

// =============================================================================
// PRIMITIVE PARAMETERS
// =============================================================================

/// Flat rectangle in the XY plane, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneParams {
    pub width: f64,
    pub height: f64,
    /// Solidify thickness; 0 leaves a flat surface.
    #[serde(default)]
    pub thickness: f64,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_CUBE_SIZE,
            height: DEFAULT_CUBE_SIZE,
            thickness: 0.0,
        }
    }
}

impl PlaneParams {
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_non_negative("thickness", self.thickness)
    }
}

/// Axis-aligned box centred on the origin. `height` runs along Z and
/// `depth` along Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeParams {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_CUBE_SIZE,
            height: DEFAULT_CUBE_SIZE,
            depth: DEFAULT_CUBE_SIZE,
        }
    }
}

impl CubeParams {
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("depth", self.depth)
    }
}

/// Single wall panel anchored at the origin and running along +X.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallParams {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub thickness: f64,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WALL_WIDTH,
            height: DEFAULT_WALL_HEIGHT,
            thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

impl WallParams {
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_non_negative("thickness", self.thickness)
    }
}

/// One wall of a room: its length and the turn taken before walking it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub width: f64,
    /// Turn relative to the previous wall's heading, in degrees
    /// (positive = counter-clockwise seen from above).
    #[serde(default)]
    pub turn_angle: f64,
}

impl WallSegment {
    pub fn new(width: f64, turn_angle: f64) -> Self {
        Self { width, turn_angle }
    }
}

impl Default for WallSegment {
    fn default() -> Self {
        Self::new(DEFAULT_WALL_WIDTH, 0.0)
    }
}

/// Room outline built from a chain of wall segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomParams {
    pub height: f64,
    #[serde(default)]
    pub walls: Vec<WallSegment>,
    #[serde(default)]
    pub wall_thickness: f64,
}

impl Default for RoomParams {
    fn default() -> Self {
        Self {
            height: DEFAULT_WALL_HEIGHT,
            walls: vec![WallSegment::default()],
            wall_thickness: DEFAULT_WALL_THICKNESS,
        }
    }
}

impl RoomParams {
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("height", self.height)?;
        require_non_negative("wall_thickness", self.wall_thickness)?;
        for (i, wall) in self.walls.iter().enumerate() {
            require_positive(&format!("walls[{i}].width"), wall.width)?;
            require_finite(&format!("walls[{i}].turn_angle"), wall.turn_angle)?;
        }
        Ok(())
    }
}

/// Open-fronted box with an interior ledge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShelfParams {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub thickness: f64,
}

impl Default for ShelfParams {
    fn default() -> Self {
        let (width, height, depth) = DEFAULT_SHELF_SIZE;
        Self {
            width,
            height,
            depth,
            thickness: DEFAULT_SHELF_THICKNESS,
        }
    }
}

impl ShelfParams {
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("width", self.width)?;
        require_positive("height", self.height)?;
        require_positive("depth", self.depth)?;
        require_non_negative("thickness", self.thickness)
    }
}

/// Plate sourced from the mesh library and scaled to size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateParams {
    /// Library shape name.
    #[serde(default = "default_plate_shape")]
    pub shape: String,
    pub radius: f64,
    pub height: f64,
    pub segments: u32,
}

fn default_plate_shape() -> String {
    DEFAULT_PLATE_SHAPE.to_string()
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            shape: default_plate_shape(),
            radius: DEFAULT_PLATE_RADIUS,
            height: DEFAULT_PLATE_HEIGHT,
            segments: DEFAULT_PLATE_SEGMENTS,
        }
    }
}

impl PlateParams {
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("radius", self.radius)?;
        require_positive("height", self.height)?;
        require_count("segments", self.segments, MIN_SEGMENTS, MAX_SEGMENTS)
    }
}

/// Sphere tessellation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SphereKind {
    /// Latitude/longitude grid.
    #[default]
    Uv,
    /// Subdivided icosahedron.
    Ico,
}

/// Sphere centred on the origin.
///
/// `segments` and `rings` drive the UV grid; `subdivisions` drives the ICO
/// refinement. Only the fields of the selected kind are validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    pub radius: f64,
    #[serde(default)]
    pub kind: SphereKind,
    pub segments: u32,
    pub rings: u32,
    pub subdivisions: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SPHERE_RADIUS,
            kind: SphereKind::Uv,
            segments: DEFAULT_SPHERE_SEGMENTS,
            rings: DEFAULT_SPHERE_RINGS,
            subdivisions: DEFAULT_ICO_SUBDIVISIONS,
        }
    }
}

impl SphereParams {
    /// UV sphere with the given grid resolution.
    pub fn uv(radius: f64, segments: u32, rings: u32) -> Self {
        Self {
            radius,
            kind: SphereKind::Uv,
            segments,
            rings,
            ..Self::default()
        }
    }

    /// ICO sphere with the given subdivision level.
    pub fn ico(radius: f64, subdivisions: u32) -> Self {
        Self {
            radius,
            kind: SphereKind::Ico,
            subdivisions,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("radius", self.radius)?;
        match self.kind {
            SphereKind::Uv => {
                require_count("segments", self.segments, MIN_SEGMENTS, MAX_SEGMENTS)?;
                require_count("rings", self.rings, MIN_RINGS, MAX_RINGS)
            }
            SphereKind::Ico => require_count(
                "subdivisions",
                self.subdivisions,
                MIN_SUBDIVISIONS,
                MAX_SUBDIVISIONS,
            ),
        }
    }
}

/// How a circle's interior is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircleFill {
    /// One n-gon face.
    #[default]
    Ngon,
    /// Centre vertex with a triangle per rim edge.
    TriangleFan,
    /// Rim edges only, no faces.
    Wire,
}

/// Circle in the XY plane, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleParams {
    pub radius: f64,
    pub vertices: u32,
    #[serde(default)]
    pub fill: CircleFill,
}

impl Default for CircleParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SPHERE_RADIUS,
            vertices: DEFAULT_CIRCLE_VERTICES,
            fill: CircleFill::Ngon,
        }
    }
}

impl CircleParams {
    pub fn validate(&self) -> Result<(), MeshError> {
        require_positive("radius", self.radius)?;
        require_count("vertices", self.vertices, MIN_CIRCLE_VERTICES, MAX_SEGMENTS)
    }
}

/// Parameters for any supported primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeParameters {
    Plane(PlaneParams),
    Cube(CubeParams),
    Wall(WallParams),
    Room(RoomParams),
    Shelf(ShelfParams),
    Plate(PlateParams),
    Sphere(SphereParams),
    Circle(CircleParams),
}

impl ShapeParameters {
    /// Validates the wrapped parameters.
    pub fn validate(&self) -> Result<(), MeshError> {
        match self {
            Self::Plane(p) => p.validate(),
            Self::Cube(p) => p.validate(),
            Self::Wall(p) => p.validate(),
            Self::Room(p) => p.validate(),
            Self::Shelf(p) => p.validate(),
            Self::Plate(p) => p.validate(),
            Self::Sphere(p) => p.validate(),
            Self::Circle(p) => p.validate(),
        }
    }

    /// Returns the solidify settings this shape asks for, if any.
    ///
    /// Rooms thicken without even offset: mitering breaks down on some wall
    /// angles.
    pub fn thicken_spec(&self) -> Option<ThickenSpec> {
        let (thickness, even_offset) = match self {
            Self::Plane(p) => (p.thickness, true),
            Self::Wall(p) => (p.thickness, true),
            Self::Room(p) => (p.wall_thickness, false),
            Self::Shelf(p) => (p.thickness, true),
            _ => return None,
        };
        (thickness > 0.0).then(|| ThickenSpec::new(thickness).with_even_offset(even_offset))
    }

    /// Short lowercase name of the primitive, used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Plane(_) => "plane",
            Self::Cube(_) => "cube",
            Self::Wall(_) => "wall",
            Self::Room(_) => "room",
            Self::Shelf(_) => "shelf",
            Self::Plate(_) => "plate",
            Self::Sphere(_) => "sphere",
            Self::Circle(_) => "circle",
        }
    }
}

// =============================================================================
// SOLIDIFY PARAMETERS
// =============================================================================

/// Settings for offset-thickening a surface into a shell.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::ThickenSpec;
///
/// let spec = ThickenSpec::new(0.1).with_offset(0.0);
/// assert_eq!(spec.front_distance(), 0.05);
/// assert_eq!(spec.back_distance(), -0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThickenSpec {
    /// Shell thickness; 0 disables thickening.
    pub thickness: f64,
    /// Where the shell sits relative to the surface, in [-1, 1]:
    /// -1 grows behind the surface, 1 grows in front, 0 is centred.
    #[serde(default = "default_offset")]
    pub offset: f64,
    /// Miter corners so the wall keeps a uniform thickness.
    #[serde(default = "default_even_offset")]
    pub even_offset: bool,
    /// Maximum miter scale for even offset.
    #[serde(default = "default_miter_limit")]
    pub miter_limit: f64,
}

fn default_offset() -> f64 {
    DEFAULT_THICKEN_OFFSET
}

fn default_even_offset() -> bool {
    true
}

fn default_miter_limit() -> f64 {
    DEFAULT_MITER_LIMIT
}

impl Default for ThickenSpec {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ThickenSpec {
    /// One-sided, even-offset shell of the given thickness.
    pub fn new(thickness: f64) -> Self {
        Self {
            thickness,
            offset: DEFAULT_THICKEN_OFFSET,
            even_offset: true,
            miter_limit: DEFAULT_MITER_LIMIT,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_even_offset(mut self, even_offset: bool) -> Self {
        self.even_offset = even_offset;
        self
    }

    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        require_non_negative("thickness", self.thickness)?;
        if !(-1.0..=1.0).contains(&self.offset) {
            return Err(MeshError::invalid_parameter(
                "offset",
                format!("must lie in [-1, 1], got {}", self.offset),
            ));
        }
        if self.miter_limit.is_nan() || self.miter_limit < 1.0 {
            return Err(MeshError::invalid_parameter(
                "miter_limit",
                format!("must be at least 1, got {}", self.miter_limit),
            ));
        }
        Ok(())
    }

    /// Displacement of the front surface along the normals.
    pub fn front_distance(&self) -> f64 {
        self.thickness * (self.offset + 1.0) * 0.5
    }

    /// Displacement of the back surface along the normals (never positive).
    pub fn back_distance(&self) -> f64 {
        self.thickness * (self.offset - 1.0) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let shapes = [
            ShapeParameters::Plane(PlaneParams::default()),
            ShapeParameters::Cube(CubeParams::default()),
            ShapeParameters::Wall(WallParams::default()),
            ShapeParameters::Room(RoomParams::default()),
            ShapeParameters::Shelf(ShelfParams::default()),
            ShapeParameters::Plate(PlateParams::default()),
            ShapeParameters::Sphere(SphereParams::default()),
            ShapeParameters::Circle(CircleParams::default()),
        ];
        for shape in &shapes {
            assert!(shape.validate().is_ok(), "{} defaults invalid", shape.kind_name());
        }
    }

    #[test]
    fn test_invalid_length_names_field() {
        let params = CubeParams {
            width: 1.0,
            height: -2.0,
            depth: 1.0,
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.field(), Some("height"));
    }

    #[test]
    fn test_nan_length_rejected() {
        let params = PlaneParams {
            width: f64::NAN,
            ..PlaneParams::default()
        };
        assert_eq!(params.validate().unwrap_err().field(), Some("width"));
    }

    #[test]
    fn test_sphere_validates_only_selected_kind() {
        let mut uv = SphereParams::uv(1.0, 2, 8);
        assert_eq!(uv.validate().unwrap_err().field(), Some("segments"));
        uv.segments = 3;
        uv.rings = 1;
        assert_eq!(uv.validate().unwrap_err().field(), Some("rings"));

        // UV fields are ignored for ICO spheres.
        let mut ico = SphereParams::ico(1.0, 0);
        ico.segments = 0;
        assert_eq!(ico.validate().unwrap_err().field(), Some("subdivisions"));
        ico.subdivisions = MAX_SUBDIVISIONS + 1;
        assert!(ico.validate().is_err());
        ico.subdivisions = 3;
        assert!(ico.validate().is_ok());
    }

    #[test]
    fn test_room_wall_field_is_indexed() {
        let params = RoomParams {
            walls: vec![WallSegment::new(1.0, 0.0), WallSegment::new(0.0, 90.0)],
            ..RoomParams::default()
        };
        assert_eq!(params.validate().unwrap_err().field(), Some("walls[1].width"));
    }

    #[test]
    fn test_thicken_spec_distances() {
        let spec = ThickenSpec::new(0.2);
        assert_eq!(spec.front_distance(), 0.0);
        assert_eq!(spec.back_distance(), -0.2);

        let spec = spec.with_offset(1.0);
        assert_eq!(spec.front_distance(), 0.2);
        assert_eq!(spec.back_distance(), 0.0);
    }

    #[test]
    fn test_thicken_spec_validation() {
        assert!(ThickenSpec::new(0.1).validate().is_ok());
        assert_eq!(
            ThickenSpec::new(-0.1).validate().unwrap_err().field(),
            Some("thickness")
        );
        assert_eq!(
            ThickenSpec::new(0.1).with_offset(1.5).validate().unwrap_err().field(),
            Some("offset")
        );
        assert_eq!(
            ThickenSpec::new(0.1).with_miter_limit(0.5).validate().unwrap_err().field(),
            Some("miter_limit")
        );
    }

    #[test]
    fn test_thicken_spec_per_shape() {
        let room = ShapeParameters::Room(RoomParams::default());
        let spec = room.thicken_spec().unwrap();
        assert!(!spec.even_offset);
        assert_eq!(spec.thickness, DEFAULT_WALL_THICKNESS);

        let plane = ShapeParameters::Plane(PlaneParams::default());
        assert!(plane.thicken_spec().is_none());

        let sphere = ShapeParameters::Sphere(SphereParams::default());
        assert!(sphere.thicken_spec().is_none());
    }

    #[test]
    fn test_parameters_deserialize_from_host_json() {
        let json = r#"{
            "type": "room",
            "height": 3.0,
            "walls": [{ "width": 4.0 }, { "width": 3.0, "turn_angle": 90.0 }],
            "wall_thickness": 0.1
        }"#;
        let params: ShapeParameters = serde_json::from_str(json).unwrap();
        match params {
            ShapeParameters::Room(room) => {
                assert_eq!(room.walls.len(), 2);
                assert_eq!(room.walls[0].turn_angle, 0.0);
                assert_eq!(room.walls[1].turn_angle, 90.0);
            }
            other => panic!("expected room, got {other:?}"),
        }
    }

    #[test]
    fn test_plate_shape_name_survives_tagging() {
        let json = r#"{ "type": "plate", "shape": "Plate07", "radius": 0.3,
                        "height": 0.02, "segments": 24 }"#;
        let params: ShapeParameters = serde_json::from_str(json).unwrap();
        assert!(matches!(params, ShapeParameters::Plate(ref p) if p.shape == "Plate07"));

        let json = r#"{ "type": "plate", "radius": 0.3, "height": 0.02, "segments": 24 }"#;
        let params: ShapeParameters = serde_json::from_str(json).unwrap();
        assert!(matches!(params, ShapeParameters::Plate(ref p) if p.shape == DEFAULT_PLATE_SHAPE));
    }

    #[test]
    fn test_sphere_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SphereParams::ico(1.0, 2)).unwrap();
        assert!(json.contains("\"kind\":\"ico\""));
    }
}
