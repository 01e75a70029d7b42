//! # Vector Math
//!
//! Rotation and interpolation helpers shared by the generators. Angles are in
//! degrees, matching the parameters the host hands over.

use glam::{DMat2, DMat3, DVec2, DVec3};

/// Rotates a planar point counter-clockwise around the origin.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::math::rotate_2d;
///
/// let p = rotate_2d(1.0, 0.0, 90.0);
/// assert!(p.x.abs() < 1e-12);
/// assert!((p.y - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn rotate_2d(x: f64, y: f64, angle_deg: f64) -> DVec2 {
    DMat2::from_angle(angle_deg.to_radians()) * DVec2::new(x, y)
}

/// Rotates a point around the X axis, then around the Z axis.
///
/// The order matters: the UV sphere sweeps a pole point down to its ring
/// latitude with the X rotation before spinning it to its longitude.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::math::rotate_3d;
/// use glam::DVec3;
///
/// let p = rotate_3d(DVec3::Z, 90.0, 0.0);
/// assert!((p - DVec3::NEG_Y).length() < 1e-12);
/// ```
#[inline]
pub fn rotate_3d(point: DVec3, angle_x_deg: f64, angle_z_deg: f64) -> DVec3 {
    let rx = DMat3::from_rotation_x(angle_x_deg.to_radians());
    let rz = DMat3::from_rotation_z(angle_z_deg.to_radians());
    rz * (rx * point)
}

/// Returns the point halfway between `a` and `b`.
#[inline]
pub fn midpoint(a: DVec3, b: DVec3) -> DVec3 {
    slide(a, b, 0.5)
}

/// Linearly slides from `a` towards `b` by the fraction `t`.
#[inline]
pub fn slide(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    a.lerp(b, t)
}

/// Projects a point onto the origin-centred sphere of the given radius.
///
/// The origin has no direction and maps to itself.
///
/// # Example
///
/// ```rust
/// use archlab_mesh::math::normalize_to_sphere;
/// use glam::DVec3;
///
/// let p = normalize_to_sphere(DVec3::new(3.0, 0.0, 4.0), 10.0);
/// assert!((p.length() - 10.0).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_to_sphere(point: DVec3, radius: f64) -> DVec3 {
    point.normalize_or_zero() * radius
}
