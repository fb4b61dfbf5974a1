//! Angle scoring on the Moon's orbital plane
//!
//! Angles are degrees in [0, 360): 0° lies on the +X axis and angles grow
//! counter-clockwise toward +Y (the host's +Z when the orbit lies in XZ).

use glam::Vec2;

use crate::{cartesian_to_polar, normalize_degrees, polar_to_cartesian};

/// Angle of `point` around `origin`, in degrees [0, 360)
pub fn position_to_angle(origin: Vec2, point: Vec2) -> f32 {
    let (_, degrees) = cartesian_to_polar(point - origin);
    degrees
}

/// Shortest angular distance between two angles, in [0, 180]
pub fn circular_displacement(a: f32, b: f32) -> f32 {
    let diff = (normalize_degrees(a) - normalize_degrees(b)).abs();
    diff.min(360.0 - diff)
}

/// Position on an orbit of `radius` around `origin` at `degrees`
///
/// Inverse of [`position_to_angle`]; hosts use it to snap the Moon sprite
/// onto its orbit.
pub fn place_at_angle(origin: Vec2, radius: f32, degrees: f32) -> Vec2 {
    origin + polar_to_cartesian(radius, degrees)
}
