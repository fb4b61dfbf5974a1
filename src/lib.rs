//! Lunar Phase Quiz - a scored quiz layered on an orbital simulation
//!
//! The learner drags the Moon to the orbital position of a named phase and is
//! scored on the angular error.
//!
//! Core modules:
//! - `quiz`: Question bank, angle scoring, grading and the quiz state machine
//! - `presenter`: Callback contract with the rendering host
//! - `settings`: Quiz configuration
//! - `error`: Contract-violation errors

pub mod error;
pub mod presenter;
pub mod quiz;
pub mod settings;

pub use error::{QuizError, Result};
pub use presenter::Presenter;
pub use settings::QuizSettings;

use glam::Vec2;

/// Quiz configuration constants
pub mod consts {
    /// Target orbital angles (degrees, 0 = +X, counter-clockwise)
    pub const NEW_MOON_ANGLE: f32 = 0.0;
    pub const FIRST_QUARTER_ANGLE: f32 = 90.0;
    pub const FULL_MOON_ANGLE: f32 = 180.0;

    /// Cumulative displacement upper bounds for each letter grade (A+ needs exactly 0)
    pub const GRADE_A_MAX: f32 = 15.0;
    pub const GRADE_B_MAX: f32 = 30.0;
    pub const GRADE_C_MAX: f32 = 45.0;
    pub const GRADE_D_MAX: f32 = 60.0;

    /// Single-question displacement bounds for feedback messages
    pub const FEEDBACK_EXCELLENT_MAX: f32 = 15.0;
    pub const FEEDBACK_GOOD_MAX: f32 = 30.0;
    pub const FEEDBACK_FAIR_MAX: f32 = 45.0;

    /// Moon orbit radius in host world units
    pub const DEFAULT_ORBIT_RADIUS: f32 = 10.0;
    /// Orbital speed the host restores when a quiz ends
    pub const DEFAULT_ORBIT_SPEED: f32 = 1.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, degrees in [0, 360))
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), normalize_degrees(pos.y.atan2(pos.x).to_degrees()))
}
