//! Rigid transforms for the arm's kinematic chain, and conversions between
//! crate types and nalgebra geometric types.
//!
//! Every elementary transform takes degrees and returns an
//! [`Isometry3`], so a chain reads as a plain product:
//!
//! ```
//! use pen_arm::transforms::{pitch, translate_x, yaw};
//! use nalgebra::Point3;
//!
//! let link = yaw(90.0) * pitch(0.0) * translate_x(2.0);
//! let tip = link * Point3::origin();
//! assert!((tip.y - 2.0).abs() < 1e-12);
//! ```
//!
//! # Notes
//!
//! - Pitch is a right-handed rotation about +Y, so a positive pitch tips
//!   the local +X axis downward.
//! - Orientation is dropped when converting an isometry to a [`Position`].

use nalgebra::{Isometry3, Point3, Vector3};

use crate::Position;

/// Rotation about the vertical (+Z) axis.
pub fn yaw(degrees: f64) -> Isometry3<f64> {
    Isometry3::rotation(Vector3::z() * degrees.to_radians())
}

/// Rotation about the lateral (+Y) axis.
pub fn pitch(degrees: f64) -> Isometry3<f64> {
    Isometry3::rotation(Vector3::y() * degrees.to_radians())
}

/// Translation along the local forward (+X) axis.
pub fn translate_x(distance: f64) -> Isometry3<f64> {
    Isometry3::translation(distance, 0.0, 0.0)
}

/// Translation along the local vertical (+Z) axis.
pub fn translate_z(distance: f64) -> Isometry3<f64> {
    Isometry3::translation(0.0, 0.0, distance)
}

impl From<Position> for Point3<f64> {
    fn from(pos: Position) -> Self {
        Point3::new(pos.x, pos.y, pos.z)
    }
}

impl From<Point3<f64>> for Position {
    fn from(point: Point3<f64>) -> Self {
        Position::new(point.x, point.y, point.z)
    }
}

/// Position of the frame origin.
impl From<Isometry3<f64>> for Position {
    fn from(iso: Isometry3<f64>) -> Self {
        Position::new(iso.translation.x, iso.translation.y, iso.translation.z)
    }
}
