use serde::{Deserialize, Serialize};

pub mod angles;
pub mod errors;
pub mod geometry;
pub mod kinematics;
pub mod transforms;

pub use angles::{wrap_degrees, Joint};
pub use errors::*;
pub use geometry::ArmGeometry;
pub use kinematics::ArmKinematics;

/// Tool tip position relative to the base origin.
///
/// Units follow whatever linear unit the [`ArmGeometry`] was specified in
/// (inches for the stock pen plotter).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}, {:.3}]", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Position {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Joint angles in degrees, ordered base to tip.
///
/// * `t1` - base yaw
/// * `t2` - shoulder pitch, 0° points straight up and 90° points forward
/// * `t3` - elbow pitch, negative values fold the forearm down in the elbow-up pose
/// * `t4` - wrist pitch
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles {
    pub t1: f64,
    pub t2: f64,
    pub t3: f64,
    pub t4: f64,
}

impl JointAngles {
    pub const fn new(t1: f64, t2: f64, t3: f64, t4: f64) -> Self {
        Self { t1, t2, t3, t4 }
    }

    /// Joint set whose wrist holds the tool pointing straight down.
    pub fn pen_down(t1: f64, t2: f64, t3: f64) -> Self {
        Self::new(t1, t2, t3, angles::level_wrist(t2, t3))
    }

    /// Angle of a single joint.
    pub fn get(&self, joint: Joint) -> f64 {
        match joint {
            Joint::Base => self.t1,
            Joint::Shoulder => self.t2,
            Joint::Elbow => self.t3,
            Joint::Wrist => self.t4,
        }
    }

    /// Iterate over `(joint, angle)` pairs, base first.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, f64)> + '_ {
        Joint::ALL.into_iter().map(move |joint| (joint, self.get(joint)))
    }

    /// Every angle wrapped into `[-180, 180)`.
    pub fn wrapped(&self) -> Self {
        Self::new(
            wrap_degrees(self.t1),
            wrap_degrees(self.t2),
            wrap_degrees(self.t3),
            wrap_degrees(self.t4),
        )
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "t1={:.3}° t2={:.3}° t3={:.3}° t4={:.3}°",
            self.t1, self.t2, self.t3, self.t4
        )
    }
}

impl From<[f64; 4]> for JointAngles {
    fn from([t1, t2, t3, t4]: [f64; 4]) -> Self {
        Self { t1, t2, t3, t4 }
    }
}

impl From<JointAngles> for [f64; 4] {
    fn from(angles: JointAngles) -> Self {
        [angles.t1, angles.t2, angles.t3, angles.t4]
    }
}

/// Forward kinematics against the stock pen plotter geometry.
pub fn fk(t1: f64, t2: f64, t3: f64, t4: f64) -> Position {
    ArmKinematics::default().forward_kinematics(&JointAngles::new(t1, t2, t3, t4))
}

/// Forward kinematics with the pen-down wrist, against the stock geometry.
pub fn fk_level(t1: f64, t2: f64, t3: f64) -> Position {
    ArmKinematics::default().forward_kinematics_pen_down(t1, t2, t3)
}

/// Inverse kinematics against the stock pen plotter geometry.
///
/// `t4_override` replaces the automatically derived pen-down wrist angle.
pub fn ik(x: f64, y: f64, z: f64, t4_override: Option<f64>) -> Result<JointAngles, KinematicsError> {
    ArmKinematics::default().inverse_kinematics(&Position::new(x, y, z), t4_override)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_free_functions_use_pen_plotter_geometry() {
        let angles = ik(6.0, 2.0, -0.25, None).unwrap();
        let tip = fk(angles.t1, angles.t2, angles.t3, angles.t4);

        assert_abs_diff_eq!(tip.x, 6.0, epsilon = 1e-3);
        assert_abs_diff_eq!(tip.y, 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(tip.z, -0.25, epsilon = 1e-3);
    }

    #[test]
    fn test_fk_level_matches_ik_default_wrist() {
        let angles = ik(5.0, 0.0, -0.25, None).unwrap();
        let tip = fk_level(angles.t1, angles.t2, angles.t3);

        assert!(tip.distance(&Position::new(5.0, 0.0, -0.25)) < 1e-9);
    }

    #[test]
    fn test_joint_angles_iter_order() {
        let angles = JointAngles::new(1.0, 2.0, 3.0, 4.0);
        let collected: Vec<_> = angles.iter().collect();

        assert_eq!(
            collected,
            vec![
                (Joint::Base, 1.0),
                (Joint::Shoulder, 2.0),
                (Joint::Elbow, 3.0),
                (Joint::Wrist, 4.0),
            ]
        );
    }

    #[test]
    fn test_pen_down_derives_wrist() {
        let angles = JointAngles::pen_down(0.0, 30.0, -80.0);
        assert_eq!(angles.t4, 90.0 - 30.0 - 80.0);
    }

    #[test]
    fn test_position_json_shape() {
        let json = serde_json::to_string(&Position::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
    }
}
