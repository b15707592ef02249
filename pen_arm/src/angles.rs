//! Joint naming and angle normalization helpers.
//!
//! All public angles in this crate are degrees. Wrapping follows a floored
//! modulo so the canonical range is `[-180, 180)`: `180°` and `-180°` both map
//! to `-180°`.

use serde::{Deserialize, Serialize};

/// Default mechanical travel of every servo, in degrees either side of center.
pub const DEFAULT_JOINT_LIMIT_DEG: f64 = 125.0;

/// Joints of the arm, base to tip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Base,
    Shoulder,
    Elbow,
    Wrist,
}

impl Joint {
    pub const ALL: [Joint; 4] = [Joint::Base, Joint::Shoulder, Joint::Elbow, Joint::Wrist];

    /// Zero-based position in the chain.
    pub fn index(self) -> usize {
        match self {
            Joint::Base => 0,
            Joint::Shoulder => 1,
            Joint::Elbow => 2,
            Joint::Wrist => 3,
        }
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Joint::Base => write!(f, "base (t1)"),
            Joint::Shoulder => write!(f, "shoulder (t2)"),
            Joint::Elbow => write!(f, "elbow (t3)"),
            Joint::Wrist => write!(f, "wrist (t4)"),
        }
    }
}

/// Wrap an angle in degrees into `[-180, 180)`.
pub fn wrap_degrees(theta: f64) -> f64 {
    (theta + 180.0).rem_euclid(360.0) - 180.0
}

/// Wrist pitch that keeps the tool pointing straight down for the given
/// shoulder and elbow angles.
pub fn level_wrist(t2: f64, t3: f64) -> f64 {
    90.0 - t2 + t3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_canonical_boundary() {
        assert_eq!(wrap_degrees(180.0), -180.0);
        assert_eq!(wrap_degrees(-180.0), -180.0);
    }

    #[test]
    fn test_wrap_folds_full_turns() {
        assert_eq!(wrap_degrees(270.0), -90.0);
        assert_eq!(wrap_degrees(-270.0), 90.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
        assert_eq!(wrap_degrees(-45.0), -45.0);
        assert_eq!(wrap_degrees(125.0), 125.0);
    }

    #[test]
    fn test_level_wrist() {
        assert_eq!(level_wrist(90.0, 0.0), 0.0);
        assert_eq!(level_wrist(45.0, -45.0), 0.0);
        assert_eq!(level_wrist(0.0, 0.0), 90.0);
    }

    #[test]
    fn test_joint_index_matches_all() {
        for (i, joint) in Joint::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i);
        }
    }
}
