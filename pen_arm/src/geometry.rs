//! Arm geometry module
//!
//! The arm is a yaw joint under two pitch joints that form a planar two-link
//! chain, followed by a pitch-controlled wrist carrying the pen. The wrist to
//! pen-tip offset is fixed and is removed before the two-link reach problem is
//! solved.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::angles::DEFAULT_JOINT_LIMIT_DEG;
use crate::ConfigError;

/// Slack applied to the squared reach bounds, in squared link units.
pub const DEFAULT_REACH_EPSILON: f64 = 1e-6;

/// Fixed link lengths and offsets of the arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmGeometry {
    /// Base height (floor to shoulder axis)
    pub l1: f64,

    /// Upper arm length (shoulder to elbow)
    pub l2: f64,

    /// Forearm length (elbow to wrist)
    pub l3: f64,

    /// Wrist to tool tip, along the tool's forward axis
    pub px: f64,

    /// Wrist to tool tip, along the tool's downward axis
    pub pz: f64,

    /// Servo travel either side of center, in degrees
    #[serde(default = "default_joint_limit")]
    pub joint_limit: f64,

    /// Slack on the squared reach bounds
    #[serde(default = "default_reach_epsilon")]
    pub reach_epsilon: f64,
}

fn default_joint_limit() -> f64 {
    DEFAULT_JOINT_LIMIT_DEG
}

fn default_reach_epsilon() -> f64 {
    DEFAULT_REACH_EPSILON
}

impl ArmGeometry {
    /// Desktop pen plotter arm, in inches.
    ///
    /// - Base height (l1): 3.125
    /// - Upper arm (l2): 3.75
    /// - Forearm (l3): 3.75
    /// - Pen offset (px, pz): 1.25 forward, 3.125 down
    pub fn pen_plotter() -> Self {
        Self {
            l1: 3.125,
            l2: 3.75,
            l3: 3.75,
            px: 1.25,
            pz: 3.125,
            joint_limit: DEFAULT_JOINT_LIMIT_DEG,
            reach_epsilon: DEFAULT_REACH_EPSILON,
        }
    }

    pub fn with_joint_limit(mut self, joint_limit: f64) -> Self {
        self.joint_limit = joint_limit;
        self
    }

    /// Largest shoulder-to-wrist distance the two-link chain can span.
    pub fn max_reach(&self) -> f64 {
        self.l2 + self.l3
    }

    /// Smallest shoulder-to-wrist distance the two-link chain can fold to.
    pub fn min_reach(&self) -> f64 {
        (self.l2 - self.l3).abs()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("l1", self.l1),
            ("l2", self.l2),
            ("l3", self.l3),
            ("px", self.px),
            ("pz", self.pz),
            ("reach_epsilon", self.reach_epsilon),
        ];
        for (field, value) in lengths {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        // Offsets may be zero; links may not.
        for (field, value) in [("l2", self.l2), ("l3", self.l3)] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.reach_epsilon < 0.0 {
            return Err(ConfigError::NotPositive {
                field: "reach_epsilon",
                value: self.reach_epsilon,
            });
        }

        if !(self.joint_limit > 0.0 && self.joint_limit <= 180.0) {
            return Err(ConfigError::JointLimit(self.joint_limit));
        }

        Ok(())
    }

    /// Parse and validate a geometry from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let geometry: Self = serde_json::from_str(json)?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Load and validate a geometry from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

impl Default for ArmGeometry {
    fn default() -> Self {
        Self::pen_plotter()
    }
}
