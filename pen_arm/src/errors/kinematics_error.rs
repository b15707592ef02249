use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Joint, Position};

/// Reasons a single target cannot be serviced by the solver.
///
/// Neither variant is fatal: a caller walking a path skips the point and
/// moves on to the next one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// The wrist target falls outside the annulus swept by the upper arm and
    /// forearm.
    #[error("target {target} is unreachable (wrist distance {distance:.4}, reach {min_reach:.4}..={max_reach:.4})")]
    Unreachable {
        target: Position,
        distance: f64,
        min_reach: f64,
        max_reach: f64,
    },

    /// A geometric solution exists but one joint would leave its travel range.
    #[error("{joint} angle {angle:.3}° exceeds the ±{limit:.1}° joint limit")]
    JointLimitExceeded { joint: Joint, angle: f64, limit: f64 },
}

impl KinematicsError {
    /// Short tag for logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            KinematicsError::Unreachable { .. } => "unreachable",
            KinematicsError::JointLimitExceeded { .. } => "joint limit exceeded",
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, KinematicsError::Unreachable { .. })
    }

    pub fn is_joint_limit(&self) -> bool {
        matches!(self, KinematicsError::JointLimitExceeded { .. })
    }
}
