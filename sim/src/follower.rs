//! Point-by-point path following.
//!
//! Each target is solved with the pen-down wrist, sent to the servo board
//! joint by joint, and followed by a pause long enough for the servos to
//! finish the move. Targets the solver rejects are skipped and reported; only
//! a servo failure ends the run early.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use pen_arm::{ArmKinematics, JointAngles, KinematicsError, Position};

use crate::servo::{JointWiring, ServoController, ServoError};

/// ```rust,ignore
/// let config = FollowerConfig {
///     duration_ms: 500,
///     ..FollowerConfig::default()
/// };
///
/// if let Err(e) = config.validate() {
///     println!("Configuration error: {}", e);
///     return;
/// }
///
/// // Servos get 500 ms per move, the follower waits 600 ms between points
/// assert_eq!(config.pause(), Duration::from_millis(600));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FollowerConfig {
    /// Time the servos are given to complete each move
    pub duration_ms: u64,
    /// Extra wait after each move before the next point is sent
    pub settle_ms: u64,
    pub wiring: JointWiring,
    /// Sleep between points; turned off for dry runs
    pub wait: bool,
}

impl FollowerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.duration_ms == 0 {
            return Err("Move duration must be greater than 0.".to_string());
        }
        self.wiring.validate()
    }

    /// Time between sending one point and the next.
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.duration_ms + self.settle_ms)
    }
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            settle_ms: 100,
            wiring: JointWiring::default(),
            wait: true,
        }
    }
}

/// What happened to a single target.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    Moved(JointAngles),
    Skipped(KinematicsError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkippedPoint {
    /// Index of the point in the path
    pub index: usize,
    pub point: Position,
    pub reason: KinematicsError,
}

/// Summary of a completed path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PathReport {
    pub moved: usize,
    pub skipped: Vec<SkippedPoint>,
}

impl PathReport {
    pub fn total(&self) -> usize {
        self.moved + self.skipped.len()
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn unreachable_count(&self) -> usize {
        self.skipped.iter().filter(|s| s.reason.is_unreachable()).count()
    }

    pub fn joint_limit_count(&self) -> usize {
        self.skipped.iter().filter(|s| s.reason.is_joint_limit()).count()
    }
}

pub struct PathFollower<C> {
    kinematics: ArmKinematics,
    controller: C,
    config: FollowerConfig,
}

impl<C: ServoController> PathFollower<C> {
    pub fn new(kinematics: ArmKinematics, controller: C, config: FollowerConfig) -> Self {
        Self {
            kinematics,
            controller,
            config,
        }
    }

    pub fn kinematics(&self) -> &ArmKinematics {
        &self.kinematics
    }

    pub fn config(&self) -> &FollowerConfig {
        &self.config
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn into_controller(self) -> C {
        self.controller
    }

    /// Solve for `point` and drive the arm there.
    ///
    /// An unreachable or out-of-range point is not an error here: it comes
    /// back as [`MoveOutcome::Skipped`] and nothing is sent to the servos.
    pub async fn move_to_point(&mut self, point: &Position) -> Result<MoveOutcome, ServoError> {
        let joints = match self.kinematics.inverse_kinematics(point, None) {
            Ok(joints) => joints,
            Err(reason) => {
                warn!("Point {} {} - skipping ({})", point, reason.kind(), reason);
                return Ok(MoveOutcome::Skipped(reason));
            }
        };

        debug!("Moving to {}: {}", point, joints);

        for (channel, angle) in self.config.wiring.commands(&joints) {
            self.controller
                .set_position(channel, angle, self.config.duration_ms)
                .await?;
        }

        if self.config.wait {
            tokio::time::sleep(self.config.pause()).await;
        }

        Ok(MoveOutcome::Moved(joints))
    }

    /// Visit every point in order.
    pub async fn follow(&mut self, points: &[Position]) -> Result<PathReport, ServoError> {
        info!("Following path of {} points", points.len());

        let mut report = PathReport::default();

        for (index, point) in points.iter().enumerate() {
            match self.move_to_point(point).await? {
                MoveOutcome::Moved(_) => report.moved += 1,
                MoveOutcome::Skipped(reason) => report.skipped.push(SkippedPoint {
                    index,
                    point: *point,
                    reason,
                }),
            }
        }

        info!(
            "Path finished: {} moved, {} skipped",
            report.moved,
            report.skipped.len()
        );

        Ok(report)
    }
}
