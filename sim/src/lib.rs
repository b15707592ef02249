// Library exports for the pen arm simulator

pub mod follower;
pub mod paths;
pub mod servo;

pub use follower::{FollowerConfig, MoveOutcome, PathFollower, PathReport, SkippedPoint};
pub use servo::{JointWiring, ServoCommand, ServoController, ServoError, SimulatedServo};
