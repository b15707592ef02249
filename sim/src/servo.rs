//! Servo controller seam.
//!
//! The physical arm is driven by a six-channel serial servo board. Each call
//! names a channel, a target angle in degrees and how long the servo should
//! take to get there; the board performs the move on its own clock, so a call
//! returns as soon as the command is accepted.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use pen_arm::{ArmKinematics, Joint, JointAngles, Position};

/// Number of channels on the servo board, numbered from 1.
pub const CHANNEL_COUNT: u8 = 6;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServoError {
    #[error("servo channel {0} does not exist (expected 1..=6)")]
    InvalidChannel(u8),

    #[error("servo controller disconnected")]
    Disconnected,
}

/// Something that can move a single servo.
#[async_trait]
pub trait ServoController: Send {
    async fn set_position(
        &mut self,
        channel: u8,
        angle: f64,
        duration_ms: u64,
    ) -> Result<(), ServoError>;
}

/// Which board channel drives which joint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointWiring {
    pub base: u8,
    pub shoulder: u8,
    pub elbow: u8,
    pub wrist: u8,
}

impl JointWiring {
    pub fn channel(&self, joint: Joint) -> u8 {
        match joint {
            Joint::Base => self.base,
            Joint::Shoulder => self.shoulder,
            Joint::Elbow => self.elbow,
            Joint::Wrist => self.wrist,
        }
    }

    /// One `(channel, angle)` command per joint, base first.
    pub fn commands(&self, joints: &JointAngles) -> [(u8, f64); 4] {
        Joint::ALL.map(|joint| (self.channel(joint), joints.get(joint)))
    }

    pub fn validate(&self) -> Result<(), String> {
        let channels = Joint::ALL.map(|joint| self.channel(joint));

        for (i, channel) in channels.iter().enumerate() {
            if !(1..=CHANNEL_COUNT).contains(channel) {
                return Err(format!(
                    "Channel {} for {} must be between 1 and {}.",
                    channel,
                    Joint::ALL[i],
                    CHANNEL_COUNT
                ));
            }
            if channels[..i].contains(channel) {
                return Err(format!("Channel {} is wired to more than one joint.", channel));
            }
        }

        Ok(())
    }
}

/// Stock wiring of the desktop arm: the gripper sits on channels 1 and 2 and
/// the arm joints run down from channel 6 at the base.
impl Default for JointWiring {
    fn default() -> Self {
        Self {
            base: 6,
            shoulder: 5,
            elbow: 4,
            wrist: 3,
        }
    }
}

/// A command as received by the servo board.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ServoCommand {
    pub channel: u8,
    pub angle: f64,
    pub duration_ms: u64,
}

/// In-memory servo board.
///
/// Every accepted command is recorded, and the last commanded angle per
/// channel is kept so the simulated tip position can be recovered through
/// forward kinematics.
#[derive(Debug, Clone, Default)]
pub struct SimulatedServo {
    commands: Vec<ServoCommand>,
    positions: [Option<f64>; CHANNEL_COUNT as usize],
    disconnect_after: Option<usize>,
}

impl SimulatedServo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the connection once `count` commands have been accepted.
    pub fn disconnect_after(mut self, count: usize) -> Self {
        self.disconnect_after = Some(count);
        self
    }

    pub fn commands(&self) -> &[ServoCommand] {
        &self.commands
    }

    /// Last commanded angle on a channel.
    pub fn position(&self, channel: u8) -> Option<f64> {
        let index = usize::from(channel).checked_sub(1)?;
        self.positions.get(index).copied().flatten()
    }

    /// Last commanded angle of every joint, if all four have been driven.
    pub fn joint_angles(&self, wiring: &JointWiring) -> Option<JointAngles> {
        Some(JointAngles::new(
            self.position(wiring.base)?,
            self.position(wiring.shoulder)?,
            self.position(wiring.elbow)?,
            self.position(wiring.wrist)?,
        ))
    }

    /// Where the pen would be after the last commanded moves complete.
    pub fn tip_position(&self, wiring: &JointWiring, kinematics: &ArmKinematics) -> Option<Position> {
        self.joint_angles(wiring)
            .map(|joints| kinematics.forward_kinematics(&joints))
    }
}

#[async_trait]
impl ServoController for SimulatedServo {
    async fn set_position(
        &mut self,
        channel: u8,
        angle: f64,
        duration_ms: u64,
    ) -> Result<(), ServoError> {
        if !(1..=CHANNEL_COUNT).contains(&channel) {
            return Err(ServoError::InvalidChannel(channel));
        }
        if self.disconnect_after.is_some_and(|limit| self.commands.len() >= limit) {
            return Err(ServoError::Disconnected);
        }

        trace!("Servo {} -> {:.3}° over {} ms", channel, angle, duration_ms);

        self.positions[usize::from(channel - 1)] = Some(angle);
        self.commands.push(ServoCommand {
            channel,
            angle,
            duration_ms,
        });

        Ok(())
    }
}
