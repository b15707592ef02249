// Kinematics for the 4-DOF pen arm
//
// Chain, base to tip:
//   yaw(t1) · up(L1) · pitch(-(90 - t2)) · fwd(L2) · pitch(-t3) · fwd(L3) · pitch(t4) · fwd(PX) · down(PZ)
//
// The shoulder uses a "0° = up, 90° = forward" convention. With the wrist at
// 90 - t2 + t3 the pen stays pointed straight down whatever the shoulder and
// elbow are doing, which is what the drawing paths rely on.

use tracing::{debug, trace};

use crate::angles::level_wrist;
use crate::geometry::ArmGeometry;
use crate::transforms::{pitch, translate_x, translate_z, yaw};
use crate::{JointAngles, KinematicsError, Position};

/// Closed-form solver for one arm geometry.
///
/// Only the elbow-up branch is ever produced. The solver holds no state beyond
/// its geometry, so a single instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArmKinematics {
    geometry: ArmGeometry,
}

impl ArmKinematics {
    /// Create kinematics for the given geometry
    pub fn new(geometry: ArmGeometry) -> Self {
        Self { geometry }
    }

    /// Get the arm geometry
    pub fn geometry(&self) -> &ArmGeometry {
        &self.geometry
    }

    /// Forward kinematics: tool tip position for the given joint angles.
    ///
    /// # Arguments
    /// * `joints` - Joint angles in degrees, `t4` used as given
    ///
    /// # Returns
    /// * Tip position in the geometry's linear unit
    ///
    /// Coordinate system:
    /// +X = forward (t1 = 0)
    /// +Y = left
    /// +Z = up
    pub fn forward_kinematics(&self, joints: &JointAngles) -> Position {
        let g = &self.geometry;

        let tool = yaw(joints.t1)
            * translate_z(g.l1)
            * pitch(-(90.0 - joints.t2))
            * translate_x(g.l2)
            * pitch(-joints.t3)
            * translate_x(g.l3)
            * pitch(joints.t4)
            * translate_x(g.px)
            * translate_z(-g.pz);

        tool.into()
    }

    /// Forward kinematics with the wrist derived so the pen points down.
    pub fn forward_kinematics_pen_down(&self, t1: f64, t2: f64, t3: f64) -> Position {
        self.forward_kinematics(&JointAngles::pen_down(t1, t2, t3))
    }

    /// Inverse kinematics: joint angles placing the tool tip at `target`.
    ///
    /// # Arguments
    /// * `target` - Desired tip position
    /// * `t4_override` - Wrist angle to use instead of the pen-down wrist
    ///
    /// # Returns
    /// * Elbow-up joint angles in degrees, each wrapped into `[-180, 180)`
    /// * [`KinematicsError::Unreachable`] if the wrist target is outside the
    ///   two-link annulus
    /// * [`KinematicsError::JointLimitExceeded`] if any wrapped angle is
    ///   outside the geometry's joint limit
    pub fn inverse_kinematics(
        &self,
        target: &Position,
        t4_override: Option<f64>,
    ) -> Result<JointAngles, KinematicsError> {
        let g = &self.geometry;
        let Position { x, y, z } = *target;

        // atan2(±0, -0) is ±180°; a target on the base axis always faces forward.
        let t1 = if x == 0.0 && y == 0.0 {
            0.0
        } else {
            y.atan2(x).to_degrees()
        };

        // Strip the pen offset to get the wrist target in the arm plane.
        let r_tip = x.hypot(y);
        let r_w = r_tip - g.px;
        let z_w = z + g.pz;
        let dz = z_w - g.l1;
        let d2 = r_w * r_w + dz * dz;

        let max_reach = g.max_reach();
        let min_reach = g.min_reach();
        if d2 > max_reach * max_reach + g.reach_epsilon
            || d2 < min_reach * min_reach - g.reach_epsilon
        {
            debug!(
                "Target {} unreachable: wrist distance {:.4} outside {:.4}..={:.4}",
                target,
                d2.sqrt(),
                min_reach,
                max_reach
            );
            return Err(KinematicsError::Unreachable {
                target: *target,
                distance: d2.sqrt(),
                min_reach,
                max_reach,
            });
        }

        // Clamped so a fully stretched or fully folded elbow never yields NaN.
        let cos_m3 = ((d2 - g.l2 * g.l2 - g.l3 * g.l3) / (2.0 * g.l2 * g.l3)).clamp(-1.0, 1.0);
        let m3 = -cos_m3.acos();
        let t3 = m3.to_degrees();

        let phi = dz.atan2(r_w);
        let psi = (g.l3 * m3.sin()).atan2(g.l2 + g.l3 * m3.cos());
        let m2 = phi - psi;
        let t2 = 90.0 - m2.to_degrees();

        let t4 = t4_override.unwrap_or_else(|| level_wrist(t2, t3));

        trace!(
            "IK {}: r_w={:.4} dz={:.4} d2={:.4} phi={:.4} psi={:.4}",
            target,
            r_w,
            dz,
            d2,
            phi,
            psi
        );

        let joints = JointAngles::new(t1, t2, t3, t4).wrapped();
        self.check_limits(&joints)?;

        Ok(joints)
    }

    /// Reject a joint set if any angle is beyond the geometry's joint limit.
    pub fn check_limits(&self, joints: &JointAngles) -> Result<(), KinematicsError> {
        let limit = self.geometry.joint_limit;

        for (joint, angle) in joints.iter() {
            if !(-limit..=limit).contains(&angle) {
                debug!("{} at {:.3}° is past the ±{:.1}° limit", joint, angle, limit);
                return Err(KinematicsError::JointLimitExceeded { joint, angle, limit });
            }
        }

        Ok(())
    }

    /// Whether `target` can be reached within the joint limits.
    pub fn is_reachable(&self, target: &Position) -> bool {
        self.inverse_kinematics(target, None).is_ok()
    }

    /// Distance between `target` and the tip actually reached by `joints`.
    pub fn solution_error(&self, target: &Position, joints: &JointAngles) -> f64 {
        self.forward_kinematics(joints).distance(target)
    }
}
