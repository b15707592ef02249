/// Forward/inverse consistency checks against the stock pen plotter geometry
use approx::assert_abs_diff_eq;
use pen_arm::{fk, ik, ArmKinematics, JointAngles, Position};

fn assert_joints_eq(actual: &JointAngles, expected: &JointAngles, epsilon: f64) {
    for ((joint, a), (_, e)) in actual.iter().zip(expected.iter()) {
        assert!(
            (a - e).abs() < epsilon,
            "{} mismatch: {:.6} vs {:.6}",
            joint,
            a,
            e
        );
    }
}

#[test]
fn test_drawing_target_round_trip() {
    let target = Position::new(6.0, 2.0, -0.25);

    let joints = ik(target.x, target.y, target.z, None).expect("target should be reachable");
    println!("IK solution for {}: {}", target, joints);

    // Pen-down solution lands well inside the servo travel
    for (joint, angle) in joints.iter() {
        assert!(angle.abs() <= 125.0, "{} out of range: {}", joint, angle);
    }
    assert_abs_diff_eq!(joints.t1, 18.434948822922024, epsilon = 1e-9);
    assert_abs_diff_eq!(joints.t2, 45.463400101840904, epsilon = 1e-9);
    assert_abs_diff_eq!(joints.t3, -94.71403820259505, epsilon = 1e-9);
    assert_abs_diff_eq!(joints.t4, -50.17743830443595, epsilon = 1e-9);

    let tip = fk(joints.t1, joints.t2, joints.t3, joints.t4);
    assert!(
        tip.distance(&target) < 1e-3,
        "FK of IK solution drifted: {} vs {}",
        tip,
        target
    );
}

#[test]
fn test_joint_space_round_trip() {
    let kin = ArmKinematics::default();

    // Elbow-up configurations within the ±125° travel, wrist held pen-down
    let configurations = [
        (10.0, 30.0, -80.0),
        (-45.0, 60.0, -30.0),
        (0.0, 20.0, -100.0),
        (100.0, 45.0, -45.0),
        (-120.0, 70.0, -60.0),
        (30.0, 40.0, -120.0),
    ];

    for (t1, t2, t3) in configurations {
        let expected = JointAngles::pen_down(t1, t2, t3);
        let tip = kin.forward_kinematics(&expected);

        let solved = kin
            .inverse_kinematics(&tip, None)
            .unwrap_or_else(|e| panic!("IK failed for {}: {}", expected, e));

        assert_joints_eq(&solved, &expected, 1e-3);
        assert!(kin.solution_error(&tip, &solved) < 1e-9);
    }
}

#[test]
fn test_round_trip_with_wrist_override() {
    let kin = ArmKinematics::default();

    // The override only replaces t4 in the result; the wrist joint is still
    // placed as if the pen pointed down.
    let pen_down_tip = kin.forward_kinematics(&JointAngles::pen_down(15.0, 35.0, -70.0));
    let solved = kin.inverse_kinematics(&pen_down_tip, Some(40.0)).unwrap();

    assert_eq!(solved.t4, 40.0);
    assert_abs_diff_eq!(solved.t1, 15.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solved.t2, 35.0, epsilon = 1e-9);
    assert_abs_diff_eq!(solved.t3, -70.0, epsilon = 1e-9);

    let tilted_tip = kin.forward_kinematics(&JointAngles::new(15.0, 35.0, -70.0, 40.0));
    assert!(kin.solution_error(&tilted_tip, &solved) < 1e-9);
    assert!(tilted_tip.distance(&pen_down_tip) > 1.0);
}

#[test]
fn test_inverse_kinematics_is_deterministic() {
    let kin = ArmKinematics::default();
    let target = Position::new(5.5, 0.75, -0.25);

    let first = kin.inverse_kinematics(&target, None).unwrap();
    for _ in 0..100 {
        let again = kin.inverse_kinematics(&target, None).unwrap();
        assert_eq!(first.t1.to_bits(), again.t1.to_bits());
        assert_eq!(first.t2.to_bits(), again.t2.to_bits());
        assert_eq!(first.t3.to_bits(), again.t3.to_bits());
        assert_eq!(first.t4.to_bits(), again.t4.to_bits());
    }
}

#[test]
fn test_target_on_base_axis() {
    let joints = ik(0.0, 0.0, 5.0, None).unwrap();

    assert_eq!(joints.t1, 0.0);
    let tip = fk(joints.t1, joints.t2, joints.t3, joints.t4);
    assert_abs_diff_eq!(tip.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tip.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tip.z, 5.0, epsilon = 1e-9);
}

#[test]
fn test_solver_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArmKinematics>();

    let kin = ArmKinematics::default();
    let targets = [
        Position::new(6.0, 2.0, -0.25),
        Position::new(5.0, 0.0, -0.25),
        Position::new(7.0, 0.5, -0.25),
        Position::new(6.5, 0.75, 0.5),
    ];

    let expected: Vec<_> = targets
        .iter()
        .map(|t| kin.inverse_kinematics(t, None).unwrap())
        .collect();

    let handles: Vec<_> = targets
        .into_iter()
        .map(|t| std::thread::spawn(move || kin.inverse_kinematics(&t, None).unwrap()))
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
