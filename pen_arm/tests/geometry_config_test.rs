/// Loading arm geometry from JSON files
use pen_arm::{ArmGeometry, ArmKinematics, ConfigError, Position};

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("pen_arm_{}_{}.json", name, std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_geometry_file_round_trip() {
    let geometry = ArmGeometry::pen_plotter().with_joint_limit(150.0);
    let json = serde_json::to_string_pretty(&geometry).unwrap();
    let path = write_temp("round_trip", &json);

    let loaded = ArmGeometry::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, geometry);
}

#[test]
fn test_loaded_geometry_drives_solver() {
    // Same arm scaled to millimetres
    let path = write_temp(
        "millimetres",
        r#"{
            "l1": 79.375,
            "l2": 95.25,
            "l3": 95.25,
            "px": 31.75,
            "pz": 79.375
        }"#,
    );
    let geometry = ArmGeometry::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let inches = ArmKinematics::default()
        .inverse_kinematics(&Position::new(6.0, 2.0, -0.25), None)
        .unwrap();
    let millimetres = ArmKinematics::new(geometry)
        .inverse_kinematics(&Position::new(152.4, 50.8, -6.35), None)
        .unwrap();

    for ((joint, a), (_, b)) in inches.iter().zip(millimetres.iter()) {
        assert!((a - b).abs() < 1e-6, "{} differs: {} vs {}", joint, a, b);
    }
}

#[test]
fn test_malformed_file_is_parse_error() {
    let path = write_temp("malformed", r#"{"l1": 3.125, "l2": "long"}"#);
    let err = ArmGeometry::from_json_file(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, ConfigError::Parse(_)), "got {:?}", err);
    assert!(err.to_string().starts_with("failed to parse geometry"));
}

#[test]
fn test_io_error_names_the_path() {
    let err = ArmGeometry::from_json_file("/definitely/not/here.json").unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to read geometry file /definitely/not/here.json"
    );
}
