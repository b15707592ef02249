mod config_error;
mod kinematics_error;

pub use config_error::ConfigError;
pub use kinematics_error::KinematicsError;
