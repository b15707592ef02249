// Pen arm command line
// Run with: cargo run -p pen_arm_sim -- ik 6 2 -0.25
//           cargo run -p pen_arm_sim -- draw house --no-wait

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pen_arm::{ArmGeometry, ArmKinematics, JointAngles, Position};
use pen_arm_sim::{paths, FollowerConfig, PathFollower, SimulatedServo};

#[derive(Parser)]
#[command(version, propagate_version = true)]
#[command(about = "Kinematics and drawing simulator for the 4-DOF pen arm", long_about = None)]
struct Args {
    /// Arm geometry as JSON. Defaults to the desktop pen plotter.
    #[arg(short, long, global = true)]
    geometry: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Tip position for a set of joint angles (degrees).
    Fk {
        #[arg(allow_negative_numbers = true)]
        t1: f64,
        #[arg(allow_negative_numbers = true)]
        t2: f64,
        #[arg(allow_negative_numbers = true)]
        t3: f64,
        /// Wrist angle. Defaults to the pen-down wrist.
        #[arg(long, allow_negative_numbers = true)]
        t4: Option<f64>,
    },
    /// Joint angles reaching a tip position.
    Ik {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
        /// Wrist angle override.
        #[arg(long, allow_negative_numbers = true)]
        t4: Option<f64>,
    },
    /// Drive the simulated servo board through a drawing.
    Draw {
        #[arg(value_enum)]
        drawing: Drawing,

        /// Servo move duration in milliseconds.
        #[arg(long, default_value_t = 800)]
        duration_ms: u64,

        /// Extra wait after each move in milliseconds.
        #[arg(long, default_value_t = 100)]
        settle_ms: u64,

        /// Do not sleep between points.
        #[arg(long)]
        no_wait: bool,

        /// Circle radius.
        #[arg(long, default_value_t = 1.0)]
        radius: f64,

        /// Number of points on the circle.
        #[arg(long, default_value_t = 50)]
        points: usize,

        /// Print the path report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Drawing {
    Circle,
    House,
}

fn load_kinematics(path: Option<&PathBuf>) -> anyhow::Result<ArmKinematics> {
    let geometry = match path {
        Some(path) => ArmGeometry::from_json_file(path)
            .with_context(|| format!("Loading geometry from {}", path.display()))?,
        None => ArmGeometry::default(),
    };
    info!("Arm geometry: {:?}", geometry);

    Ok(ArmKinematics::new(geometry))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let kinematics = load_kinematics(args.geometry.as_ref())?;

    match args.command {
        Command::Fk { t1, t2, t3, t4 } => {
            let joints = match t4 {
                Some(t4) => JointAngles::new(t1, t2, t3, t4),
                None => JointAngles::pen_down(t1, t2, t3),
            };
            let tip = kinematics.forward_kinematics(&joints);
            println!("{} -> {}", joints, tip);
        }
        Command::Ik { x, y, z, t4 } => {
            let target = Position::new(x, y, z);
            match kinematics.inverse_kinematics(&target, t4) {
                Ok(joints) => {
                    let tip = kinematics.forward_kinematics(&joints);
                    println!("{} -> {}", target, joints);
                    println!("FK check: {} (error {:.2e})", tip, tip.distance(&target));
                }
                Err(e) => {
                    warn!("{}", e);
                    anyhow::bail!("No solution for {}: {}", target, e.kind());
                }
            }
        }
        Command::Draw {
            drawing,
            duration_ms,
            settle_ms,
            no_wait,
            radius,
            points,
            json,
        } => {
            let config = FollowerConfig {
                duration_ms,
                settle_ms,
                wait: !no_wait,
                ..FollowerConfig::default()
            };
            config.validate().map_err(anyhow::Error::msg)?;

            let path = match drawing {
                Drawing::Circle => paths::circle(
                    Position::new(6.0, 2.0, paths::PEN_DOWN_Z),
                    radius,
                    points,
                ),
                Drawing::House => paths::house(),
            };

            let wiring = config.wiring;
            let mut follower = PathFollower::new(kinematics, SimulatedServo::new(), config);
            let report = follower.follow(&path).await?;

            info!(
                "Drew {} of {} points ({} unreachable, {} past joint limits)",
                report.moved,
                report.total(),
                report.unreachable_count(),
                report.joint_limit_count()
            );
            if let Some(tip) = follower.controller().tip_position(&wiring, &kinematics) {
                info!("Pen resting at {}", tip);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
    }

    Ok(())
}
