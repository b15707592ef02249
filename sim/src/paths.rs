//! Target point sets for the drawing demos.
//!
//! Drawing happens with the pen at [`PEN_DOWN_Z`]; moves between strokes
//! hop up to [`PEN_UP_Z`] first.

use std::f64::consts::TAU;

use pen_arm::Position;

/// Pen height while drawing.
pub const PEN_DOWN_Z: f64 = -0.25;

/// Pen height while travelling between strokes.
pub const PEN_UP_Z: f64 = 0.5;

/// `n_points` evenly spaced over a full turn in the horizontal plane at
/// `center.z`. The first and last points coincide so the outline closes.
pub fn circle(center: Position, radius: f64, n_points: usize) -> Vec<Position> {
    let step = if n_points > 1 {
        TAU / (n_points - 1) as f64
    } else {
        0.0
    };

    (0..n_points)
        .map(|i| {
            let t = step * i as f64;
            Position::new(
                center.x + radius * t.cos(),
                center.y + radius * t.sin(),
                center.z,
            )
        })
        .collect()
}

/// The stock circle demo: radius 1 around (6, 2) at pen-down height.
pub fn demo_circle() -> Vec<Position> {
    circle(Position::new(6.0, 2.0, PEN_DOWN_Z), 1.0, 50)
}

/// A house outline: walls, roof, door and window, with pen-up hops between
/// the separate strokes.
pub fn house() -> Vec<Position> {
    const DOWN: f64 = PEN_DOWN_Z;
    const UP: f64 = PEN_UP_Z;

    [
        // walls
        (5.0, 0.0, DOWN),
        (5.0, 1.0, DOWN),
        (6.0, 1.0, DOWN),
        (6.0, 0.0, DOWN),
        (5.0, 0.0, DOWN),
        (5.0, 0.0, UP),
        // roof
        (6.0, 1.5, DOWN),
        (7.0, 0.5, DOWN),
        (6.0, -0.5, DOWN),
        (6.0, 1.5, DOWN),
        (5.0, 0.25, UP),
        // door
        (5.0, 0.25, DOWN),
        (5.0, 0.75, DOWN),
        (5.5, 0.75, DOWN),
        (5.5, 0.25, DOWN),
        (5.0, 0.25, DOWN),
        (6.25, 0.25, UP),
        // window
        (6.25, 0.25, DOWN),
        (6.25, 0.75, DOWN),
        (6.75, 0.75, DOWN),
        (6.75, 0.25, DOWN),
        (6.25, 0.25, DOWN),
        (6.5, 0.75, UP),
        // window cross
        (6.5, 0.75, DOWN),
        (6.5, 0.25, DOWN),
        (6.5, 0.25, UP),
    ]
    .into_iter()
    .map(|(x, y, z)| Position::new(x, y, z))
    .collect()
}
