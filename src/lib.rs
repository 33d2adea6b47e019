//! Teraform - An orbiting-sun particle accretion game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, charges, collapse)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Top-10 leaderboard
//! - `error`: Errors for the fallible edges (tuning parsing, file loading)

pub mod error;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use highscores::HighScores;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame step (the game runs one simulation step per rendered frame)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1512.0;
    pub const SCREEN_HEIGHT: f32 = 982.0;

    /// Every particle body is a square of this side; also the tiling pitch
    pub const PARTICLE_SIZE: f32 = 20.0;

    /// Centers closer than this are considered touching (one unit of slack)
    pub const ADJACENCY_DISTANCE: f32 = 21.0;
    pub const ADJACENCY_DISTANCE_SQ: f32 = ADJACENCY_DISTANCE * ADJACENCY_DISTANCE;

    /// Per-axis slack when matching a particle to an expected grid cell
    pub const CLUSTER_TOLERANCE: f32 = 1.0;
    /// Cells per side of a collapse cluster
    pub const CLUSTER_SIDE: usize = 3;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Unit vector for a heading given in degrees
#[inline]
pub fn heading_vector(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Heading in degrees from `from` toward `to`
#[inline]
pub fn angle_between_points(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

/// Center of a playfield of the given size
#[inline]
pub fn screen_center(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 2.0)
}
