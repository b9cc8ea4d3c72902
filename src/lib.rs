//! Rally Pong - a classic two-player ball-and-paddle simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, match state)
//!
//! Rendering and input wiring are external collaborators: a frame driver
//! calls [`sim::tick`] once per frame with the elapsed time normalized to
//! ticks, then reads the resulting [`sim::GameState`] to draw.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side edge
    pub const PADDLE_MARGIN: f32 = 12.0;
    /// Human paddle speed (units per normalized tick)
    pub const HUMAN_PADDLE_SPEED: f32 = 6.0;
    /// AI paddle speed cap - deliberately below what steep returns demand
    pub const AI_PADDLE_SPEED: f32 = 4.2;
    /// AI stops correcting within this band of the ball's y
    pub const AI_DEAD_ZONE: f32 = 2.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Speed gained on every paddle hit
    pub const BALL_SPEED_INCREMENT: f32 = 0.25;
    /// Maximum ball speed
    pub const BALL_MAX_SPEED: f32 = 14.0;

    /// Maximum bounce angle off a paddle (75 degrees from horizontal)
    pub const MAX_BOUNCE_ANGLE: f32 = 5.0 * std::f32::consts::PI / 12.0;
    /// Half-arc of the randomized launch angle (22.5 degrees)
    pub const LAUNCH_HALF_ARC: f32 = std::f32::consts::PI / 8.0;

    /// First side to reach this score wins
    pub const TARGET_SCORE: u32 = 10;

    /// Nominal frame duration: 1.0 normalized tick is one 60 Hz frame
    pub const NOMINAL_FRAME_MS: f32 = 16.6667;
}

/// Convert elapsed wall-clock milliseconds to normalized ticks.
///
/// Negative or non-finite input is treated as zero so a misbehaving frame
/// driver cannot corrupt position/velocity state.
#[inline]
pub fn ms_to_ticks(elapsed_ms: f32) -> f32 {
    if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        elapsed_ms / consts::NOMINAL_FRAME_MS
    } else {
        0.0
    }
}
