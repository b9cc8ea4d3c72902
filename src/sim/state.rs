//! Match state and core simulation types
//!
//! Everything the renderer and scoreboard read lives here. The state is
//! serializable as a whole so a snapshot can be inspected or dumped.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One side of the playfield. Left is the human, right is the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Active gameplay
    Playing,
    /// Paused; no physics runs
    Paused,
    /// A side reached the target score. Terminal until restart.
    Finished,
}

/// Events produced by a single tick, for the UI collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A point was scored by the given side
    PointScored(Side),
    /// The match ended
    MatchOver { winner: Side },
}

/// A paddle. `x` is fixed per side; only `y` (top-left corner) moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Movement speed in units per normalized tick
    pub speed: f32,
}

impl Paddle {
    /// The human paddle, anchored at the left margin, vertically centered
    pub fn left_human() -> Self {
        Self {
            x: PADDLE_MARGIN,
            y: (PLAYFIELD_HEIGHT - PADDLE_HEIGHT) / 2.0,
            w: PADDLE_WIDTH,
            h: PADDLE_HEIGHT,
            speed: HUMAN_PADDLE_SPEED,
        }
    }

    /// The AI paddle, anchored at the right margin
    pub fn right_ai() -> Self {
        Self {
            x: PLAYFIELD_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
            y: (PLAYFIELD_HEIGHT - PADDLE_HEIGHT) / 2.0,
            w: PADDLE_WIDTH,
            h: PADDLE_HEIGHT,
            speed: AI_PADDLE_SPEED,
        }
    }

    /// Top-left corner as a vector (for collision tests)
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Vertical center of the paddle face
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Re-establish the containment invariant: 0 <= y <= height - h
    #[inline]
    pub fn clamp_to_playfield(&mut self) {
        self.y = self.y.clamp(0.0, PLAYFIELD_HEIGHT - self.h);
    }
}

/// The ball. `vel.length()` equals `speed`, re-established whenever speed
/// or angle changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed magnitude; non-decreasing within a rally, capped
    pub speed: f32,
}

impl Ball {
    /// Spawn at the playfield center, moving toward `toward` at the start
    /// speed with a launch angle drawn from the bounded arc.
    pub fn spawn(rng: &mut Pcg32, toward: Side) -> Self {
        let angle = rng.random_range(-LAUNCH_HALF_ARC..LAUNCH_HALF_ARC);
        Self::spawn_at_angle(toward, angle)
    }

    /// Spawn with an explicit launch angle (tests fix the angle here)
    pub fn spawn_at_angle(toward: Side, angle: f32) -> Self {
        let dir = match toward {
            Side::Right => 1.0,
            Side::Left => -1.0,
        };
        Self {
            pos: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            vel: Vec2::new(
                dir * BALL_START_SPEED * angle.cos(),
                BALL_START_SPEED * angle.sin(),
            ),
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
        }
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    /// RNG for launch angles and serve sides
    pub rng: Pcg32,
    pub left_score: u32,
    pub right_score: u32,
    /// First side to reach this wins
    pub target_score: u32,
    pub phase: MatchPhase,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
}

impl GameState {
    /// Create a fresh match with the given seed. Serve side is random.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let toward = if rng.random_bool(0.5) {
            Side::Right
        } else {
            Side::Left
        };
        let ball = Ball::spawn(&mut rng, toward);
        Self {
            seed,
            rng,
            left_score: 0,
            right_score: 0,
            target_score: TARGET_SCORE,
            phase: MatchPhase::Playing,
            left_paddle: Paddle::left_human(),
            right_paddle: Paddle::right_ai(),
            ball,
        }
    }

    /// Score of the given side
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// The winning side, once the match is finished
    pub fn winner(&self) -> Option<Side> {
        if self.phase != MatchPhase::Finished {
            return None;
        }
        if self.left_score >= self.target_score {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Discard the in-flight rally and reinitialize. Scores, phase and ball
    /// are reset together; no intermediate state is observable.
    pub fn restart(&mut self) {
        let toward = if self.rng.random_bool(0.5) {
            Side::Right
        } else {
            Side::Left
        };
        self.left_score = 0;
        self.right_score = 0;
        self.phase = MatchPhase::Playing;
        self.ball = Ball::spawn(&mut self.rng, toward);
    }
}
