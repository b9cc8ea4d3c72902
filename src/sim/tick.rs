//! Per-frame simulation tick
//!
//! Advances the match by a number of normalized ticks (1.0 = one 60 Hz
//! frame). The step order is fixed and load-bearing: wall and scoring
//! checks must see the post-integration ball position, and the paddle
//! checks must see the post-wall position.

use glam::Vec2;

use super::geom::circle_rect_intersects;
use super::state::{Ball, GameState, MatchEvent, MatchPhase, Paddle, Side};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// The host drains its event queue into one of these per frame, so the
/// engine sees inputs in a single deterministic order even if the platform
/// delivers events concurrently with rendering.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional input, held
    pub move_up: bool,
    pub move_down: bool,
    /// Absolute pointer position in playfield coordinates; centers the
    /// human paddle on this y, overriding directional movement first
    pub cursor_y: Option<f32>,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Restart request (one-shot)
    pub restart: bool,
}

/// Advance the match state, returning the events produced this frame.
///
/// Negative or non-finite `ticks` is clamped to zero; commands are still
/// drained so pause/restart cannot be lost to a bad frame timer.
pub fn tick(state: &mut GameState, input: &TickInput, ticks: f32) -> Vec<MatchEvent> {
    let ticks = if ticks.is_finite() && ticks > 0.0 {
        ticks
    } else {
        0.0
    };
    let mut events = Vec::new();

    // Restart discards the in-flight rally and reinitializes atomically
    if input.restart {
        state.restart();
        return events;
    }

    // Pause toggle; terminal Finished ignores it
    if input.pause {
        match state.phase {
            MatchPhase::Playing => state.phase = MatchPhase::Paused,
            MatchPhase::Paused => state.phase = MatchPhase::Playing,
            MatchPhase::Finished => {}
        }
    }

    // No physics while paused or finished
    if state.phase != MatchPhase::Playing {
        return events;
    }

    // 1. Human paddle: pointer sets position directly, keys add on top
    if let Some(cursor_y) = input.cursor_y {
        state.left_paddle.y = cursor_y - state.left_paddle.h / 2.0;
    }
    let kb_move = state.left_paddle.speed * ticks;
    if input.move_up {
        state.left_paddle.y -= kb_move;
    }
    if input.move_down {
        state.left_paddle.y += kb_move;
    }
    state.left_paddle.clamp_to_playfield();

    // 2. Integrate ball position
    state.ball.pos += state.ball.vel * ticks;

    // 3. Top/bottom wall collisions: clamp and invert, perfectly elastic
    let ball = &mut state.ball;
    if ball.pos.y - ball.radius <= 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
    } else if ball.pos.y + ball.radius >= PLAYFIELD_HEIGHT {
        ball.pos.y = PLAYFIELD_HEIGHT - ball.radius;
        ball.vel.y = -ball.vel.y;
    }

    // 4. Scoring: trailing edge fully past a side boundary
    if state.ball.pos.x + state.ball.radius < 0.0 {
        events.extend(score_point(state, Side::Right));
        return events;
    } else if state.ball.pos.x - state.ball.radius > PLAYFIELD_WIDTH {
        events.extend(score_point(state, Side::Left));
        return events;
    }

    // 5. Paddle collisions, left then right. Reposition tangent to the
    //    paddle's outer face so the ball cannot tunnel or stick.
    let left = state.left_paddle.clone();
    if circle_rect_intersects(
        state.ball.pos,
        state.ball.radius,
        left.origin(),
        left.w,
        left.h,
    ) {
        state.ball.pos.x = left.x + left.w + state.ball.radius;
        reflect_from_paddle(&mut state.ball, &left, Side::Left);
    }
    let right = state.right_paddle.clone();
    if circle_rect_intersects(
        state.ball.pos,
        state.ball.radius,
        right.origin(),
        right.w,
        right.h,
    ) {
        state.ball.pos.x = right.x - state.ball.radius;
        reflect_from_paddle(&mut state.ball, &right, Side::Right);
    }

    // 6. AI: proportional tracking of the ball's y, capped per tick
    let diff = state.ball.pos.y - state.right_paddle.center_y();
    let max_move = state.right_paddle.speed * ticks;
    if diff.abs() > AI_DEAD_ZONE {
        state.right_paddle.y += diff.clamp(-max_move, max_move);
        state.right_paddle.clamp_to_playfield();
    }

    events
}

/// Award a point to `scorer` and either finish the match or respawn the
/// ball toward the side that lost the point.
fn score_point(state: &mut GameState, scorer: Side) -> Vec<MatchEvent> {
    let mut events = vec![MatchEvent::PointScored(scorer)];
    match scorer {
        Side::Left => state.left_score += 1,
        Side::Right => state.right_score += 1,
    }
    if state.score(scorer) >= state.target_score {
        state.phase = MatchPhase::Finished;
        events.push(MatchEvent::MatchOver { winner: scorer });
    } else {
        state.ball = Ball::spawn(&mut state.rng, scorer.opponent());
    }
    events
}

/// Reflect the ball off a paddle.
///
/// The vertical offset of the ball from the paddle center, normalized to
/// [-1, 1], maps linearly to a bounce angle within +-75 degrees: center
/// hits return nearly flat, edge hits go out steep. Every hit raises the
/// speed by a fixed increment up to the cap.
fn reflect_from_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) {
    // Degenerate overlaps (ball already past the paddle's top or bottom
    // after integration) would push the ratio outside [-1, 1], so clamp.
    let offset = ((ball.pos.y - paddle.center_y()) / (paddle.h / 2.0)).clamp(-1.0, 1.0);
    let bounce_angle = offset * MAX_BOUNCE_ANGLE;

    let dir = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    let new_speed = (ball.speed + BALL_SPEED_INCREMENT).min(BALL_MAX_SPEED);
    ball.speed = new_speed;
    ball.vel = Vec2::new(
        dir * new_speed * bounce_angle.cos(),
        new_speed * bounce_angle.sin(),
    );
}
