//! Rally Pong entry point
//!
//! Headless demo driver: a scripted policy plays the human side through the
//! same input surface a real player would use, the AI defends the right
//! side, and the match runs at fixed 1.0-tick frames until someone wins.
//! A renderer would hook in here by reading `GameState` after each tick.

use std::time::{SystemTime, UNIX_EPOCH};

use rally_pong::consts::*;
use rally_pong::sim::{GameState, MatchEvent, MatchPhase, TickInput, tick};

/// Drive the left paddle toward the ball with held directional input only,
/// leaving a margin so the demo plays like a competent human, not an aimbot.
fn demo_input(state: &GameState) -> TickInput {
    let diff = state.ball.pos.y - state.left_paddle.center_y();
    TickInput {
        move_up: diff < -HUMAN_PADDLE_SPEED,
        move_down: diff > HUMAN_PADDLE_SPEED,
        ..TickInput::default()
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("Rally Pong demo starting (seed {seed})");
    let mut state = GameState::new(seed);

    // Safety valve: a match to 10 at these speeds ends well within this
    let max_frames = 1_000_000;
    let mut frame = 0u64;
    while state.phase != MatchPhase::Finished && frame < max_frames {
        let input = demo_input(&state);
        for event in tick(&mut state, &input, 1.0) {
            match event {
                MatchEvent::PointScored(side) => {
                    log::info!(
                        "point for {side:?} - score {}:{} at frame {frame}",
                        state.left_score,
                        state.right_score
                    );
                }
                MatchEvent::MatchOver { winner } => {
                    log::info!("match over, winner = {winner:?}");
                }
            }
        }
        frame += 1;
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize final state: {e}"),
    }
}
