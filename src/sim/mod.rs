//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Single-threaded: `tick` runs to completion before the frame's render
//!
//! The engine owns all entity state. Collaborators read the public fields of
//! [`GameState`] between frames and write only through [`TickInput`].

pub mod geom;
pub mod state;
pub mod tick;

pub use geom::circle_rect_intersects;
pub use state::{Ball, GameState, MatchEvent, MatchPhase, Paddle, Side};
pub use tick::{TickInput, tick};
