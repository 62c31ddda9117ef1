//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Injected serve direction only
//! - No I/O, rendering, or platform dependencies

pub mod collision;
pub mod gate;
pub mod input;
pub mod physics;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use gate::{gesture_distance, should_start};
pub use input::{HandObservation, Observation, TickInput, track_paddle};
pub use physics::step_ball;
pub use serve::{FixedServe, SeededServe, ServeDirection};
pub use state::{
    BallState, Court, MatchEvent, MatchPhase, MatchState, PaddleState, PaddleTint, ScoreBoard,
    Side, Snapshot,
};
pub use tick::tick;
