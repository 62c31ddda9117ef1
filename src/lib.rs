//! Hand Pong - two-player Pong steered by tracked hands
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle tracking, start gesture, ball physics)
//! - `host`: Frame loop plus the perception/presentation seams
//! - `settings`: Runtime configuration for the host

pub mod host;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Court configuration constants
///
/// Distances are pixels, speeds are pixels per tick.
pub mod consts {
    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 300.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    pub const LEFT_PADDLE_X: f32 = 30.0;
    pub const RIGHT_PADDLE_X: f32 = COURT_WIDTH - 40.0;
    /// Maximum paddle travel per tick while tracking a hand
    pub const MAX_PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Serve speed on each axis; also the floor while in play
    pub const BALL_INITIAL_SPEED: f32 = 7.0;
    /// Added to both velocity magnitudes on every paddle hit
    pub const BALL_SPEED_INCREMENT: f32 = 0.5;

    /// Fingertips closer than this (court pixels) start a rally
    pub const START_DISTANCE: f32 = 50.0;

    /// Default host cadence
    pub const DEFAULT_TICK_RATE: u32 = 60;
}
