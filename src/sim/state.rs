//! Match state and core simulation types
//!
//! Everything the presentation side may read lives here. Mutation happens
//! only inside [`crate::sim::tick`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::serve::{SeededServe, ServeDirection};
use crate::consts::*;

/// Which half of the court a paddle (or hand) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Fixed court geometry and tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    pub ball_radius: f32,
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub max_paddle_speed: f32,
    pub start_distance: f32,
}

impl Court {
    /// The one court every match is played on
    pub const STANDARD: Court = Court {
        width: COURT_WIDTH,
        height: COURT_HEIGHT,
        paddle_width: PADDLE_WIDTH,
        paddle_height: PADDLE_HEIGHT,
        left_paddle_x: LEFT_PADDLE_X,
        right_paddle_x: RIGHT_PADDLE_X,
        ball_radius: BALL_RADIUS,
        initial_speed: BALL_INITIAL_SPEED,
        speed_increment: BALL_SPEED_INCREMENT,
        max_paddle_speed: MAX_PADDLE_SPEED,
        start_distance: START_DISTANCE,
    };

    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_paddle_x,
            Side::Right => self.right_paddle_x,
        }
    }

    /// Lowest allowed paddle top edge
    pub fn max_paddle_y(&self) -> f32 {
        self.height - self.paddle_height
    }

    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Paddle rectangle with its top edge at `y`
    pub fn paddle_rect(&self, side: Side, y: f32) -> Rect {
        Rect::new(self.paddle_x(side), y, self.paddle_width, self.paddle_height)
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleState {
    /// Top edge, always within `[0, height - paddle_height]`
    pub y: f32,
    /// Whether a hand was seen for this side on the latest tick
    pub detected: bool,
}

impl PaddleState {
    /// Paddle vertically centered on the court
    pub fn centered(court: &Court) -> Self {
        Self {
            y: court.height / 2.0 - court.paddle_height / 2.0,
            detected: false,
        }
    }
}

/// The ball (center position plus per-tick velocity)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl BallState {
    /// Ball at the court center heading in a fresh diagonal direction
    pub fn served(court: &Court, serve: &mut impl ServeDirection) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        };
        ball.reset(court, serve);
        ball
    }

    pub fn reset(&mut self, court: &Court, serve: &mut impl ServeDirection) {
        let (sx, sy) = serve.next_signs();
        self.pos = court.center();
        self.vel = Vec2::new(sx, sy) * court.initial_speed;
    }

    /// Bounding square used for paddle overlap tests
    pub fn bounds(&self, radius: f32) -> Rect {
        Rect::new(
            self.pos.x - radius,
            self.pos.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball parked at center, waiting for both fingertips to touch
    #[default]
    Idle,
    /// Ball in motion
    Playing,
}

/// Points per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub left: u32,
    pub right: u32,
}

impl ScoreBoard {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Start gesture accepted, rally begins
    Started,
    WallBounce,
    /// Ball hit the paddle on `side` (both sides on a combined hit)
    PaddleHit { side: Side },
    /// `side` won the point
    Scored { side: Side },
}

/// How a sink should color a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleTint {
    /// Hand visible (drawn green)
    Tracked,
    /// Hand lost (drawn red)
    Lost,
}

/// Read-only view handed to the presentation sink after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub left_detected: bool,
    pub right_detected: bool,
    pub ball_x: f32,
    pub ball_y: f32,
    pub phase: MatchPhase,
    pub left_score: u32,
    pub right_score: u32,
}

impl Snapshot {
    pub fn paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_paddle_y,
            Side::Right => self.right_paddle_y,
        }
    }

    pub fn detected(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_detected,
            Side::Right => self.right_detected,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub fn paddle_rect(&self, side: Side, court: &Court) -> Rect {
        court.paddle_rect(side, self.paddle_y(side))
    }

    pub fn paddle_tint(&self, side: Side) -> PaddleTint {
        if self.detected(side) {
            PaddleTint::Tracked
        } else {
            PaddleTint::Lost
        }
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState<S: ServeDirection = SeededServe> {
    pub court: Court,
    pub left: PaddleState,
    pub right: PaddleState,
    pub ball: BallState,
    pub phase: MatchPhase,
    pub score: ScoreBoard,
    pub(crate) events: Vec<MatchEvent>,
    pub(crate) serve: S,
}

impl MatchState<SeededServe> {
    /// Create a match whose serves come from a seeded RNG
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SeededServe::new(seed))
    }
}

impl<S: ServeDirection> MatchState<S> {
    pub fn new(mut serve: S) -> Self {
        let court = Court::STANDARD;
        let ball = BallState::served(&court, &mut serve);
        Self {
            court,
            left: PaddleState::centered(&court),
            right: PaddleState::centered(&court),
            ball,
            phase: MatchPhase::Idle,
            score: ScoreBoard::default(),
            events: Vec::new(),
            serve,
        }
    }

    /// Advance one frame; see [`crate::sim::tick`]
    pub fn tick(&mut self, input: &super::TickInput) -> Snapshot {
        super::tick(self, input)
    }

    pub fn paddle(&self, side: Side) -> &PaddleState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn paddle_mut(&mut self, side: Side) -> &mut PaddleState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left_paddle_y: self.left.y,
            right_paddle_y: self.right.y,
            left_detected: self.left.detected,
            right_detected: self.right.detected,
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            phase: self.phase,
            left_score: self.score.left,
            right_score: self.score.right,
        }
    }
}
