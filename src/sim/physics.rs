//! Ball integration, bounces, and scoring
//!
//! One call advances the ball by exactly one tick. Wall bounces are a plain
//! sign flip with no position correction, so the ball may sit inside a wall
//! for a tick before it heads back out.

use super::serve::ServeDirection;
use super::state::{BallState, Court, PaddleState, ScoreBoard, Side};

/// What happened to the ball during one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallOutcome {
    pub wall_bounce: bool,
    pub left_hit: bool,
    pub right_hit: bool,
    /// Side that won the point, if the ball left the court
    pub scored: Option<Side>,
}

impl BallOutcome {
    pub fn paddle_hit(&self) -> bool {
        self.left_hit || self.right_hit
    }
}

/// -1, 0 or 1
fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Advance the ball one tick against both paddles.
///
/// On a score the winner's point is recorded and the ball is re-served from
/// the center before returning, so no off-court position is ever observed.
pub fn step_ball(
    ball: &mut BallState,
    left: &PaddleState,
    right: &PaddleState,
    court: &Court,
    score: &mut ScoreBoard,
    serve: &mut impl ServeDirection,
) -> BallOutcome {
    let mut outcome = BallOutcome::default();
    let r = court.ball_radius;

    ball.pos += ball.vel;

    if ball.pos.y - r <= 0.0 || ball.pos.y + r >= court.height {
        ball.vel.y = -ball.vel.y;
        outcome.wall_bounce = true;
    }

    // Both paddles are checked on the same tick; overlapping both still
    // yields a single reflection.
    let bounds = ball.bounds(r);
    outcome.left_hit = court.paddle_rect(Side::Left, left.y).overlaps(&bounds);
    outcome.right_hit = court.paddle_rect(Side::Right, right.y).overlaps(&bounds);

    if outcome.paddle_hit() {
        ball.vel.x = -ball.vel.x;
        ball.vel.x += court.speed_increment * sign(ball.vel.x);
        ball.vel.y += court.speed_increment * sign(ball.vel.y);
    }

    let winner = if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > court.width {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(side) = winner {
        score.award(side);
        ball.reset(court, serve);
        outcome.scored = Some(side);
    }

    outcome
}
