//! Per-frame simulation tick
//!
//! Core game loop that advances the match by one frame.

use super::gate::should_start;
use super::input::{TickInput, track_paddle};
use super::physics::step_ball;
use super::serve::ServeDirection;
use super::state::{MatchEvent, MatchPhase, MatchState, Side, Snapshot};

/// Advance the match by one frame and return what the sink should draw.
///
/// Paddles track their hands first, then the start gesture is checked while
/// idle, then the ball moves while playing. A rally that is started on this
/// tick already moves the ball on this tick.
pub fn tick<S: ServeDirection>(state: &mut MatchState<S>, input: &TickInput) -> Snapshot {
    state.events.clear();

    let court = state.court;
    for side in Side::BOTH {
        track_paddle(state.paddle_mut(side), input.get(side), &court);
    }

    if state.phase == MatchPhase::Idle
        && should_start(input.left.as_ref(), input.right.as_ref(), &court)
    {
        log::debug!("Start gesture accepted");
        state.phase = MatchPhase::Playing;
        state.events.push(MatchEvent::Started);
    }

    if state.phase == MatchPhase::Playing {
        let outcome = step_ball(
            &mut state.ball,
            &state.left,
            &state.right,
            &court,
            &mut state.score,
            &mut state.serve,
        );

        if outcome.wall_bounce {
            log::trace!("Wall bounce at y={:.1}", state.ball.pos.y);
            state.events.push(MatchEvent::WallBounce);
        }
        if outcome.left_hit {
            state.events.push(MatchEvent::PaddleHit { side: Side::Left });
        }
        if outcome.right_hit {
            state.events.push(MatchEvent::PaddleHit { side: Side::Right });
        }
        if outcome.paddle_hit() {
            log::trace!("Paddle hit, velocity now {:?}", state.ball.vel);
        }

        // No cooldown: the next start gesture can relaunch right away.
        if let Some(side) = outcome.scored {
            log::debug!(
                "Point to {} ({}-{})",
                side.as_str(),
                state.score.left,
                state.score.right
            );
            state.phase = MatchPhase::Idle;
            state.events.push(MatchEvent::Scored { side });
        }
    }

    state.snapshot()
}
