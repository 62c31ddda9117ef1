//! Hand observations and paddle tracking
//!
//! Perception hands us normalized fingertip positions. Paddles chase the
//! fingertip height at a bounded speed instead of snapping to it, so jitter
//! in the tracker never teleports a paddle.

use serde::{Deserialize, Serialize};

use super::state::{Court, PaddleState, Side};

/// A fingertip position in normalized court coordinates (0..1 on both axes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub norm_x: f32,
    pub norm_y: f32,
}

impl Observation {
    pub fn new(norm_x: f32, norm_y: f32) -> Self {
        Self { norm_x, norm_y }
    }

    pub fn is_finite(&self) -> bool {
        self.norm_x.is_finite() && self.norm_y.is_finite()
    }
}

/// A labelled hand as reported by the perception source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    pub side: Side,
    pub x: f32,
    pub y: f32,
}

impl HandObservation {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }

    pub fn observation(&self) -> Observation {
        Observation::new(self.x, self.y)
    }
}

/// Observations for a single tick; `None` means no hand for that side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub left: Option<Observation>,
    pub right: Option<Observation>,
}

impl TickInput {
    pub fn new(left: Option<Observation>, right: Option<Observation>) -> Self {
        Self { left, right }
    }

    /// Group labelled hands by side. The first hand per label wins; later
    /// hands with the same label are dropped for this tick.
    pub fn from_hands(hands: &[HandObservation]) -> Self {
        let mut input = Self::default();
        for hand in hands {
            let slot = match hand.side {
                Side::Left => &mut input.left,
                Side::Right => &mut input.right,
            };
            if slot.is_some() {
                log::trace!("Ignoring extra {} hand", hand.side.as_str());
                continue;
            }
            *slot = Some(hand.observation());
        }
        input
    }

    pub fn get(&self, side: Side) -> Option<Observation> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Exchange sides, for feeds whose handedness labels are reversed
    pub fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }
}

/// Move a paddle toward the observed fingertip height, at most
/// `max_paddle_speed` per tick, then clamp it to the court.
///
/// Without an observation the paddle holds still and is marked undetected.
/// Non-finite observations count as missing.
pub fn track_paddle(paddle: &mut PaddleState, observation: Option<Observation>, court: &Court) {
    let Some(obs) = observation.filter(Observation::is_finite) else {
        paddle.detected = false;
        return;
    };

    let target_y = obs.norm_y * court.height - court.paddle_height / 2.0;
    let delta = (target_y - paddle.y).clamp(-court.max_paddle_speed, court.max_paddle_speed);
    paddle.y = court.clamp_paddle_y(paddle.y + delta);
    paddle.detected = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(y: f32) -> PaddleState {
        PaddleState { y, detected: false }
    }

    #[test]
    fn test_absent_observation_only_clears_detected() {
        let court = Court::STANDARD;
        let mut paddle = PaddleState { y: 77.0, detected: true };
        track_paddle(&mut paddle, None, &court);
        assert_eq!(paddle.y, 77.0);
        assert!(!paddle.detected);
    }

    #[test]
    fn test_small_move_reaches_target() {
        let court = Court::STANDARD;
        let mut paddle = paddle_at(130.0);
        // target = 0.51 * 300 - 20 = 133
        track_paddle(&mut paddle, Some(Observation::new(0.5, 0.51)), &court);
        assert!((paddle.y - 133.0).abs() < 1e-4);
        assert!(paddle.detected);
    }

    #[test]
    fn test_large_move_is_rate_limited() {
        let court = Court::STANDARD;
        let mut paddle = paddle_at(130.0);
        track_paddle(&mut paddle, Some(Observation::new(0.5, 1.0)), &court);
        assert_eq!(paddle.y, 140.0);
        track_paddle(&mut paddle, Some(Observation::new(0.5, 0.0)), &court);
        assert_eq!(paddle.y, 130.0);
    }

    #[test]
    fn test_paddle_converges_within_a_few_ticks() {
        let court = Court::STANDARD;
        let mut paddle = paddle_at(130.0);
        let obs = Some(Observation::new(0.5, 0.9)); // target 250
        for _ in 0..12 {
            track_paddle(&mut paddle, obs, &court);
        }
        assert_eq!(paddle.y, 250.0);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let court = Court::STANDARD;
        let mut paddle = paddle_at(5.0);
        track_paddle(&mut paddle, Some(Observation::new(0.5, -0.2)), &court);
        assert_eq!(paddle.y, 0.0);

        let mut paddle = paddle_at(255.0);
        track_paddle(&mut paddle, Some(Observation::new(0.5, 1.3)), &court);
        assert_eq!(paddle.y, court.max_paddle_y());
    }

    #[test]
    fn test_nan_observation_counts_as_absent() {
        let court = Court::STANDARD;
        let mut paddle = PaddleState { y: 50.0, detected: true };
        track_paddle(&mut paddle, Some(Observation::new(0.5, f32::NAN)), &court);
        assert_eq!(paddle.y, 50.0);
        assert!(!paddle.detected);
    }

    #[test]
    fn test_from_hands_groups_by_side() {
        let hands = [
            HandObservation::new(Side::Right, 0.7, 0.2),
            HandObservation::new(Side::Left, 0.3, 0.4),
        ];
        let input = TickInput::from_hands(&hands);
        assert_eq!(input.left, Some(Observation::new(0.3, 0.4)));
        assert_eq!(input.right, Some(Observation::new(0.7, 0.2)));
    }

    #[test]
    fn test_from_hands_first_duplicate_wins() {
        let hands = [
            HandObservation::new(Side::Left, 0.1, 0.1),
            HandObservation::new(Side::Left, 0.9, 0.9),
        ];
        let input = TickInput::from_hands(&hands);
        assert_eq!(input.left, Some(Observation::new(0.1, 0.1)));
        assert_eq!(input.right, None);
    }

    #[test]
    fn test_swapped_exchanges_sides() {
        let input = TickInput::new(Some(Observation::new(0.25, 0.6)), None).swapped();
        assert_eq!(input.left, None);
        assert_eq!(input.right, Some(Observation::new(0.25, 0.6)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: paddles never leave the court, whatever the input
            #[test]
            fn prop_paddle_stays_on_court(
                start in 0.0f32..=260.0f32,
                ys in proptest::collection::vec(proptest::option::of(-2.0f32..3.0f32), 1..64)
            ) {
                let court = Court::STANDARD;
                let mut paddle = paddle_at(start);
                for y in ys {
                    track_paddle(&mut paddle, y.map(|y| Observation::new(0.5, y)), &court);
                    prop_assert!(paddle.y >= 0.0 && paddle.y <= court.max_paddle_y());
                }
            }

            /// Property: a tracked paddle moves at most the max speed per tick
            #[test]
            fn prop_paddle_rate_limited(
                start in 0.0f32..=260.0f32,
                y in -1.0f32..2.0f32
            ) {
                let court = Court::STANDARD;
                let mut paddle = paddle_at(start);
                track_paddle(&mut paddle, Some(Observation::new(0.5, y)), &court);
                prop_assert!((paddle.y - start).abs() <= court.max_paddle_speed + 1e-4);
                prop_assert!(paddle.detected);
            }
        }
    }
}
