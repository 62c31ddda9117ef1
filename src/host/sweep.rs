//! Synthetic hands for headless runs
//!
//! Each cycle opens with both fingertips touching at the court center (the
//! start gesture), then the hands split to their sides and sweep up and down
//! at slightly different rates.

use super::{PerceptionError, PerceptionSource};
use crate::sim::{HandObservation, Side};

/// Frames per cycle
const CYCLE_FRAMES: u64 = 600;
/// Frames at the start of each cycle holding the start gesture
const GESTURE_FRAMES: u64 = 20;

#[derive(Debug, Clone, Default)]
pub struct SweepPerception {
    frame: u64,
}

impl SweepPerception {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands for a given frame number
    pub fn hands_at(frame: u64) -> Vec<HandObservation> {
        let t = frame % CYCLE_FRAMES;
        if t < GESTURE_FRAMES {
            return vec![
                HandObservation::new(Side::Left, 0.49, 0.5),
                HandObservation::new(Side::Right, 0.51, 0.5),
            ];
        }

        let secs = frame as f32 / 60.0;
        vec![
            HandObservation::new(Side::Left, 0.1, 0.5 + 0.4 * (secs * 2.1).sin()),
            HandObservation::new(Side::Right, 0.9, 0.5 + 0.4 * (secs * 2.7).cos()),
        ]
    }
}

impl PerceptionSource for SweepPerception {
    fn poll(&mut self) -> Result<Option<Vec<HandObservation>>, PerceptionError> {
        let hands = Self::hands_at(self.frame);
        self.frame += 1;
        Ok(Some(hands))
    }
}
