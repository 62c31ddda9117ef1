//! Start gesture detection
//!
//! A rally starts when both fingertips are visible on the same tick and close
//! together. There is no debounce: one qualifying tick is enough, and nothing
//! carries over from earlier ticks.

use super::input::Observation;
use super::state::Court;

/// Distance between two fingertips in court pixels
pub fn gesture_distance(left: &Observation, right: &Observation, court: &Court) -> f32 {
    let dx = (right.norm_x - left.norm_x) * court.width;
    let dy = (right.norm_y - left.norm_y) * court.height;
    dx.hypot(dy)
}

/// Whether this tick's observations form the start gesture
pub fn should_start(left: Option<&Observation>, right: Option<&Observation>, court: &Court) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => gesture_distance(l, r, court) < court.start_distance,
        _ => false,
    }
}
