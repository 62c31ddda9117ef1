//! Fixed-cadence frame loop
//!
//! perception -> tick -> presentation, once per frame. Pacing is the host's
//! job; the simulation itself has no notion of wall-clock time.

use std::time::{Duration, Instant};

use super::{HostError, PerceptionSource, PresentationSink};
use crate::sim::{MatchState, ScoreBoard, SeededServe, ServeDirection, TickInput};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub score: ScoreBoard,
}

pub struct FrameLoop<P, K, S: ServeDirection = SeededServe> {
    state: MatchState<S>,
    perception: P,
    sink: K,
    frame_time: Option<Duration>,
    swap_sides: bool,
    max_ticks: Option<u64>,
    frames: u64,
}

impl<P, K, S> FrameLoop<P, K, S>
where
    P: PerceptionSource,
    K: PresentationSink,
    S: ServeDirection,
{
    /// Unpaced loop; call [`FrameLoop::with_tick_rate`] to pace it
    pub fn new(state: MatchState<S>, perception: P, sink: K) -> Self {
        Self {
            state,
            perception,
            sink,
            frame_time: None,
            swap_sides: false,
            max_ticks: None,
            frames: 0,
        }
    }

    /// Sleep so frames start at most `rate` times per second (0 disables pacing)
    pub fn with_tick_rate(mut self, rate: u32) -> Self {
        self.frame_time = (rate > 0).then(|| Duration::from_secs_f64(1.0 / rate as f64));
        self
    }

    pub fn with_swap_sides(mut self, swap: bool) -> Self {
        self.swap_sides = swap;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn state(&self) -> &MatchState<S> {
        &self.state
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns `Ok(false)` once perception has ended.
    pub fn step(&mut self) -> Result<bool, HostError> {
        let Some(hands) = self.perception.poll()? else {
            return Ok(false);
        };

        let mut input = TickInput::from_hands(&hands);
        if self.swap_sides {
            input = input.swapped();
        }

        let snapshot = self.state.tick(&input);
        self.sink
            .present(&snapshot, self.state.events())
            .map_err(HostError::Presentation)?;
        self.frames += 1;
        Ok(true)
    }

    /// Run until perception ends, the tick limit is hit, or something fails.
    ///
    /// Errors stop the loop immediately; the match is simply not ticked again.
    pub fn run(&mut self) -> Result<RunSummary, HostError> {
        log::info!(
            "Frame loop starting ({})",
            match self.frame_time {
                Some(ft) => format!("{:.1} ms/frame", ft.as_secs_f64() * 1000.0),
                None => "unpaced".to_string(),
            }
        );

        loop {
            if self.max_ticks.is_some_and(|max| self.frames >= max) {
                log::info!("Tick limit reached");
                break;
            }

            let frame_start = Instant::now();
            if !self.step()? {
                log::info!("Perception source ended");
                break;
            }

            if let Some(frame_time) = self.frame_time {
                let elapsed = frame_start.elapsed();
                if elapsed < frame_time {
                    std::thread::sleep(frame_time - elapsed);
                }
            }
        }

        let summary = RunSummary {
            frames: self.frames,
            score: self.state.score,
        };
        log::info!(
            "Run finished after {} frames, final score {}-{}",
            summary.frames,
            summary.score.left,
            summary.score.right
        );
        Ok(summary)
    }
}
