//! Host side of the simulation
//!
//! The core never does I/O. Everything that touches the outside world lives
//! behind two seams:
//! - `PerceptionSource`: yields labelled hands once per frame
//! - `PresentationSink`: receives the snapshot after each tick
//!
//! `FrameLoop` wires them together and paces frames.

pub mod error;
pub mod frame_loop;
pub mod script;
pub mod sink;
pub mod sweep;

pub use error::{HostError, PerceptionError};
pub use frame_loop::{FrameLoop, RunSummary};
pub use script::ScriptedPerception;
pub use sink::{JsonLinesSink, LogSink};
pub use sweep::SweepPerception;

use crate::sim::{HandObservation, MatchEvent, Snapshot};

/// Something that reports where the players' hands are
pub trait PerceptionSource {
    /// Hands seen this frame. `Ok(None)` means the source has ended.
    fn poll(&mut self) -> Result<Option<Vec<HandObservation>>, PerceptionError>;
}

impl<P: PerceptionSource + ?Sized> PerceptionSource for Box<P> {
    fn poll(&mut self) -> Result<Option<Vec<HandObservation>>, PerceptionError> {
        (**self).poll()
    }
}

/// Something that shows the match to the players
pub trait PresentationSink {
    fn present(&mut self, snapshot: &Snapshot, events: &[MatchEvent]) -> std::io::Result<()>;
}

impl<A: PresentationSink, B: PresentationSink> PresentationSink for (A, B) {
    fn present(&mut self, snapshot: &Snapshot, events: &[MatchEvent]) -> std::io::Result<()> {
        self.0.present(snapshot, events)?;
        self.1.present(snapshot, events)
    }
}

impl<T: PresentationSink> PresentationSink for Option<T> {
    fn present(&mut self, snapshot: &Snapshot, events: &[MatchEvent]) -> std::io::Result<()> {
        match self {
            Some(sink) => sink.present(snapshot, events),
            None => Ok(()),
        }
    }
}
