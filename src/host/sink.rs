//! Presentation sinks for headless runs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::PresentationSink;
use crate::sim::{MatchEvent, MatchPhase, Snapshot};

/// Logs rally starts and score changes
#[derive(Debug, Clone, Default)]
pub struct LogSink {
    last_phase: MatchPhase,
    rallies: u32,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rallies(&self) -> u32 {
        self.rallies
    }
}

impl PresentationSink for LogSink {
    fn present(&mut self, snapshot: &Snapshot, events: &[MatchEvent]) -> std::io::Result<()> {
        for event in events {
            match event {
                MatchEvent::Started => {
                    self.rallies += 1;
                    log::info!("Rally {} started", self.rallies);
                }
                MatchEvent::Scored { side } => {
                    log::info!(
                        "Point to {}: {} - {}",
                        side.as_str(),
                        snapshot.left_score,
                        snapshot.right_score
                    );
                }
                MatchEvent::PaddleHit { side } => log::trace!("{} paddle hit", side.as_str()),
                MatchEvent::WallBounce => {}
            }
        }

        if snapshot.phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, snapshot.phase);
            self.last_phase = snapshot.phase;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    #[serde(flatten)]
    snapshot: &'a Snapshot,
    events: &'a [MatchEvent],
}

/// Writes every snapshot as one JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
    frame: u64,
}

impl JsonLinesSink<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        log::info!("Recording snapshots to {}", path.display());
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frame: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PresentationSink for JsonLinesSink<W> {
    fn present(&mut self, snapshot: &Snapshot, events: &[MatchEvent]) -> std::io::Result<()> {
        let record = FrameRecord {
            frame: self.frame,
            snapshot,
            events,
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.frame += 1;
        Ok(())
    }
}
