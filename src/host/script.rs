//! Replay of recorded hand observations
//!
//! One frame per line, each line a JSON array of labelled hands:
//!
//! ```text
//! [{"side":"left","x":0.50,"y":0.50},{"side":"right","x":0.52,"y":0.50}]
//! []
//! ```
//!
//! A blank line is a frame with no hands.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{PerceptionError, PerceptionSource};
use crate::sim::HandObservation;

pub struct ScriptedPerception<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl ScriptedPerception<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PerceptionError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PerceptionError::Unavailable(format!("cannot open {}: {e}", path.display()))
        })?;
        log::info!("Replaying observations from {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ScriptedPerception<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> PerceptionSource for ScriptedPerception<R> {
    fn poll(&mut self) -> Result<Option<Vec<HandObservation>>, PerceptionError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let text = self.buf.trim();
        if text.is_empty() {
            return Ok(Some(Vec::new()));
        }
        serde_json::from_str(text)
            .map(Some)
            .map_err(|source| PerceptionError::Malformed {
                line: self.line,
                source,
            })
    }
}
