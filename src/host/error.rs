use thiserror::Error;

/// Failures of the perception source
#[derive(Debug, Error)]
pub enum PerceptionError {
    #[error("perception source unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read observations: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed observation frame on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that stops the frame loop
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Perception(#[from] PerceptionError),

    #[error("presentation failed: {0}")]
    Presentation(#[source] std::io::Error),
}
