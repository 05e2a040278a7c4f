use std::{io, path::PathBuf};

use thiserror::Error;

/// Rejected configuration, fatal at startup.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("board {axis} must be positive")]
    ZeroDimension { axis: &'static str },
    #[error("board {axis} of {value} does not fit a 32-bit coordinate")]
    DimensionTooLarge { axis: &'static str, value: usize },
    #[error("delay must be a finite, non-negative number of seconds, got {0}")]
    InvalidDelay(f64),
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to read pattern file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("pattern file {0} contains no live cell")]
    Empty(PathBuf),
}
