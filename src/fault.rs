//! Error taxonomy for a clustering run.
//!
//! Every failure is fatal: nothing is retried and no partial output is written.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Fault`].
pub type Result<T> = std::result::Result<T, Fault>;

/// Errors that can abort a clustering run.
#[derive(Error, Debug)]
pub enum Fault {
    /// Invalid invocation, such as a non-integer or too small k.
    #[error("{0}")]
    Usage(String),

    /// Input could not be read or output could not be written.
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of input is not a well-formed point.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Points or centroids of a run disagree on dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    Dimension { expected: usize, found: usize },

    /// Initialization needs at least one point to bound.
    #[error("no points to cluster")]
    Empty,

    /// A cluster received no points, so its mean is undefined.
    #[error("cluster {} is empty in round {round}", .cluster + 1)]
    Degenerate { cluster: usize, round: usize },

    /// Logger was already installed or could not be created.
    #[error("logger: {0}")]
    Logger(String),
}

impl Fault {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }
}
