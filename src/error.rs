//! Error types for split runs.

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::Stage;

/// Errors that abort a split run.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input document could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input document has syntax errors, rendered as `line:col: code: message`.
    #[error("failed to parse {name}:\n{}", diagnostics.join("\n"))]
    Parse {
        name: String,
        diagnostics: Vec<String>,
    },

    /// Two declarations share a name.
    #[error("duplicate {kind} `{name}` at {second}, first declared at {first}")]
    Duplicate {
        name: String,
        kind: &'static str,
        first: String,
        second: String,
    },

    /// A unit, the manifest, or the stub could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        stage: Stage,
        #[source]
        source: std::io::Error,
    },

    /// The configuration describes an impossible layout.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SplitError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error raised while emitting units.
    pub fn unit_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            stage: Stage::Emitting,
            source,
        }
    }

    /// Create a write error raised while writing the manifest or the stub.
    pub fn manifest_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            stage: Stage::ManifestWriting,
            source,
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// The stage the run was in when this error occurred.
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidConfig(_) => Stage::Idle,
            Self::Read { .. } => Stage::Reading,
            Self::Parse { .. } | Self::Duplicate { .. } => Stage::Parsing,
            Self::Write { stage, .. } => *stage,
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
