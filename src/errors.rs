//! Error types for the conversion pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading, parsing or emitting a coverage report
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The report file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The report is not well-formed XML or a value has the wrong type
    #[error(transparent)]
    Parse(#[from] quick_xml::DeError),

    /// The document root is some element other than `<coverage>`
    #[error("expected element type <coverage> but have <{found}>")]
    UnexpectedRoot { found: String },

    /// Writing profile lines failed
    #[error("failed to write profile: {0}")]
    Write(#[from] io::Error),
}

impl ConvertError {
    /// Create a read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Whether the error must end the process with a failure status.
    ///
    /// Parse failures are reported on stdout and the run still exits
    /// successfully; existing callers depend on that exit status.
    pub fn is_fatal(&self) -> bool {
        !self.is_parse_failure()
    }

    /// Whether the error came from decoding the report
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::UnexpectedRoot { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
