//! Error types for fanoarc operations.
//!
//! Every fallible operation in the workspace returns [`FanoArcError`]. The
//! variants are distinct kinds rather than messages so callers can tell an
//! unopenable path apart from a malformed archive without matching on text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for fanoarc operations.
#[derive(Debug, Error)]
pub enum FanoArcError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be opened for its required mode.
    #[error("File: {} opening error: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },

    /// More distinct symbols than the table-size field can represent.
    #[error("Too many distinct symbols: {count} exceeds table size limit {max}")]
    TooManySymbols {
        /// Number of distinct symbols in the input.
        count: usize,
        /// Largest count the configured field can hold.
        max: usize,
    },

    /// The archive header (code table or bit count) is cut short.
    #[error("Malformed archive at offset {offset}: {message}")]
    MalformedArchive {
        /// Byte offset where the problem was detected.
        offset: u64,
        /// Description of the problem.
        message: String,
    },

    /// Unexpected end of input while reading bits.
    #[error("Unexpected end of file: expected {expected} more bits")]
    UnexpectedEof {
        /// Number of bits that were requested but not available.
        expected: usize,
    },
}

/// Result type alias for fanoarc operations.
pub type Result<T> = std::result::Result<T, FanoArcError>;

impl FanoArcError {
    /// Create an open error for `path`.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a too-many-symbols error.
    pub fn too_many_symbols(count: usize, max: usize) -> Self {
        Self::TooManySymbols { count, max }
    }

    /// Create a malformed archive error.
    pub fn malformed(offset: u64, message: impl Into<String>) -> Self {
        Self::MalformedArchive {
            offset,
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }

    /// Whether this error is the end-of-input signal from a bit reader.
    pub fn is_eof(&self) -> bool {
        match self {
            Self::UnexpectedEof { .. } => true,
            Self::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }
}
