//! Errors that abort a build or a load outright.
//!
//! Irregular heading depths and dangling parent references are not errors: the builder
//! reconciles the former and reports the latter as [`crate::builder::Diagnostic`]s. What lands
//! here is input the builder cannot interpret at all, so no half-built tree is ever returned.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
/// Unrecoverable failures, each attributed to the element or file that caused it.
pub enum Error {
    /// Reading an element stream from disk failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The element stream is not a valid JSON array.
    #[error("invalid element JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// One record of a JSON lines stream is not a valid element.
    #[error("invalid element JSON on line {line}: {source}")]
    JsonLine {
        /// 1-based line of the offending record.
        line: usize,
        /// Underlying parse failure.
        source: serde_json::Error,
    },

    /// Loading or building one element stream file failed.
    #[error("{path}: {source}")]
    InFile {
        /// File the failure came from.
        path: PathBuf,
        /// What went wrong in it.
        source: Box<Error>,
    },

    /// Content documents could not be serialised for output.
    #[error("failed to serialise content documents: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An element carries no category, so it cannot be dispatched.
    #[error("element #{index} has no category")]
    MissingCategory {
        /// Position of the element in the stream.
        index: usize,
    },

    /// A title element carries no `category_depth`.
    #[error("title element #{index} ({id}) has no category_depth")]
    MissingDepth {
        /// Position of the element in the stream.
        index: usize,
        /// Element id of the title.
        id: String,
    },

    /// A title element declares a depth beyond the configured maximum.
    #[error("title element #{index} ({id}) has category_depth {depth}, above the maximum of {max}")]
    DepthTooLarge {
        /// Position of the element in the stream.
        index: usize,
        /// Element id of the title.
        id: String,
        /// Declared depth.
        depth: usize,
        /// Configured maximum depth.
        max: usize,
    },

    /// A title element has no id, so it could never be addressed as a parent.
    #[error("title element #{index} has no id")]
    MissingId {
        /// Position of the element in the stream.
        index: usize,
    },
}

impl Error {
    /// Attach the path of the file being loaded to an I/O failure.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attribute a failure to the element stream file it came from.
    pub(crate) fn in_file(path: impl Into<PathBuf>, source: Self) -> Self {
        match source {
            // Already names its file.
            Self::Io { .. } | Self::InFile { .. } => source,
            _ => Self::InFile {
                path: path.into(),
                source: Box::new(source),
            },
        }
    }
}
