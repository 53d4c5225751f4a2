//! Error types for costar-core.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for catalog construction and queries.
#[derive(Debug, Error)]
pub enum Error {
    /// Graph construction was handed an empty adjacency list.
    #[error("adjacency list can't be empty")]
    EmptyAdjacency,

    /// A link query named a cast member that is not in the catalog.
    #[error("unknown cast member: {0:?}")]
    UnknownCastMember(String),

    /// The dataset contains the same film title twice.
    #[error("duplicate title: {0:?}")]
    DuplicateTitle(String),

    /// A dataset line failed to parse as a film record.
    #[error("bad film record on line {line}: {source}")]
    BadRecord {
        /// 1-based line number in the dataset file.
        line: usize,
        /// The underlying JSON parse error.
        source: serde_json::Error,
    },

    /// Encoding or decoding a persisted graph failed.
    #[error("graph codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// Reading the dataset or a persisted graph failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
