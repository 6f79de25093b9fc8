use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the clustering pipeline.
///
/// Configuration and data errors abort the whole batch; partial output
/// from a half-clustered corpus would be meaningless, so there is no
/// retry or partial-recovery path. Lookup misses (a term absent from the
/// word→course map, a course absent from the course→program map) are
/// expected conditions and are skipped silently, never surfaced here.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The corpus has no documents.
    #[error("empty corpus: no course descriptions to cluster")]
    EmptyCorpus,

    /// A corpus record is missing a required field.
    #[error("record {index} is missing required field \"{field}\"")]
    MissingField {
        /// Zero-based record index in the input order.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Invalid parameter value.
    #[error("invalid configuration for {name}: {message}")]
    InvalidConfig {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: String,
    },

    /// Requested cluster count is incompatible with the corpus.
    #[error("invalid cluster count: requested {requested}, but corpus has {n_docs} documents")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of documents in the corpus.
        n_docs: usize,
    },

    /// A stoplist resource could not be read.
    #[error("failed to read stoplist {path}")]
    StoplistUnreadable {
        /// Path of the unreadable stoplist file.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type used by the pipeline.
pub type Result<T> = std::result::Result<T, PipelineError>;
