use std::path::PathBuf;
use thiserror::Error;

/// Why a required input file could not be turned into data.
#[derive(Debug, Error)]
pub enum ReadFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Fatal errors: the audit cannot proceed without these inputs.
///
/// Anything below this granularity (a broken package manifest, a missing
/// `node_modules` directory) degrades to a sentinel or an empty listing
/// instead of surfacing here.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The policy document is absent, unreadable or not valid JSON.
    #[error("Could not read config from {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: ReadFailure,
    },

    /// The project manifest is absent, unreadable or malformed.
    #[error("Could not read {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: ReadFailure,
    },

    #[error("failed to start license resolver pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, AuditError>;
