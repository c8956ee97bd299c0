use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds surfaced by collection and flattening. Nothing is retried or
/// rolled back; the caller decides how to report and which exit code to use.
#[derive(Debug, Error)]
pub enum Error {
    #[error("source path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("copy {} -> {} failed", from.display(), to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing {} failed", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid source spec: {0}")]
    InvalidConfig(String),
}
