use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type CrcResult<T> = Result<T, CrcError>;

/// Failure kinds surfaced by the core. Fatal vs per-file is decided by the caller:
/// `PathNotFound`, `ManifestParse` and `OutputCollision` end a run, the others
/// are reported for one file and processing continues.
#[derive(Debug, Error)]
pub enum CrcError {
    #[error("{} not found", .0.display())]
    PathNotFound(PathBuf),

    #[error("{} is not a regular file", .0.display())]
    NotARegularFile(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} already exists", .0.display())]
    OutputCollision(PathBuf),

    #[error("invalid manifest {}: {reason}", path.display())]
    ManifestParse { path: PathBuf, reason: String },

    #[error("write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CrcError {
    /// Whether this error ends the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CrcError::NotARegularFile(_) | CrcError::FileUnreadable { .. })
    }
}
