use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: `{token}` is not an integer", .path.display())]
    Parse { path: PathBuf, token: String },
    #[error("{}: header declares {expected} values but {found} were read", .path.display())]
    LengthMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("gap factor must lie in (0, 16], got {0}")]
    InvalidGapFactor(f64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
