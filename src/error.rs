use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("entity {0} is already mounted")]
    DuplicateEntity(String),
    #[error("{0}")]
    Render(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<FolioError> for io::Error {
    fn from(err: FolioError) -> Self {
        match err {
            FolioError::Io(inner) => inner,
            other => io::Error::other(other.to_string()),
        }
    }
}
