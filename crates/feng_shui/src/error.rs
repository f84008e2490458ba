use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FengShuiError>;

#[derive(Debug, Error)]
pub enum FengShuiError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event script line {line}: {message}")]
    Script { line: usize, message: String },
}
