use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{} is not a valid directory", .path.display())]
    InvalidRoot { path: PathBuf },

    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{}': invalid UTF-8 on line {line}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
