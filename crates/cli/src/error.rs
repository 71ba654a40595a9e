// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] line_tally_engine::error::EngineError),

    #[error("Failed to read root path: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("No root path given")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, AppError>;
