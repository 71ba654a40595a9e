// crates/cli/src/prompt.rs
use crate::error::{AppError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const PROMPT: &str = "Enter the project root directory: ";

/// Ask for the root directory on `output` and read one line from `input`.
///
/// Surrounding whitespace is trimmed. End of input before any line is an
/// error; an empty line is returned as an empty path and rejected later by
/// root validation.
pub fn ask_root<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{PROMPT}").map_err(AppError::Prompt)?;
    output.flush().map_err(AppError::Prompt)?;

    let mut line = String::new();
    let n = input.read_line(&mut line).map_err(AppError::Prompt)?;
    if n == 0 {
        return Err(AppError::EmptyInput);
    }
    Ok(PathBuf::from(line.trim()))
}
