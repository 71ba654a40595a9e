use crate::error::{EngineError, Result};
use crate::stats::{LineCounts, LineKind};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Prefixes that mark a comment line.
pub const COMMENT_PREFIXES: &[&str] = &["/*", "//", "#"];

/// Whitespace stripped around a line before classifying it.
///
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Classify one line.
///
/// Purely local: a block comment's interior lines count as code unless they
/// happen to start with one of [`COMMENT_PREFIXES`].
pub fn classify_line(line: &str) -> LineKind {
    let stripped = line.trim_matches(is_strippable);
    if stripped.is_empty() {
        LineKind::Blank
    } else if COMMENT_PREFIXES.iter().any(|p| stripped.starts_with(p)) {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}

/// Open a file and classify all of its lines.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read and
/// [`EngineError::Decode`] if it is not valid UTF-8. No partial counts are
/// returned in either case.
pub fn process_file(path: &Path) -> Result<LineCounts> {
    let file = File::open(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    count_lines(&mut BufReader::new(file), path)
}

/// Classify every line read from `reader`.
///
/// Line breaks are `\n`, `\r\n` and a lone `\r`.
pub fn count_lines<R: BufRead>(reader: &mut R, path: &Path) -> Result<LineCounts> {
    let mut counts = LineCounts::zero();
    let mut line_buf = Vec::new();
    let mut line_no = 0;

    loop {
        line_buf.clear();
        let n = reader
            .read_until(b'\n', &mut line_buf)
            .map_err(|e| EngineError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        if n == 0 {
            break;
        }

        let text = std::str::from_utf8(&line_buf).map_err(|e| EngineError::Decode {
            path: path.to_path_buf(),
            line: line_no + 1,
            source: e,
        })?;

        // 末尾の改行 (\n, \r\n, 単独の \r) を落としてから、残った \r で分割する
        let text = text.strip_suffix('\n').unwrap_or(text);
        let text = text.strip_suffix('\r').unwrap_or(text);
        for line in text.split('\r') {
            line_no += 1;
            counts.record(classify_line(line));
        }
    }

    Ok(counts)
}
