// crates/engine/src/lib.rs
use log::{debug, info};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;

use crate::config::ScanConfig;
use crate::error::{EngineError, Result};
use crate::stats::{LineCounts, RunResult, Totals};

/// Scan `config.root` and total up code, blank and comment lines.
///
/// Files are processed one at a time in walk order. A file that cannot be read
/// or decoded still counts towards `files` but contributes no lines; its error
/// is collected in `RunResult::errors` and the scan continues.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRoot`] if the root is not an existing
/// directory. Nothing is scanned in that case.
pub fn run(config: &ScanConfig) -> Result<RunResult> {
    if !config.root.is_dir() {
        return Err(EngineError::InvalidRoot {
            path: config.root.clone(),
        });
    }

    let mut totals = Totals::default();
    let mut errors = Vec::new();

    for path in filesystem::collect_files(config) {
        let counts = match processor::process_file(&path) {
            Ok(counts) => {
                debug!("{}: {} lines", path.display(), counts.total());
                counts
            }
            Err(e) => {
                debug!("{e}");
                errors.push((path, e));
                LineCounts::zero()
            }
        };
        totals.add_file(counts);
    }

    info!(
        "scanned {} files under {} ({} unreadable)",
        totals.files,
        config.root.display(),
        errors.len()
    );

    Ok(RunResult { totals, errors })
}
