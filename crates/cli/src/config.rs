// crates/cli/src/config.rs
use crate::error::Result;
pub use line_tally_engine::config::{ScanConfig, ScanConfigBuilder};
use line_tally_engine::error::EngineError;
use std::path::PathBuf;

/// Build the scan config for `root` with the fixed directory and extension sets.
pub fn scan_config(root: PathBuf) -> Result<ScanConfig> {
    let config = ScanConfigBuilder::default()
        .root(root)
        .build()
        .map_err(|e| EngineError::Config(e.to_string()))?;
    Ok(config)
}
