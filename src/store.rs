use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::record::{Attempt, DrawRecord};

pub const RESULTS_FILE: &str = "results.json";
pub const DEBUG_FILE: &str = "debug.txt";

/// Write the canonical record, pretty-printed, overwriting any previous run.
pub fn write_record(dir: &Path, record: &DrawRecord) -> Result<PathBuf> {
    let path = dir.join(RESULTS_FILE);
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(path)
}

/// Dump the attempt trace next to the results. Written only on the fallback
/// path, as a starting point for working out why every source missed.
pub fn write_debug(dir: &Path, attempts: &[Attempt]) -> Result<PathBuf> {
    let path = dir.join(DEBUG_FILE);
    let trace = serde_json::to_string_pretty(attempts)?;
    let body = format!(
        "No result found. Tried sources:\n{}\n\nCheck the run logs for response snippets from each fetch.\n",
        trace
    );
    std::fs::write(&path, body)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(path)
}

/// Read back the last persisted record (for `show`).
pub fn read_record(dir: &Path) -> Result<DrawRecord> {
    let path = dir.join(RESULTS_FILE);
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("No stored record at {} (run 'run' first)", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Malformed record in {}", path.display()))
}
