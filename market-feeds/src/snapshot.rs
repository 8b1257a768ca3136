use crate::types::{Result, Snapshot};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_OUTPUT_PATH: &str = "data/feeds.json";

/// Pretty-printed JSON, non-ASCII kept as-is.
pub fn to_json(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Replace the file at `path` with `snapshot`, creating the parent directory if needed.
pub fn write_snapshot(path: impl AsRef<Path>, snapshot: &Snapshot) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring output directory {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    let mut json = to_json(snapshot)?;
    json.push('\n');
    fs::write(path, json)?;

    info!("Wrote {} items to {}", snapshot.count, path.display());
    Ok(())
}
