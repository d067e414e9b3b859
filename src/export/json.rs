use crate::errors::{AppError, AppResult};
use crate::models::HistoryEntry;

/// Write history entries as pretty-printed JSON.
pub fn write_json(path: &str, entries: &[HistoryEntry]) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(entries).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
