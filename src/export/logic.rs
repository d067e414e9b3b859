use crate::errors::AppResult;
use crate::export::{ExportFormat, csv, json};
use crate::models::HistoryEntry;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the cached attendance history to `path` in the chosen format.
    pub fn export(entries: &[HistoryEntry], format: &ExportFormat, path: &str) -> AppResult<()> {
        match format {
            ExportFormat::Csv => csv::write_csv(path, entries)?,
            ExportFormat::Json => json::write_json(path, entries)?,
        }
        Ok(())
    }
}
