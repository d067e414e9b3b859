use crate::models::HistoryEntry;
use csv::Writer;

/// Write history entries as CSV to the given path.
pub fn write_csv(path: &str, entries: &[HistoryEntry]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["type", "timestamp", "datetime"])?;

    for e in entries {
        wtr.write_record(&[
            e.kind.as_str().to_string(),
            e.timestamp.to_string(),
            e.datetime_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
