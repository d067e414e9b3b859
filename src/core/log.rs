use crate::errors::AppResult;
use crate::store::log;
use crate::store::sqlite::SqliteStore;
use ansi_term::Colour;

/// ANSI color per audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "logout" | "expired" => Colour::Red,
        "punch_in" => Colour::Green,
        "punch_out" => Colour::Yellow,
        "sync" => Colour::Blue,
        "anomaly" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the internal audit log, oldest first, with aligned columns.
    pub fn print_log(store: &SqliteStore) -> AppResult<()> {
        let entries = log::load(&store.conn)?;

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|l| l.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|l| l.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|l| {
                if l.target.is_empty() {
                    l.operation.len()
                } else {
                    l.operation.len() + l.target.len() + 3
                }
            })
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for line in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&line.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(line.date);

            let op_target = if line.target.is_empty() {
                line.operation.clone()
            } else {
                format!("{} ({})", line.operation, line.target)
            };

            let padding = " ".repeat(op_w.saturating_sub(op_target.len()));
            let colored = color_for_operation(&line.operation).paint(op_target);

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                line.id,
                date,
                colored,
                padding,
                line.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
