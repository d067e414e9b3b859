use crate::cli::commands::{current_theme, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::timer::{PunchTimer, RESET_DISPLAY};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use chrono::{Local, TimeZone};
use std::io::Write;
use std::time::Duration;

/// Handle `watch`: a live `HH:MM:SS` elapsed display for the current punch
/// session, redrawn in place once per second.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { duration } = cmd {
        let store = open_store(cfg)?;
        let theme = current_theme(&store);

        let punch_in_ts = PunchLogic::punch_in_time(&store)?.ok_or(AppError::NotPunchedIn)?;
        let punch_in = Local
            .timestamp_opt(punch_in_ts, 0)
            .single()
            .ok_or_else(|| AppError::Other(format!("invalid punch-in timestamp {punch_in_ts}")))?;

        messages::info(theme, "Watching current shift (Ctrl-C to quit)");

        let mut timer = PunchTimer::new();
        timer.start(punch_in, |elapsed| {
            print!("\r⏱  {elapsed} ");
            let _ = std::io::stdout().flush();
        });

        match duration {
            Some(secs) => {
                std::thread::sleep(Duration::from_secs(*secs));
                timer.stop();
                println!("\r⏱  {RESET_DISPLAY} ");
            }
            None => {
                // Tick until the process is interrupted
                loop {
                    std::thread::sleep(Duration::from_secs(60));
                }
            }
        }
    }

    Ok(())
}
