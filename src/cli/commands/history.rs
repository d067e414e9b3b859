use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::ui::view;
use crate::utils::colors::{GREY, RESET};

/// Handle `history`: the cached entries, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { all } = cmd {
        let store = open_store(cfg)?;

        let history = PunchLogic::load_history(&store)?;
        if history.is_empty() {
            println!("{}no attendance history yet{}", GREY, RESET);
            return Ok(());
        }

        let show = if *all { history.len() } else { cfg.history_show };
        for line in view::history_lines(&history, show) {
            println!("{line}");
        }
    }

    Ok(())
}
