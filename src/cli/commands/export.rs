use crate::cli::commands::{current_theme, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, output } = cmd {
        let store = open_store(cfg)?;
        let theme = current_theme(&store);

        let history = PunchLogic::load_history(&store)?;
        ExportLogic::export(&history, format, output)?;

        messages::success(
            theme,
            format!(
                "{} export completed: {} ({} entries)",
                format.as_str().to_uppercase(),
                output,
                history.len()
            ),
        );
    }

    Ok(())
}
