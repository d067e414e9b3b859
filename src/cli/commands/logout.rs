use crate::cli::commands::{build_client, current_theme, open_store};
use crate::config::Config;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    let theme = current_theme(&store);

    if SessionLogic::current(&store)?.is_none() {
        messages::info(theme, "Not logged in");
        return Ok(());
    }

    let client = build_client(cfg, &store)?;
    SessionLogic::logout(&mut store, &client)?;
    messages::success(theme, "Logged out");
    Ok(())
}
