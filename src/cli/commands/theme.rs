use crate::cli::commands::{current_theme, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Theme;
use crate::store::{StateStore, keys};
use crate::ui::messages;

/// Handle `theme`: show the current theme, or set it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { value } = cmd {
        let mut store = open_store(cfg)?;

        match value {
            None => {
                let theme = current_theme(&store);
                println!("{}", theme.as_str());
            }
            Some(raw) => {
                let theme = if raw.eq_ignore_ascii_case("toggle") {
                    current_theme(&store).toggled()
                } else {
                    Theme::from_arg(raw).ok_or_else(|| AppError::InvalidTheme(raw.clone()))?
                };
                store.set_json(keys::THEME, &theme)?;
                messages::success(theme, format!("Theme set to {}", theme.as_str()));
            }
        }
    }

    Ok(())
}
