use crate::cli::commands::{build_client, current_theme, handle_expiry, open_store};
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::session::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::models::EventKind;
use crate::ui::messages;
use crate::utils::time::epoch_to_clock;
use chrono::Local;

/// Handle `in` and `out`.
pub fn handle(kind: EventKind, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;
    let theme = current_theme(&store);

    if SessionLogic::current(&store)?.is_none() {
        return Err(AppError::NotLoggedIn);
    }

    let client = build_client(cfg, &store)?;
    let now = Local::now();

    let result = match kind {
        EventKind::In => PunchLogic::punch_in(&mut store, &client, now, cfg.history_keep),
        EventKind::Out => PunchLogic::punch_out(
            &mut store,
            &client,
            now,
            cfg.min_stay_minutes,
            cfg.history_keep,
        ),
    };

    match result {
        Ok(entry) => {
            let verb = if entry.kind.is_in() {
                "Punched in"
            } else {
                "Punched out"
            };
            messages::success(theme, format!("{verb} at {}", epoch_to_clock(entry.timestamp)));
            Ok(())
        }
        Err(e) => Err(handle_expiry(&mut store, e)),
    }
}
