use crate::cli::commands::{build_client, current_theme, handle_expiry, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::reconcile::Reconciler;
use crate::core::session::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::store::StateStore;
use crate::store::keys;
use crate::ui::{messages, view};
use chrono::Local;

/// Handle `status`: local-first render, then reconcile with the server.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { no_sync } = cmd {
        let mut store = open_store(cfg)?;
        let theme = current_theme(&store);

        let session = SessionLogic::current(&store)?.ok_or(AppError::NotLoggedIn)?;
        let now = Local::now();

        // Local-first: render the cached state before any network call
        let punch_in = PunchLogic::punch_in_time(&store)?;
        let history = PunchLogic::load_history(&store)?;
        print!(
            "{}",
            view::render_dashboard(
                session.user.as_ref(),
                punch_in,
                &history,
                theme,
                cfg.min_stay_minutes,
                cfg.history_show,
                now,
            )
        );

        if *no_sync {
            return Ok(());
        }

        let client = build_client(cfg, &store)?;
        match Reconciler::sync(&mut store, &client, now, cfg.history_keep) {
            Ok(report) => {
                for err in &report.errors {
                    messages::warning(theme, format!("sync: {err}"));
                }

                // Re-render only when the sync changed something visible
                let refreshed_user: Option<crate::models::StoredUser> =
                    store.get_json(keys::USER)?;
                if report.punch_in_time != punch_in || report.history != history {
                    println!("\n— after sync —");
                    print!(
                        "{}",
                        view::render_dashboard(
                            refreshed_user.as_ref(),
                            report.punch_in_time,
                            &report.history,
                            theme,
                            cfg.min_stay_minutes,
                            cfg.history_show,
                            now,
                        )
                    );
                }
            }
            Err(e) => return Err(handle_expiry(&mut store, e)),
        }
    }

    Ok(())
}
