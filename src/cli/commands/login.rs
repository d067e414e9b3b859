use crate::cli::commands::{build_client, current_theme, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::session::SessionLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::{messages, view};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login {
        email,
        password,
        remember,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let theme = current_theme(&store);
        let client = build_client(cfg, &store)?;

        // Prefill missing flags from remembered credentials, field by field.
        // A `--email` given on the command line always wins over the saved one.
        let (email, password) = match (email.clone(), password.clone()) {
            (Some(e), Some(p)) => (e, p),
            (given_email, given_password) => {
                let creds =
                    SessionLogic::saved_credentials(&store)?.ok_or(AppError::EmptyCredentials)?;
                if given_email.is_none() {
                    messages::info(
                        theme,
                        format!("Using remembered credentials for {}", creds.email),
                    );
                }
                (
                    given_email.unwrap_or(creds.email),
                    given_password.unwrap_or(creds.password),
                )
            }
        };

        let session = SessionLogic::login(&mut store, &client, &email, &password, *remember)?;

        messages::success(theme, format!("Logged in as {}", session.display_name()));

        // Dashboard from local state; a punch session left over from a
        // previous login (e.g. after a 401) shows up immediately.
        let now = Local::now();
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
    }

    Ok(())
}
