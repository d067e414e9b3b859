//! Dashboard rendering: pure functions from state to strings, so the view
//! logic is testable without a terminal.

use crate::core::punch::PunchLogic;
use crate::models::{HistoryEntry, StoredUser, Theme};
use crate::ui::messages::Palette;
use crate::utils::colors::{GREY, RESET, colorize_in_out};
use crate::utils::time::{epoch_to_clock, format_elapsed};
use chrono::{DateTime, Local};

/// Status line: punched in (with start time and elapsed) or punched out.
pub fn status_line(punch_in_time: Option<i64>, now: DateTime<Local>, theme: Theme) -> String {
    let p = Palette::for_theme(theme);
    match punch_in_time {
        Some(ts) => {
            let elapsed = format_elapsed(now.timestamp() - ts);
            format!(
                "{}●{} Punched in since {} (elapsed {})",
                p.success,
                RESET,
                epoch_to_clock(ts),
                elapsed
            )
        }
        None => format!("{}○{} Punched out", GREY, RESET),
    }
}

/// The action the user can take next, honoring the minimum-stay rule.
pub fn next_action_label(
    punch_in_time: Option<i64>,
    now: DateTime<Local>,
    min_stay_minutes: i64,
) -> String {
    match punch_in_time {
        None => "next: punchclock in".to_string(),
        Some(ts) => {
            let remaining = PunchLogic::minutes_remaining(ts, now, min_stay_minutes);
            if remaining > 0 {
                format!("next: punchclock out (available in {remaining} min)")
            } else {
                "next: punchclock out".to_string()
            }
        }
    }
}

/// The `show` most recent entries, newest first, one line each with the
/// localized time-of-day.
pub fn history_lines(history: &[HistoryEntry], show: usize) -> Vec<String> {
    history
        .iter()
        .rev()
        .take(show)
        .map(|e| {
            let marker = colorize_in_out(&format!("{:<3}", e.kind.as_str()), e.kind.is_in());
            format!("  {} {}", marker, e.time_str())
        })
        .collect()
}

/// Full dashboard: greeting, status, next action, recent history.
pub fn render_dashboard(
    user: Option<&StoredUser>,
    punch_in_time: Option<i64>,
    history: &[HistoryEntry],
    theme: Theme,
    min_stay_minutes: i64,
    show: usize,
    now: DateTime<Local>,
) -> String {
    let p = Palette::for_theme(theme);
    let mut out = String::new();

    let name = user.map(|u| u.name.as_str()).unwrap_or("you");
    out.push_str(&format!("{}👋 {}{}\n", p.accent, name, RESET));
    out.push_str(&status_line(punch_in_time, now, theme));
    out.push('\n');
    out.push_str(&next_action_label(punch_in_time, now, min_stay_minutes));
    out.push('\n');

    if history.is_empty() {
        out.push_str(&format!("{}no attendance history yet{}\n", GREY, RESET));
    } else {
        out.push_str("recent:\n");
        for line in history_lines(history, show) {
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}
