//! Transient terminal messages. A new message simply prints after the
//! previous one; nothing is queued or animated.

use crate::models::Theme;
use crate::utils::colors::{
    BLUE, BOLD, BRIGHT_BLUE, BRIGHT_CYAN, BRIGHT_GREEN, BRIGHT_RED, BRIGHT_YELLOW, CYAN, GREEN,
    RED, RESET, YELLOW,
};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// ANSI palette selected by the persisted theme. The dark palette uses
/// bright variants, the light one the standard colors.
pub struct Palette {
    pub info: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub accent: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                info: BRIGHT_BLUE,
                success: BRIGHT_GREEN,
                warning: BRIGHT_YELLOW,
                error: BRIGHT_RED,
                accent: BRIGHT_CYAN,
            },
            Theme::Light => Palette {
                info: BLUE,
                success: GREEN,
                warning: YELLOW,
                error: RED,
                accent: CYAN,
            },
        }
    }
}

pub fn info<T: fmt::Display>(theme: Theme, msg: T) {
    let p = Palette::for_theme(theme);
    println!("{}{}{} {}{}", p.info, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(theme: Theme, msg: T) {
    let p = Palette::for_theme(theme);
    println!("{}{}{} {}{}", p.success, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(theme: Theme, msg: T) {
    let p = Palette::for_theme(theme);
    println!("{}{}{} {}{}", p.warning, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(theme: Theme, msg: T) {
    let p = Palette::for_theme(theme);
    eprintln!("{}{}{} {}{}", p.error, BOLD, ICON_ERR, RESET, msg);
}
