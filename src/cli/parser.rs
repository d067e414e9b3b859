use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
/// CLI attendance client: punch in/out against an HR backend
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record punch in/out attendance against an HR backend, with an offline-first local cache",
    long_about = None
)]
pub struct Cli {
    /// Override state-store path (useful for tests or a custom location)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the HR backend base URL
    #[arg(global = true, long = "server")]
    pub server: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration and the local state store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in to the HR backend
    Login {
        #[arg(long, help = "Work email (falls back to remembered credentials)")]
        email: Option<String>,

        #[arg(long, help = "Password (falls back to remembered credentials)")]
        password: Option<String>,

        #[arg(long, help = "Remember these credentials for the next login")]
        remember: bool,
    },

    /// Log out and clear the local session
    Logout,

    /// Punch in (start the attendance session)
    In,

    /// Punch out (end the attendance session)
    Out,

    /// Show the dashboard, then reconcile with the server
    Status {
        #[arg(long = "no-sync", help = "Render from the local cache only")]
        no_sync: bool,
    },

    /// Show recent attendance history from the local cache
    History {
        #[arg(long, help = "Show the whole cached history instead of the recent slice")]
        all: bool,
    },

    /// Live elapsed-time display for the current punch session
    Watch {
        #[arg(long, help = "Stop automatically after this many seconds")]
        duration: Option<u64>,
    },

    /// Show or set the terminal theme (light/dark)
    Theme {
        /// 'light', 'dark', 'toggle', or omit to show the current theme
        value: Option<String>,
    },

    /// Export cached history to a file
    Export {
        #[arg(long, value_enum, help = "Output format")]
        format: ExportFormat,

        #[arg(long = "out", help = "Output file path")]
        output: String,
    },

    /// Print or manage the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
