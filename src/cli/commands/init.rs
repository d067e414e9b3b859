use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{StateStore, sqlite::SqliteStore};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite state store and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or(cfg.database);

    println!("⚙️  Initializing punchclock…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  State store : {}", &db_path);

    // Opening the store creates the schema
    let mut store = SqliteStore::new(&db_path)?;

    if let Err(e) = store.audit("init", "", &format!("state store initialized at {db_path}")) {
        eprintln!("⚠️ Failed to write internal log: {e}");
    }

    println!("🎉 punchclock initialization completed!");
    Ok(())
}
