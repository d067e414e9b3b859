use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the HR backend, without trailing slash.
    pub server_url: String,
    /// Path of the SQLite state store.
    pub database: String,
    #[serde(default = "default_min_stay")]
    pub min_stay_minutes: i64,
    #[serde(default = "default_history_keep")]
    pub history_keep: usize,
    #[serde(default = "default_history_show")]
    pub history_show: usize,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

fn default_min_stay() -> i64 {
    120
}
fn default_history_keep() -> usize {
    20
}
fn default_history_show() -> usize {
    5
}
fn default_timeout() -> u64 {
    15
}
fn default_server_url() -> String {
    "https://hr.example.com/api".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            database: Self::database_file().to_string_lossy().to_string(),
            min_stay_minutes: default_min_stay(),
            history_keep: default_history_keep(),
            history_show: default_history_show(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("punchclock")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".punchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Return the full path of the SQLite state store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Names of YAML keys that must be present for a complete config file.
    pub fn required_keys() -> &'static [&'static str] {
        &[
            "server_url",
            "database",
            "min_stay_minutes",
            "history_keep",
            "history_show",
            "request_timeout_secs",
        ]
    }

    /// Initialize configuration and state-store files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty store file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ State store: {:?}", db_path);

        Ok(())
    }
}
