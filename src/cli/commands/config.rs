use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            match serde_yaml::to_string(&cfg) {
                Ok(yaml) => println!("{yaml}"),
                Err(e) => eprintln!("Failed to render configuration: {e}"),
            }
        }

        // ---- CHECK CONFIG ----
        if *check {
            check_config(&path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let requested_editor = editor.clone();

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

            let status = Command::new(&editor_to_use).arg(&path).status();

            match status {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                Ok(_) | Err(_) => {
                    eprintln!(
                        "⚠️  Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    );

                    let fallback_status = Command::new(&default_editor).arg(&path).status();
                    match fallback_status {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully using fallback '{}'",
                                default_editor
                            );
                        }
                        Ok(_) | Err(_) => {
                            eprintln!(
                                "❌ Failed to edit configuration file using fallback '{}'",
                                default_editor
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Report keys missing from the on-disk YAML. Missing keys are not fatal:
/// `Config::load` fills them with defaults.
fn check_config(path: &std::path::Path) -> AppResult<()> {
    if !path.exists() {
        warning(
            Default::default(),
            "No configuration file found; defaults are in effect. Run 'punchclock init'.",
        );
        return Ok(());
    }

    let content = std::fs::read_to_string(path)?;
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| crate::errors::AppError::Config(e.to_string()))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for key in Config::required_keys() {
            if !map.contains_key(serde_yaml::Value::String((*key).to_string())) {
                missing.push(*key);
            }
        }
    }

    if missing.is_empty() {
        success(Default::default(), "Configuration file is complete.");
    } else {
        warning(
            Default::default(),
            format!(
                "Missing keys (defaults apply): {}",
                missing.join(", ")
            ),
        );
    }

    Ok(())
}
