use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                messages::warning(format!("No config file at {}; using defaults", path.display()));
                println!(
                    "{}",
                    serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?
                );
            }
        }

        // ---- CHECK CONFIG ----
        if *check {
            match Config::load() {
                Ok(_) => messages::success("Configuration OK"),
                Err(e) => {
                    messages::error(format!("Configuration problem: {}", e));
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}
