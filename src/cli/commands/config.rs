use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config {
            let rendered = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?;
            print!("{}", rendered);
        }

        if !*path && !*print_config {
            println!("Use --print or --path (see `config --help`).");
        }
    }

    Ok(())
}
