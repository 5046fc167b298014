use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        let entries = load_log(&mut pool)?;

        if entries.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        for e in entries {
            println!(
                "{}{}{}  {:<5} {:<6} {}",
                GREY, e.date, RESET, e.operation, e.target, e.message
            );
        }
    }

    Ok(())
}
