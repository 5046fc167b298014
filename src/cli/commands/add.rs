use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::create_task;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a new task with default status Open.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        //
        // 1. Join the words into one task name
        //
        let name = name.join(" ");

        //
        // 2. Open DB and commit the insert in one transaction
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let task = create_task(&mut pool, &name)?;

        success(format!("Added task #{}: '{}'", task.id, task.name));
    }

    Ok(())
}
