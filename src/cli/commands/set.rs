use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_task, set_status};
use crate::errors::{AppError, AppResult};
use crate::models::status::Status;
use crate::ui::messages::{info, success};

/// Change the status of a task.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { id, status } = cmd {
        //
        // 1. Parse id
        //
        let id: i64 = id
            .parse()
            .map_err(|_| AppError::InvalidTaskId(id.to_string()))?;

        //
        // 2. Parse status
        //
        let status = Status::from_cli_str(status)
            .ok_or_else(|| AppError::InvalidStatus(status.to_string()))?;

        //
        // 3. Open DB and commit the update in one transaction
        //
        let mut pool = DbPool::new(&cfg.database)?;

        // Show the transitions actually available when the update is a no-op.
        if let Some(current) = load_task(&pool.conn, id)?
            && current.status == status
        {
            let options: Vec<&str> = current
                .status
                .transitions()
                .iter()
                .map(|s| s.label())
                .collect();
            info(format!("Available transitions: {}", options.join(", ")));
        }

        let task = set_status(&mut pool, id, status)?;

        success(format!(
            "Task #{} '{}' is now {}",
            task.id,
            task.name,
            task.status.label()
        ));
    }

    Ok(())
}
