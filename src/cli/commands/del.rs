use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_task, load_task};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let id: i64 = id
            .parse()
            .map_err(|_| AppError::InvalidTaskId(id.to_string()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let task = load_task(&pool.conn, id)?.ok_or(AppError::TaskNotFound(id))?;

        //
        // Confirmation prompt
        //
        if cfg.confirm_delete && !yes {
            let prompt = format!(
                "Delete task #{} '{}'? This action is irreversible.",
                task.id, task.name
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let task = delete_task(&mut pool, id)?;
        success(format!("Task #{} '{}' has been deleted.", task.id, task.name));
    }

    Ok(())
}
