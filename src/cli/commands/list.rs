use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_tasks;
use crate::errors::{AppError, AppResult};
use crate::ui::list::VisualList;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let tasks = load_tasks(&pool.conn)?;

        if *json {
            let out = serde_json::to_string_pretty(&tasks)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        let mut list = VisualList::new();
        list.populate(&tasks);
        print!("{}", list.render());

        if !tasks.is_empty() {
            let done = tasks.iter().filter(|t| t.status.is_complete()).count();
            println!("\n{} task(s), {} complete", tasks.len(), done);
        }
    }
    Ok(())
}
