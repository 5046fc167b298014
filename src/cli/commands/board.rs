use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::LiveView;
use crate::db::pool::DbPool;
use crate::db::queries::{create_task, delete_task, set_status};
use crate::errors::{AppError, AppResult};
use crate::models::status::Status;
use crate::ui::list::VisualList;
use crate::ui::messages::{error, header, info};

use std::io::{self, BufRead, Write};

/// Interactive task board.
///
/// Owns a live view and a visual list for the duration of the screen:
/// every mutation is committed to the store, then the view is refreshed
/// and the resulting notification is reconciled into the list before it
/// is re-rendered. Rows are addressed by their 1-based display number.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Board) {
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;
    let mut view = LiveView::open(&cfg.database)?;
    let mut list = VisualList::new();

    //
    // Initial population
    //
    if let Some(event) = view.refresh() {
        list.apply_event(&event)?;
    }

    header("Task board");
    print!("{}", list.render());
    info("Commands: add <name> | set <row> <status> | del <row> | quit");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF closes the screen
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "q" {
            break;
        }

        //
        // 1. Execute the mutation; a bad command keeps the screen alive
        //
        if let Err(e) = run_command(line, &mut pool, view.snapshot()) {
            error(e);
            continue;
        }

        //
        // 2. Refresh the view and reconcile the notification
        //
        match view.refresh() {
            Some(event) => list.apply_event(&event)?,
            None => continue,
        }

        print!("{}", list.render());
    }

    Ok(())
}

/// Parse and run one board command against the store.
fn run_command(line: &str, pool: &mut DbPool, snapshot: &[crate::models::task::Task]) -> AppResult<()> {
    let mut parts = line.splitn(2, ' ');
    let verb = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match verb {
        "add" => {
            create_task(pool, rest)?;
            Ok(())
        }
        "set" => {
            let mut args = rest.splitn(2, ' ');
            let row = args.next().unwrap_or("");
            let status_str = args.next().unwrap_or("").trim();
            let id = resolve_row(row, snapshot)?;
            let status = Status::from_cli_str(status_str)
                .ok_or_else(|| AppError::InvalidStatus(status_str.to_string()))?;
            set_status(pool, id, status)?;
            Ok(())
        }
        "del" => {
            let id = resolve_row(rest, snapshot)?;
            delete_task(pool, id)?;
            Ok(())
        }
        other => Err(AppError::Other(format!("unknown command '{}'", other))),
    }
}

/// Translate a 1-based display row into the task id at that position.
fn resolve_row(arg: &str, snapshot: &[crate::models::task::Task]) -> AppResult<i64> {
    let row: usize = arg
        .parse()
        .map_err(|_| AppError::InvalidRow(arg.to_string()))?;
    if row == 0 || row > snapshot.len() {
        return Err(AppError::InvalidRow(arg.to_string()));
    }
    Ok(snapshot[row - 1].id)
}
