//! Database maintenance helpers for the `db` subcommand.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SCHEMA VERSION
    //
    let version: i64 = pool
        .conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    println!("{}• Schema version:{} {}", CYAN, RESET, version);

    //
    // 3) TASK COUNTS
    //
    let total: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
    let open: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM tasks WHERE status != 'complete'",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Total tasks:{} {}{}{} ({} pending)",
        CYAN, RESET, GREEN, total, RESET, open
    );

    //
    // 4) OLDEST / NEWEST
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM tasks ORDER BY id ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM tasks ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Created range:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);

    println!();
    Ok(())
}

/// Run `PRAGMA integrity_check` and return its verdict string.
pub fn integrity_check(pool: &mut DbPool) -> AppResult<String> {
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(verdict)
}

pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}
