use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ChangeEvent;
use crate::core::watch::subscribe;
use crate::errors::{AppError, AppResult};
use crate::ui::list::VisualList;
use crate::ui::messages::{error, info};

use std::time::Duration;

/// Follow the task list as other processes change it.
///
/// The subscription worker detects committed changes on a background
/// thread; this loop drains its notifications and re-renders. Dropping
/// out of the loop releases the subscription on every exit path.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { poll_ms } = cmd {
        let poll = Duration::from_millis(poll_ms.unwrap_or(cfg.poll_interval_ms));

        let (_subscription, events) = subscribe(&cfg.database, poll)?;
        let mut list = VisualList::new();

        info(format!(
            "Watching {} (poll every {}ms). Press Ctrl-C to stop.",
            cfg.database,
            poll.as_millis()
        ));

        for event in events {
            if let ChangeEvent::Failed(msg) = &event {
                error(format!("Store failure: {}", msg));
                return Err(AppError::Store(msg.clone()));
            }
            list.apply_event(&event)?;
            println!();
            print!("{}", list.render());
        }
    }

    Ok(())
}
