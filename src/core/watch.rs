//! Background change subscription over the task store.
//!
//! A worker thread owns its own `LiveView`, polls the store's commit
//! counter and sends `ChangeEvent`s over a channel. The subscriber
//! drains the channel on its own thread. The subscription is a scoped
//! resource: dropping it stops and joins the worker, after which no
//! further notifications are delivered.

use crate::core::view::{ChangeEvent, LiveView};
use crate::errors::AppResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// RAII guard for an active change subscription.
pub struct Subscription {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Start observing the store at `db_path`.
///
/// The first notification is always `Initial`; afterwards a `Delta` is
/// sent whenever another connection commits a change. A store failure
/// is sent as `Failed` and ends the subscription.
pub fn subscribe(
    db_path: &str,
    poll_interval: Duration,
) -> AppResult<(Subscription, Receiver<ChangeEvent>)> {
    let (tx, rx) = channel();
    let stop = Arc::new(AtomicBool::new(false));

    let worker_stop = Arc::clone(&stop);
    let path = db_path.to_string();
    let handle = thread::spawn(move || run_worker(&path, poll_interval, &worker_stop, &tx));

    Ok((
        Subscription {
            stop,
            handle: Some(handle),
        },
        rx,
    ))
}

fn run_worker(
    db_path: &str,
    poll_interval: Duration,
    stop: &AtomicBool,
    tx: &Sender<ChangeEvent>,
) {
    let mut view = match LiveView::open(db_path) {
        Ok(view) => view,
        Err(e) => {
            let _ = tx.send(ChangeEvent::Failed(e.to_string()));
            return;
        }
    };

    // First load. refresh() on a fresh view always yields Initial.
    if let Some(event) = view.refresh() {
        let fatal = matches!(event, ChangeEvent::Failed(_));
        if tx.send(event).is_err() || fatal {
            return;
        }
    }

    let mut last_version = match view.data_version() {
        Ok(v) => v,
        Err(e) => {
            let _ = tx.send(ChangeEvent::Failed(e.to_string()));
            return;
        }
    };

    while !stop.load(Ordering::Relaxed) {
        sleep_interruptible(poll_interval, stop);
        if stop.load(Ordering::Relaxed) {
            return;
        }

        let version = match view.data_version() {
            Ok(v) => v,
            Err(e) => {
                let _ = tx.send(ChangeEvent::Failed(e.to_string()));
                return;
            }
        };
        if version == last_version {
            continue;
        }
        last_version = version;

        if let Some(event) = view.refresh() {
            let fatal = matches!(event, ChangeEvent::Failed(_));
            if tx.send(event).is_err() || fatal {
                return;
            }
        }
    }
}

/// Sleep in short slices so a dropped subscription joins promptly.
fn sleep_interruptible(total: Duration, stop: &AtomicBool) {
    const SLICE: Duration = Duration::from_millis(25);
    let deadline = Instant::now() + total;
    while Instant::now() < deadline {
        if stop.load(Ordering::Relaxed) {
            return;
        }
        thread::sleep(SLICE.min(deadline.saturating_duration_since(Instant::now())));
    }
}
