pub mod diff;
pub mod reconcile;
pub mod view;
pub mod watch;
