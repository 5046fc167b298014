pub mod add;
pub mod board;
pub mod config;
pub mod db;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod set;
pub mod watch;
