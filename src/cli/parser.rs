use clap::{Parser, Subcommand};

/// Command-line interface definition for rtasktracker
/// CLI application to track tasks with SQLite
#[derive(Parser)]
#[command(
    name = "rtasktracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple task tracking CLI: a to-do list with a live auto-updating view over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Add a new task (default status: open)
    Add {
        /// Task name; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List all tasks, sorted by id
    List {
        #[arg(long = "json", help = "Print tasks as JSON instead of a table")]
        json: bool,
    },

    /// Change the status of a task
    Set {
        /// Task id (as shown by `list`)
        id: String,

        /// New status: open, in-progress, complete
        status: String,
    },

    /// Delete a task by id
    Del {
        /// Task id (as shown by `list`)
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Interactive task board (add/set/del with a live-updating list)
    Board,

    /// Follow the task list as other processes change it
    Watch {
        #[arg(long = "poll-ms", help = "Poll interval in milliseconds")]
        poll_ms: Option<u64>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
