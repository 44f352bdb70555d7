use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
/// CLI punch clock to track clock-in/out events with SQLite
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch clock CLI: record clock-in/out punches and reconcile worked hours against a workday calendar",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a clock-in/out punch (now, or at an explicit time)
    Punch {
        #[arg(
            long = "at",
            value_name = "DATETIME",
            help = "Punch time \"YYYY-MM-DD HH:MM[:SS]\" (default: now)"
        )]
        at: Option<String>,
    },

    /// List punches, most recent first
    List {
        /// Restrict the listing to one date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Remove all punches recorded on a date
    Clear {
        /// Date to clear (YYYY-MM-DD)
        date: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Flip the workday/rest-day status of a date
    Toggle {
        /// Date to toggle (YYYY-MM-DD)
        date: String,
    },

    /// Set or reset the manual month adjustment
    Adjust {
        /// Month the adjustment targets (YYYY-MM, default: current month)
        month: Option<String>,

        #[arg(long = "hours", help = "Exact worked hours up to the cutoff")]
        hours: Option<f64>,

        #[arg(
            long = "until",
            value_name = "DATETIME",
            help = "Cutoff \"YYYY-MM-DD [HH:MM]\": computed hours resume after this instant"
        )]
        until: Option<String>,

        #[arg(long = "reset", help = "Clear the current adjustment")]
        reset: bool,
    },

    /// Show workday count, scheduled hours and worked hours for a month
    Summary {
        /// Month to summarize (YYYY-MM, default: current month)
        month: Option<String>,
    },
}
