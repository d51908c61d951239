use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchdeck
/// CLI application to validate and record attendance punches with SQLite
#[derive(Parser)]
#[command(
    name = "punchdeck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate and record employee attendance punches with shift-buffer windows and overnight rollover",
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
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Validate and record a punch
    Punch {
        /// Shop the punch belongs to
        shop_id: i64,

        /// Date the punch is submitted against (YYYY-MM-DD)
        date: String,

        /// Wall-clock time of the punch (HH:MM or HH:MM:SS)
        time: String,

        /// Punch kind: in, break, resume, out
        kind: String,

        /// Employee the punch belongs to (omit for shop-level punches)
        #[arg(long = "employee")]
        employee: Option<i64>,

        /// Free-form note stored with the punch
        #[arg(long = "comment")]
        comment: Option<String>,

        /// Submission origin: api or web
        #[arg(long = "origin", default_value = "api")]
        origin: String,

        /// Override the configured shift start (HH:MM)
        #[arg(long = "shift-start")]
        shift_start: Option<String>,

        /// Override the configured shift end (HH:MM)
        #[arg(long = "shift-end")]
        shift_end: Option<String>,

        /// Override the configured buffer hours
        #[arg(long = "buffer")]
        buffer: Option<u32>,
    },

    /// List recorded punches
    List {
        /// Shop to list punches for
        shop_id: i64,

        #[arg(long = "employee", help = "Filter by employee id")]
        employee: Option<i64>,

        #[arg(
            long,
            short,
            help = "Filter by period: YYYY, YYYY-MM or YYYY-MM-DD"
        )]
        period: Option<String>,

        #[arg(long = "shifts", help = "Show aggregated per-shift rows")]
        shifts: bool,
    },

    /// Delete punches for a date (all, or a single one by id)
    Del {
        /// Shop the punches belong to
        shop_id: i64,

        /// Date to delete punches for (YYYY-MM-DD)
        date: String,

        #[arg(long = "employee", help = "Employee the punches belong to")]
        employee: Option<i64>,

        #[arg(long = "id", help = "Delete only the punch with this id")]
        id: Option<i64>,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export punch data
    Export {
        /// Shop to export punches for
        shop_id: i64,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "employee", help = "Filter by employee id")]
        employee: Option<i64>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a START:END range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
