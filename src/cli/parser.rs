use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for eldplanner
/// CLI application to plan truck trips and generate hours-of-service logs
#[derive(Parser)]
#[command(
    name = "eldplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan multi-day truck trips and generate hours-of-service daily logs using SQLite",
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

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a trip, resolve its route and generate its daily logs
    Plan {
        /// Current location of the driver
        current: String,

        /// Pickup location
        pickup: String,

        /// Dropoff location
        dropoff: String,

        #[arg(
            long = "cycle-used",
            help = "Hours already used in the current 70h cycle (0-70, default from config)"
        )]
        cycle_used: Option<f64>,

        #[arg(
            long = "distance",
            requires = "duration",
            help = "Total distance in miles (skips the routing provider)"
        )]
        distance: Option<f64>,

        #[arg(
            long = "duration",
            requires = "distance",
            help = "Total driving time in hours (skips the routing provider)"
        )]
        duration: Option<f64>,
    },

    /// Generate the daily logs of a stored trip again (appends a new set)
    Replan {
        /// Trip id
        trip: i64,
    },

    /// List trips, or the daily logs of one trip
    List {
        #[arg(long = "trip", help = "Show the daily logs of this trip")]
        trip: Option<i64>,

        #[arg(
            long = "details",
            requires = "trip",
            help = "Show the driver's daily log sheet for each day"
        )]
        details: bool,
    },

    /// Delete a trip and its daily logs
    Del {
        /// Trip id
        trip: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export daily logs
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(long = "trip", help = "Only export the logs of this trip")]
        trip: Option<i64>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
