use clap::{Parser, Subcommand};

/// Command-line interface definition for Lunchly
#[derive(Parser)]
#[command(
    name = "lunchly",
    version = env!("CARGO_PKG_VERSION"),
    about = "Restaurant customer and reservation manager with a built-in web UI, backed by SQLite",
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

    /// Manage the configuration file
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Run the HTTP server
    Serve {
        /// Bind address (overrides the configured host)
        #[arg(long = "host", help = "Bind address, e.g. 127.0.0.1 or 0.0.0.0")]
        host: Option<String>,

        /// Bind port (overrides the configured port)
        #[arg(long = "port", help = "Bind port")]
        port: Option<u16>,
    },
}
