//! Command-line interface.

use clap::{Parser, Subcommand};

/// noughts - networked 5x5 three-in-a-row game service
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play 5x5 three-in-a-row against a heuristic opponent over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game service
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}
