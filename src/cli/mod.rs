//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod hazard;
pub mod lookup;
pub mod serve;

use clap::{Parser, Subcommand};

/// Location hazard lookup for Colorado trails
#[derive(Parser)]
#[command(name = "trail-watch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up hazards at a place or coordinate
    Lookup(lookup::LookupArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Create hazards and coverage areas (admin)
    Hazard(hazard::HazardArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup(args) => lookup::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Hazard(args) => hazard::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
