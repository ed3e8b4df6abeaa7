//! trail-watch CLI entry point
//!
//! Location hazard lookup - CLI + web app

use trail_watch::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
