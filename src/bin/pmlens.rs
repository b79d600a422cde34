//! pmlens CLI - project management topic analysis
//!
//! Analyzes a directory of PDF books and queries the saved topic
//! database.
//!
//! # Examples
//!
//! ```bash
//! # Analyze the default ./Book directory
//! pmlens analyze
//!
//! # Analyze another directory with two workers
//! pmlens analyze ~/library --output library.json --workers 2
//!
//! # Show the best risk management excerpts
//! pmlens show-topic risk-management --limit 3
//!
//! # List the taxonomy with keywords
//! pmlens list-topics --keywords
//! ```

use clap::Parser;
use pmlens::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
