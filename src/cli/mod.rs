//! CLI adapter for pmlens
//!
//! Provides the command-line interface for running an analysis and
//! reading back the persisted topic database.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |     core/        |
//! |  (domain logic)  |
//! +--------+---------+
//!          |
//!          v
//! +------------------+
//! |      cli/        |
//! | (clap adapter)   |
//! +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// pmlens - Project management topic analysis
///
/// Splits a directory of PDF books into chapters, classifies chapters
/// against nine project-management topics and builds a cross-book
/// topic database.
#[derive(Parser, Debug)]
#[command(name = "pmlens")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "Project management topic analysis for PDF libraries", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a directory of PDF documents and save the topic database
    Analyze(commands::AnalyzeArgs),

    /// List the topic taxonomy
    #[command(name = "list-topics")]
    ListTopics(commands::TopicsArgs),

    /// Show one topic from saved analysis results
    #[command(name = "show-topic")]
    ShowTopic(commands::ShowTopicArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  pmlens completions bash > ~/.local/share/bash-completion/completions/pmlens
    ///   zsh:   pmlens completions zsh > ~/.zfunc/_pmlens
    ///   fish:  pmlens completions fish > ~/.config/fish/completions/pmlens.fish
    Completions(commands::CompletionsArgs),
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so JSON command output on stdout stays clean.
/// `RUST_LOG` overrides the default `pmlens=info` filter.
pub fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "pmlens=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (tests, embedding)
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle commands that don't need services
    match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::ListTopics(args) => return commands::topics::execute(args, cli.format),
        _ => {}
    }

    init_logging(cli.log_json);

    // Load configuration
    let config = Config::load()?;

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &services, cli.format).await,
        Commands::ShowTopic(args) => {
            commands::show_topic::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) | Commands::ListTopics(_) => unreachable!(), // Handled above
    }
}
