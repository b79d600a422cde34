//! Config command - show current configuration

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where configuration is read from
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = args
        .all
        .then(|| XdgDirs::new().config_file().display().to_string());

    let response = ConfigResponse {
        config_file,
        config: (*services.config).clone(),
    };

    match format {
        OutputFormat::Human => {
            let analysis = &response.config.analysis;
            let limits = &response.config.limits;

            println!("{}", colors::label("Configuration:"));
            if let Some(path) = &response.config_file {
                println!("  config_file: {}", colors::file_path(path));
            }
            println!("  analysis:");
            println!("    source_dir: {}", analysis.source_dir.display());
            println!("    output_file: {}", analysis.output_file.display());
            println!("    include_patterns: {:?}", analysis.include_patterns);
            println!("    recursive: {}", analysis.recursive);
            println!("    max_file_size_mb: {}", analysis.max_file_size_mb);
            println!("    excerpt_chars: {}", analysis.excerpt_chars);
            println!("    excerpt_marker: {:?}", analysis.excerpt_marker);
            println!("  limits:");
            println!(
                "    max_concurrent_documents: {}",
                limits.max_concurrent_documents
            );
            println!("    progress_every_pages: {}", limits.progress_every_pages);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
