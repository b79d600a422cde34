//! Analyze command - run the analysis pipeline over a directory

use crate::cli::output::{colors, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::error::PmlensError;
use crate::core::services::{AnalysisRequest, Services};
use crate::core::types::SkippedDocument;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Directory containing the PDF documents (defaults to the configured source_dir)
    pub source_dir: Option<PathBuf>,

    /// File to write the results to (defaults to the configured output_file)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Maximum documents processed at the same time
    #[arg(long, short = 'w')]
    pub workers: Option<usize>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Topic line of the analysis summary
#[derive(Debug, Serialize)]
pub struct TopicSummary {
    pub topic: String,
    pub books: usize,
    pub total_excerpts: usize,
}

/// Analysis result response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub source_dir: String,
    pub output_file: String,
    pub persisted: bool,
    pub files_found: usize,
    pub documents_processed: usize,
    pub chapters: usize,
    pub topics: Vec<TopicSummary>,
    pub skipped: Vec<SkippedDocument>,
    pub duration_secs: f64,
}

/// Execute the analyze command
pub async fn execute(
    args: AnalyzeArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.workers == Some(0) {
        return Err("Worker count must be at least 1.".into());
    }

    services.config.log_config();

    let source_dir = args
        .source_dir
        .unwrap_or_else(|| services.config.analysis.source_dir.clone());

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Analyzing {}...",
            colors::file_path(&source_dir.display().to_string())
        );
    }

    let outcome = services
        .run_analysis(AnalysisRequest {
            source_dir: Some(source_dir),
            output_file: args.output,
            max_concurrent_documents: args.workers,
        })
        .await;

    // Nothing was analyzed, so there is no summary to show
    if let Some(e @ (PmlensError::MissingSourceDirectory(_) | PmlensError::ConfigError(_))) =
        outcome.error
    {
        return Err(e.into());
    }

    let results = &outcome.results;
    let metadata = &results.analysis_metadata;
    let response = AnalyzeResponse {
        source_dir: metadata.source_dir.clone(),
        output_file: outcome.output_path.display().to_string(),
        persisted: outcome.persisted,
        files_found: metadata.files_found,
        documents_processed: metadata.documents_processed,
        chapters: results.total_chapters(),
        topics: results
            .topics_database
            .iter()
            .map(|(topic, entry)| TopicSummary {
                topic: topic.id().to_string(),
                books: entry.books.len(),
                total_excerpts: entry.total_excerpts,
            })
            .collect(),
        skipped: metadata.documents_skipped.clone(),
        duration_secs: metadata.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => print_human(&response, args.quiet),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    match outcome.error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn print_human(response: &AnalyzeResponse, quiet: bool) {
    if response.files_found == 0 {
        print_warning(&format!("No PDF files found in {}", response.source_dir));
    }

    println!(
        "{} {} of {} documents ({} chapters) in {}",
        colors::success("Analyzed"),
        colors::number(&response.documents_processed.to_string()),
        colors::number(&response.files_found.to_string()),
        colors::number(&response.chapters.to_string()),
        colors::number(&format_duration(response.duration_secs))
    );
    println!(
        "Topics found: {}",
        colors::number(&response.topics.len().to_string())
    );

    if !quiet {
        for topic in &response.topics {
            println!(
                "  {:<24} {} books, {} excerpts",
                colors::topic(&topic.topic),
                colors::number(&topic.books.to_string()),
                colors::number(&topic.total_excerpts.to_string())
            );
        }
    }

    for skipped in &response.skipped {
        print_warning(&format!("Skipped {}: {}", skipped.file_path, skipped.reason));
    }

    if response.persisted {
        println!(
            "Results saved to {}",
            colors::file_path(&response.output_file)
        );
    }
}
