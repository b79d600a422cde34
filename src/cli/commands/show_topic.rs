//! Show-topic command - print one topic from saved results

use crate::cli::output::{colors, format_relative_time, truncate_line};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::topics::Topic;
use crate::core::types::{AnalysisResults, SourcedMatch};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the show-topic command
#[derive(Args, Debug)]
pub struct ShowTopicArgs {
    /// Topic id or title (e.g. risk_management, "Risk Management")
    pub topic: String,

    /// Results file to read (defaults to the configured output_file)
    #[arg(long, short = 'r')]
    pub results: Option<PathBuf>,

    /// Maximum number of excerpts to show (1-100)
    #[arg(long, short = 'n', default_value = "5")]
    pub limit: usize,
}

/// Contribution of one book to the topic
#[derive(Debug, Serialize)]
pub struct BookCount {
    pub book: String,
    pub chapter_count: usize,
}

/// Topic response
#[derive(Debug, Serialize)]
pub struct ShowTopicResponse {
    pub topic: String,
    pub title: String,
    pub found: bool,
    pub summary: Option<String>,
    pub books: Vec<BookCount>,
    pub total_excerpts: usize,
    pub top_excerpts: Vec<SourcedMatch>,
    pub generated_at: DateTime<Utc>,
}

/// Select the topic entry and its most relevant excerpts.
///
/// Excerpts are ordered by relevance score, highest first; equal
/// scores keep their database order.
pub fn build_response(results: &AnalysisResults, topic: Topic, limit: usize) -> ShowTopicResponse {
    let generated_at = results.analysis_metadata.generated_at;

    let Some(entry) = results.topics_database.get(&topic) else {
        return ShowTopicResponse {
            topic: topic.id().to_string(),
            title: topic.title(),
            found: false,
            summary: None,
            books: Vec::new(),
            total_excerpts: 0,
            top_excerpts: Vec::new(),
            generated_at,
        };
    };

    let mut excerpts: Vec<&SourcedMatch> = entry.similar_texts.iter().collect();
    excerpts.sort_by(|a, b| b.entry.relevance_score.cmp(&a.entry.relevance_score));

    ShowTopicResponse {
        topic: topic.id().to_string(),
        title: entry.topic_title.clone(),
        found: true,
        summary: Some(entry.summary.clone()),
        books: entry
            .books
            .iter()
            .map(|(book, summary)| BookCount {
                book: book.clone(),
                chapter_count: summary.chapter_count,
            })
            .collect(),
        total_excerpts: entry.total_excerpts,
        top_excerpts: excerpts.into_iter().take(limit).cloned().collect(),
        generated_at,
    }
}

/// Execute the show-topic command
pub async fn execute(
    args: ShowTopicArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let topic: Topic = args.topic.parse().map_err(|_| {
        format!(
            "Unknown topic '{}'. Run 'pmlens list-topics' to see available topics.",
            args.topic
        )
    })?;

    let results = services.load_results(args.results.as_deref()).map_err(|e| {
        if e.is_not_found() {
            format!("{e}. Run 'pmlens analyze' first.")
        } else {
            e.to_string()
        }
    })?;

    let limit = args.limit.clamp(1, 100);
    let response = build_response(&results, topic, limit);

    match format {
        OutputFormat::Human => print_human(&response),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn print_human(response: &ShowTopicResponse) {
    println!(
        "{} {}",
        colors::label(&response.title),
        colors::dim(&format!(
            "({}, analyzed {})",
            response.topic,
            format_relative_time(&response.generated_at)
        ))
    );

    let Some(summary) = &response.summary else {
        println!("No chapters matched this topic.");
        return;
    };

    println!("{summary}\n");

    for book in &response.books {
        println!(
            "  {} {} chapters",
            colors::file_path(&book.book),
            colors::number(&book.chapter_count.to_string())
        );
    }

    if response.top_excerpts.is_empty() {
        return;
    }

    println!(
        "\nTop {} of {} excerpts:\n",
        colors::number(&response.top_excerpts.len().to_string()),
        colors::number(&response.total_excerpts.to_string())
    );

    for (i, excerpt) in response.top_excerpts.iter().enumerate() {
        println!(
            "[{}] {} {} {}",
            colors::rank(&(i + 1).to_string()),
            colors::label(&excerpt.entry.chapter_title),
            colors::dim(&format!("in {}", excerpt.source_book)),
            colors::score(&format!("(relevance: {})", excerpt.entry.relevance_score))
        );
        println!(
            "    {}",
            colors::dim(&format!("keywords: {}", excerpt.entry.keywords_found.join(", ")))
        );
        for line in excerpt.entry.excerpt.lines().take(3) {
            println!("    {}", colors::dim(&truncate_line(line, 100)));
        }
        println!();
    }
}
