//! List-topics command - print the topic taxonomy

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::topics::Topic;
use clap::Args;
use serde::Serialize;

/// Arguments for the list-topics command
#[derive(Args, Debug)]
pub struct TopicsArgs {
    /// Include the keyword phrases of each topic
    #[arg(long, short = 'k')]
    pub keywords: bool,
}

/// One taxonomy entry
#[derive(Debug, Serialize)]
pub struct TopicInfo {
    pub id: &'static str,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<&'static [&'static str]>,
}

/// Build the taxonomy listing in declaration order
pub fn topic_infos(with_keywords: bool) -> Vec<TopicInfo> {
    Topic::ALL
        .iter()
        .map(|topic| TopicInfo {
            id: topic.id(),
            title: topic.title(),
            keywords: with_keywords.then(|| topic.keywords()),
        })
        .collect()
}

/// Execute the list-topics command
pub fn execute(args: TopicsArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let topics = topic_infos(args.keywords);

    match format {
        OutputFormat::Human => {
            print_header(&format!("Topics ({}):", topics.len()));
            for info in &topics {
                println!(
                    "  {:<24} {}",
                    colors::topic(info.id),
                    colors::dim(&info.title)
                );
                if let Some(keywords) = info.keywords {
                    println!("    {}", keywords.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&topics)?);
        }
    }

    Ok(())
}
