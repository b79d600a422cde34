//! Cross-document topic aggregation.
//!
//! Folds the per-document classification results of a run into a
//! single topic database. Topics are visited in taxonomy order and
//! documents in the order given, so the output does not depend on the
//! order in which documents finished processing.

use crate::core::topics::Topic;
use crate::core::types::{BookTopicSummary, SourcedMatch, TopicData, TopicEntry, TopicsDatabase};

/// Build the topic database from per-document results.
///
/// `per_document` pairs each document identifier with its
/// classification result. Matches are copied into the database; a
/// topic that no document matched is omitted.
pub fn aggregate(per_document: &[(&str, &TopicData)]) -> TopicsDatabase {
    let mut database = TopicsDatabase::new();

    for topic in Topic::ALL {
        if let Some(entry) = aggregate_topic(topic, per_document) {
            database.insert(topic, entry);
        }
    }

    tracing::info!(
        "Topics database created with {} topics from {} documents",
        database.len(),
        per_document.len()
    );

    database
}

fn aggregate_topic(topic: Topic, per_document: &[(&str, &TopicData)]) -> Option<TopicEntry> {
    let mut entry = TopicEntry {
        topic_title: topic.title(),
        books: Default::default(),
        similar_texts: Vec::new(),
        summary: String::new(),
        total_excerpts: 0,
    };

    for (doc_id, topic_data) in per_document {
        let Some(content) = topic_data.get(&topic) else {
            continue;
        };

        entry.similar_texts.extend(content.chapter_excerpts.iter().map(|m| SourcedMatch {
            entry: m.clone(),
            source_book: doc_id.to_string(),
        }));
        entry.books.insert(
            doc_id.to_string(),
            BookTopicSummary {
                chapter_count: content.chapter_excerpts.len(),
                excerpts: content.chapter_excerpts.clone(),
            },
        );
    }

    if entry.books.is_empty() {
        return None;
    }

    entry.total_excerpts = entry.books.values().map(|book| book.chapter_count).sum();
    entry.summary = summary(&entry);

    Some(entry)
}

fn summary(entry: &TopicEntry) -> String {
    let names: Vec<&str> = entry.books.keys().map(String::as_str).collect();
    format!(
        "This topic is covered in {} books: {}",
        names.len(),
        names.join(", ")
    )
}
