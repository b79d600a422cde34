//! Keyword-based topic classification.
//!
//! Each chapter body is lowercased and tested for every keyword of
//! every topic by plain substring containment, so partial words count
//! ("cost" matches inside "costume"). The relevance score is the
//! number of distinct keywords found, not their frequency.

use crate::core::topics::Topic;
use crate::core::types::{ChapterMap, TopicContent, TopicData, TopicMatch};

/// Default excerpt length in characters
pub const DEFAULT_EXCERPT_CHARS: usize = 500;

/// Default marker appended to every excerpt
pub const DEFAULT_EXCERPT_MARKER: &str = "...";

/// Classifies chapters against the fixed topic taxonomy
#[derive(Debug, Clone)]
pub struct Classifier {
    /// Number of body characters kept in an excerpt
    excerpt_chars: usize,

    /// Marker appended after the excerpt prefix
    excerpt_marker: String,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_EXCERPT_CHARS, DEFAULT_EXCERPT_MARKER)
    }
}

impl Classifier {
    pub fn new(excerpt_chars: usize, excerpt_marker: impl Into<String>) -> Self {
        Self {
            excerpt_chars,
            excerpt_marker: excerpt_marker.into(),
        }
    }

    /// Classify the chapters of one document.
    ///
    /// Topics appear in taxonomy order; a topic with no matching
    /// chapter is left out of the result entirely.
    pub fn classify(&self, doc_id: &str, chapters: &ChapterMap) -> TopicData {
        let lowered: Vec<String> = chapters
            .values()
            .map(|chapter| chapter.content.to_lowercase())
            .collect();

        let mut topic_data = TopicData::new();

        for topic in Topic::ALL {
            let mut content = TopicContent::default();

            for ((heading, chapter), body_lower) in chapters.iter().zip(&lowered) {
                let keywords_found = matching_keywords(topic, body_lower);
                if keywords_found.is_empty() {
                    continue;
                }

                content.chapter_excerpts.push(TopicMatch {
                    chapter_title: heading.clone(),
                    relevance_score: keywords_found.len(),
                    keywords_found: keywords_found.into_iter().map(str::to_string).collect(),
                    excerpt: self.excerpt(&chapter.content),
                    full_content_link: content_link(heading),
                });
                content
                    .book_references
                    .entry(doc_id.to_string())
                    .or_default()
                    .push(heading.clone());
            }

            if !content.chapter_excerpts.is_empty() {
                topic_data.insert(topic, content);
            }
        }

        tracing::debug!(
            "Classified '{}': {} of {} topics matched",
            doc_id,
            topic_data.len(),
            Topic::ALL.len()
        );

        topic_data
    }

    /// First `excerpt_chars` characters of the body plus the marker.
    ///
    /// Shorter bodies are kept whole; the marker is always appended.
    pub fn excerpt(&self, body: &str) -> String {
        let mut excerpt: String = body.chars().take(self.excerpt_chars).collect();
        excerpt.push_str(&self.excerpt_marker);
        excerpt
    }
}

/// Keywords of `topic` contained in an already lowercased body
pub fn matching_keywords(topic: Topic, body_lower: &str) -> Vec<&'static str> {
    topic
        .keywords()
        .iter()
        .copied()
        .filter(|keyword| body_lower.contains(keyword))
        .collect()
}

/// Content link token for a chapter heading
pub fn content_link(heading: &str) -> String {
    format!("chapter_{}", heading.replace(' ', "_"))
}
