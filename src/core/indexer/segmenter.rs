//! Heuristic chapter segmentation.
//!
//! Splits the concatenated text of a document into chapters by
//! matching each line against a fixed, ordered list of heading
//! patterns. Text before the first heading is discarded.
//!
//! # Example
//!
//! ```
//! use pmlens::core::indexer::segmenter::segment;
//!
//! let chapters = segment("Preface\nChapter 1 Scope\nDefine the scope.");
//! assert_eq!(chapters.len(), 1);
//! assert_eq!(chapters["Chapter 1 Scope"].content, "Define the scope.");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::{Chapter, ChapterMap};

/// Heading formats, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    /// `Chapter 3: Planning`
    Chapter,
    /// `SECTION 2 Controls`
    Section,
    /// `Part 1 Foundations`
    Part,
    /// `4. Managing Risk`
    NumberedDot,
    /// `12 Earned Value Analysis`
    NumberedTitle,
}

static HEADING_PATTERNS: Lazy<Vec<(HeadingKind, Regex)>> = Lazy::new(|| {
    vec![
        (
            HeadingKind::Chapter,
            Regex::new(r"^(?i:chapter)\s+(\d+)[:\s]*(.+)").unwrap(),
        ),
        (
            HeadingKind::Section,
            Regex::new(r"^(?i:section)\s+(\d+)[:\s]*(.+)").unwrap(),
        ),
        (
            HeadingKind::Part,
            Regex::new(r"^(?i:part)\s+(\d+)[:\s]*(.+)").unwrap(),
        ),
        (
            HeadingKind::NumberedDot,
            Regex::new(r"^(\d+)\.\s*([A-Z][^.]*\.?[^.]*\.?)").unwrap(),
        ),
        (
            HeadingKind::NumberedTitle,
            Regex::new(r"^(\d+)\s+([A-Z][^.]{10,})").unwrap(),
        ),
    ]
});

/// Classify a trimmed line as a heading, if it is one.
///
/// Patterns are tried in precedence order and the first match wins.
pub fn detect_heading(line: &str) -> Option<HeadingKind> {
    HEADING_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(line))
        .map(|(kind, _)| *kind)
}

/// Chapter being accumulated during the scan
struct OpenChapter<'a> {
    heading: &'a str,
    line_start: usize,
    body: Vec<&'a str>,
}

impl OpenChapter<'_> {
    /// Move the chapter into the map if it has any body lines.
    ///
    /// A chapter whose heading is already present replaces the
    /// earlier entry.
    fn seal_into(self, chapters: &mut ChapterMap) {
        if self.body.is_empty() {
            tracing::debug!("Dropping empty chapter '{}'", self.heading);
            return;
        }

        let chapter = Chapter {
            heading: self.heading.to_string(),
            content: self.body.join("\n"),
            line_start: self.line_start,
        };

        if chapters.insert(chapter.heading.clone(), chapter).is_some() {
            tracing::debug!("Duplicate heading '{}' replaced earlier chapter", self.heading);
        }
    }
}

/// Segment document text into chapters keyed by heading line.
///
/// Lines are trimmed and blank lines skipped. `line_start` is the
/// index of the heading among all lines, blank ones included. A text
/// without any heading yields an empty map.
pub fn segment(text: &str) -> ChapterMap {
    let mut chapters = ChapterMap::new();
    let mut current: Option<OpenChapter<'_>> = None;

    for (line_num, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if detect_heading(line).is_some() {
            if let Some(open) = current.take() {
                open.seal_into(&mut chapters);
            }
            current = Some(OpenChapter {
                heading: line,
                line_start: line_num,
                body: Vec::new(),
            });
        } else if let Some(open) = current.as_mut() {
            open.body.push(line);
        }
    }

    if let Some(open) = current {
        open.seal_into(&mut chapters);
    }

    chapters
}
