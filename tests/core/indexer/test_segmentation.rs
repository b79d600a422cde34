//! Segmentation of book-like text

use crate::common::SCENARIO_TEXT;
use pmlens::core::indexer::segmenter::{detect_heading, HeadingKind};
use pmlens::core::indexer::segment;

#[test]
fn test_scenario_text_has_two_chapters() {
    let chapters = segment(SCENARIO_TEXT);

    let headings: Vec<&str> = chapters.keys().map(String::as_str).collect();
    assert_eq!(headings, vec!["Chapter 1 Risk Management", "Chapter 2 Quality"]);

    let first = &chapters["Chapter 1 Risk Management"];
    assert_eq!(first.line_start, 0);
    assert_eq!(
        first.content,
        "This covers risk assessment and stakeholder engagement."
    );
    assert_eq!(chapters["Chapter 2 Quality"].line_start, 2);
}

#[test]
fn test_text_without_headings_is_empty() {
    let text = "A preface with no structure.\nJust prose.\n\nMore prose.";
    assert!(segment(text).is_empty());
}

#[test]
fn test_blank_lines_only() {
    assert!(segment("\n\n   \n\t\n").is_empty());
    assert!(segment("").is_empty());
}

#[test]
fn test_preamble_before_first_heading_is_dropped() {
    let text = "Copyright notice\nAll rights reserved\nChapter 1 Start\nFirst body";
    let chapters = segment(text);

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters["Chapter 1 Start"].content, "First body");
    assert_eq!(chapters["Chapter 1 Start"].line_start, 2);
}

#[test]
fn test_mixed_heading_styles() {
    let text = "Part 1 Foundations\n\
                Opening words.\n\
                1. Introduction to projects\n\
                Projects are temporary.\n\
                2 Planning the overall approach\n\
                Plans evolve.\n\
                Section 3: Closing\n\
                Wrap up.";
    let chapters = segment(text);

    assert_eq!(chapters.len(), 4);
    assert_eq!(chapters["1. Introduction to projects"].content, "Projects are temporary.");
    assert_eq!(chapters["2 Planning the overall approach"].content, "Plans evolve.");
    assert_eq!(chapters["Section 3: Closing"].content, "Wrap up.");
}

#[test]
fn test_line_start_counts_blank_lines() {
    let text = "\n\nChapter 1 Late\n\nbody";
    let chapters = segment(text);

    assert_eq!(chapters["Chapter 1 Late"].line_start, 2);
    assert_eq!(chapters["Chapter 1 Late"].content, "body");
}

#[test]
fn test_heading_detection_examples() {
    assert_eq!(detect_heading("CHAPTER 12 Budgets"), Some(HeadingKind::Chapter));
    assert_eq!(detect_heading("section 4 - Risks"), Some(HeadingKind::Section));
    assert_eq!(detect_heading("3. Stakeholders"), Some(HeadingKind::NumberedDot));
    assert_eq!(
        detect_heading("7 Managing the project team"),
        Some(HeadingKind::NumberedTitle)
    );
    // Lowercase phrase after a number is body text
    assert_eq!(detect_heading("3. the next step"), None);
    // Too short for a numbered title
    assert_eq!(detect_heading("7 Teams"), None);
    assert_eq!(detect_heading("The chapter ends here"), None);
}
