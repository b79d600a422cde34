//! Page-level text extraction.
//!
//! The pipeline only depends on the [`TextExtractor`] trait: given a
//! path it yields the text of each page lazily. [`PdfExtractor`] is the
//! production implementation backed by `lopdf`.

use lopdf::Document as PdfDocument;
use std::path::Path;

use crate::core::error::{PmlensError, Result};

/// Lazily produced page texts of one document
pub struct PageStream {
    page_count: usize,
    pages: Box<dyn Iterator<Item = Result<String>>>,
}

impl PageStream {
    pub fn new(page_count: usize, pages: impl Iterator<Item = Result<String>> + 'static) -> Self {
        Self {
            page_count,
            pages: Box::new(pages),
        }
    }

    /// Number of pages announced by the document
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl Iterator for PageStream {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pages.next()
    }
}

/// Source of per-page document text
pub trait TextExtractor: Send + Sync {
    /// Open a document and return its pages.
    ///
    /// Fails with [`PmlensError::DocumentReadFailure`] when the
    /// document cannot be opened. Individual pages may still fail
    /// while iterating.
    fn extract_pages(&self, path: &Path) -> Result<PageStream>;
}

/// Extract and concatenate the text of every page.
///
/// Each page is appended preceded by a single space. Any page error
/// fails the whole document. Progress is logged every
/// `progress_every` pages.
pub fn extract_text(
    extractor: &dyn TextExtractor,
    path: &Path,
    progress_every: usize,
) -> Result<String> {
    let pages = extractor.extract_pages(path)?;
    tracing::info!("Processing {:?} ({} pages)", path, pages.page_count());

    let mut text = String::new();
    for (page_num, page) in pages.enumerate() {
        let page_text = page?;
        text.push(' ');
        text.push_str(&page_text);

        if progress_every > 0 && page_num > 0 && page_num % progress_every == 0 {
            tracing::info!("Processed {} pages of {:?}", page_num, path);
        }
    }

    Ok(text)
}

/// PDF text extractor backed by `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<PageStream> {
        let document = PdfDocument::load(path).map_err(|e| PmlensError::DocumentReadFailure {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        let page_count = page_numbers.len();
        let display_path = path.display().to_string();

        let pages = page_numbers.into_iter().map(move |page_number| {
            document
                .extract_text(&[page_number])
                .map_err(|e| PmlensError::DocumentReadFailure {
                    path: display_path.clone(),
                    reason: format!("page {page_number}: {e}"),
                })
        });

        Ok(PageStream::new(page_count, pages))
    }
}
