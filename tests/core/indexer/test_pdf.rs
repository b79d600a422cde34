//! Text extraction from real PDF files built with lopdf

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pmlens::core::config::Config;
use pmlens::core::indexer::extractor::extract_text;
use pmlens::core::indexer::{PdfExtractor, TextExtractor};
use pmlens::core::services::{AnalysisRequest, Services};
use std::path::Path;
use tempfile::TempDir;

/// Write a PDF with one text line per page
fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id =
            doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

#[test]
fn test_pdf_extractor_reads_pages() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hello.pdf");
    write_pdf(&path, &["Hello project", "Second page"]);

    let stream = PdfExtractor.extract_pages(&path).unwrap();
    assert_eq!(stream.page_count(), 2);

    let text = extract_text(&PdfExtractor, &path, 50).unwrap();
    assert!(text.starts_with(' '));
    assert!(text.contains("Hello project"));
    assert!(text.contains("Second page"));
}

#[tokio::test]
async fn test_pdf_and_corrupt_file_in_one_run() {
    let library = TempDir::new().unwrap();
    write_pdf(&library.path().join("good.pdf"), &["Hello project"]);
    std::fs::write(library.path().join("broken.pdf"), "this is not a pdf").unwrap();

    let output = TempDir::new().unwrap();
    let mut config = Config::default();
    config.analysis.output_file = output.path().join("results.json");
    let services = Services::new(config);

    let outcome = services
        .run_analysis(AnalysisRequest {
            source_dir: Some(library.path().to_path_buf()),
            ..Default::default()
        })
        .await;

    assert!(outcome.is_success(), "{:?}", outcome.error);
    let metadata = &outcome.results.analysis_metadata;
    assert_eq!(metadata.files_found, 2);
    assert_eq!(metadata.documents_processed, 1);
    assert_eq!(metadata.documents_skipped.len(), 1);
    assert!(metadata.documents_skipped[0].file_path.ends_with("broken.pdf"));

    let book = &outcome.results.processed_books["good"];
    assert!(book.chapters.is_empty());
    assert!(book.topic_data.is_empty());
}
