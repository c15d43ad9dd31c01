//! Printable PDF document export of code records.
//!
//! Layout mirrors the table exports: a title line, a dashed separator, then a
//! three-line block per record followed by a blank line. Text is set in
//! Courier at fixed line positions from the top margin. Unlike the historical
//! exporter, output paginates: once the baseline would drop below the bottom
//! margin a new page starts instead of truncating the overflow.

use std::io::Cursor;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};

use sdmx_model::CodeRecord;

use crate::delimited::{ENGLISH, FRENCH, MISSING_NAME};
use crate::error::Result;
use crate::latin1::encode_latin1;

/// Title line of the generated document.
pub const DOCUMENT_TITLE: &str = "Codelist Details";

// US Letter geometry, in points.
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN_LEFT: i64 = 50;
const TOP_BASELINE: i64 = 750;
const BOTTOM_MARGIN: i64 = 50;
const FONT_SIZE: i64 = 10;
const LEADING: i64 = 12;
const SEPARATOR_WIDTH: usize = 50;

/// Text lines that fit between the top baseline and the bottom margin.
const LINES_PER_PAGE: usize = ((TOP_BASELINE - BOTTOM_MARGIN) / LEADING) as usize + 1;

/// Render records as a paginated PDF document.
///
/// An empty record sequence yields a single page carrying only the title and
/// separator.
pub fn to_printable_document(records: &[CodeRecord]) -> Result<Vec<u8>> {
    let lines = document_lines(records);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_lines in lines.chunks(LINES_PER_PAGE) {
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            page_content(page_lines).encode()?,
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Cursor::new(Vec::new());
    doc.save_to(&mut buffer)?;
    let data = buffer.into_inner();

    tracing::debug!(
        records = records.len(),
        pages = page_count,
        bytes = data.len(),
        "encoded printable document export"
    );
    Ok(data)
}

/// Content stream for one page of text lines.
fn page_content(lines: &[String]) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![MARGIN_LEFT.into(), TOP_BASELINE.into()]),
    ];
    for line in lines {
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(encode_latin1(line), StringFormat::Literal)],
        ));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

/// Flatten records into the document's text lines.
fn document_lines(records: &[CodeRecord]) -> Vec<String> {
    let mut lines = vec![DOCUMENT_TITLE.to_string(), "-".repeat(SEPARATOR_WIDTH)];
    for record in records {
        lines.push(format!("Code ID: {}", record.id));
        lines.push(format!(
            "Name (en): {}",
            record.names.get(ENGLISH).unwrap_or(MISSING_NAME)
        ));
        lines.push(format!(
            "Name (fr): {}",
            record.names.get(FRENCH).unwrap_or(MISSING_NAME)
        ));
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> CodeRecord {
        CodeRecord {
            id: id.to_string(),
            names: [("en", "Name"), ("fr", "Nom")].into_iter().collect(),
        }
    }

    fn page_count(data: &[u8]) -> usize {
        // Content streams are written uncompressed, one per page.
        data.windows(b"/Contents".len())
            .filter(|window| *window == b"/Contents")
            .count()
    }

    #[test]
    fn output_is_a_pdf() {
        let data = to_printable_document(&[record("F")]).expect("export");
        assert!(data.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn record_lines_appear_in_the_content_stream() {
        let data = to_printable_document(&[record("F")]).expect("export");
        let needle = b"Code ID: F";
        assert!(data.windows(needle.len()).any(|window| window == needle));
    }

    #[test]
    fn empty_sequence_yields_a_single_title_page() {
        let data = to_printable_document(&[]).expect("export");
        assert_eq!(page_count(&data), 1);
        let needle = DOCUMENT_TITLE.as_bytes();
        assert!(data.windows(needle.len()).any(|window| window == needle));
    }

    #[test]
    fn overflow_starts_a_new_page() {
        // 2 header lines + 4 lines per record; 30 records need 122 lines,
        // which is three pages at 59 lines each.
        let records: Vec<CodeRecord> = (0..30).map(|i| record(&format!("C{i:03}"))).collect();
        let data = to_printable_document(&records).expect("export");
        assert_eq!(LINES_PER_PAGE, 59);
        assert_eq!(page_count(&data), 3);
    }
}
