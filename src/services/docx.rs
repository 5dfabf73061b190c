use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;
use zip::ZipArchive;

use super::extractor::ExtractError;

/// Path of the main document part inside the DOCX container.
const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the text of every paragraph of a DOCX file, in document order,
/// appending a newline after each paragraph.
///
/// A DOCX file is a ZIP archive; the readable content lives in
/// `word/document.xml` as `<w:p>` paragraphs whose text is split across
/// `<w:t>` runs. A file that is not a ZIP archive, lacks the document part,
/// or carries unparseable XML is an error.
pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let cursor = Cursor::new(bytes);
    let mut archive = ZipArchive::new(cursor)?;

    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    let paragraphs = paragraph_texts(&xml)?;
    debug!(paragraphs = paragraphs.len(), "Parsed DOCX document");

    let mut text = String::new();
    for paragraph in paragraphs {
        text.push_str(&paragraph);
        text.push('\n');
    }

    Ok(text)
}

/// Walk the document XML and collect one string per `<w:p>` paragraph.
///
/// Only text inside `<w:t>` runs counts; `<w:tab/>` becomes a tab and
/// `<w:br/>`/`<w:cr/>` become newlines, matching how word processors render
/// them.
fn paragraph_texts(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"t" if in_paragraph => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                // A self-closing <w:p/> is an empty spacer paragraph; it
                // still contributes its newline.
                b"p" => paragraphs.push(String::new()),
                b"tab" if in_paragraph => current.push('\t'),
                b"br" | b"cr" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                current.push_str(&e.unescape()?);
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"p" if in_paragraph => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::DocxXml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(inner: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{}</w:body></w:document>"#,
            inner
        )
    }

    #[test]
    fn collects_paragraphs_in_order() {
        let xml = body(
            "<w:p><w:r><w:t>first</w:t></w:r></w:p>\
             <w:p><w:r><w:t>second</w:t></w:r></w:p>",
        );
        let paragraphs = paragraph_texts(&xml).unwrap();
        assert_eq!(paragraphs, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn joins_runs_within_a_paragraph() {
        let xml = body("<w:p><w:r><w:t>Go, </w:t></w:r><w:r><w:t>Rust</w:t></w:r></w:p>");
        let paragraphs = paragraph_texts(&xml).unwrap();
        assert_eq!(paragraphs, vec!["Go, Rust".to_string()]);
    }

    #[test]
    fn renders_tabs_and_breaks() {
        let xml = body("<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>");
        let paragraphs = paragraph_texts(&xml).unwrap();
        assert_eq!(paragraphs, vec!["a\tb\nc".to_string()]);
    }

    #[test]
    fn empty_paragraph_yields_empty_string() {
        let xml = body("<w:p/><w:p><w:r><w:t>x</w:t></w:r></w:p>");
        let paragraphs = paragraph_texts(&xml).unwrap();
        assert_eq!(paragraphs, vec!["".to_string(), "x".to_string()]);
    }

    #[test]
    fn spacer_paragraph_keeps_its_place_between_neighbors() {
        let xml = body(
            "<w:p><w:r><w:t>a</w:t></w:r></w:p>\
             <w:p/>\
             <w:p><w:r><w:t>b</w:t></w:r></w:p>",
        );
        let paragraphs = paragraph_texts(&xml).unwrap();
        assert_eq!(
            paragraphs,
            vec!["a".to_string(), "".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn unknown_entity_is_a_parse_error() {
        let xml = body("<w:p><w:r><w:t>bad &nosuchentity; text</w:t></w:r></w:p>");
        assert!(paragraph_texts(&xml).is_err());
    }

    #[test]
    fn unescapes_entities() {
        let xml = body("<w:p><w:r><w:t>AT&amp;T</w:t></w:r></w:p>");
        let paragraphs = paragraph_texts(&xml).unwrap();
        assert_eq!(paragraphs, vec!["AT&T".to_string()]);
    }

    #[test]
    fn ignores_text_outside_runs() {
        // Field instructions and properties carry text too, but only w:t
        // content is document text.
        let xml = body(
            "<w:p><w:pPr><w:instrText>PAGEREF</w:instrText></w:pPr>\
             <w:r><w:t>visible</w:t></w:r></w:p>",
        );
        let paragraphs = paragraph_texts(&xml).unwrap();
        assert_eq!(paragraphs, vec!["visible".to_string()]);
    }
}
