//! Plain-text extraction from .docx source documents.
//!
//! A .docx file is a ZIP container whose main text lives in
//! `word/document.xml` (WordprocessingML). This module implements the
//! one contract the pipeline depends on: given the binary document,
//! return its text content. Paragraphs are separated by blank lines so
//! the line-oriented extraction regexes see one paragraph per line.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use roxmltree::{Document, Node};

use crate::error::{PreprocessError, Result};

/// Path of the main document part inside the container.
const DOCUMENT_PART: &str = "word/document.xml";

/// Read a .docx file and extract its plain text.
///
/// A missing file is a fatal condition reported as
/// [`PreprocessError::InputNotFound`].
pub fn extract_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PreprocessError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    extract_text_from_bytes(&bytes)
}

/// Extract plain text from an in-memory .docx document.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    let doc = Document::parse(&xml)?;
    Ok(document_text(&doc))
}

/// Collect paragraph texts from a parsed WordprocessingML document.
///
/// Each `<w:p>` becomes one line; paragraphs are joined with blank
/// lines, matching the raw-text output the extraction rules target.
fn document_text(doc: &Document<'_>) -> String {
    let paragraphs: Vec<String> = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "p")
        .map(paragraph_text)
        .collect();

    paragraphs.join("\n\n")
}

/// Flatten one paragraph's runs into a single line of text.
fn paragraph_text(p: Node<'_, '_>) -> String {
    let mut text = String::new();

    for node in p.descendants() {
        if !node.is_element() {
            continue;
        }
        match node.tag_name().name() {
            "t" => {
                if let Some(t) = node.text() {
                    text.push_str(t);
                }
            }
            "tab" => text.push('\t'),
            "br" => text.push('\n'),
            _ => {}
        }
    }

    text
}
