//! File text extraction for uploaded resume documents.

use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;

use cvsift_core::{Error, Result};

/// Supported file types for text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
}

impl FileType {
    /// Detect file type from extension. Anything else is unsupported.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Extract text content from raw file bytes.
///
/// PDF pages and DOCX paragraphs are joined by newline. No validation
/// beyond the extension gate; malformed files surface as
/// [`Error::Extraction`].
pub fn extract_text(bytes: &[u8], ext: &str) -> Result<String> {
    let file_type =
        FileType::from_extension(ext).ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

    match file_type {
        FileType::Pdf => extract_pdf(bytes),
        FileType::Docx => extract_docx(bytes),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| Error::Extraction(e.to_string()))
}

// DOCX paragraphs close with </w:p>; visible text lives in <w:t> runs.
static RUN_TEXT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").unwrap());

fn extract_docx(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::Extraction(format!("not a DOCX archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::Extraction(format!("missing word/document.xml: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::Extraction(format!("unreadable document.xml: {}", e)))?;

    // Empty paragraphs become blank lines; the education-section heuristic
    // depends on blank lines as section terminators.
    // The final split chunk is trailing XML (sectPr, document close), not
    // a paragraph.
    let chunks: Vec<&str> = xml.split("</w:p>").collect();
    let mut paragraphs = Vec::new();
    for para_xml in &chunks[..chunks.len() - 1] {
        let mut text = String::new();
        for cap in RUN_TEXT_RE.captures_iter(para_xml) {
            text.push_str(&unescape_xml(&cap[1]));
        }
        paragraphs.push(text);
    }

    Ok(paragraphs.join("\n"))
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
