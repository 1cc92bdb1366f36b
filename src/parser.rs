use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::data::models::ReadError;

const DOCUMENT_XML: &str = "word/document.xml";

/// Recognised word list file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    PlainText,
    Document,
}

impl SourceKind {
    /// Picks the kind from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, ReadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(SourceKind::PlainText),
            "docx" => Ok(SourceKind::Document),
            _ => Err(ReadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Reads the ordered list of words from a `.txt` or `.docx` file.
///
/// Blank entries are dropped; duplicates and case are kept as they appear.
pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<String>, ReadError> {
    let path = path.as_ref();

    match SourceKind::from_path(path)? {
        SourceKind::PlainText => {
            let content = fs::read_to_string(path)?;
            Ok(parse_lines(&content))
        }
        SourceKind::Document => {
            let mut archive = ZipArchive::new(BufReader::new(File::open(path)?))?;
            let mut xml = String::new();
            archive
                .by_name(DOCUMENT_XML)?
                .read_to_string(&mut xml)
                .map_err(|e| ReadError::Parse(format!("Unreadable {}: {}", DOCUMENT_XML, e)))?;
            parse_paragraphs(&xml)
        }
    }
}

pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collects the trimmed text of every paragraph directly under `w:body`.
///
/// Paragraphs inside tables, text boxes or content controls are not body
/// paragraphs and contribute nothing, including to the paragraph they sit in.
pub fn parse_paragraphs(xml: &str) -> Result<Vec<String>, ReadError> {
    let mut reader = Reader::from_str(xml);
    let mut words = Vec::new();
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut paragraph: Option<String> = None;
    let mut paragraph_depth = 0;
    let mut nested = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                match name.as_slice() {
                    b"w:p" if paragraph.is_some() => nested += 1,
                    b"w:p" if open.last().is_some_and(|parent| parent == b"w:body") => {
                        paragraph = Some(String::new());
                        paragraph_depth = open.len();
                    }
                    b"w:t" => in_text = paragraph.is_some() && nested == 0,
                    _ => {}
                }
                open.push(name);
            }
            Event::End(e) => {
                open.pop();
                match e.name().as_ref() {
                    b"w:p" if nested > 0 => nested -= 1,
                    b"w:p" if open.len() == paragraph_depth => {
                        if let Some(text) = paragraph.take() {
                            let text = text.trim();
                            if !text.is_empty() {
                                words.push(text.to_string());
                            }
                        }
                    }
                    b"w:t" => in_text = false,
                    _ => {}
                }
            }
            Event::Text(t) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ReadError::Parse(format!("Invalid text run: {}", e)))?;
                if let Some(paragraph) = paragraph.as_mut() {
                    paragraph.push_str(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    log::debug!("Extracted {} paragraphs from document", words.len());
    Ok(words)
}
