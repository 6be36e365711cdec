use std::path::Path;

use crate::error::{IngestError, Result};

/// Ordered rows of ordered cells; the first row carries the headers.
pub type Sheet = Vec<Vec<String>>;

/// The four recognized guest-list source kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Delimited text with a header row (CSV and friends).
    Delimited,
    /// A spreadsheet workbook; only the first sheet is read.
    Sheet,
    /// Unstructured text extracted from a document, one string per page.
    Document,
    /// A block the operator pasted or typed by hand.
    FreeText,
}

impl SourceKind {
    /// Parse an operator-supplied kind name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "delimited" | "csv" | "table" => Ok(Self::Delimited),
            "sheet" | "spreadsheet" | "workbook" => Ok(Self::Sheet),
            "document" | "pages" => Ok(Self::Document),
            "free-text" | "freetext" | "text" => Ok(Self::FreeText),
            other => Err(IngestError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Guess the kind from a file extension.
    pub fn detect(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" | "tsv" => Ok(Self::Delimited),
            "xlsx" | "xls" | "ods" => Ok(Self::Sheet),
            "pdf" | "txt" => Ok(Self::Document),
            _ => Err(IngestError::UnsupportedFormat(format!(
                "unrecognized extension for {}",
                path.display()
            ))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Delimited => "delimited",
            Self::Sheet => "sheet",
            Self::Document => "document",
            Self::FreeText => "free-text",
        }
    }
}

/// A source kind together with its already-materialized payload.
///
/// Byte-level extraction (file reading, workbook parsing, PDF text
/// extraction) happens upstream; the normalizer only ever sees these
/// shapes.
#[derive(Debug, Clone)]
pub enum RawSource {
    Delimited(String),
    Workbook(Vec<Sheet>),
    DocumentPages(Vec<String>),
    FreeText(String),
}

impl RawSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Delimited(_) => SourceKind::Delimited,
            Self::Workbook(_) => SourceKind::Sheet,
            Self::DocumentPages(_) => SourceKind::Document,
            Self::FreeText(_) => SourceKind::FreeText,
        }
    }
}
