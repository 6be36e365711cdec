//! Materialize a guest-list file into the shape the normalizer consumes.
//!
//! Byte-level extraction stops here: delimited and document sources are
//! read as text, while workbook and PDF extraction are expected to have
//! happened upstream (export the first sheet as CSV, or the document
//! text as `.txt`).

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use rollcall_ingest::{RawSource, SourceKind};

/// Form feed, the conventional page separator in extracted document text.
const PAGE_SEPARATOR: char = '\u{000C}';

/// Resolve the source kind: an explicit `--kind` wins, otherwise the
/// file extension decides.
pub fn resolve_kind(path: &Path, explicit: Option<&str>) -> Result<SourceKind> {
    match explicit {
        Some(name) => Ok(SourceKind::parse(name)?),
        None if path == Path::new("-") => Ok(SourceKind::FreeText),
        None => Ok(SourceKind::detect(path)?),
    }
}

/// Read the file (or stdin for `-`) into a [`RawSource`] of the given kind.
pub fn materialize(path: &Path, kind: SourceKind) -> Result<RawSource> {
    match kind {
        SourceKind::Delimited => Ok(RawSource::Delimited(read_input(path)?)),
        SourceKind::Document => {
            let text = read_input(path)?;
            if path.extension().and_then(|ext| ext.to_str()) == Some("pdf") {
                bail!(
                    "PDF text extraction happens upstream; extract the text to a .txt file \
                     (one form feed per page break) and load that instead"
                );
            }
            Ok(RawSource::DocumentPages(split_pages(&text)))
        }
        SourceKind::FreeText => Ok(RawSource::FreeText(read_input(path)?)),
        SourceKind::Sheet => bail!(
            "workbook extraction happens upstream; export the first sheet as CSV and load \
             that with --kind delimited"
        ),
    }
}

/// One string per page; a file without form feeds is a single page.
pub fn split_pages(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(PAGE_SEPARATOR).map(str::to_string).collect()
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("read pasted text from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
    }
}
