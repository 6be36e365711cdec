use csv::ReaderBuilder;
use tracing::debug;

use rollcall_model::{AttendeeRecord, FIELD_ATTENDEE_NAME, FIELD_RAW_CONTENT, IDENTIFIER_FIELDS};

use crate::error::{IngestError, Result};
use crate::source::{RawSource, Sheet};

/// Name given to guests in the bare-ID free-text fallback.
const FALLBACK_ATTENDEE_NAME: &str = "Participant";

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Convert one materialized source into an ordered list of attendee
/// records. Pure with respect to any registry; the caller installs the
/// result on success.
pub fn normalize(source: &RawSource) -> Result<Vec<AttendeeRecord>> {
    let records = match source {
        RawSource::Delimited(content) => normalize_delimited(content)?,
        RawSource::Workbook(sheets) => normalize_workbook(sheets)?,
        RawSource::DocumentPages(pages) => normalize_document(pages)?,
        RawSource::FreeText(block) => normalize_free_text(block)?,
    };
    debug!(kind = source.kind().name(), records = records.len(), "normalized source");
    Ok(records)
}

fn normalize_delimited(content: &str) -> Result<Vec<AttendeeRecord>> {
    let rows = read_delimited_rows(content)?;
    if rows.is_empty() {
        return Err(IngestError::MalformedTable("delimited source contains no rows".to_string()));
    }
    Ok(records_from_rows(&rows))
}

fn normalize_workbook(sheets: &[Sheet]) -> Result<Vec<AttendeeRecord>> {
    // Sheet selection is fixed: the first sheet is the guest list and
    // any further sheets are ignored.
    let Some(first) = sheets.first() else {
        return Err(IngestError::MalformedTable("workbook contains no sheets".to_string()));
    };
    if sheets.len() > 1 {
        debug!(ignored = sheets.len() - 1, "workbook has extra sheets, reading the first only");
    }
    let rows: Vec<Vec<String>> = first
        .iter()
        .map(|row| row.iter().map(|cell| normalize_cell(cell)).collect())
        .filter(|row: &Vec<String>| !row.iter().all(String::is_empty))
        .collect();
    if rows.is_empty() {
        return Err(IngestError::MalformedTable("first sheet contains no rows".to_string()));
    }
    Ok(records_from_rows(&rows))
}

fn normalize_document(pages: &[String]) -> Result<Vec<AttendeeRecord>> {
    if pages.is_empty() {
        return Err(IngestError::MalformedTable("document yielded no pages of text".to_string()));
    }
    // No attempt to recover rows or columns from page text; the
    // resolver compensates with full-text containment.
    Ok(pages
        .iter()
        .map(|page| AttendeeRecord::from_pairs([(FIELD_RAW_CONTENT, page.as_str())]))
        .collect())
}

fn normalize_free_text(block: &str) -> Result<Vec<AttendeeRecord>> {
    if block.trim().is_empty() {
        return Err(IngestError::MalformedTable("pasted text is blank".to_string()));
    }
    if looks_tabular(block) {
        return normalize_delimited(block);
    }
    // Many operators paste a bare list of IDs with no header; give each
    // line the identifier field the resolver already knows to probe.
    let identifier_field = IDENTIFIER_FIELDS[0];
    let records: Vec<AttendeeRecord> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            AttendeeRecord::from_pairs([
                (identifier_field, line),
                (FIELD_ATTENDEE_NAME, FALLBACK_ATTENDEE_NAME),
            ])
        })
        .collect();
    if records.is_empty() {
        return Err(IngestError::MalformedTable("pasted text has no usable lines".to_string()));
    }
    Ok(records)
}

/// Predicate behind the free-text auto-detection: the block is treated
/// as a table when it parses with more than one distinct field name and
/// at least one data row. Anything else falls back to one-ID-per-line.
pub fn looks_tabular(block: &str) -> bool {
    let Ok(rows) = read_delimited_rows(block) else {
        return false;
    };
    let Some(headers) = rows.first() else {
        return false;
    };
    let distinct_fields = headers
        .iter()
        .filter(|name| !name.is_empty())
        .collect::<std::collections::BTreeSet<_>>()
        .len();
    distinct_fields > 1 && !records_from_rows(&rows).is_empty()
}

fn read_delimited_rows(content: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

/// First row supplies the field names (possibly empty names; a missing
/// header row is accepted as-is), each remaining row becomes one record.
fn records_from_rows(rows: &[Vec<String>]) -> Vec<AttendeeRecord> {
    let Some((headers, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    let mut records = Vec::with_capacity(data_rows.len());
    for row in data_rows {
        let mut record = AttendeeRecord::new();
        for (index, header) in headers.iter().enumerate() {
            let value = row.get(index).map(String::as_str).unwrap_or("");
            if !value.is_empty() {
                record.insert(header.clone(), value);
            }
        }
        if !record.is_empty() {
            records.push(record);
        }
    }
    records
}
