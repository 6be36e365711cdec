use std::collections::BTreeSet;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use rollcall_model::{AttendeeRecord, ScanOutcome};

/// Columns shown in the preview table before truncation kicks in.
const MAX_PREVIEW_COLUMNS: usize = 8;
const MAX_CELL_CHARS: usize = 40;

pub fn print_outcome(outcome: &ScanOutcome, json: bool) {
    if json {
        match serde_json::to_string(outcome) {
            Ok(line) => println!("{line}"),
            Err(error) => eprintln!("error: serialize outcome: {error}"),
        }
        return;
    }
    match outcome {
        ScanOutcome::Matched(record) => {
            let name = record
                .display_name()
                .or_else(|| record.get("attendee_name"))
                .or_else(|| record.identifier())
                .unwrap_or("guest");
            match record.identifier() {
                Some(identifier) => println!("  ✓ checked in: {name} ({identifier})"),
                None => println!("  ✓ checked in: {name}"),
            }
        }
        ScanOutcome::Unmatched(diag) => println!("  ✗ {diag}"),
    }
}

pub fn print_preview(records: &[AttendeeRecord], limit: usize) {
    let shown = &records[..records.len().min(limit)];
    let mut columns: Vec<String> = Vec::new();
    let mut seen = BTreeSet::new();
    for record in shown {
        for name in record.field_names() {
            if seen.insert(name.to_string()) {
                columns.push(name.to_string());
            }
        }
    }
    let truncated_columns = columns.len() > MAX_PREVIEW_COLUMNS;
    columns.truncate(MAX_PREVIEW_COLUMNS);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_header(
        std::iter::once(header_cell("#"))
            .chain(columns.iter().map(|name| {
                if name.is_empty() {
                    header_cell("(no header)")
                } else {
                    header_cell(name)
                }
            }))
            .collect::<Vec<_>>(),
    );
    for (index, record) in shown.iter().enumerate() {
        let mut row = vec![Cell::new(index + 1)];
        for column in &columns {
            row.push(Cell::new(clip(record.get(column).unwrap_or(""))));
        }
        table.add_row(row);
    }
    println!("{table}");

    let matchable = records.iter().filter(|record| record.is_matchable()).count();
    println!(
        "{total} record(s), {matchable} matchable",
        total = records.len()
    );
    if records.len() > shown.len() {
        println!("(showing first {} rows)", shown.len());
    }
    if truncated_columns {
        println!("(showing first {MAX_PREVIEW_COLUMNS} columns)");
    }
}

fn clip(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_CHARS {
        value.to_string()
    } else {
        let clipped: String = value.chars().take(MAX_CELL_CHARS).collect();
        format!("{clipped}…")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
