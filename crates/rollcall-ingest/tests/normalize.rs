use rollcall_ingest::{IngestError, RawSource, normalize};

#[test]
fn delimited_table_keeps_header_names_and_source_order() {
    let source = RawSource::Delimited("registration_id,display_name\nA100,Alice\nA101,Bob\n".to_string());
    let records = normalize(&source).expect("normalize");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("registration_id"), Some("A100"));
    assert_eq!(records[0].display_name(), Some("Alice"));
    assert_eq!(records[1].display_name(), Some("Bob"));
}

#[test]
fn delimited_table_produces_row_count_minus_one_records() {
    let source = RawSource::Delimited("id,name\n1,a\n2,b\n3,c\n4,d\n".to_string());
    let records = normalize(&source).expect("normalize");
    assert_eq!(records.len(), 4);
}

#[test]
fn delimited_table_skips_blank_rows() {
    let source = RawSource::Delimited("id,name\n1,a\n,,\n\n2,b\n".to_string());
    let records = normalize(&source).expect("normalize");
    assert_eq!(records.len(), 2);
}

#[test]
fn empty_delimited_input_is_malformed() {
    let source = RawSource::Delimited(String::new());
    let error = normalize(&source).expect_err("empty input");
    assert!(matches!(error, IngestError::MalformedTable(_)));
}

#[test]
fn header_only_table_yields_no_records_without_error() {
    let source = RawSource::Delimited("registration_id,display_name\n".to_string());
    let records = normalize(&source).expect("normalize");
    assert!(records.is_empty());
}

#[test]
fn workbook_reads_first_sheet_only() {
    let first = vec![
        vec!["registration_id".to_string(), "display_name".to_string()],
        vec!["A100".to_string(), "Alice".to_string()],
    ];
    let second = vec![
        vec!["registration_id".to_string()],
        vec!["IGNORED".to_string()],
    ];
    let source = RawSource::Workbook(vec![first, second]);
    let records = normalize(&source).expect("normalize");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("registration_id"), Some("A100"));
}

#[test]
fn empty_workbook_is_malformed() {
    let error = normalize(&RawSource::Workbook(Vec::new())).expect_err("no sheets");
    assert!(matches!(error, IngestError::MalformedTable(_)));
}

#[test]
fn document_pages_become_raw_content_records() {
    let source = RawSource::DocumentPages(vec![
        "Guest A999 attended the gala.".to_string(),
        "Second page with B123.".to_string(),
    ]);
    let records = normalize(&source).expect("normalize");
    assert_eq!(records.len(), 2);
    assert!(records[0].identifier().is_none());
    assert_eq!(records[0].raw_content(), Some("Guest A999 attended the gala."));
}

#[test]
fn free_text_with_header_uses_table_semantics() {
    let source = RawSource::FreeText("registration_id,display_name\nA100,Alice\n".to_string());
    let records = normalize(&source).expect("normalize");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name(), Some("Alice"));
}

#[test]
fn free_text_bare_id_list_falls_back_to_one_record_per_line() {
    let source = RawSource::FreeText("A100\nA101\n\n  A102  \n".to_string());
    let records = normalize(&source).expect("normalize");
    assert_eq!(records.len(), 3);
    for (record, expected) in records.iter().zip(["A100", "A101", "A102"]) {
        assert_eq!(record.identifier(), Some(expected));
        assert_eq!(record.get("attendee_name"), Some("Participant"));
    }
}

#[test]
fn blank_free_text_is_malformed() {
    let error = normalize(&RawSource::FreeText("  \n \n".to_string())).expect_err("blank");
    assert!(matches!(error, IngestError::MalformedTable(_)));
}

#[test]
fn cells_are_trimmed_and_bom_stripped() {
    let source = RawSource::Delimited("\u{feff}registration_id,display_name\n  A100 , Alice \n".to_string());
    let records = normalize(&source).expect("normalize");
    assert_eq!(records[0].get("registration_id"), Some("A100"));
    assert_eq!(records[0].display_name(), Some("Alice"));
}
