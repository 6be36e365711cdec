use crate::record::AttendeeRecord;

/// The in-memory guest list for the current session.
///
/// Insertion order is source order and duplicates are permitted; the
/// resolver walks records left to right and the first match wins.
/// Each successful ingestion replaces the whole collection, never
/// merges into it, so a half-parsed source can never corrupt a
/// previously loaded list.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Registry {
    records: Vec<AttendeeRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry wholesale with a freshly normalized list.
    pub fn install(&mut self, records: Vec<AttendeeRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AttendeeRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&AttendeeRecord> {
        self.records.get(index)
    }

    /// Identifier of the first record, used by the unmatched-scan
    /// diagnostic so an operator can spot a systematic format mismatch.
    pub fn sample_identifier(&self) -> Option<&str> {
        self.records.first().and_then(AttendeeRecord::identifier)
    }
}
