use std::collections::BTreeMap;

/// Identifier fields probed in priority order when hunting for a
/// registration code. Guest lists arrive with inconsistent key casing,
/// so the probe is an explicit table rather than a single canonical key.
pub const IDENTIFIER_FIELDS: [&str; 4] = ["registration_id", "RegistrationID", "registration_ID", "id"];

/// Full page text for records built from unstructured document sources.
pub const FIELD_RAW_CONTENT: &str = "raw_content";

/// Preferred field for presenting a matched guest.
pub const FIELD_DISPLAY_NAME: &str = "display_name";

/// Field filled by the free-text list fallback when only bare IDs were pasted.
pub const FIELD_ATTENDEE_NAME: &str = "attendee_name";

/// One normalized guest-list entry.
///
/// There is no fixed schema: field names come from whatever headers the
/// source carried, and vary row to row. A record built from document
/// text has the single field [`FIELD_RAW_CONTENT`] instead of discrete
/// columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttendeeRecord {
    fields: BTreeMap<String, String>,
}

impl AttendeeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { fields }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Candidate registration identifier, probing [`IDENTIFIER_FIELDS`]
    /// in priority order and returning the first present value.
    pub fn identifier(&self) -> Option<&str> {
        IDENTIFIER_FIELDS.iter().find_map(|field| self.get(field))
    }

    pub fn raw_content(&self) -> Option<&str> {
        self.get(FIELD_RAW_CONTENT)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.get(FIELD_DISPLAY_NAME)
    }

    /// A record with neither an identifier field nor raw content can
    /// never satisfy the resolver; it stays in the registry and is
    /// counted, but every scan skips it.
    pub fn is_matchable(&self) -> bool {
        self.identifier().is_some() || self.raw_content().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
