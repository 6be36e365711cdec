use std::fmt;

use crate::record::AttendeeRecord;

/// Result of resolving one decoded scan payload against the registry.
///
/// Transient: the presentation layer consumes it once and the next
/// scan cycle discards it. Absence of a match is a normal outcome,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ScanOutcome {
    Matched(AttendeeRecord),
    Unmatched(UnmatchedScan),
}

impl ScanOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn matched_record(&self) -> Option<&AttendeeRecord> {
        match self {
            Self::Matched(record) => Some(record),
            Self::Unmatched(_) => None,
        }
    }
}

/// Diagnostic payload for a scan no record claimed.
///
/// Carries enough context for the operator to distinguish a genuinely
/// unregistered guest from a systematic format mismatch between the
/// badge payloads and the loaded list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnmatchedScan {
    /// Payload exactly as decoded.
    pub decoded: String,
    /// The decoded payload after canonicalization.
    pub canonical: String,
    /// Registry size at resolution time.
    pub registry_size: usize,
    /// Identifier of the first registry record, if it has one.
    pub sample_identifier: Option<String>,
}

impl fmt::Display for UnmatchedScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no match for scanned code {decoded:?} (normalized: {canonical:?}); \
             registry holds {size} record(s)",
            decoded = self.decoded,
            canonical = self.canonical,
            size = self.registry_size,
        )?;
        match &self.sample_identifier {
            Some(sample) => write!(f, ", first identifier looks like {sample:?}"),
            None => write!(f, ", first record carries no identifier field"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_diagnostic_names_all_context() {
        let diag = UnmatchedScan {
            decoded: "Z9".to_string(),
            canonical: "z9".to_string(),
            registry_size: 4,
            sample_identifier: Some("A100".to_string()),
        };
        let rendered = diag.to_string();
        assert!(rendered.contains("\"Z9\""));
        assert!(rendered.contains("\"z9\""));
        assert!(rendered.contains("4 record(s)"));
        assert!(rendered.contains("\"A100\""));
    }

    #[test]
    fn unmatched_diagnostic_without_sample_identifier() {
        let diag = UnmatchedScan {
            decoded: "Z9".to_string(),
            canonical: "z9".to_string(),
            registry_size: 1,
            sample_identifier: None,
        };
        assert!(diag.to_string().contains("no identifier field"));
    }
}
