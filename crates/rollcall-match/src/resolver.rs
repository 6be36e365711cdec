use tracing::debug;

use rollcall_model::{AttendeeRecord, Registry, ScanOutcome, UnmatchedScan};

use crate::canon::{canon, canon_str};

/// Resolve one decoded scan payload against the registry.
///
/// Records are visited in registry order and the first one that
/// qualifies wins; there is no ranking or scoring. Three layered rules
/// per record:
///
/// 1. exact equality of canon-ed identifier and payload;
/// 2. bidirectional substring between the two, tolerating scanners
///    that prefix, suffix or truncate payloads. Known trade-off: a
///    short identifier such as `"1"` will claim any payload containing
///    that digit. Deliberately left as-is rather than silently
///    tightened;
/// 3. full-text containment of the payload in the record's
///    `raw_content`, for registries built from unstructured document
///    text.
///
/// Never fails: an absent match is the `Unmatched` outcome, carrying
/// the context an operator needs to spot a systematic payload/list
/// format mismatch.
pub fn resolve(decoded: &str, registry: &Registry) -> ScanOutcome {
    let needle = canon_str(decoded);
    for record in registry.records() {
        if record_matches(record, &needle) {
            debug!(decoded, "scan matched a registry record");
            return ScanOutcome::Matched(record.clone());
        }
    }
    debug!(decoded, registry_size = registry.len(), "scan matched no record");
    ScanOutcome::Unmatched(UnmatchedScan {
        decoded: decoded.to_string(),
        canonical: needle,
        registry_size: registry.len(),
        sample_identifier: registry.sample_identifier().map(str::to_string),
    })
}

fn record_matches(record: &AttendeeRecord, needle: &str) -> bool {
    let identifier = canon(record.identifier());
    if record.identifier().is_none() && record.raw_content().is_none() {
        return false;
    }
    // Empty canon-ed values would make the substring rule vacuously
    // true; both sides must be non-empty for rules 1 and 2.
    if !identifier.is_empty() && !needle.is_empty() {
        if identifier == needle {
            return true;
        }
        if identifier.contains(needle) || needle.contains(identifier.as_str()) {
            return true;
        }
    }
    if !needle.is_empty()
        && let Some(content) = record.raw_content()
        && canon_str(content).contains(needle)
    {
        return true;
    }
    false
}
