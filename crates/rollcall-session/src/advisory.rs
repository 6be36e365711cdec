//! Plain-text operator advisories.
//!
//! Presentation renders these however it likes, but the content is
//! part of the engine's contract: each message must name the facts an
//! operator needs to act.

use crate::error::CapabilityError;

/// One-time caveat shown after loading a document-text source:
/// matching is a containment check across whole pages, not an
/// exact-record lookup.
pub fn document_text_caveat() -> &'static str {
    "This list was loaded from document text. Scans are matched by \
     searching each page for the scanned code, so a code that merely \
     appears anywhere on a page counts as a match."
}

/// Shown when scanner activation fails; the session stays ready.
pub fn activation_failure(error: &CapabilityError) -> String {
    format!("Could not start the scanner ({error}). Check camera permissions or close other apps using it, then try again.")
}

/// Shown when an image-based decode finds no code.
pub fn decode_failure() -> &'static str {
    "No QR code could be read from that image. Try a sharper photo or scan the badge live."
}
