pub mod outcome;
pub mod record;
pub mod registry;

pub use outcome::{ScanOutcome, UnmatchedScan};
pub use record::{AttendeeRecord, FIELD_ATTENDEE_NAME, FIELD_DISPLAY_NAME, FIELD_RAW_CONTENT, IDENTIFIER_FIELDS};
pub use registry::Registry;
