pub mod error;
pub mod normalize;
pub mod source;

pub use error::IngestError;
pub use normalize::{looks_tabular, normalize};
pub use source::{RawSource, Sheet, SourceKind};
