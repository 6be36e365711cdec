use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The requested source kind is not one of the recognized kinds.
    #[error("unsupported source format: {0}")]
    UnsupportedFormat(String),
    /// A non-empty source yielded no usable rows.
    #[error("malformed table: {0}")]
    MalformedTable(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
