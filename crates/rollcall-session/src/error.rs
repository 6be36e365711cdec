use thiserror::Error;

/// Scanner activation failure. Recoverable: the session falls back to
/// ready and the operator may retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("scanner permission denied")]
    PermissionDenied,
    #[error("scan device busy or unavailable")]
    DeviceBusy,
    #[error("scanner unavailable: {0}")]
    Other(String),
}

/// An image-based decode attempt found no decodable code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no decodable code found in image")]
pub struct DecodeError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// A scan was requested before any guest list was loaded.
    #[error("no guest list loaded yet")]
    NoRegistry,
    #[error(transparent)]
    Capability(#[from] CapabilityError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The requested action is not legal in the current state.
    #[error("cannot {action} while {from}")]
    InvalidTransition { from: &'static str, action: &'static str },
}

pub type Result<T> = std::result::Result<T, SessionError>;
