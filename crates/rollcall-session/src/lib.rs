pub mod advisory;
pub mod capability;
pub mod controller;
pub mod error;

pub use capability::{ImageDecoder, ScanCapability};
pub use controller::{SessionController, SessionState};
pub use error::{CapabilityError, DecodeError, SessionError};
