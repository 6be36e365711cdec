use crate::error::{CapabilityError, DecodeError};

/// Seam for the external scan device (camera, keyboard-wedge scanner).
///
/// The controller guarantees at most one activation is outstanding and
/// that every activation gets a deactivation attempt on every path out
/// of the scanning state. Implementations deliver exactly one decoded
/// payload per activation, back through
/// [`SessionController::handle_decode`](crate::SessionController::handle_decode).
pub trait ScanCapability {
    /// Acquire the device and start waiting for one decode.
    fn activate(&mut self) -> Result<(), CapabilityError>;

    /// Release the device. Must tolerate being called when the device
    /// was never acquired.
    fn deactivate(&mut self);
}

/// Synchronous decoder for still images, for operators who photograph
/// a badge instead of scanning live. Shares the live-decode resolution
/// path.
pub trait ImageDecoder {
    fn decode(&self, image: &[u8]) -> Result<String, DecodeError>;
}
