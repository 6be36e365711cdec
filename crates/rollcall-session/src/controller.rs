use tracing::{debug, info, warn};

use rollcall_match::resolve;
use rollcall_model::{AttendeeRecord, Registry, ScanOutcome};

use crate::capability::{ImageDecoder, ScanCapability};
use crate::error::{Result, SessionError};

/// Where the check-in session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No guest list loaded yet.
    Idle,
    /// Guest list loaded, scanner inactive.
    Ready,
    /// Scanner active, awaiting exactly one decode.
    Scanning,
    /// Awaiting operator acknowledgment of the last outcome.
    Resolved(ScanOutcome),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Scanning => "scanning",
            Self::Resolved(_) => "resolved",
        }
    }
}

/// Sequences scanner activation and deactivation around each match
/// attempt. Owns the registry and the session state; ingestion and
/// matching themselves stay pure.
#[derive(Debug)]
pub struct SessionController<C: ScanCapability> {
    state: SessionState,
    registry: Registry,
    capability: C,
}

impl<C: ScanCapability> SessionController<C> {
    pub fn new(capability: C) -> Self {
        Self {
            state: SessionState::Idle,
            registry: Registry::new(),
            capability,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Install a freshly normalized guest list, replacing any previous
    /// one wholesale. An empty list is rejected without touching the
    /// registry already in place.
    pub fn ingest(&mut self, records: Vec<AttendeeRecord>) -> Result<()> {
        if records.is_empty() {
            return Err(SessionError::InvalidTransition {
                from: self.state.name(),
                action: "install an empty guest list",
            });
        }
        if matches!(self.state, SessionState::Scanning) {
            self.capability.deactivate();
        }
        info!(records = records.len(), "guest list installed");
        self.registry.install(records);
        self.state = SessionState::Ready;
        Ok(())
    }

    /// Activate the scanner. A no-op while already scanning; the
    /// capability is not acquired a second time.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            SessionState::Idle => Err(SessionError::NoRegistry),
            SessionState::Scanning => {
                debug!("start requested while scanning, ignoring");
                Ok(())
            }
            SessionState::Ready | SessionState::Resolved(_) => self.activate(),
        }
    }

    /// Acknowledge the last outcome and go straight back to scanning
    /// for the next guest, without passing through ready.
    pub fn acknowledge(&mut self) -> Result<()> {
        match self.state {
            SessionState::Resolved(_) => self.activate(),
            _ => Err(SessionError::InvalidTransition {
                from: self.state.name(),
                action: "acknowledge",
            }),
        }
    }

    /// Deliver the single decoded payload for the current activation.
    pub fn handle_decode(&mut self, decoded: &str) -> Result<&ScanOutcome> {
        if !matches!(self.state, SessionState::Scanning) {
            return Err(SessionError::InvalidTransition {
                from: self.state.name(),
                action: "deliver a decode",
            });
        }
        // Decode-then-stop: the device is released before resolution,
        // on this and every other path out of scanning.
        self.capability.deactivate();
        let outcome = resolve(decoded, &self.registry);
        self.state = SessionState::Resolved(outcome);
        match &self.state {
            SessionState::Resolved(outcome) => Ok(outcome),
            _ => unreachable!("state was just set to resolved"),
        }
    }

    /// Decode a still image through the same resolution path as a live
    /// scan. A failed decode releases the device and returns the
    /// session to ready.
    pub fn scan_image<D: ImageDecoder>(&mut self, decoder: &D, image: &[u8]) -> Result<&ScanOutcome> {
        if !matches!(self.state, SessionState::Scanning) {
            return Err(SessionError::InvalidTransition {
                from: self.state.name(),
                action: "decode an image",
            });
        }
        match decoder.decode(image) {
            Ok(decoded) => self.handle_decode(&decoded),
            Err(error) => {
                warn!("image decode failed");
                self.capability.deactivate();
                self.state = SessionState::Ready;
                Err(error.into())
            }
        }
    }

    /// Manual stop without a decode.
    pub fn cancel(&mut self) -> Result<()> {
        match self.state {
            SessionState::Scanning => {
                self.capability.deactivate();
                self.state = SessionState::Ready;
                Ok(())
            }
            _ => Err(SessionError::InvalidTransition {
                from: self.state.name(),
                action: "cancel",
            }),
        }
    }

    /// Drop the guest list and return to idle. Idempotent; releases
    /// the device when a scan was in flight.
    pub fn reset(&mut self) {
        if matches!(self.state, SessionState::Scanning) {
            self.capability.deactivate();
        }
        self.registry.clear();
        self.state = SessionState::Idle;
        info!("session reset");
    }

    fn activate(&mut self) -> Result<()> {
        match self.capability.activate() {
            Ok(()) => {
                debug!("scanner activated");
                self.state = SessionState::Scanning;
                Ok(())
            }
            Err(error) => {
                // Activation failures never strand the session; the
                // operator lands back on ready and may retry.
                warn!(%error, "scanner activation failed");
                self.state = SessionState::Ready;
                Err(error.into())
            }
        }
    }
}
