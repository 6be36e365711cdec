use std::cell::RefCell;
use std::rc::Rc;

use rollcall_model::AttendeeRecord;
use rollcall_session::{
    CapabilityError, DecodeError, ImageDecoder, ScanCapability, SessionController, SessionError,
    SessionState,
};

/// Records activation traffic and optionally fails the next activation.
#[derive(Debug, Default)]
struct FakeScanner {
    log: Rc<RefCell<ScannerLog>>,
}

#[derive(Debug, Default)]
struct ScannerLog {
    activations: usize,
    deactivations: usize,
    fail_next: bool,
}

impl FakeScanner {
    fn with_log() -> (Self, Rc<RefCell<ScannerLog>>) {
        let log = Rc::new(RefCell::new(ScannerLog::default()));
        (
            Self {
                log: Rc::clone(&log),
            },
            log,
        )
    }
}

impl ScanCapability for FakeScanner {
    fn activate(&mut self) -> Result<(), CapabilityError> {
        let mut log = self.log.borrow_mut();
        if log.fail_next {
            log.fail_next = false;
            return Err(CapabilityError::DeviceBusy);
        }
        log.activations += 1;
        Ok(())
    }

    fn deactivate(&mut self) {
        self.log.borrow_mut().deactivations += 1;
    }
}

struct FixedDecoder(Option<&'static str>);

impl ImageDecoder for FixedDecoder {
    fn decode(&self, _image: &[u8]) -> Result<String, DecodeError> {
        self.0.map(str::to_string).ok_or(DecodeError)
    }
}

fn guest_list() -> Vec<AttendeeRecord> {
    vec![
        AttendeeRecord::from_pairs([("registration_id", "A100"), ("display_name", "Alice")]),
        AttendeeRecord::from_pairs([("registration_id", "A101"), ("display_name", "Bob")]),
    ]
}

fn ready_controller() -> (SessionController<FakeScanner>, Rc<RefCell<ScannerLog>>) {
    let (scanner, log) = FakeScanner::with_log();
    let mut controller = SessionController::new(scanner);
    controller.ingest(guest_list()).expect("ingest");
    (controller, log)
}

#[test]
fn full_check_in_cycle() {
    let (mut controller, log) = ready_controller();
    assert_eq!(controller.state(), &SessionState::Ready);

    controller.start().expect("start");
    assert_eq!(controller.state(), &SessionState::Scanning);

    let outcome = controller.handle_decode("a100").expect("decode");
    let record = outcome.matched_record().expect("match");
    assert_eq!(record.display_name(), Some("Alice"));
    assert!(matches!(controller.state(), SessionState::Resolved(_)));

    // Acknowledge goes straight back to scanning, skipping ready.
    controller.acknowledge().expect("acknowledge");
    assert_eq!(controller.state(), &SessionState::Scanning);

    let log = log.borrow();
    assert_eq!(log.activations, 2);
    assert_eq!(log.deactivations, 1);
}

#[test]
fn start_while_scanning_is_idempotent() {
    let (mut controller, log) = ready_controller();
    controller.start().expect("start");
    controller.start().expect("second start");
    assert_eq!(controller.state(), &SessionState::Scanning);
    // No second acquisition attempted.
    assert_eq!(log.borrow().activations, 1);
}

#[test]
fn start_before_any_ingest_is_rejected() {
    let (scanner, _log) = FakeScanner::with_log();
    let mut controller = SessionController::new(scanner);
    assert!(matches!(controller.start(), Err(SessionError::NoRegistry)));
    assert_eq!(controller.state(), &SessionState::Idle);
}

#[test]
fn activation_failure_falls_back_to_ready_and_is_retryable() {
    let (mut controller, log) = ready_controller();
    log.borrow_mut().fail_next = true;

    let error = controller.start().expect_err("activation should fail");
    assert!(matches!(error, SessionError::Capability(CapabilityError::DeviceBusy)));
    assert_eq!(controller.state(), &SessionState::Ready);

    controller.start().expect("retry succeeds");
    assert_eq!(controller.state(), &SessionState::Scanning);
}

#[test]
fn cancel_releases_the_scanner() {
    let (mut controller, log) = ready_controller();
    controller.start().expect("start");
    controller.cancel().expect("cancel");
    assert_eq!(controller.state(), &SessionState::Ready);
    let log = log.borrow();
    assert_eq!(log.activations, 1);
    assert_eq!(log.deactivations, 1);
}

#[test]
fn reset_clears_registry_and_is_idempotent() {
    let (mut controller, log) = ready_controller();
    controller.start().expect("start");
    controller.reset();
    assert_eq!(controller.state(), &SessionState::Idle);
    assert!(controller.registry().is_empty());
    assert_eq!(log.borrow().deactivations, 1);

    // A second reset changes nothing and touches no device.
    controller.reset();
    assert_eq!(controller.state(), &SessionState::Idle);
    assert_eq!(log.borrow().deactivations, 1);

    // After reset, any decode attempt is rejected outright.
    assert!(controller.handle_decode("A100").is_err());
}

#[test]
fn image_decode_shares_the_resolution_path() {
    let (mut controller, _log) = ready_controller();
    controller.start().expect("start");
    let outcome = controller
        .scan_image(&FixedDecoder(Some("A101")), &[0u8; 4])
        .expect("image decode");
    assert_eq!(outcome.matched_record().and_then(|r| r.display_name()), Some("Bob"));
}

#[test]
fn failed_image_decode_returns_to_ready() {
    let (mut controller, log) = ready_controller();
    controller.start().expect("start");
    let error = controller
        .scan_image(&FixedDecoder(None), &[0u8; 4])
        .expect_err("decode should fail");
    assert!(matches!(error, SessionError::Decode(_)));
    assert_eq!(controller.state(), &SessionState::Ready);
    assert_eq!(log.borrow().deactivations, 1);
}

#[test]
fn reingest_replaces_the_list_wholesale() {
    let (mut controller, _log) = ready_controller();
    controller
        .ingest(vec![AttendeeRecord::from_pairs([("registration_id", "Z9")])])
        .expect("reingest");
    assert_eq!(controller.registry().len(), 1);
    assert_eq!(controller.registry().sample_identifier(), Some("Z9"));
}

#[test]
fn empty_ingest_leaves_previous_registry_untouched() {
    let (mut controller, _log) = ready_controller();
    assert!(controller.ingest(Vec::new()).is_err());
    assert_eq!(controller.registry().len(), 2);
    assert_eq!(controller.state(), &SessionState::Ready);
}
