use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use rollcall_cli::input::{materialize, resolve_kind};
use rollcall_ingest::{SourceKind, normalize};
use rollcall_session::advisory;
use rollcall_session::{
    CapabilityError, ScanCapability, SessionController, SessionError, SessionState,
};

use crate::cli::{CheckArgs, PreviewArgs};
use crate::summary::{print_outcome, print_preview};

/// Keyboard-wedge scanner on the terminal: "activating" means showing
/// the scan prompt; the decoded payload arrives as the next stdin line.
#[derive(Debug, Default)]
struct ConsoleScanner;

impl ScanCapability for ConsoleScanner {
    fn activate(&mut self) -> std::result::Result<(), CapabilityError> {
        prompt();
        Ok(())
    }

    fn deactivate(&mut self) {}
}

fn prompt() {
    eprint!("scan> ");
    let _ = io::stderr().flush();
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let kind = resolve_kind(&args.list_file, args.kind.as_deref())?;
    let source = materialize(&args.list_file, kind)?;
    let records = normalize(&source)?;
    info!(kind = kind.name(), records = records.len(), "guest list normalized");

    let mut controller = SessionController::new(ConsoleScanner);
    controller
        .ingest(records)
        .context("install the guest list")?;
    println!(
        "Loaded {count} guest record(s) ({kind}).",
        count = controller.registry().len(),
        kind = kind.name()
    );
    if kind == SourceKind::Document {
        println!("note: {}", advisory::document_text_caveat());
    }
    println!("Scan a code, or type it and press enter. \"quit\" ends the session.");

    start_or_advise(&mut controller)?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("read scan input")?;
        let payload = line.trim().to_string();
        if payload.is_empty() {
            prompt();
            continue;
        }
        if payload.eq_ignore_ascii_case("quit") {
            break;
        }
        if !matches!(controller.state(), SessionState::Scanning) {
            // A failed activation left the session on ready; retry
            // before treating the line as a decode.
            start_or_advise(&mut controller)?;
            if !matches!(controller.state(), SessionState::Scanning) {
                continue;
            }
        }
        let outcome = controller.handle_decode(&payload)?.clone();
        print_outcome(&outcome, args.json);
        // Straight back to scanning for the next guest.
        acknowledge_or_advise(&mut controller)?;
    }
    controller.reset();
    Ok(())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let kind = resolve_kind(&args.list_file, args.kind.as_deref())?;
    let source = materialize(&args.list_file, kind)?;
    let records = normalize(&source)?;
    println!(
        "Normalized {count} record(s) from {path} ({kind}).",
        count = records.len(),
        path = args.list_file.display(),
        kind = kind.name()
    );
    if kind == SourceKind::Document {
        println!("note: {}", advisory::document_text_caveat());
    }
    print_preview(&records, args.limit.max(1));
    Ok(())
}

fn start_or_advise(controller: &mut SessionController<ConsoleScanner>) -> Result<()> {
    surface_capability_error(controller.start())
}

fn acknowledge_or_advise(controller: &mut SessionController<ConsoleScanner>) -> Result<()> {
    surface_capability_error(controller.acknowledge())
}

/// Activation failures are operator-actionable, not fatal: advise and
/// let the loop continue from ready.
fn surface_capability_error(result: std::result::Result<(), SessionError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(SessionError::Capability(error)) => {
            eprintln!("{}", advisory::activation_failure(&error));
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
