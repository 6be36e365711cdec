//! CLI argument definitions for the rollcall check-in tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rollcall",
    version,
    about = "Single-event attendee check-in from the terminal",
    long_about = "Load a guest list from a delimited table, extracted document text or a \
                  pasted block, then check guests in by scanning their QR codes.\n\
                  A keyboard-wedge scanner (or plain typing) supplies the decoded payloads."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a guest list and run the interactive check-in loop.
    Check(CheckArgs),

    /// Load a guest list and show how it normalized, without scanning.
    Preview(PreviewArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Guest list file ("-" reads a pasted block from stdin).
    #[arg(value_name = "LIST_FILE")]
    pub list_file: PathBuf,

    /// Source kind (delimited, sheet, document, free-text).
    /// Detected from the file extension when omitted.
    #[arg(long = "kind", value_name = "KIND")]
    pub kind: Option<String>,

    /// Emit each scan outcome as one JSON line instead of prose.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Guest list file ("-" reads a pasted block from stdin).
    #[arg(value_name = "LIST_FILE")]
    pub list_file: PathBuf,

    /// Source kind (delimited, sheet, document, free-text).
    /// Detected from the file extension when omitted.
    #[arg(long = "kind", value_name = "KIND")]
    pub kind: Option<String>,

    /// Maximum number of rows to display.
    #[arg(long = "limit", value_name = "N", default_value_t = 20)]
    pub limit: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
