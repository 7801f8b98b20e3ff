//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kunwind",
    about = "Symbolize kernel panic backtraces against a disassembly listing",
    after_help = "\
EXAMPLES:
    kunwind                          Paste panic output interactively
    kunwind -f panic.log             Read panic output from a file
    kunwind -q -f serial.log         Unattended mode for CI (exit 0 when no panic)

EXIT CODES:
    0    no panic found in the input
    1    panic processed (CI failure signal)
    2    fatal error (missing listing, failed regeneration)"
)]
pub struct Args {
    /// Read panic text from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Suppress guidance and invalid-line warnings (unattended mode)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the disassembly listing
    #[arg(long, value_name = "FILE", default_value = ".disassembled")]
    pub listing: PathBuf,

    /// Kernel build directory holding the symboltable make target
    #[arg(long, value_name = "DIR", default_value = "../kernel")]
    pub kernel_dir: PathBuf,

    /// Skip listing regeneration and use the listing as-is
    #[arg(long)]
    pub no_regen: bool,

    /// Output rendering
    #[arg(long, value_enum, default_value = "ansi")]
    pub format: Format,
}

/// How report and diagnostic messages are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// ANSI colors for interactive terminals
    Ansi,
    /// Plain text for pipes and CI logs
    Plain,
    /// One JSON object per message
    Json,
}
