//! Driver: extract, regenerate, index, resolve, report
//!
//! [`run`] is the whole tool behind an explicit [`Config`], so tests
//! can exercise the pipeline with varied configurations without
//! touching process-wide state or restarting.

use crate::cli::Args;
use crate::domain::UnwindError;
use crate::extract::{PcExtractor, TRACE_BEGIN_MARKER, TRACE_END_MARKER};
use crate::report::FrameReporter;
use crate::sink::MessageSink;
use crate::symbolization::{FrameResolver, Listing};
use crate::toolchain;
use anyhow::Result;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// What a completed run means for the caller's exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No PCs were found in the input; nothing was symbolized.
    NoPanic,
    /// A panic was processed. Signals CI failure regardless of how many
    /// frames resolved.
    PanicProcessed,
}

/// Explicit run configuration threaded through the pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Panic text source; stdin when absent.
    pub input: Option<PathBuf>,
    /// Suppress guidance and invalid-line warnings.
    pub quiet: bool,
    /// Disassembly listing path.
    pub listing_path: PathBuf,
    /// Kernel build directory for regeneration.
    pub kernel_dir: PathBuf,
    /// Build mode forwarded to the make target.
    pub build_mode: String,
    /// Whether to run the regeneration step at all.
    pub regenerate: bool,
}

impl Config {
    /// Build a config from CLI arguments, resolving the build mode from
    /// the `MODE` environment variable (default `debug`).
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.file.clone(),
            quiet: args.quiet,
            listing_path: args.listing.clone(),
            kernel_dir: args.kernel_dir.clone(),
            build_mode: std::env::var("MODE").unwrap_or_else(|_| "debug".to_string()),
            regenerate: !args.no_regen,
        }
    }
}

/// Run the pipeline to completion.
///
/// # Errors
/// Fatal conditions only: unreadable input file, failed regeneration,
/// missing listing. Per-frame resolution failures are reported through
/// the sink and never abort the run.
pub fn run(config: &Config, sink: &MessageSink) -> Result<Outcome> {
    let extractor = PcExtractor::new()?;

    let pcs = match &config.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| UnwindError::InputUnreadable {
                path: path.display().to_string(),
                source,
            })?;
            extractor.extract(BufReader::new(file), sink, config.quiet)?
        }
        None => {
            if !config.quiet {
                print_guidance(sink);
            }
            extractor.extract(io::stdin().lock(), sink, config.quiet)?
        }
    };

    if pcs.is_empty() {
        if !config.quiet {
            sink.info("No stack trace found in the input.");
        }
        return Ok(Outcome::NoPanic);
    }

    if config.regenerate {
        toolchain::regenerate_listing(&config.kernel_dir, &config.build_mode)?;
    }

    let listing = Listing::load(&config.listing_path)?;
    let resolver = FrameResolver::new(&listing);
    let reporter = FrameReporter::new(&listing, sink);

    sink.highlight("Unwinding stack trace:");

    let mut top_frame = true;
    for pc in pcs {
        match resolver.resolve(pc) {
            Some(frame) => {
                reporter.report(&frame, top_frame);
                top_frame = false;
            }
            None => reporter.report_unavailable(pc),
        }
    }

    Ok(Outcome::PanicProcessed)
}

fn print_guidance(sink: &MessageSink) {
    sink.info("Paste the panic output from the crashed kernel below.");
    sink.info(&format!(
        "Lines between the `{TRACE_BEGIN_MARKER}` and `{TRACE_END_MARKER}` markers are scanned; \
         everything else is ignored."
    ));
    sink.info("End the input with the note line or EOF (Ctrl-D).");
}
