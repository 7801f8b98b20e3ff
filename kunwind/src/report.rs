//! Per-frame report rendering
//!
//! Turns [`ResolvedFrame`]s into the user-facing report. The faulting
//! instruction of the first resolved frame is rendered with error
//! severity so it stands out from its neighbors; unresolved PCs get an
//! explicit "unavailable" line instead of being dropped.

use crate::domain::Pc;
use crate::sink::MessageSink;
use crate::symbolization::{Listing, ResolvedFrame};
use rustc_demangle::demangle;

/// Stands in for the missing half of a partial resolution.
const UNKNOWN: &str = "??";

/// Renders resolved frames through the message sink.
pub struct FrameReporter<'a> {
    listing: &'a Listing,
    sink: &'a MessageSink,
}

impl<'a> FrameReporter<'a> {
    #[must_use]
    pub fn new(listing: &'a Listing, sink: &'a MessageSink) -> Self {
        Self { listing, sink }
    }

    /// Render one resolved frame. With `with_disassembly`, the
    /// instructions of the owning source line are echoed below the
    /// frame, the faulting one marked.
    pub fn report(&self, frame: &ResolvedFrame, with_disassembly: bool) {
        self.sink.highlight(&format!("  pc: {}", frame.pc));

        let function = frame.function.as_deref().map_or_else(|| UNKNOWN.to_string(), display_name);
        let location =
            frame.location.as_ref().map_or_else(|| UNKNOWN.to_string(), ToString::to_string);
        self.sink.body(&format!("    at: {function} in {location}"));

        if !with_disassembly {
            return;
        }
        if let Some(window) = frame.window {
            self.sink.info("    disassembly of the line:");
            for i in window.start..window.end {
                let text = self.listing.line(i).trim();
                if i == window.fault {
                    self.sink.error(&format!("      {text}"));
                } else {
                    self.sink.body(&format!("      {text}"));
                }
            }
        }
    }

    /// Render the explicit per-frame fallback for a PC that could not
    /// be resolved at all.
    pub fn report_unavailable(&self, pc: Pc) {
        self.sink.highlight(&format!("  pc: {pc}"));
        self.sink.warn("    Unwind info unavailable");
    }
}

/// Demangle a function label and normalize it for display: mangled Rust
/// symbols become readable paths, and a `()` call-notation suffix is
/// appended when missing.
#[must_use]
pub fn display_name(label: &str) -> String {
    let demangled = format!("{:#}", demangle(label));
    if demangled.contains("()") {
        demangled
    } else {
        format!("{demangled}()")
    }
}
