//! Backward annotation scan and per-PC frame resolution
//!
//! The listing interleaves function labels, source annotations, and
//! addressed instructions in file order, with no forward pointer from an
//! instruction to the source line that owns it. Ownership is recovered
//! by a backward nearest-neighbor scan from the PC's line:
//!
//! 1. The first source annotation above the PC gives the file and line;
//!    the instructions of that source line start just below it.
//! 2. The first function label above the PC gives the enclosing
//!    function, and finding it stops the scan — which bounds the walk
//!    to the distance back to the start of the enclosing function.
//!
//! Either half may be missing; partial results are reported as-is. A PC
//! absent from the index, or one with neither annotation above it,
//! resolves to nothing rather than an error.

use super::listing::{LineKind, Listing};
use crate::domain::Pc;
use log::debug;
use std::fmt;

/// Source file and line recovered from an annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Line-index range of the instructions belonging to the resolved
/// source line. `fault` is the PC's own line index; `start..end` always
/// contains it when resolution found an annotation above the PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionWindow {
    pub start: usize,
    pub end: usize,
    pub fault: usize,
}

/// Per-PC resolution result. Absent fields signal partial resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFrame {
    pub pc: Pc,
    pub function: Option<String>,
    pub location: Option<SourceLocation>,
    pub window: Option<InstructionWindow>,
}

/// Resolves PCs against a loaded listing.
pub struct FrameResolver<'a> {
    listing: &'a Listing,
}

impl<'a> FrameResolver<'a> {
    #[must_use]
    pub fn new(listing: &'a Listing) -> Self {
        Self { listing }
    }

    /// Resolve one PC.
    ///
    /// Returns `None` when the PC is not in the address index or when
    /// the backward scan finds neither a function label nor a source
    /// annotation — the "unwind info unavailable" outcome, which is an
    /// expected result and not an error.
    #[must_use]
    pub fn resolve(&self, pc: Pc) -> Option<ResolvedFrame> {
        let fault = self.listing.lookup(pc)?;

        let mut function = None;
        let mut location = None;
        let mut line_start = None;
        let mut label_idx = None;

        for i in (0..fault).rev() {
            match self.listing.kind(i) {
                LineKind::Label { symbol } => {
                    function = Some(symbol.clone());
                    label_idx = Some(i);
                    break;
                }
                LineKind::Source { file, line } if location.is_none() => {
                    location = Some(SourceLocation { file: file.clone(), line: *line });
                    line_start = Some(i + 1);
                }
                _ => {}
            }
        }

        if function.is_none() && location.is_none() {
            debug!("no annotations above {pc} (line {fault})");
            return None;
        }

        // Without a source annotation, rendering starts right after the
        // function label.
        let start = line_start.or_else(|| label_idx.map(|i| i + 1));
        let window =
            start.map(|s| InstructionWindow { start: s, end: self.window_end(s), fault });

        Some(ResolvedFrame { pc, function, location, window })
    }

    /// First line at or after `start` that opens a new source line or
    /// function (or the end of the listing).
    fn window_end(&self, start: usize) -> usize {
        let mut i = start;
        while i < self.listing.len() {
            match self.listing.kind(i) {
                LineKind::Label { .. } | LineKind::Source { .. } => break,
                _ => i += 1,
            }
        }
        i
    }
}
