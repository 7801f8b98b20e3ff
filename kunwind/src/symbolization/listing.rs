//! Disassembly listing: load, classify, index
//!
//! The listing is objdump-style text in which three line shapes matter:
//!
//! ```text
//! rust_main():                                      ← function label
//! src/kernel.rs:25                                  ← source annotation
//! 0000000080200040 <rust_main> addi sp,sp,-64       ← addressed instruction
//! ```
//!
//! Every line is classified exactly once at load time into a
//! [`LineKind`], and every addressed line goes into the address index.
//! Scans over the listing afterwards only look at precomputed kinds, so
//! the per-PC work is proportional to the scan distance, not to
//! re-matching patterns over the whole file.

use crate::domain::{Pc, UnwindError};
use anyhow::Result;
use log::info;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Classification of one listing line, computed once at load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Begins with a hex address and a `<symbol…>` tag; carries the
    /// address key. Covers both per-instruction lines and function
    /// block headers.
    Instruction { addr: Pc },
    /// A symbol name terminated by a colon, as emitted by the
    /// disassembler's line-number pass (e.g. `rust_main():`). The
    /// stored symbol has the colon stripped.
    Label { symbol: String },
    /// `<path>:<line>` marking the start of a source line's instructions.
    Source { file: String, line: u32 },
    /// Blank or anything else.
    Other,
}

/// Compiled matchers for the listing's line shapes.
pub struct LineClassifier {
    instruction: Regex,
    source: Regex,
}

impl LineClassifier {
    /// # Errors
    /// Never fails in practice; the patterns are fixed.
    pub fn new() -> Result<Self> {
        Ok(Self {
            instruction: Regex::new(r"^([0-9a-fA-F]+) <.*>")?,
            source: Regex::new(r"^(.*):(\d+)")?,
        })
    }

    /// Classify a single listing line.
    #[must_use]
    pub fn classify(&self, line: &str) -> LineKind {
        if let Some(caps) = self.instruction.captures(line) {
            if let Some(addr) = caps.get(1).and_then(|m| Pc::from_hex(m.as_str())) {
                return LineKind::Instruction { addr };
            }
        }

        let trimmed = line.trim();
        if trimmed.len() > 1 && trimmed.ends_with(':') {
            return LineKind::Label { symbol: trimmed[..trimmed.len() - 1].to_string() };
        }

        if let Some(caps) = self.source.captures(trimmed) {
            let file = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            if let Some(line_no) = caps.get(2).and_then(|m| m.as_str().parse().ok()) {
                if !file.is_empty() {
                    return LineKind::Source { file: file.to_string(), line: line_no };
                }
            }
        }

        LineKind::Other
    }
}

/// The loaded disassembly listing: raw lines in file order, their
/// classifications, and the address index. Immutable after load.
pub struct Listing {
    lines: Vec<String>,
    kinds: Vec<LineKind>,
    index: HashMap<Pc, usize>,
}

impl Listing {
    /// Load and classify a listing file.
    ///
    /// # Errors
    /// A missing or unreadable file is fatal for the whole run
    /// ([`UnwindError::ListingMissing`]): no PC can be resolved without
    /// the listing.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| UnwindError::ListingMissing {
            path: path.display().to_string(),
            source,
        })?;
        let listing = Self::parse(&text)?;
        info!(
            "loaded listing {}: {} lines, {} addressed",
            path.display(),
            listing.len(),
            listing.index.len()
        );
        Ok(listing)
    }

    /// Classify and index listing text.
    ///
    /// Duplicate addresses keep the last occurrence; well-formed
    /// disassembler output never produces duplicates.
    ///
    /// # Errors
    /// Fails only if the fixed line patterns fail to compile.
    pub fn parse(text: &str) -> Result<Self> {
        let classifier = LineClassifier::new()?;
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let kinds: Vec<LineKind> = lines.iter().map(|l| classifier.classify(l)).collect();

        let mut index = HashMap::new();
        for (idx, kind) in kinds.iter().enumerate() {
            if let LineKind::Instruction { addr } = kind {
                index.insert(*addr, idx);
            }
        }

        Ok(Self { lines, kinds, index })
    }

    /// Line index of the instruction at `pc`, if the address is listed.
    #[must_use]
    pub fn lookup(&self, pc: Pc) -> Option<usize> {
        self.index.get(&pc).copied()
    }

    #[must_use]
    pub fn line(&self, idx: usize) -> &str {
        &self.lines[idx]
    }

    #[must_use]
    pub fn kind(&self, idx: usize) -> &LineKind {
        &self.kinds[idx]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
