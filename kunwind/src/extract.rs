//! PC extraction from free-form panic text
//!
//! A panicked kernel prints its backtrace between two marker lines:
//!
//! ```text
//! [BAKA-OS]     Stack trace:
//! [BAKA-OS]        1 at: 0x000000008020a1c4 Frame pointer: 0x0000000080298d10
//! [BAKA-OS]        2 at: 0x0000000080203f92 Frame pointer: 0x0000000080298d40
//! [BAKA-OS]     Note: copy the lines above into the unwinder.
//! ```
//!
//! Only lines strictly between the markers are eligible; everything
//! outside the window is ignored without comment. Reaching end of input
//! before the end marker terminates extraction with whatever was
//! collected.

use crate::domain::Pc;
use crate::sink::MessageSink;
use anyhow::Result;
use log::debug;
use regex::Regex;
use std::io::BufRead;

/// Start-of-window marker (matched as a substring).
pub const TRACE_BEGIN_MARKER: &str = "Stack trace:";

/// End-of-window marker (matched as a substring).
pub const TRACE_END_MARKER: &str = "Note:";

/// Extracts ordered program counters from panic text.
pub struct PcExtractor {
    pattern: Regex,
}

impl PcExtractor {
    /// # Errors
    /// Never fails in practice; the pattern is fixed.
    pub fn new() -> Result<Self> {
        Ok(Self { pattern: Regex::new(r"at:\s+(0x[0-9a-fA-F]+)")? })
    }

    /// Scan a line-oriented input for the stack-trace window and collect
    /// every PC in input order. Duplicates are preserved.
    ///
    /// Non-matching lines inside the window are reported at warn
    /// severity unless `quiet` is set; whitespace-only lines are skipped
    /// silently. An empty result is a valid outcome (no panic occurred).
    ///
    /// # Errors
    /// Returns an error only when reading from the input fails.
    pub fn extract<R: BufRead>(
        &self,
        reader: R,
        sink: &MessageSink,
        quiet: bool,
    ) -> Result<Vec<Pc>> {
        let mut pcs = Vec::new();
        let mut in_window = false;

        for line in reader.lines() {
            let line = line?;

            if line.contains(TRACE_BEGIN_MARKER) {
                in_window = true;
                continue;
            }
            if line.contains(TRACE_END_MARKER) {
                break;
            }
            if !in_window {
                continue;
            }

            match self.match_pc(&line) {
                Some(pc) => pcs.push(pc),
                None => {
                    if !quiet && !line.trim().is_empty() {
                        sink.warn(&format!("Invalid line: {line}"));
                    }
                }
            }
        }

        debug!("extracted {} program counters", pcs.len());
        Ok(pcs)
    }

    fn match_pc(&self, line: &str) -> Option<Pc> {
        let caps = self.pattern.captures(line)?;
        Pc::from_hex(caps.get(1)?.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn extract(input: &str) -> Vec<Pc> {
        let extractor = PcExtractor::new().unwrap();
        extractor.extract(Cursor::new(input), &MessageSink::plain(), true).unwrap()
    }

    #[test]
    fn test_pcs_only_inside_window() {
        let input = "\
at: 0x1111 before the window\n\
Stack trace:\n\
  1 at: 0x80200000 Frame pointer: 0x80298d10\n\
Note: end\n\
at: 0x2222 after the window\n";
        assert_eq!(extract(input), vec![Pc(0x8020_0000)]);
    }

    #[test]
    fn test_marker_lines_are_excluded() {
        // A PC on a marker line must not be collected.
        let input = "Stack trace: at: 0x1111\n  at: 0x2222\nNote: at: 0x3333\n";
        assert_eq!(extract(input), vec![Pc(0x2222)]);
    }

    #[test]
    fn test_case_insensitive_hex() {
        let input = "Stack trace:\n at: 0xDEADBEEF\n at: 0xdeadbeef\nNote:\n";
        assert_eq!(extract(input), vec![Pc(3_735_928_559), Pc(3_735_928_559)]);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let input = "Stack trace:\n at: 0x2\n at: 0x1\n at: 0x2\nNote:\n";
        assert_eq!(extract(input), vec![Pc(2), Pc(1), Pc(2)]);
    }

    #[test]
    fn test_eof_without_end_marker() {
        let input = "Stack trace:\n at: 0x80200000\n";
        assert_eq!(extract(input), vec![Pc(0x8020_0000)]);
    }

    #[test]
    fn test_invalid_lines_are_skipped_not_fatal() {
        let input = "Stack trace:\nthis is not a frame\n\n at: 0x10\nNote:\n";
        assert_eq!(extract(input), vec![Pc(0x10)]);
    }

    #[test]
    fn test_no_window_means_no_pcs() {
        assert_eq!(extract("at: 0x1234\nat: 0x5678\n"), Vec::<Pc>::new());
    }

    #[test]
    fn test_frame_pointer_suffix_ignored() {
        let input =
            "Stack trace:\n   1 at: 0x000000008020a1c4 Frame pointer: 0x0000000080298d10\nNote:\n";
        assert_eq!(extract(input), vec![Pc(0x8020_a1c4)]);
    }
}
