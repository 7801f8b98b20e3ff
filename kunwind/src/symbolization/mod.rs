//! # Address-to-Source Resolution Over a Textual Listing
//!
//! This module converts the raw program counters captured in a panic
//! backtrace into function names, file paths, and line numbers. Unlike
//! debugger-grade symbolizers it does not parse DWARF or ELF at all: it
//! works from a disassembly listing the kernel build produces as plain
//! text, trading precision for independence from any binary format.
//!
//! ## The Listing
//!
//! The listing is the disassembler's address-prefixed output with
//! source interleaving enabled. Three line shapes carry information:
//!
//! ```text
//! rust_main():                                     function label
//! src/kernel.rs:25                                 source annotation
//! 0000000080200040 <rust_main> addi sp,sp,-64     addressed instruction
//! ```
//!
//! Instructions belong to the most recent source annotation above them,
//! and to the most recent function label above that — but nothing in
//! the text points forward, so ownership must be recovered by scanning
//! backward from the instruction of interest.
//!
//! ## Resolution Flow
//!
//! ```text
//! 1. Load the listing once; classify every line into a LineKind
//! 2. Index addressed lines: address → line index
//! 3. Per PC: exact index lookup, then backward scan
//!      nearest source annotation  → file:line, start of the window
//!      nearest function label     → function name, scan stops here
//! 4. Forward walk from the window start collects the instructions of
//!    the owning source line, up to the next label or annotation
//! ```
//!
//! Classifying once at load keeps the per-PC cost at O(scan distance);
//! the label-stops-the-scan rule bounds that distance to the start of
//! the enclosing function.
//!
//! ## Module Structure
//!
//! - **`listing`**: load, per-line classification, address index
//! - **`resolver`**: backward scan producing [`ResolvedFrame`]s

pub mod listing;
pub mod resolver;

pub use listing::{LineClassifier, LineKind, Listing};
pub use resolver::{FrameResolver, InstructionWindow, ResolvedFrame, SourceLocation};
