//! # kunwind - Post-Mortem Kernel Backtrace Symbolizer
//!
//! kunwind resolves the raw program-counter values printed by a panicked
//! kernel into function names, source files, and line numbers, and shows
//! the disassembled instructions around the faulting one. It works
//! entirely from a textual disassembly listing of the kernel image
//! (objdump-style output with interleaved function labels and
//! file:line annotations), so it needs no access to DWARF or ELF data.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │   Panic text     │──▶│   PC extraction  │──▶│ Listing regen    │
//! │ (stdin or file)  │   │ (extract)        │   │ (toolchain)      │
//! └──────────────────┘   └──────────────────┘   └────────┬─────────┘
//!                                                        ▼
//! ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │  Frame report    │◀──│  Per-PC resolve  │◀──│ Load + classify  │
//! │ (report, sink)   │   │ (symbolization)  │   │ (symbolization)  │
//! └──────────────────┘   └──────────────────┘   └──────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`extract`]: Isolate the `Stack trace:`…`Note:` window in free-form
//!   panic text and collect the `at: 0x…` program counters in order.
//!
//! - [`symbolization`]: Load the disassembly listing once, classify every
//!   line, index addressed lines, and resolve each PC by a backward
//!   annotation scan.
//!
//! - [`report`]: Render resolved frames, demangle function labels, and
//!   echo the owning source line's instructions with the faulting one
//!   marked.
//!
//! - [`sink`]: Severity-tagged message sink with pluggable renderers
//!   (ANSI color, plain text, JSON lines) so resolution logic stays free
//!   of formatting concerns.
//!
//! - [`toolchain`]: Invoke the external kernel build target that
//!   regenerates the listing before resolution.
//!
//! - [`pipeline`]: Orchestration and the [`pipeline::Config`] value
//!   threaded through the run.
//!
//! - [`cli`]: Command-line argument parsing.
//!
//! - [`domain`]: Core domain types ([`domain::Pc`]) and errors.
//!
//! ## Exit Status
//!
//! The binary exits `0` when no panic was found in the input, `1` when a
//! panic was processed (CI failure signal, regardless of per-frame
//! resolution success), and `2` on fatal errors such as a missing
//! listing.

pub mod cli;
pub mod domain;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod sink;
pub mod symbolization;
pub mod toolchain;
