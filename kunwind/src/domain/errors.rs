//! Structured error types for kunwind
//!
//! Using thiserror for automatic Display implementation and error chaining.
//!
//! "PC not found in the listing" is deliberately NOT an error: it is an
//! expected per-frame outcome represented as an empty resolution result.
//! The variants here are the conditions that abort a run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnwindError {
    #[error("Disassembly listing not found: {path}")]
    ListingMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Listing regeneration failed: {command}: {reason}")]
    BuildStepFailed { command: String, reason: String },

    #[error("Cannot read panic input from {path}")]
    InputUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
