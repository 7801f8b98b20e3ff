//! External listing regeneration
//!
//! The kernel build owns the disassembly step; this module only triggers
//! its `symboltable` make target so resolution never runs against a
//! listing that is stale relative to the image that panicked. A failed
//! or unspawnable build is fatal for the run.

use crate::domain::UnwindError;
use log::info;
use std::path::Path;
use std::process::Command;

/// Make target that (re)generates the disassembly listing.
pub const SYMBOLTABLE_TARGET: &str = "symboltable";

/// Run `make -C <kernel_dir> symboltable MODE=<mode>`, inheriting
/// stdio so build output stays visible.
///
/// # Errors
/// [`UnwindError::BuildStepFailed`] when the command cannot be spawned
/// or exits non-zero.
pub fn regenerate_listing(kernel_dir: &Path, mode: &str) -> Result<(), UnwindError> {
    let mut command = Command::new("make");
    command.arg("-C").arg(kernel_dir).arg(SYMBOLTABLE_TARGET).arg(format!("MODE={mode}"));

    let rendered = format!("make -C {} {SYMBOLTABLE_TARGET} MODE={mode}", kernel_dir.display());
    info!("regenerating listing: {rendered}");

    let status = command.status().map_err(|e| UnwindError::BuildStepFailed {
        command: rendered.clone(),
        reason: e.to_string(),
    })?;

    if !status.success() {
        return Err(UnwindError::BuildStepFailed { command: rendered, reason: status.to_string() });
    }

    Ok(())
}
