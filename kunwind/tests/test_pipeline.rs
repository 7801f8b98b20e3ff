//! End-to-end tests driving the built binary: exit-code policy and
//! report output.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const LISTING: &str = "\
kernel_panic():
src/panic.rs:12
0000000080200000 <kernel_panic> addi sp,sp,-16
0000000080200004 <kernel_panic+0x4> sd ra,8(sp)
rust_main():
src/kernel.rs:25
0000000080200010 <rust_main> auipc ra,0x0
";

const PANIC_INPUT: &str = "\
[BAKA-OS]     Stack trace:
[BAKA-OS]        1 at: 0x0000000080200004 Frame pointer: 0x0000000080298d10
[BAKA-OS]        2 at: 0x0000000080200010 Frame pointer: 0x0000000080298d40
[BAKA-OS]     Note: copy the lines above into the unwinder.
";

fn run_kunwind(dir: &Path, input: &str, extra_args: &[&str]) -> Output {
    let input_path = dir.join("panic.log");
    fs::write(&input_path, input).unwrap();

    Command::new(env!("CARGO_BIN_EXE_kunwind"))
        .current_dir(dir)
        .args(["--no-regen", "-f"])
        .arg(&input_path)
        .args(extra_args)
        .output()
        .expect("failed to run kunwind")
}

fn write_listing(dir: &Path) {
    fs::write(dir.join(".disassembled"), LISTING).unwrap();
}

#[test]
fn test_panic_input_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    write_listing(dir.path());

    let output = run_kunwind(dir.path(), PANIC_INPUT, &["--format", "plain"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unwinding stack trace:"), "missing banner:\n{stdout}");
    assert!(stdout.contains("pc: 0x80200004"), "missing frame header:\n{stdout}");
    assert!(
        stdout.contains("at: kernel_panic() in src/panic.rs:12"),
        "missing resolved frame:\n{stdout}"
    );
    assert!(
        stdout.contains("at: rust_main() in src/kernel.rs:25"),
        "missing second frame:\n{stdout}"
    );
}

#[test]
fn test_no_panic_quiet_exits_zero_without_regeneration() {
    // No --no-regen here: with zero PCs the pipeline must return before
    // the (doomed) make invocation, or this would exit 2.
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("clean.log");
    fs::write(&input_path, "boot ok\nall tests passed\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_kunwind"))
        .current_dir(dir.path())
        .args(["-q", "-f"])
        .arg(&input_path)
        .output()
        .expect("failed to run kunwind");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_listing_exits_two() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_kunwind(dir.path(), PANIC_INPUT, &["-q"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Disassembly listing not found"), "stderr was:\n{stderr}");
}

#[test]
fn test_faulting_instruction_marked_distinctly() {
    let dir = tempfile::tempdir().unwrap();
    write_listing(dir.path());

    let output = run_kunwind(dir.path(), PANIC_INPUT, &["--format", "json"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let records: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect();

    // Both instructions of src/panic.rs:12 are echoed; only the
    // faulting one carries error severity.
    let faulting: Vec<_> = records
        .iter()
        .filter(|r| r["severity"] == "error")
        .map(|r| r["message"].as_str().unwrap())
        .collect();
    assert_eq!(faulting.len(), 1);
    assert!(faulting[0].contains("sd ra,8(sp)"));

    let neighbors: Vec<_> = records
        .iter()
        .filter(|r| r["severity"] == "plain")
        .map(|r| r["message"].as_str().unwrap())
        .filter(|m| m.contains("addi sp,sp,-16"))
        .collect();
    assert_eq!(neighbors.len(), 1);
}

#[test]
fn test_unresolvable_pc_reports_unavailable_and_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    write_listing(dir.path());

    let input = "Stack trace:\n  1 at: 0xffffffff Frame pointer: 0x0\nNote:\n";
    let output = run_kunwind(dir.path(), input, &["--format", "plain"]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Unwind info unavailable"), "stdout was:\n{stdout}");
}

#[test]
fn test_second_frame_gets_no_disassembly() {
    let dir = tempfile::tempdir().unwrap();
    write_listing(dir.path());

    let output = run_kunwind(dir.path(), PANIC_INPUT, &["--format", "plain"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Disassembly is rendered for the first resolved frame only.
    assert_eq!(stdout.matches("disassembly of the line:").count(), 1);
    assert!(!stdout.contains("auipc ra,0x0"), "second frame was disassembled:\n{stdout}");
}
