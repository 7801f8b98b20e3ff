//! Command-line interface for kunwind
//!
//! This module contains CLI argument parsing

pub mod args;

pub use args::{Args, Format};
