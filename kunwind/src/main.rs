//! # kunwind - Main Entry Point
//!
//! Thin wrapper around [`kunwind::pipeline::run`]: parse arguments,
//! pick a sink renderer, map the outcome to the exit-code policy.

use clap::Parser;
use kunwind::cli::{Args, Format};
use kunwind::pipeline::{self, Config, Outcome};
use kunwind::sink::MessageSink;

// Exit codes
const EXIT_NO_PANIC: i32 = 0;
const EXIT_PANIC: i32 = 1;
const EXIT_FATAL: i32 = 2;

fn main() {
    env_logger::init();

    let args = Args::parse();
    let sink = match args.format {
        Format::Ansi => MessageSink::ansi(),
        Format::Plain => MessageSink::plain(),
        Format::Json => MessageSink::json(),
    };
    let config = Config::from_args(&args);

    std::process::exit(match pipeline::run(&config, &sink) {
        Ok(Outcome::NoPanic) => EXIT_NO_PANIC,
        Ok(Outcome::PanicProcessed) => EXIT_PANIC,
        Err(e) => {
            eprintln!("error: {e}");
            EXIT_FATAL
        }
    });
}
