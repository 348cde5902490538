//! ingestion-core CLI binary.
//!
//! Command-line interface for document ingestion and chunking. Installs
//! the process-wide `tracing` subscriber; the library itself never does
//! (it only emits spans/events for whatever subscriber the host wires up).

use clap::Parser;
use ingestion_core::cli::{CliArgs, Converter};
use std::process;

fn main() {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                print!("{}", e);
                process::exit(0);
            }
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let filter = if args.quiet {
        "off"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let converter = Converter::new(args);

    match converter.run() {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
