//! pdfbundle - merge every PDF in a directory into a single document.
//!
//! Thin binary wrapper: parse arguments, run the pipeline, report errors.

use clap::Parser;
use std::process;

use pdfbundle::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = pdfbundle::run(&cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
