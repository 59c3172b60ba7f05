//! CLI argument parsing for pdfbundle.
//!
//! This module defines the command-line interface structure using `clap`.
//! The surface is deliberately small: one optional directory argument.
//! Help and version requests are handled by clap and exit before any
//! filesystem or dependency checks run.

use clap::Parser;
use std::path::PathBuf;

/// Merge every PDF in a directory into a single document.
///
/// pdfbundle scans a directory for PDF files (non-recursively), asks for an
/// output name, and concatenates the files with pdfunite or pdftk,
/// whichever is installed.
#[derive(Parser, Debug)]
#[command(name = "pdfbundle")]
#[command(version)]
#[command(about = "Merge every PDF in a directory into a single document", long_about = None)]
pub struct Cli {
    /// Directory to scan for PDF files
    ///
    /// Only direct children of this directory are considered; subdirectories
    /// are not searched. Defaults to the current working directory.
    #[arg(value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,
}
