//! pdfbundle - merge every PDF in a directory into a single document.
//!
//! pdfbundle owns no PDF logic of its own: it discovers the `.pdf` files
//! that sit directly inside a directory, asks interactively for an output
//! name, and delegates the actual concatenation to an external tool
//! (`pdfunite` from poppler-utils, or `pdftk` as a fallback).
//!
//! The pipeline is strictly linear and fully synchronous:
//!
//! 1. validate the target directory,
//! 2. select the merge tool,
//! 3. discover and sort the input files,
//! 4. collect a confirmed output name,
//! 5. invoke the tool and report the result.
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use pdfbundle::cli::Cli;
//!
//! let cli = Cli::parse_from(["pdfbundle", "./scans"]);
//! if let Err(err) = pdfbundle::run(&cli) {
//!     eprintln!("Error: {err}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod output;
pub mod prompt;
pub mod tool;

// Re-export commonly used types
pub use config::Config;
pub use error::{MergeError, Result};
pub use tool::MergeTool;

use std::io;

use crate::cli::Cli;
use crate::discover::discover_pdfs;
use crate::output::OutputFormatter;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the merge pipeline for parsed CLI arguments.
///
/// Blocks on stdin for the output-name prompt and on the external merge
/// process. On success the merged document exists at the path the user
/// chose.
///
/// # Errors
///
/// Returns the first [`MergeError`] the pipeline hits; the binary prints
/// it and exits with status 1.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::try_from(cli)?;
    let formatter = OutputFormatter::new();

    // Tool selection happens before discovery so a missing dependency is
    // reported even when the directory would also fail later.
    let tool = MergeTool::detect()?;

    let inputs = discover_pdfs(&config.directory)?;

    formatter.info(&format!(
        "Found {} PDF file(s) in {}:",
        inputs.len(),
        config.directory.display()
    ));
    for (index, path) in inputs.iter().enumerate() {
        let name = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy();
        formatter.list_item(index + 1, &name);
    }
    formatter.blank_line();

    let stdin = io::stdin();
    let output_path =
        prompt::prompt_output_path(&mut stdin.lock(), &mut io::stdout(), &config.directory)?;

    formatter.info(&format!("Merging with {tool} into {}", output_path.display()));
    tool.merge(&inputs, &output_path)?;

    formatter.success(&format!("Successfully created {}", output_path.display()));
    Ok(())
}
