//! Error types for pdfbundle.
//!
//! Every failure that ends a run is a [`MergeError`] variant with a
//! human-readable message. Terminal errors are printed once by the binary
//! and the process exits with status 1; the interactive prompt handles its
//! own recoverable conditions (empty input, unrecognized confirmation) by
//! re-prompting and never surfaces them here.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type alias for pdfbundle operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Main error type for pdfbundle operations.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Target directory does not exist.
    #[error("Directory not found: {}", .path.display())]
    DirectoryNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Target path exists but is not a directory.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory {
        /// Path that is not a directory.
        path: PathBuf,
    },

    /// Neither supported merge executable is installed.
    #[error(
        "No PDF merge tool found\n  \
         Install poppler-utils (for pdfunite) or pdftk and try again"
    )]
    MissingMergeTool,

    /// Discovery found no PDF files in the target directory.
    #[error("No PDF files found in: {}", .path.display())]
    NoPdfFiles {
        /// Directory that was scanned.
        path: PathBuf,
    },

    /// The selected merge tool could not be started.
    #[error("Failed to run {tool}: {source}")]
    ToolSpawnFailed {
        /// Name of the tool executable.
        tool: &'static str,
        /// Underlying spawn error.
        source: io::Error,
    },

    /// The merge tool ran but reported failure.
    #[error("{tool} failed ({status}); the merged file may not have been created")]
    MergeToolFailed {
        /// Name of the tool executable.
        tool: &'static str,
        /// Exit status reported by the tool.
        status: ExitStatus,
    },

    /// Failed to process a glob entry during discovery.
    #[error("Failed to process glob entry: {0}")]
    Glob(#[from] glob::GlobError),

    /// The discovery pattern could not be parsed.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
