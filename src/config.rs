//! Configuration module for pdfbundle.
//!
//! Transforms CLI arguments into a validated configuration that drives the
//! merge pipeline. Validation happens once, up front: after construction the
//! target directory is known to exist and to be a directory.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::MergeError;

/// Complete configuration for a merge run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for candidate input files.
    pub directory: PathBuf,
}

impl TryFrom<&Cli> for Config {
    type Error = MergeError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let directory = cli.directory.clone();

        if !directory.exists() {
            return Err(MergeError::DirectoryNotFound { path: directory });
        }

        if !directory.is_dir() {
            return Err(MergeError::NotADirectory { path: directory });
        }

        Ok(Self { directory })
    }
}
