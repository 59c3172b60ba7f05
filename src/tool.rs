//! Merge tool selection and invocation.
//!
//! pdfbundle does not merge PDFs itself; it shells out to one of two
//! external utilities. The choice is made once at startup by probing the
//! search path and is immutable afterwards. Each variant owns its own
//! argument construction, so supporting another tool means adding one
//! variant and its two match arms.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{MergeError, Result};

/// An external PDF merge executable known to pdfbundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeTool {
    /// `pdfunite` from poppler-utils: `pdfunite <in>... <out>`.
    Pdfunite,
    /// `pdftk`: `pdftk <in>... cat output <out>`.
    Pdftk,
}

impl MergeTool {
    /// Probe order; pdfunite wins when both tools are installed.
    const PROBE_ORDER: [MergeTool; 2] = [MergeTool::Pdfunite, MergeTool::Pdftk];

    /// Select the merge tool to use for this run.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::MissingMergeTool`] if neither executable can
    /// be started.
    pub fn detect() -> Result<Self> {
        Self::PROBE_ORDER
            .into_iter()
            .find(MergeTool::is_available)
            .ok_or(MergeError::MissingMergeTool)
    }

    /// Executable name of this tool.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pdfunite => "pdfunite",
            Self::Pdftk => "pdftk",
        }
    }

    /// Cheap argument to probe with; both tools print a version and exit.
    fn version_arg(&self) -> &'static str {
        match self {
            Self::Pdfunite => "-v",
            Self::Pdftk => "--version",
        }
    }

    /// Check whether this tool can be started from the search path.
    ///
    /// The exit status of the probe is ignored on purpose: poppler tools
    /// report their version with a non-zero status. A successful spawn is
    /// enough to know the executable is installed.
    fn is_available(&self) -> bool {
        Command::new(self.name())
            .arg(self.version_arg())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    /// Build the merge invocation for this tool.
    ///
    /// `inputs` are passed in order, so callers decide the page order of
    /// the merged document.
    pub fn command(&self, inputs: &[PathBuf], output: &Path) -> Command {
        let mut cmd = Command::new(self.name());
        match self {
            Self::Pdfunite => {
                cmd.args(inputs).arg(output);
            }
            Self::Pdftk => {
                cmd.args(inputs).arg("cat").arg("output").arg(output);
            }
        }
        cmd
    }

    /// Run the merge and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::ToolSpawnFailed`] if the process cannot be
    /// started and [`MergeError::MergeToolFailed`] if it exits non-zero.
    pub fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        let status =
            self.command(inputs, output)
                .status()
                .map_err(|source| MergeError::ToolSpawnFailed {
                    tool: self.name(),
                    source,
                })?;

        if !status.success() {
            return Err(MergeError::MergeToolFailed {
                tool: self.name(),
                status,
            });
        }

        Ok(())
    }
}

impl fmt::Display for MergeTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
