//! Shared helpers for pdfbundle integration tests.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Create a scratch directory containing empty files with the given names.
pub fn pdf_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        fs::write(dir.path().join(name), b"").expect("Failed to create file");
    }
    dir
}

/// Restores the original `PATH` when dropped.
///
/// Tests that use this must run serially; the variable is process-wide.
pub struct PathGuard {
    original: OsString,
}

impl PathGuard {
    /// Point `PATH` at `dir` only, so executable lookups see nothing but
    /// the fake tools installed there.
    pub fn set(dir: &Path) -> Self {
        let original = std::env::var_os("PATH").unwrap_or_default();
        std::env::set_var("PATH", dir);
        Self { original }
    }
}

impl Drop for PathGuard {
    fn drop(&mut self) {
        std::env::set_var("PATH", &self.original);
    }
}

/// Install a fake merge tool that appends its arguments to a log file and
/// exits with `exit_code`. Returns the log file path.
#[cfg(unix)]
pub fn install_fake_tool(bin_dir: &Path, name: &str, exit_code: i32) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let log = bin_dir.join(format!("{name}.log"));
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$*\" >> '{}'\nexit {}\n",
        log.display(),
        exit_code
    );

    let path = bin_dir.join(name);
    fs::write(&path, script).expect("Failed to write fake tool");

    let mut perms = fs::metadata(&path)
        .expect("Failed to stat fake tool")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to mark fake tool executable");

    log
}

/// Read the most recent invocation a fake tool recorded.
#[cfg(unix)]
pub fn last_invocation(log: &Path) -> String {
    let contents = fs::read_to_string(log).expect("Failed to read tool log");
    contents.lines().last().unwrap_or_default().to_string()
}
