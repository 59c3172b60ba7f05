//! PDF discovery.
//!
//! Finds the PDF files that are direct children of the target directory.
//! The `.pdf` suffix is matched case-insensitively (`a.pdf`, `A.PDF` and
//! `b.Pdf` all qualify), hidden files and entries that are not regular
//! files are skipped, and the result is sorted lexicographically by full
//! path so the merge order does not depend on filesystem listing order.

use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};

/// Find the PDF files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`MergeError::NoPdfFiles`] if nothing matches, and propagates
/// glob pattern or filesystem errors.
pub fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    // The directory name is literal text, not pattern syntax; escape it so
    // a directory like `reports [2024]` is not read as a character class.
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{escaped}/*.pdf");
    let options = glob::MatchOptions {
        case_sensitive: false,
        require_literal_separator: false,
        // `*` must not match a leading dot, matching shell expansion.
        require_literal_leading_dot: true,
    };

    let mut paths = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        let path = entry?;
        // A directory can be named `something.pdf`; only regular files count.
        if path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();

    if paths.is_empty() {
        return Err(MergeError::NoPdfFiles {
            path: dir.to_path_buf(),
        });
    }

    Ok(paths)
}
