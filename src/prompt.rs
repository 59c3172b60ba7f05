//! Interactive collection of the output file name.
//!
//! The prompt loop keeps asking until it has a usable destination:
//! empty names are rejected with a message, and a name whose `.pdf` path
//! already exists needs an explicit overwrite confirmation. Answering `n`
//! at the confirmation returns to the name prompt; anything that is not a
//! `y`/`n` answer re-asks the confirmation without consuming a new name.
//!
//! The reader and writer are injected so the whole flow can be driven from
//! tests with in-memory buffers.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Ask the user for an output name and return the confirmed `.pdf` path
/// inside `dir`.
///
/// # Errors
///
/// Only I/O failures (including end of input) abort the loop; every
/// invalid answer just re-prompts.
pub fn prompt_output_path<R, W>(input: &mut R, out: &mut W, dir: &Path) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "Name for the merged file (without .pdf): ")?;
        out.flush()?;

        let name = read_trimmed_line(input)?;
        if name.is_empty() {
            writeln!(out, "The file name cannot be empty.")?;
            continue;
        }

        let candidate = dir.join(format!("{name}.pdf"));
        if !candidate.exists() {
            return Ok(candidate);
        }

        if confirm_overwrite(input, out, &candidate)? {
            return Ok(candidate);
        }
        // Declined; ask for a new name.
    }
}

/// Yes/no confirmation for overwriting `candidate`.
///
/// Matches on the first character of the answer, case-insensitively, so
/// `y`, `Y`, `yes` and `Yes` all accept.
fn confirm_overwrite<R, W>(input: &mut R, out: &mut W, candidate: &Path) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{} already exists. Overwrite? [y/n]: ", candidate.display())?;
        out.flush()?;

        let answer = read_trimmed_line(input)?.to_lowercase();
        match answer.chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => writeln!(out, "Please answer y or n.")?,
        }
    }
}

/// Read one line and strip surrounding whitespace.
///
/// End of input is an error here: the prompt loop cannot make progress
/// without an answer.
fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        )
        .into());
    }
    Ok(line.trim().to_string())
}
