//! A byte-shifting file copy.
//!
//! Streams an input file to an output file, subtracting [`SHIFT`] from
//! every byte. In ASCII that maps lowercase letters onto their uppercase
//! counterparts (`'a' - 32 == 'A'`).

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Offset subtracted from every copied byte.
pub const SHIFT: u8 = 32;

/// Input file name used by the demo binary.
pub const DEFAULT_INPUT: &str = "infa.txt";

/// Output file name used by the demo binary.
pub const DEFAULT_OUTPUT: &str = "copyinfa.txt";

/// Failures of [`shift_copy`].
#[derive(Error, Debug)]
pub enum CopyError {
    /// The input file could not be opened.
    #[error("couldn't read {}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },

    /// The output file could not be created.
    #[error("couldn't copy {}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    /// A read or write failed after both files were open.
    #[error("copy failed mid-stream")]
    Io(#[from] io::Error),
}

/// Copies `input` to `output`, subtracting [`SHIFT`] from every byte
/// (wrapping below zero). Returns the number of bytes written.
pub fn shift_copy(input: &Path, output: &Path) -> Result<u64, CopyError> {
    let file = File::open(input).map_err(|source| CopyError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let out = File::create(output).map_err(|source| CopyError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(file);
    let mut writer = BufWriter::new(out);
    let mut buf = [0u8; 8 * 1024];
    let mut copied = 0u64;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for byte in &mut buf[..n] {
            *byte = byte.wrapping_sub(SHIFT);
        }
        writer.write_all(&buf[..n])?;
        copied += n as u64;
    }

    writer.flush()?;
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn shifts_lowercase_to_uppercase() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("infa.txt");
        let output = dir.path().join("copyinfa.txt");
        std::fs::write(&input, "hello").unwrap();

        let copied = shift_copy(&input, &output).unwrap();

        assert_eq!(copied, 5);
        assert_eq!(std::fs::read(&output).unwrap(), b"HELLO");
    }

    #[test]
    fn missing_input_reports_the_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.txt");
        let output = dir.path().join("out.txt");

        let err = shift_copy(&input, &output).unwrap_err();

        assert!(matches!(err, CopyError::OpenInput { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn unwritable_output_reports_the_path() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        std::fs::write(&input, "x").unwrap();
        // A file cannot be created under a directory that does not exist.
        let output = dir.path().join("no_such_dir").join("out.txt");

        let err = shift_copy(&input, &output).unwrap_err();

        assert!(matches!(err, CopyError::CreateOutput { .. }));
        assert!(err.to_string().contains("out.txt"));
    }

    #[test]
    fn empty_input_copies_zero_bytes() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "").unwrap();

        assert_eq!(shift_copy(&input, &output).unwrap(), 0);
        assert_eq!(std::fs::read(&output).unwrap(), b"");
    }

    #[test]
    fn shift_wraps_below_zero() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, [0x10u8]).unwrap();

        shift_copy(&input, &output).unwrap();

        assert_eq!(std::fs::read(&output).unwrap(), [0x10u8.wrapping_sub(32)]);
    }
}
