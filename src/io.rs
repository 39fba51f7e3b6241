//! Reading and writing documents as newline-terminated text.
//!
//! Lines are raw bytes. A file's final newline ends the last line rather
//! than starting an empty one, and every written line gets exactly one
//! `\n`, including empty lines.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Split file contents into lines.
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect()
}

/// Read the lines of the file at `path`.
///
/// A file that does not exist yet reads as zero lines, so a new file can be
/// opened, edited and saved.
pub fn read_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => {
            let lines = split_lines(&bytes);
            tracing::info!(path = %path.display(), lines = lines.len(), "read file");
            Ok(lines)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "file does not exist, starting empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Write `lines` to the file at `path`, replacing its contents.
pub fn write_lines<I, L>(path: &Path, lines: I) -> io::Result<usize>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let mut writer = BufWriter::new(fs::File::create(path)?);
    let mut count = 0;
    for line in lines {
        writer.write_all(line.as_ref())?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), lines = count, "wrote file");
    Ok(count)
}
