//! File I/O utilities with atomic writes
//!
//! Provides safe line-oriented file operations that won't corrupt data on
//! failure. Every handle is scoped to the call that opens it.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::LedgerError;

/// Read all lines of a file, returning an empty list if the file doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LedgerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(line_num, line)| {
            line.map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to read {} line {}: {}",
                    path.display(),
                    line_num + 1,
                    e
                ))
            })
        })
        .collect()
}

/// Replace a file's contents with the given lines atomically (write to temp, then rename)
///
/// The file is either completely rewritten or not modified at all.
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<(), LedgerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory keeps the rename atomic
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let result = write_all_lines(&temp_path, lines).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| LedgerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_all_lines<I, S>(temp_path: &Path, lines: I) -> Result<(), LedgerError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| LedgerError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))
}

/// Append a single line to a file, creating it if needed
///
/// A last line left without its newline (a hand-edited file) is terminated
/// first so the new line does not join it.
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), LedgerError> {
    let path = path.as_ref();
    let io_err = |action: &str, e: std::io::Error| {
        LedgerError::Io(format!("Failed to {} {}: {}", action, path.display(), e))
    };

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| io_err("open", e))?;

    let len = file.metadata().map_err(|e| io_err("inspect", e))?.len();
    let mut prefix = "";
    if len > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))
            .and_then(|_| file.read_exact(&mut last))
            .map_err(|e| io_err("read", e))?;
        if last[0] != b'\n' {
            prefix = "\n";
        }
    }

    writeln!(file, "{}{}", prefix, line).map_err(|e| io_err("write", e))?;

    file.flush().map_err(|e| io_err("flush", e))
}
