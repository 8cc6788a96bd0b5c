// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only result log
//!
//! One pipe-delimited line per detection outcome. Lines are written whole
//! and synced before `append` returns. A crash mid-write can only leave an
//! unterminated tail, which is cut off the next time the log is opened.
//! Readers may tail the file freely; no read lock is taken.

use crate::{LogStore, StorageError};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use sw_core::LogEntry;

/// File-backed, append-only result log
pub struct ResultLog {
    file: File,
    path: PathBuf,
    /// Complete records in the file
    len: u64,
    /// Latest FOUND date per target
    last_found: HashMap<String, NaiveDate>,
}

impl ResultLog {
    /// Open or create the log at the given path
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(path)?;

        repair_torn_tail(&file, path)?;

        let entries = Self::replay(path)?;
        let mut last_found = HashMap::new();
        for entry in &entries {
            index_found(&mut last_found, entry);
        }

        Ok(Self {
            file,
            path: path.to_path_buf(),
            len: entries.len() as u64,
            last_found,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of parsed records, including those appended by this handle
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read every complete, well-formed record from the log.
    ///
    /// Blank and malformed lines are skipped with a warning; an unterminated
    /// final line is ignored.
    pub fn replay(path: &Path) -> Result<Vec<LogEntry>, StorageError> {
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let complete = match bytes.iter().rposition(|b| *b == b'\n') {
            Some(last_newline) => &bytes[..=last_newline],
            None => &[][..],
        };
        let text = String::from_utf8_lossy(complete);

        let mut entries = Vec::new();
        for (number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match LogEntry::parse_line(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    line = number + 1,
                    error = %e,
                    "skipping unreadable result log line"
                ),
            }
        }

        Ok(entries)
    }
}

impl LogStore for ResultLog {
    fn append(&mut self, entry: &LogEntry) -> Result<(), StorageError> {
        let before = self.file.metadata()?.len();

        let mut line = String::new();
        if before > 0 && !ends_with_newline(&self.file)? {
            // Someone appended by hand without finishing the line
            tracing::warn!(path = %self.path.display(), "result log ends mid-line, starting a new line");
            line.push('\n');
        }
        line.push_str(&entry.to_line());
        line.push('\n');

        if let Err(e) = self
            .file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.sync_data())
        {
            // Best effort: drop whatever part of the line made it to disk
            if let Err(undo) = self.file.set_len(before) {
                tracing::error!(error = %undo, "failed to roll back partial result line");
            }
            return Err(e.into());
        }

        self.len += 1;
        index_found(&mut self.last_found, entry);
        Ok(())
    }

    fn is_first_positive_today(&self, target: &str, today: NaiveDate) -> bool {
        self.last_found.get(target) != Some(&today)
    }
}

fn index_found(last_found: &mut HashMap<String, NaiveDate>, entry: &LogEntry) {
    if !entry.is_found() {
        return;
    }
    let date = entry.date();
    last_found
        .entry(entry.target.clone())
        .and_modify(|d| *d = (*d).max(date))
        .or_insert(date);
}

/// True if the last byte of a non-empty file is a newline
fn ends_with_newline(file: &File) -> io::Result<bool> {
    let mut reader = file;
    reader.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    reader.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Cut an unterminated final line left behind by an interrupted write
fn repair_torn_tail(file: &File, path: &Path) -> Result<(), StorageError> {
    let bytes = std::fs::read(path)?;
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        return Ok(());
    }

    let keep = bytes
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(0, |idx| idx + 1);
    tracing::warn!(
        path = %path.display(),
        dropped_bytes = bytes.len() - keep,
        "removing incomplete trailing result line"
    );
    file.set_len(keep as u64)?;
    file.sync_data()?;
    Ok(())
}

#[cfg(test)]
#[path = "result_log_tests.rs"]
mod tests;
