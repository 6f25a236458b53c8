//! Append-only operation log of renames and errors.

use crate::error::Result;
use chrono::{Local, NaiveDateTime};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One line of the operation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Rename { path: PathBuf, new_name: String },
    Error { path: PathBuf, message: String },
}

impl LogEntry {
    /// Render with the given timestamp, without trailing newline.
    pub fn format(&self, timestamp: NaiveDateTime) -> String {
        let ts = timestamp.format(TIMESTAMP_FORMAT);
        match self {
            LogEntry::Rename { path, new_name } => {
                format!("[{}] RENAME: {} -> {}", ts, path.display(), new_name)
            }
            LogEntry::Error { path, message } => {
                format!("[{}] ERROR: {} - {}", ts, path.display(), message)
            }
        }
    }
}

/// Plain-text log file, opened in append mode for every entry.
#[derive(Debug, Clone)]
pub struct OperationLog {
    path: PathBuf,
}

impl OperationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        let line = entry.format(Local::now().naive_local());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    pub fn rename(&self, path: &Path, new_name: &str) -> Result<()> {
        self.append(&LogEntry::Rename {
            path: path.to_path_buf(),
            new_name: new_name.to_string(),
        })
    }

    pub fn error(&self, path: &Path, message: impl ToString) -> Result<()> {
        self.append(&LogEntry::Error {
            path: path.to_path_buf(),
            message: message.to_string(),
        })
    }
}
