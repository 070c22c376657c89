use crate::error::{ResizeError, Result};
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Plain-text run log, overwritten on every run.
///
/// Entries are `<timestamp>\nLEVEL: message\n` blocks; the timestamp format
/// comes from the message catalog. The log remembers whether anything was
/// written so the driver can point the operator at the file afterwards.
pub struct ResizeLog {
    file: File,
    path: PathBuf,
    date_format: String,
    has_entries: bool,
}

impl ResizeLog {
    /// The log file's directory must already exist; the file itself is created.
    pub fn validate_path(path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if parent.is_dir() {
            Ok(())
        } else {
            Err(ResizeError::InvalidLogFile(path.to_path_buf()))
        }
    }

    /// Creates (or truncates) the log file at `path`.
    pub fn create(path: &Path, date_format: &str) -> Result<Self> {
        Self::validate_path(path)?;
        let file = File::create(path)?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
            date_format: date_format.to_string(),
            has_entries: false,
        })
    }

    pub fn write(&mut self, level: LogLevel, message: &str) -> Result<()> {
        let timestamp = Local::now().format(&self.date_format);
        writeln!(self.file, "{}\n{}: {}\n", timestamp, level.label(), message)?;
        self.file.flush()?;
        self.has_entries = true;
        Ok(())
    }

    pub fn has_entries(&self) -> bool {
        self.has_entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
