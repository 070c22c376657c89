use crate::config::Settings;
use crate::constants::LANGUAGES_DIR;
use crate::error::{ResizeError, Result};
use crate::logger::ResizeLog;
use crate::messages;
use std::path::Path;

/// The argument kinds that need validation after parsing, one handler each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    ImagesDir,
    ResizedDir,
    Language,
    Encoding,
    LogFile,
}

/// Validates one resolved argument.
///
/// Directory failures are fatal for the caller; language, encoding and
/// log-file failures are recoverable (the driver warns and substitutes the
/// default).
pub fn validate(kind: ArgKind, settings: &Settings) -> Result<()> {
    match kind {
        ArgKind::ImagesDir => validate_directory(&settings.images_dir),
        ArgKind::ResizedDir => validate_directory(&settings.resized_dir),
        ArgKind::Language => messages::validate_language(Path::new(LANGUAGES_DIR), &settings.language),
        ArgKind::Encoding => messages::validate_encoding(&settings.encoding),
        ArgKind::LogFile => ResizeLog::validate_path(&settings.log_file),
    }
}

pub fn validate_directory(directory: &Path) -> Result<()> {
    if directory.is_dir() {
        Ok(())
    } else {
        Err(ResizeError::InvalidDirectory(directory.to_path_buf()))
    }
}
