use crate::constants::IGNORED_FILE_NAME;
use crate::error::{ResizeError, Result};
use crate::logger::{LogLevel, ResizeLog};
use crate::messages::{fill, Messages};
use crate::processing::{
    largest_dimension, load_oriented_image, save_with_source_format, shrink_to_fit,
};
use crate::size::ResizeTarget;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

/// Totals for one `resize_all` run.
///
/// Owned by the caller; nothing here is shared across runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchResult {
    /// Images successfully shrunk and written to the destination.
    pub resized_count: usize,
    /// Whether any informational or warning event was logged during the run.
    pub log_has_entries: bool,
}

/// What happened to a single directory entry.
#[derive(Debug)]
enum EntryOutcome {
    /// Subdirectory or the ignored sentinel file; no event is emitted.
    Skipped,
    /// The file exists but does not decode as an image.
    NotAnImage(ResizeError),
    /// The image's larger side is already below the target; nothing written.
    NotResized { width: u32, height: u32 },
    Resized,
}

/// Shrinks every image in `images_dir` so its larger side is at most `target`,
/// writing the results into `resized_dir` under the original file names.
///
/// Only the immediate children of `images_dir` are visited, in whatever order
/// the filesystem yields them. Subdirectories and the `.gitignore` sentinel
/// are skipped silently. A file that does not decode as an image is logged as
/// a warning and skipped; an image already smaller than `target` is logged as
/// info and left alone. Neither aborts the batch. Output files written before
/// a later hard failure (e.g. an unwritable destination) stay on disk.
///
/// Both directories must already exist; the caller validates them.
pub fn resize_all(
    images_dir: &Path,
    resized_dir: &Path,
    target: ResizeTarget,
    log: &mut ResizeLog,
    messages: &Messages,
) -> Result<BatchResult> {
    let mut result = BatchResult::default();

    let entries: Vec<fs::DirEntry> =
        fs::read_dir(images_dir)?.collect::<std::io::Result<Vec<_>>>()?;

    let progress = ProgressBar::new(entries.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    for entry in entries {
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();

        match process_entry(&path, &file_name, resized_dir, target)? {
            EntryOutcome::Skipped => {}
            EntryOutcome::NotAnImage(error) => {
                let message = fill(
                    messages.output("non_image_error")?,
                    &[("file_name", &file_name), ("error", &error.to_string())],
                );
                log.write(LogLevel::Warning, &message)?;
                result.log_has_entries = true;
            }
            EntryOutcome::NotResized { width, height } => {
                let message = fill(
                    messages.output("file_not_resized")?,
                    &[
                        ("file_name", &file_name),
                        ("new_largest_dimension", &target.to_string()),
                        ("img_width", &width.to_string()),
                        ("img_height", &height.to_string()),
                    ],
                );
                log.write(LogLevel::Info, &message)?;
                result.log_has_entries = true;
            }
            EntryOutcome::Resized => result.resized_count += 1,
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    Ok(result)
}

/// Classifies and processes one directory entry.
///
/// Decode failures come back as [`EntryOutcome::NotAnImage`] instead of an
/// `Err` so the batch loop never unwinds over a bad file; I/O failures still
/// propagate. The file handle opened for decoding is closed before this
/// returns, as is the one created for encoding.
fn process_entry(
    path: &Path,
    file_name: &str,
    resized_dir: &Path,
    target: ResizeTarget,
) -> Result<EntryOutcome> {
    if !path.is_file() || file_name == IGNORED_FILE_NAME {
        return Ok(EntryOutcome::Skipped);
    }

    let (image, format) = match load_oriented_image(path) {
        Ok(loaded) => loaded,
        Err(error) if error.is_decode_failure() => return Ok(EntryOutcome::NotAnImage(error)),
        Err(error) => return Err(error),
    };

    if target.get() > largest_dimension(&image) {
        return Ok(EntryOutcome::NotResized {
            width: image.width(),
            height: image.height(),
        });
    }

    let shrunk = shrink_to_fit(&image, target);
    save_with_source_format(&shrunk, &resized_dir.join(file_name), format)?;

    Ok(EntryOutcome::Resized)
}
