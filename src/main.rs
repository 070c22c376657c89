use anyhow::Context;
use clap::Parser;
use img_shrink::cli::Args;
use img_shrink::config::{Defaults, Settings};
use img_shrink::constants::{
    CONFIG_FILE, DEFAULT_ENCODING, DEFAULT_LANGUAGE, DEFAULT_LOG_FILE, LANGUAGES_DIR,
};
use img_shrink::logger::{LogLevel, ResizeLog};
use img_shrink::messages::{fill, Messages};
use img_shrink::size::{prompt_until_valid, ResizeTarget};
use img_shrink::validation::{self, ArgKind};
use img_shrink::{batch, BatchResult};
use std::io;
use std::mem;
use std::path::{Path, PathBuf};
use std::process;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let defaults = Defaults::load(Path::new(CONFIG_FILE)).context("failed to read config.json")?;
    let mut settings = Settings::resolve(args, defaults);

    // An unknown language downgrades to a warning plus the default catalog;
    // the rejected value is kept so the warning can name it once the catalog
    // is loaded.
    let bad_language = match validation::validate(ArgKind::Language, &settings) {
        Ok(()) => None,
        Err(_) => Some(mem::replace(
            &mut settings.language,
            DEFAULT_LANGUAGE.to_string(),
        )),
    };

    let messages = Messages::load(Path::new(LANGUAGES_DIR), &settings.language)
        .context("failed to load the message catalog")?;

    let bad_encoding = match validation::validate(ArgKind::Encoding, &settings) {
        Ok(()) => None,
        Err(_) => Some(mem::replace(
            &mut settings.encoding,
            DEFAULT_ENCODING.to_string(),
        )),
    };

    let bad_log_file = match validation::validate(ArgKind::LogFile, &settings) {
        Ok(()) => None,
        Err(_) => Some(mem::replace(
            &mut settings.log_file,
            PathBuf::from(DEFAULT_LOG_FILE),
        )),
    };

    let mut log = ResizeLog::create(&settings.log_file, messages.date_format())
        .context("failed to create the log file")?;

    report_startup_warnings(&messages, &mut log, bad_language, bad_encoding, bad_log_file)?;
    validate_directories(&settings, &messages, &mut log)?;

    let target = resolve_target(&settings, &messages)?;
    let result = batch::resize_all(
        &settings.images_dir,
        &settings.resized_dir,
        target,
        &mut log,
        &messages,
    )?;

    print_summary(&settings, &messages, &log, result)?;
    Ok(())
}

fn report_startup_warnings(
    messages: &Messages,
    log: &mut ResizeLog,
    bad_language: Option<String>,
    bad_encoding: Option<String>,
    bad_log_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut warnings = Vec::new();

    if let Some(language) = bad_language {
        warnings.push(format!(
            "{}\n{}",
            fill(
                messages.output("invalid_language_error")?,
                &[("language", &language)],
            ),
            messages.output("language_fallback_msg")?,
        ));
    }
    if let Some(encoding) = bad_encoding {
        warnings.push(fill(
            messages.output("invalid_encoding_error")?,
            &[("encoding", &encoding)],
        ));
    }
    if let Some(log_file) = bad_log_file {
        warnings.push(format!(
            "{}\n{}",
            fill(
                messages.output("invalid_log_file_error")?,
                &[("log_path", &log_file.display().to_string())],
            ),
            fill(
                messages.output("default_log_error_msg")?,
                &[("default_log", DEFAULT_LOG_FILE)],
            ),
        ));
    }

    for warning in &warnings {
        eprintln!("{}", warning);
        log.write(LogLevel::Warning, warning)?;
    }
    Ok(())
}

/// Both directories must exist before the batch runs. A bad one is reported
/// with guidance on how to re-invoke the tool, then the process exits with
/// code 1.
fn validate_directories(
    settings: &Settings,
    messages: &Messages,
    log: &mut ResizeLog,
) -> anyhow::Result<()> {
    for (kind, directory, help_key) in [
        (ArgKind::ImagesDir, &settings.images_dir, "images_dir_help_msg"),
        (ArgKind::ResizedDir, &settings.resized_dir, "resized_dir_help_msg"),
    ] {
        if validation::validate(kind, settings).is_err() {
            let message = fill(
                messages.output("invalid_dir_error")?,
                &[("directory", &directory.display().to_string())],
            );
            eprintln!("{}\n{}", message, messages.output(help_key)?);
            log.write(LogLevel::Error, &message)?;
            process::exit(1);
        }
    }
    Ok(())
}

/// The target comes from `--size` when given (a malformed token is fatal) or
/// from the interactive prompt loop otherwise.
fn resolve_target(settings: &Settings, messages: &Messages) -> anyhow::Result<ResizeTarget> {
    match settings.size.as_deref() {
        Some(token) => match ResizeTarget::parse(token) {
            Ok(target) => Ok(target),
            Err(_) => {
                let message = fill(
                    messages.output("invalid_size_error")?,
                    &[("input_value", token)],
                );
                eprintln!("{}", message.trim());
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let target = prompt_until_valid(
                &mut stdin.lock(),
                &mut io::stdout(),
                messages.output("input_size_prompt")?,
                messages.output("invalid_size_error")?,
                messages.output("try_again_prompt")?,
            )?;
            Ok(target)
        }
    }
}

fn print_summary(
    settings: &Settings,
    messages: &Messages,
    log: &ResizeLog,
    result: BatchResult,
) -> anyhow::Result<()> {
    let mut final_message = fill(
        messages.output_plural("files_resized", result.resized_count)?,
        &[("total", &result.resized_count.to_string())],
    );
    if result.resized_count > 0 {
        final_message.push_str(&fill(
            messages.output_plural("saved_to_dir", result.resized_count)?,
            &[("resized_dir", &settings.resized_dir.display().to_string())],
        ));
    }
    println!("{}", final_message);

    if log.has_entries() {
        println!(
            "{}",
            fill(
                messages.output("check_log")?,
                &[("log_file", &log.path().display().to_string())],
            )
        );
    }
    Ok(())
}
