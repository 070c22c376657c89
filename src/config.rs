use crate::cli::Args;
use crate::constants::{
    DEFAULT_ENCODING, DEFAULT_IMAGES_DIR, DEFAULT_LANGUAGE, DEFAULT_LOG_FILE, DEFAULT_RESIZED_DIR,
};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default argument values, optionally overridden by a `config.json` file
/// with a `{"default_args": {...}}` object.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Defaults {
    pub images_dir: PathBuf,
    pub resized_dir: PathBuf,
    pub language: String,
    pub encoding: String,
    pub log_file: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            resized_dir: PathBuf::from(DEFAULT_RESIZED_DIR),
            language: DEFAULT_LANGUAGE.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    default_args: Defaults,
}

impl Defaults {
    /// Reads defaults from a config file when present, compiled-in values
    /// otherwise. A malformed file is an error rather than a silent fallback.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config: ConfigFile = serde_json::from_str(&text)?;
        Ok(config.default_args)
    }
}

/// Fully resolved run settings: command-line arguments merged over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub images_dir: PathBuf,
    pub resized_dir: PathBuf,
    pub language: String,
    pub encoding: String,
    pub log_file: PathBuf,
    pub size: Option<String>,
}

impl Settings {
    pub fn resolve(args: Args, defaults: Defaults) -> Self {
        Self {
            images_dir: args.images_dir.unwrap_or(defaults.images_dir),
            resized_dir: args.resized_dir.unwrap_or(defaults.resized_dir),
            language: args.language.unwrap_or(defaults.language),
            encoding: args.encoding.unwrap_or(defaults.encoding),
            log_file: args.log_file.unwrap_or(defaults.log_file),
            size: args.size,
        }
    }
}
